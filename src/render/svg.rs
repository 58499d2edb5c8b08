//! SVG serialization of scene nodes.

use crate::scene::{Circle, Group, Line, Node, Polygon, Rect, Span, Style, TextNode, Transform};

/// Format a number the way SVG authors write it: integers without a fraction,
/// everything else with up to six decimals and no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let formatted = format!("{:.6}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Escape text content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn transform_attr(transform: &[Transform]) -> String {
    transform
        .iter()
        .map(|step| match step {
            Transform::Translate(x, y) => format!("translate({}, {})", fmt_num(*x), fmt_num(*y)),
            Transform::Rotate(degrees) => format!("rotate({})", fmt_num(*degrees)),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Streaming writer for scene nodes.
pub(super) struct SvgWriter {
    out: String,
    depth: usize,
}

impl SvgWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    /// Write an opening tag (without the closing `>`) and its attributes.
    fn open(&mut self, tag: &str, attrs: &[(&str, String)]) {
        self.indent();
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
    }

    pub fn start(&mut self, tag: &str, attrs: &[(&str, String)]) {
        self.open(tag, attrs);
        self.out.push_str(">\n");
        self.depth += 1;
    }

    pub fn end(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.out.push_str(&format!("</{}>\n", tag));
    }

    fn empty(&mut self, tag: &str, attrs: &[(&str, String)]) {
        self.open(tag, attrs);
        self.out.push_str(" />\n");
    }

    fn text_element(&mut self, tag: &str, attrs: &[(&str, String)], text: &str) {
        self.open(tag, attrs);
        self.out.push('>');
        self.out.push_str(&escape(text));
        self.out.push_str(&format!("</{}>\n", tag));
    }

    pub fn node(&mut self, node: &Node) {
        match node {
            Node::Group(group) => self.group(group),
            Node::Rect(rect) => self.rect(rect),
            Node::Polygon(polygon) => self.polygon(polygon),
            Node::Line(line) => self.line(line),
            Node::Circle(circle) => self.circle(circle),
            Node::Text(text) => self.text(text),
        }
    }

    pub fn group(&mut self, group: &Group) {
        let mut attrs = Vec::new();
        push_id(&mut attrs, group.id.as_deref());
        push_hidden(&mut attrs, group.visible);
        push_transform(&mut attrs, &group.transform);
        push_style(&mut attrs, &group.style);

        if group.children.is_empty() {
            self.empty("g", &attrs);
            return;
        }
        self.start("g", &attrs);
        for child in &group.children {
            self.node(child);
        }
        self.end("g");
    }

    fn rect(&mut self, rect: &Rect) {
        let mut attrs = Vec::new();
        push_id(&mut attrs, rect.id.as_deref());
        push_hidden(&mut attrs, rect.visible);
        attrs.push(("x", fmt_num(rect.x)));
        attrs.push(("y", fmt_num(rect.y)));
        attrs.push(("width", fmt_num(rect.width)));
        attrs.push(("height", fmt_num(rect.height)));
        push_style(&mut attrs, &rect.style);
        self.empty("rect", &attrs);
    }

    fn polygon(&mut self, polygon: &Polygon) {
        let points = polygon
            .points
            .iter()
            .map(|(x, y)| format!("{} {}", fmt_num(*x), fmt_num(*y)))
            .collect::<Vec<_>>()
            .join(" ");

        let mut attrs = Vec::new();
        push_id(&mut attrs, polygon.id.as_deref());
        push_hidden(&mut attrs, polygon.visible);
        attrs.push(("points", points));
        self.empty("polygon", &attrs);
    }

    fn line(&mut self, line: &Line) {
        let mut attrs = Vec::new();
        push_id(&mut attrs, line.id.as_deref());
        attrs.push(("x1", fmt_num(line.x1)));
        attrs.push(("y1", fmt_num(line.y1)));
        attrs.push(("x2", fmt_num(line.x2)));
        attrs.push(("y2", fmt_num(line.y2)));
        self.empty("line", &attrs);
    }

    fn circle(&mut self, circle: &Circle) {
        let mut attrs = vec![
            ("cx", fmt_num(circle.cx)),
            ("cy", fmt_num(circle.cy)),
            ("r", fmt_num(circle.r)),
        ];
        push_style(&mut attrs, &circle.style);
        self.empty("circle", &attrs);
    }

    fn text(&mut self, text: &TextNode) {
        let mut attrs = Vec::new();
        push_id(&mut attrs, text.id.as_deref());
        push_transform(&mut attrs, &text.transform);
        push_style(&mut attrs, &text.style);

        self.start("text", &attrs);
        for span in &text.spans {
            self.span(span);
        }
        self.end("text");
    }

    fn span(&mut self, span: &Span) {
        let mut attrs = Vec::new();
        push_id(&mut attrs, span.id.as_deref());
        attrs.push(("x", fmt_num(span.x)));
        attrs.push(("y", fmt_num(span.y)));
        push_style(&mut attrs, &span.style);
        self.text_element("tspan", &attrs, &span.text);
    }
}

fn push_id(attrs: &mut Vec<(&'static str, String)>, id: Option<&str>) {
    if let Some(id) = id {
        attrs.push(("id", id.to_string()));
    }
}

fn push_hidden(attrs: &mut Vec<(&'static str, String)>, visible: bool) {
    if !visible {
        attrs.push(("display", "none".to_string()));
    }
}

fn push_transform(attrs: &mut Vec<(&'static str, String)>, transform: &[Transform]) {
    if !transform.is_empty() {
        attrs.push(("transform", transform_attr(transform)));
    }
}

fn push_style(attrs: &mut Vec<(&'static str, String)>, style: &Style) {
    if let Some(fill) = &style.fill {
        attrs.push(("fill", fill.clone()));
    }
    if let Some(stroke) = &style.stroke {
        attrs.push(("stroke", stroke.clone()));
    }
    if let Some(width) = style.stroke_width {
        attrs.push(("stroke-width", fmt_num(width)));
    }
    if let Some(dash) = style.stroke_dasharray {
        attrs.push(("stroke-dasharray", fmt_num(dash)));
    }
    if let Some(family) = &style.font_family {
        attrs.push(("font-family", family.clone()));
    }
    if let Some(size) = style.font_size {
        attrs.push(("font-size", fmt_num(size)));
    }
    if let Some(weight) = &style.font_weight {
        attrs.push(("font-weight", weight.clone()));
    }
    if let Some(spacing) = style.letter_spacing {
        attrs.push(("letter-spacing", fmt_num(spacing)));
    }
    if let Some(anchor) = &style.text_anchor {
        attrs.push(("text-anchor", anchor.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(4876.0), "4876");
        assert_eq!(fmt_num(-2.0), "-2");
        assert_eq!(fmt_num(2441.94651), "2441.94651");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Salt & <Lime> \"Gose\""), "Salt &amp; &lt;Lime&gt; &quot;Gose&quot;");
    }

    #[test]
    fn test_transform_attr() {
        assert_eq!(
            transform_attr(&Transform::rotate_about(-90.0, 10.5, 20.0)),
            "translate(10.5, 20) rotate(-90) translate(-10.5, -20)"
        );
    }

    #[test]
    fn test_hidden_group() {
        let mut writer = SvgWriter::new();
        writer.group(&Group::new("guides").visible(false));
        assert_eq!(writer.finish(), "<g id=\"guides\" display=\"none\" />\n");
    }

    #[test]
    fn test_span_text_escaped() {
        let mut writer = SvgWriter::new();
        writer.node(&Node::Text(
            TextNode::new("t", Style::default()).span(Span::new(1.0, 2.0, "A&B")),
        ));
        assert_eq!(
            writer.finish(),
            "<text id=\"t\">\n  <tspan x=\"1\" y=\"2\">A&amp;B</tspan>\n</text>\n"
        );
    }
}
