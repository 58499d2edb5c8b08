//! Static brand artwork: side panel, warning block, logo and brand name.

use crate::layout::{text_width, wrap_text};
use crate::metrics::*;
use crate::scene::{Circle, Group, Node, Span, Style, TextNode, Transform, ids};

/// Wrapped warning copy at the given font size.
///
/// The first line is narrowed by the heading width so it can sit to the right
/// of `GOVERNMENT WARNING:`; the rest use the full block width.
pub fn warning_lines(font_size: f64) -> Vec<String> {
    let heading_width = text_width(WARNING_HEADING, font_size);
    wrap_text(
        WARNING_TEXT,
        WARNING_WRAP_WIDTH,
        font_size,
        heading_width + WARNING_INDENT_PAD,
    )
}

/// X position of the first wrapped warning line.
pub fn warning_first_line_x(font_size: f64) -> f64 {
    WARNING_FIRST_LINE_ORIGIN + text_width(WARNING_HEADING, font_size) + WARNING_FIRST_LINE_GAP
}

/// The `static` group, filled with the text color.
pub(super) fn static_group(text_color: &str, warning_font_size: f64) -> Group {
    Group::new(ids::STATIC)
        .transform(vec![Transform::Translate(-2.0, -3.0)])
        .style(Style::fill(text_color))
        .child(social_address())
        .child(warning(warning_font_size))
        .child(store_cold())
        .child(logo(text_color))
        .child(brand_name())
}

fn social_address() -> TextNode {
    TextNode::new(
        ids::SOCIAL_ADDRESS,
        Style::default().font(FONT_FAMILY, 125.0).weight("bold"),
    )
    .transform(Transform::rotate_about(-90.0, 3855.295002, 1560.150088))
    .span(Span::new(2580.0, 1700.0, BRAND_HANDLE))
    .span(
        Span::new(3470.0, 1700.0, BRAND_ADDRESS)
            .style(Style::default().family(FONT_FAMILY).weight("500")),
    )
}

fn warning(font_size: f64) -> TextNode {
    let first_x = warning_first_line_x(font_size);
    let light = Style::default().family(FONT_FAMILY).weight("300");

    let lines = warning_lines(font_size)
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let x = if index == 0 { first_x } else { WARNING_BODY_X };
            let y = WARNING_BASELINE + index as f64 * WARNING_LINE_STEP;
            Span::new(x, y, line).style(light.clone())
        });

    TextNode::new(
        ids::WARNING,
        Style::default().font(FONT_FAMILY, font_size).weight("bold"),
    )
    .transform(vec![
        Transform::Translate(4142.0, 1550.0),
        Transform::Rotate(-90.0),
        Transform::Translate(-4142.783559, -1566.616641),
    ])
    .span(Span::new(WARNING_HEADING_X, WARNING_BASELINE, WARNING_HEADING).id(ids::WARNING_HEADING))
    .spans(lines)
}

fn store_cold() -> TextNode {
    TextNode::new(
        ids::STORE_COLD,
        Style::default()
            .font(FONT_FAMILY_BOLD, 175.0)
            .letter_spacing(10.0),
    )
    .transform(Transform::rotate_about(-90.0, 4558.066583, 898.985939))
    .span(Span::new(4040.0, 970.0, STORE_COLD))
}

/// Brand mark: a ring centred on the label's vertical axis.
fn logo(text_color: &str) -> Group {
    let ring = Circle {
        cx: CENTER_X - 2016.0,
        cy: 240.0,
        r: 200.0,
        style: Style {
            fill: Some("none".to_string()),
            stroke: Some(text_color.to_string()),
            stroke_width: Some(24.0),
            ..Default::default()
        },
    };

    Group::new(ids::LOGO)
        .transform(vec![Transform::Translate(2016.0, 1100.0)])
        .style(Style::fill(text_color))
        .child(Node::Circle(ring))
}

fn brand_name() -> TextNode {
    TextNode::new(
        ids::BRAND_NAME,
        Style::default()
            .font(FONT_FAMILY, 230.0)
            .weight("bold")
            .letter_spacing(30.0)
            .anchor_middle(),
    )
    .span(Span::new(CENTER_X, BRAND_BASELINE, BRAND_NAME))
}
