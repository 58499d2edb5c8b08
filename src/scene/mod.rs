//! # Render Scene
//!
//! A composed label as a tree of positioned drawable nodes in absolute label
//! units. A scene is built fresh by [`compose`](crate::compose::compose) and
//! never mutated afterwards; serialization lives in [`crate::render`].
//!
//! ## Element identity
//!
//! Nodes that callers need to find again carry a stable id (see [`ids`]).
//! Optional overlays are always present in the tree and carry a `visible`
//! flag instead of being left out, so an export can drop them by id.

use serde::Serialize;

use crate::label::RequiredField;

/// Stable element identifiers.
pub mod ids {
    pub const ROOT: &str = "label";
    pub const BACKGROUND: &str = "background";
    pub const OPTIONAL_BACKGROUND: &str = "optionalBackground";
    pub const LAGER_TRIANGLE: &str = "Lager-Triangle";
    pub const MARLBORO: &str = "Marlboro";
    pub const STATIC: &str = "static";
    pub const SOCIAL_ADDRESS: &str = "socialAddress";
    pub const WARNING: &str = "warning";
    pub const WARNING_HEADING: &str = "government-warning";
    pub const STORE_COLD: &str = "StoreCold";
    pub const LOGO: &str = "logo";
    pub const BRAND_NAME: &str = "LolevBeer";
    pub const NAME_STYLE: &str = "nameStyle";
    pub const SECTIONS: &str = "abvNotesHopsTemp";
    pub const BARCODE: &str = "Barcode";
    pub const QR: &str = "QR";
    pub const BLEED: &str = "bleed";
    pub const GUIDES: &str = "guides";
    pub const MESSAGE: &str = "missingFields";

    /// Overlays removed from exported artwork.
    pub const EXPORT_STRIPPED: [&str; 4] = [GUIDES, QR, BARCODE, BLEED];
}

/// Paint and typography shared by every node kind.
///
/// Unset fields inherit from the enclosing group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_dasharray: Option<f64>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<String>,
    pub letter_spacing: Option<f64>,
    pub text_anchor: Option<String>,
}

impl Style {
    pub fn fill(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            ..Default::default()
        }
    }

    /// Dashed outline, as used by guides and placeholder boxes.
    pub fn dashed(color: impl Into<String>, dash: f64) -> Self {
        Self {
            stroke: Some(color.into()),
            stroke_dasharray: Some(dash),
            ..Default::default()
        }
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn font(mut self, family: impl Into<String>, size: f64) -> Self {
        self.font_family = Some(family.into());
        self.font_size = Some(size);
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn letter_spacing(mut self, spacing: f64) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    pub fn anchor_middle(mut self) -> Self {
        self.text_anchor = Some("middle".to_string());
        self
    }
}

/// One step of an SVG-style transform list, applied left to right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Transform {
    Translate(f64, f64),
    /// Rotation in degrees about the current origin.
    Rotate(f64),
}

impl Transform {
    /// Rotation by `degrees` about `(cx, cy)`.
    pub fn rotate_about(degrees: f64, cx: f64, cy: f64) -> Vec<Transform> {
        vec![
            Transform::Translate(cx, cy),
            Transform::Rotate(degrees),
            Transform::Translate(-cx, -cy),
        ]
    }
}

/// A drawable node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Group(Group),
    Rect(Rect),
    Polygon(Polygon),
    Line(Line),
    Circle(Circle),
    Text(TextNode),
}

impl Node {
    pub fn id(&self) -> Option<&str> {
        match self {
            Node::Group(n) => n.id.as_deref(),
            Node::Rect(n) => n.id.as_deref(),
            Node::Polygon(n) => n.id.as_deref(),
            Node::Line(n) => n.id.as_deref(),
            Node::Circle(_) => None,
            Node::Text(n) => n.id.as_deref(),
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Node::Group(n) => n.visible,
            Node::Rect(n) => n.visible,
            Node::Polygon(n) => n.visible,
            _ => true,
        }
    }

    /// Depth-first search for a node by id.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id() == Some(id) {
            return Some(self);
        }
        match self {
            Node::Group(group) => group.children.iter().find_map(|child| child.find(id)),
            _ => None,
        }
    }

    /// Copy of this node with every subtree whose id is in `ids` removed.
    pub fn without(&self, ids: &[&str]) -> Option<Node> {
        if self.id().is_some_and(|id| ids.contains(&id)) {
            return None;
        }
        Some(match self {
            Node::Group(group) => Node::Group(Group {
                children: group
                    .children
                    .iter()
                    .filter_map(|child| child.without(ids))
                    .collect(),
                ..group.clone()
            }),
            other => other.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub id: Option<String>,
    pub visible: bool,
    pub transform: Vec<Transform>,
    pub style: Style,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            visible: true,
            transform: Vec::new(),
            style: Style::default(),
            children: Vec::new(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn transform(mut self, transform: Vec<Transform>) -> Self {
        self.transform = transform;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rect {
    pub id: Option<String>,
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub style: Style,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: None,
            visible: true,
            x,
            y,
            width,
            height,
            style: Style::default(),
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    pub id: Option<String>,
    pub visible: bool,
    pub points: Vec<(f64, f64)>,
}

impl Polygon {
    pub fn new(id: &str, points: Vec<(f64, f64)>) -> Self {
        Self {
            id: Some(id.to_string()),
            visible: true,
            points,
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub id: Option<String>,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    pub fn new(id: &str, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> Self {
        Self {
            id: Some(id.to_string()),
            x1,
            y1,
            x2,
            y2,
        }
    }

    /// Full-height vertical line at `x`.
    pub fn vertical(id: &str, x: f64, height: f64) -> Self {
        Self::new(id, (x, 0.0), (x, height))
    }

    /// Full-width horizontal line at `y`.
    pub fn horizontal(id: &str, y: f64, width: f64) -> Self {
        Self::new(id, (0.0, y), (width, y))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub style: Style,
}

/// A text element made of individually positioned spans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextNode {
    pub id: Option<String>,
    pub transform: Vec<Transform>,
    pub style: Style,
    pub spans: Vec<Span>,
}

impl TextNode {
    pub fn new(id: &str, style: Style) -> Self {
        Self {
            id: Some(id.to_string()),
            transform: Vec::new(),
            style,
            spans: Vec::new(),
        }
    }

    pub fn transform(mut self, transform: Vec<Transform>) -> Self {
        self.transform = transform;
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    pub fn spans(mut self, spans: impl IntoIterator<Item = Span>) -> Self {
        self.spans.extend(spans);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Span {
    pub id: Option<String>,
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            id: None,
            x,
            y,
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

macro_rules! impl_into_node {
    ($($kind:ident),*) => {
        $(impl From<$kind> for Node {
            fn from(node: $kind) -> Self {
                Node::$kind(node)
            }
        })*
    };
}

impl_into_node!(Group, Rect, Polygon, Line, Circle);

impl From<TextNode> for Node {
    fn from(node: TextNode) -> Self {
        Node::Text(node)
    }
}

/// Whether the scene is a full label or the placeholder shown while required
/// fields are empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SceneStatus {
    Complete,
    Incomplete {
        missing: Vec<RequiredField>,
        message: String,
    },
}

/// A fully positioned label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderScene {
    pub width: f64,
    pub height: f64,
    pub status: SceneStatus,
    pub root: Group,
}

impl RenderScene {
    pub fn is_complete(&self) -> bool {
        self.status == SceneStatus::Complete
    }

    /// Missing required fields, empty for a complete scene.
    pub fn missing_fields(&self) -> &[RequiredField] {
        match &self.status {
            SceneStatus::Complete => &[],
            SceneStatus::Incomplete { missing, .. } => missing,
        }
    }

    /// The placeholder message of an incomplete scene.
    pub fn message(&self) -> Option<&str> {
        match &self.status {
            SceneStatus::Complete => None,
            SceneStatus::Incomplete { message, .. } => Some(message),
        }
    }

    pub fn find(&self, id: &str) -> Option<&Node> {
        self.root.children.iter().find_map(|child| child.find(id))
    }

    /// Copy of the scene with the given subtrees removed.
    pub fn without(&self, ids: &[&str]) -> RenderScene {
        RenderScene {
            root: Group {
                children: self
                    .root
                    .children
                    .iter()
                    .filter_map(|child| child.without(ids))
                    .collect(),
                ..self.root.clone()
            },
            ..self.clone()
        }
    }

    /// The scene as exported artwork: guides, placeholders and bleed removed.
    pub fn for_export(&self) -> RenderScene {
        self.without(&ids::EXPORT_STRIPPED)
    }
}
