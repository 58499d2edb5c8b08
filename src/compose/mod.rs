//! # Label Composer
//!
//! Turns a [`LabelConfig`] into a fully positioned [`RenderScene`]. The scene
//! is rebuilt from scratch on every call; inputs are small and bounded, so
//! there is no incremental layout.
//!
//! ## Scene tree
//!
//! ```text
//! label
//! ├── background            primary color fill
//! ├── optionalBackground    secondary color
//! │   ├── Lager-Triangle    visible ⇔ lager toggle
//! │   └── Marlboro          visible ⇔ marlboro toggle
//! ├── static                brand artwork in the text color
//! ├── Barcode               visible ⇔ toggle ∧ UPC not yet a 12-digit code
//! ├── QR                    visible ⇔ toggle ∧ no variant
//! ├── nameStyle
//! ├── abvNotesHopsTemp      stacked text sections
//! ├── bleed                 visible ⇔ bleed toggle
//! └── guides                visible ⇔ margins toggle
//! ```
//!
//! A configuration with an empty name, style, ABV or temperature yields a
//! placeholder scene (background plus a message) rather than an error.

mod brand;
mod guides;

pub use brand::{warning_first_line_x, warning_lines};

use tracing::debug;

use crate::label::LabelConfig;
use crate::layout::{TextSection, section_baseline, text_sections};
use crate::metrics::*;
use crate::scene::{
    Group, Polygon, Rect, RenderScene, SceneStatus, Span, Style, TextNode, ids,
};

/// Compose the label scene for `config`.
pub fn compose(config: &LabelConfig) -> RenderScene {
    let primary = config.primary_color.to_hex();
    let text_color = config.text_color.to_hex();

    let missing = config.missing_fields();
    if !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().map(|field| field.label()).collect();
        let message = format!(
            "Please fill in the following required fields: {}",
            labels.join(", ")
        );
        debug!(missing = ?labels, "composing placeholder scene");

        let root = Group::new(ids::ROOT)
            .child(background(&primary))
            .child(
                TextNode::new(
                    ids::MESSAGE,
                    Style::fill(&text_color)
                        .font(FONT_FAMILY, 120.0)
                        .anchor_middle(),
                )
                .span(Span::new(CENTER_X, CENTER_Y, message.clone())),
            );

        return RenderScene {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            status: SceneStatus::Incomplete { missing, message },
            root,
        };
    }

    let sections = text_sections(&config.abv, &config.notes, &config.hops, &config.temperature);
    debug!(
        name = %config.name,
        sections = sections.len(),
        warning_lines = warning_lines(config.warning_font_size).len(),
        "composing label scene"
    );

    let root = Group::new(ids::ROOT)
        .style(Style::fill("none"))
        .child(background(&primary))
        .child(brand_pattern(config))
        .child(brand::static_group(&text_color, config.warning_font_size))
        .child(guides::placeholder(
            ids::BARCODE,
            BARCODE_BOX,
            &text_color,
            barcode_guide_visible(config),
        ))
        .child(guides::placeholder(
            ids::QR,
            QR_BOX,
            &text_color,
            qr_guide_visible(config),
        ))
        .child(name_style(config, &text_color))
        .child(section_text(&sections, &text_color))
        .child(guides::bleed(config.show_bleed))
        .child(guides::margins(config.show_margins));

    RenderScene {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        status: SceneStatus::Complete,
        root,
    }
}

/// The QR box is only useful while there is no variant to link to.
pub fn qr_guide_visible(config: &LabelConfig) -> bool {
    config.show_qr && config.variant.is_empty()
}

/// The barcode box is only useful until a 12-digit UPC has been entered.
pub fn barcode_guide_visible(config: &LabelConfig) -> bool {
    config.show_barcode && !config.has_valid_upc()
}

fn background(fill: &str) -> Rect {
    Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT)
        .id(ids::BACKGROUND)
        .style(Style::fill(fill))
}

fn brand_pattern(config: &LabelConfig) -> Group {
    let lager = Polygon::new(
        ids::LAGER_TRIANGLE,
        vec![
            (CANVAS_WIDTH, 0.0),
            (CANVAS_WIDTH, CANVAS_HEIGHT),
            (0.0, CANVAS_HEIGHT),
        ],
    )
    .visible(config.show_lager_triangle());

    let marlboro = Polygon::new(
        ids::MARLBORO,
        vec![
            (0.0, 0.0),
            (CANVAS_WIDTH, 0.0),
            (CANVAS_WIDTH, 3078.0),
            (2441.94651, 895.985939),
            (0.0, 3078.0),
        ],
    )
    .visible(config.show_marlboro());

    Group::new(ids::OPTIONAL_BACKGROUND)
        .style(Style::fill(config.secondary_color.to_hex()))
        .child(lager)
        .child(marlboro)
}

fn name_style(config: &LabelConfig, text_color: &str) -> TextNode {
    TextNode::new(
        ids::NAME_STYLE,
        Style::fill(text_color)
            .font(FONT_FAMILY, 150.0)
            .weight("bold")
            .letter_spacing(18.0)
            .anchor_middle(),
    )
    .span(Span::new(CENTER_X, NAME_BASELINE, config.name.to_uppercase()))
    .span(
        Span::new(CENTER_X, STYLE_BASELINE, config.style.to_uppercase()).style(
            Style::default()
                .font(FONT_FAMILY, 130.0)
                .weight("500")
                .letter_spacing(12.0),
        ),
    )
}

fn section_text(sections: &[TextSection], text_color: &str) -> TextNode {
    let spans = sections.iter().enumerate().map(|(index, section)| {
        let span = Span::new(SECTION_X, section_baseline(index), section.text());
        if section.is_blank() {
            return span;
        }
        let style = if section.is_bold {
            Style::default().family(FONT_FAMILY_BOLD).weight("bold")
        } else {
            Style::default().family(FONT_FAMILY_MEDIUM).weight("400")
        };
        span.style(style)
    });

    TextNode::new(
        ids::SECTIONS,
        Style::fill(text_color)
            .font(FONT_FAMILY, BODY_FONT_SIZE)
            .weight("bold"),
    )
    .spans(spans)
}
