//! Stacked text sections on the left panel of the label.
//!
//! The panel is a fixed sequence of headings and lines. Its order decides the
//! vertical stacking:
//!
//! ```text
//! 1 PINT                     (bold title)
//! 5.5% alc by vol
//!
//! TASTING NOTES              (only when notes are present)
//! <wrapped notes...>
//!
//! HOPS                       (only when hops are present)
//! <wrapped hops...>
//!
//! SERVE AT                   (bold title)
//! 45°F
//! ```

use super::wrap::{wrap_paragraphs, wrap_text};
use crate::metrics::{
    BODY_FONT_SIZE, HOPS_WRAP_WIDTH, LINE_HEIGHT, NOTES_WRAP_WIDTH, SECTION_BASELINE,
};

/// One line of the stacked panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSection {
    /// Heading text. A section with a title renders the title, never the content.
    pub title: Option<String>,
    pub content: String,
    pub is_bold: bool,
}

impl TextSection {
    /// Bold heading line.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: String::new(),
            is_bold: true,
        }
    }

    /// Regular body line.
    pub fn line(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: content.into(),
            is_bold: false,
        }
    }

    /// Empty spacer line.
    pub fn blank() -> Self {
        Self::line("")
    }

    /// The text this section puts on the label (title wins over content).
    pub fn text(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.content)
    }

    pub fn is_blank(&self) -> bool {
        self.title.is_none() && self.content.is_empty()
    }
}

/// Build the panel for the given label fields.
///
/// Notes are wrapped as one paragraph; hops keep their line breaks and each
/// hop line wraps on its own.
pub fn text_sections(abv: &str, notes: &str, hops: &str, temperature: &str) -> Vec<TextSection> {
    let mut sections = vec![
        TextSection::title("1 PINT"),
        TextSection::line(format!("{}% alc by vol", abv)),
        TextSection::blank(),
    ];

    if !notes.trim().is_empty() {
        sections.push(TextSection::title("TASTING NOTES"));
        sections.extend(
            wrap_text(notes, NOTES_WRAP_WIDTH, BODY_FONT_SIZE, 0.0)
                .into_iter()
                .map(TextSection::line),
        );
        sections.push(TextSection::blank());
    }

    if !hops.trim().is_empty() {
        sections.push(TextSection::title("HOPS"));
        sections.extend(
            wrap_paragraphs(hops, HOPS_WRAP_WIDTH, BODY_FONT_SIZE)
                .into_iter()
                .map(TextSection::line),
        );
        sections.push(TextSection::blank());
    }

    sections.push(TextSection::title("SERVE AT"));
    sections.push(TextSection::line(format!("{}°F", temperature)));

    sections
}

/// Baseline of the section at `index` in the stack.
pub fn section_baseline(index: usize) -> f64 {
    SECTION_BASELINE + index as f64 * LINE_HEIGHT
}
