//! Greedy word wrapping against the fixed glyph-width heuristic.

use crate::metrics::GLYPH_WIDTH_RATIO;

/// Approximate rendered width of `text` at `font_size`.
///
/// Every character is assumed to be `font_size × 0.6` wide.
pub fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * GLYPH_WIDTH_RATIO
}

/// Wrap `text` into lines no wider than `max_width`.
///
/// Lines are filled greedily: a word joins the current line when the line's
/// width plus the word's width is strictly less than the width still
/// available. The separating space is not counted.
///
/// `indent` narrows the **first line only**. Once the first line closes, every
/// following line gets the full `max_width` back. The warning block relies on
/// this to leave room for its heading on line one while the remaining lines
/// start flush at the block's left edge. This is not a hanging indent.
///
/// Words are split on whitespace, so line breaks inside `text` act as spaces;
/// use [`wrap_paragraphs`] to keep them. Text with no words still yields one
/// empty line.
///
/// ```
/// use lolev_label::layout::wrap_text;
///
/// let lines = wrap_text("crisp dry finish", 600.0, 80.0, 0.0);
/// assert_eq!(lines, vec!["crisp dry", "finish"]);
/// ```
pub fn wrap_text(text: &str, max_width: f64, font_size: f64, indent: f64) -> Vec<String> {
    let mut words = text.split_whitespace();
    let mut lines = Vec::new();
    let mut current = words.next().unwrap_or_default().to_string();
    let mut remaining = max_width - indent;

    for word in words {
        let width = text_width(&current, font_size);
        if width + text_width(word, font_size) < remaining {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            remaining = max_width;
        }
    }

    lines.push(current);
    lines
}

/// Wrap text that may contain explicit line breaks.
///
/// Each non-blank line is wrapped on its own with no indent and the results are
/// concatenated in order. Blank lines are dropped, so text with no words
/// yields no lines at all.
pub fn wrap_paragraphs(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .flat_map(|line| wrap_text(line, max_width, font_size, 0.0))
        .collect()
}
