//! # Text Layout
//!
//! Deterministic word wrapping and vertical stacking for the label's text
//! blocks. Widths come from a fixed average-glyph heuristic
//! ([`GLYPH_WIDTH_RATIO`](crate::metrics::GLYPH_WIDTH_RATIO)), not from real
//! font metrics, so the same input always produces the same lines.

mod sections;
mod wrap;

pub use sections::*;
pub use wrap::*;
