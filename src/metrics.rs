//! # Label Metrics
//!
//! Every fixed number the composer and the layout engine depend on lives here,
//! so tests can assert against the table instead of re-deriving values.
//!
//! ## Canvas
//!
//! | Property | Value |
//! |----------|-------|
//! | Width | 4876 units |
//! | Height | 3076 units |
//! | Bleed inset | 40 units |
//! | Safe margin | 250 units |
//!
//! ```text
//! ┌──────────────────────────── 4876 ────────────────────────────┐
//! │ 40 bleed                                                       │
//! │   250 margin                                                   │
//! │   ┌─ sections (x=250, y=307 + i·100)       warning (rotated) ─┐ │ 3076
//! │   │                                                          │ │
//! │   └─ QR box                name / style           barcode ──┘ │
//! └────────────────────────────────────────────────────────────────┘
//! ```

// ============================================================================
// CANVAS
// ============================================================================

/// Canvas width in label units.
pub const CANVAS_WIDTH: f64 = 4876.0;

/// Canvas height in label units.
pub const CANVAS_HEIGHT: f64 = 3076.0;

/// Horizontal center line.
pub const CENTER_X: f64 = 2438.0;

/// Vertical center line.
pub const CENTER_Y: f64 = 1538.0;

/// Distance of the bleed line from each trim edge.
pub const BLEED_INSET: f64 = 40.0;

/// Distance of the safe-area guides from each trim edge.
pub const SAFE_MARGIN: f64 = 250.0;

// ============================================================================
// TEXT METRICS
// ============================================================================

/// Average glyph width as a fraction of the font size (monospace heuristic).
pub const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Vertical distance between stacked text sections.
pub const LINE_HEIGHT: f64 = 100.0;

/// Baseline of the first stacked text section.
pub const SECTION_BASELINE: f64 = 307.0;

/// Left edge of the stacked text sections.
pub const SECTION_X: f64 = 250.0;

/// Font size of the stacked text sections.
pub const BODY_FONT_SIZE: f64 = 80.0;

/// Wrap width for tasting notes.
pub const NOTES_WRAP_WIDTH: f64 = 1000.0;

/// Wrap width for each hop line.
pub const HOPS_WRAP_WIDTH: f64 = 600.0;

// ============================================================================
// GOVERNMENT WARNING
// ============================================================================

/// Default font size of the warning block.
pub const DEFAULT_WARNING_FONT_SIZE: f64 = 60.0;

/// Heading printed in bold before the warning copy.
pub const WARNING_HEADING: &str = "GOVERNMENT WARNING:";

/// Statutory warning copy.
pub const WARNING_TEXT: &str = "(1) According to the Surgeon General, women should not drink \
alcoholic beverages during pregnancy because of the risk of birth defects. (2) Consumption of \
alcoholic beverages impairs your ability to drive a car or operate machinery, and may cause \
health problems.";

/// Wrap width of the warning block.
pub const WARNING_WRAP_WIDTH: f64 = 2800.0;

/// Extra indent, beyond the heading width, handed to the wrapper for the first line.
pub const WARNING_INDENT_PAD: f64 = 10.0;

/// Heading x position (pre-rotation coordinates).
pub const WARNING_HEADING_X: f64 = 2862.0;

/// Continuation lines x position.
pub const WARNING_BODY_X: f64 = 2864.0;

/// First wrapped line starts at `WARNING_FIRST_LINE_ORIGIN + heading width + WARNING_FIRST_LINE_GAP`.
pub const WARNING_FIRST_LINE_ORIGIN: f64 = 2900.0;

/// Gap between the heading and the first wrapped line.
pub const WARNING_FIRST_LINE_GAP: f64 = 80.0;

/// Baseline of the heading and the first warning line.
pub const WARNING_BASELINE: f64 = 1520.0;

/// Vertical step between warning lines.
pub const WARNING_LINE_STEP: f64 = 75.0;

// ============================================================================
// BRAND
// ============================================================================

/// Brand name across the top of the label.
pub const BRAND_NAME: &str = "LOLEV BEER";

/// Social handle printed on the side panel.
pub const BRAND_HANDLE: &str = "@lolevbeer";

/// Street address printed after the handle.
pub const BRAND_ADDRESS: &str = "Butler Street, Pittsburgh, PA";

/// Storage instruction on the right edge.
pub const STORE_COLD: &str = "STORE COLD";

/// Font family used for every text element.
pub const FONT_FAMILY: &str = "Poppins";

/// Bold font stack.
pub const FONT_FAMILY_BOLD: &str = "Poppins-Bold, Poppins";

/// Medium font stack.
pub const FONT_FAMILY_MEDIUM: &str = "Poppins-Medium, Poppins";

/// Baseline of the beer name.
pub const NAME_BASELINE: f64 = 2606.0;

/// Baseline of the beer style.
pub const STYLE_BASELINE: f64 = 2822.0;

/// Baseline of the brand name.
pub const BRAND_BASELINE: f64 = 415.0;

// ============================================================================
// GUIDES
// ============================================================================

/// Margin guide color.
pub const GUIDE_COLOR: &str = "#00FFFF";

/// Bleed line color.
pub const BLEED_COLOR: &str = "#FF0000";

/// QR placeholder box: (x, y, width, height).
pub const QR_BOX: (f64, f64, f64, f64) = (250.0, 2410.0, 415.0, 415.0);

/// Barcode placeholder box: (x, y, width, height).
pub const BARCODE_BOX: (f64, f64, f64, f64) = (4345.0, 2005.0, 280.0, 819.0);

/// Dash length of placeholder boxes.
pub const PLACEHOLDER_DASH: f64 = 30.0;

// ============================================================================
// SHARING
// ============================================================================

/// Base of the per-variant landing page encoded into the QR code.
pub const QR_BASE_URL: &str = "https://lolev.beer/beer";

/// Default address of the label editor used in share links.
pub const SHARE_BASE_URL: &str = "https://labels.lolev.beer/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_center() {
        assert_eq!(CENTER_X * 2.0, CANVAS_WIDTH);
        assert_eq!(CENTER_Y * 2.0, CANVAS_HEIGHT);
    }

    #[test]
    fn test_safe_area_inside_bleed() {
        assert!(SAFE_MARGIN > BLEED_INSET);
        assert_eq!(SECTION_X, SAFE_MARGIN);
    }
}
