//! # Barcode and QR Symbols
//!
//! Standalone SVG downloads for the two machine-readable marks a label carries:
//!
//! - **UPC-A** retail barcode, encoded as EAN-13 with a leading zero
//! - **QR code** linking to the beer's page, `{base}/{variant}`
//!
//! Both renderers are pure: they take the payload and an ink color and return
//! a [`Graphic`]. Adjacent dark modules are merged into a single rect so the
//! output stays small.

use barcoders::sym::ean13::EAN13;
use qrcode::{EcLevel, QrCode};
use tracing::debug;

use url::Url;

use crate::codec::filename_slug;
use crate::color::Rgb;
use crate::error::LabelError;
use crate::label::is_valid_upc;
use crate::render::{ViewBox, document};
use crate::scene::{Group, Node, Rect, Span, Style, TextNode};

/// Width of one barcode module, in SVG units.
const BAR_MODULE: f64 = 3.0;
/// Height of the bars.
const BAR_HEIGHT: f64 = 180.0;
/// Quiet zone on each side of the barcode, in modules.
const BAR_QUIET_ZONE: usize = 9;
/// Font size of the human-readable digits.
const BAR_DIGIT_SIZE: f64 = 28.0;

/// Size of one QR module, in SVG units.
const QR_MODULE: f64 = 10.0;
/// Quiet zone around the QR code, in modules.
const QR_QUIET_ZONE: usize = 4;

/// A standalone vector graphic.
#[derive(Debug, Clone, PartialEq)]
pub struct Graphic {
    pub width: f64,
    pub height: f64,
    pub root: Group,
}

impl Graphic {
    /// Serialize as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let view_box = ViewBox {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
        };
        document("symbol-svg", view_box, &self.root)
    }
}

/// UPC-A check digit for the first eleven digits of `upc`.
///
/// Returns `None` unless `upc` starts with eleven ASCII digits.
pub fn upc_check_digit(upc: &str) -> Option<u8> {
    let digits: Vec<u8> = upc
        .bytes()
        .take(11)
        .map(|b| b.wrapping_sub(b'0'))
        .collect();
    if digits.len() != 11 || digits.iter().any(|d| *d > 9) {
        return None;
    }

    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d as u32 * 3 } else { *d as u32 })
        .sum();
    Some(((10 - sum % 10) % 10) as u8)
}

/// Draw a UPC-A barcode with its digits printed underneath.
pub fn render_barcode(upc: &str, color: &str) -> Result<Graphic, LabelError> {
    let upc = upc.trim();
    if !is_valid_upc(upc) {
        return Err(LabelError::InvalidUpc(format!(
            "expected 12 digits, got {:?}",
            upc
        )));
    }
    let expected = upc_check_digit(upc);
    let actual = upc.as_bytes()[11] - b'0';
    if expected != Some(actual) {
        return Err(LabelError::InvalidUpc(format!(
            "check digit of {} should be {}",
            upc,
            expected.unwrap_or_default()
        )));
    }
    let ink = Rgb::from_hex(color)?.to_hex();

    // UPC-A is EAN-13 with a leading zero; barcoders appends the check digit.
    let payload = format!("0{}", &upc[..11]);
    let barcode = EAN13::new(&payload)
        .map_err(|e| LabelError::Symbology(format!("barcode encoding failed: {}", e)))?;
    let modules = barcode.encode();
    debug!(upc, modules = modules.len(), "encoded barcode");

    let bars = runs(modules.iter().map(|m| *m == 1)).into_iter().map(|(start, len)| {
        Node::from(Rect::new(
            (BAR_QUIET_ZONE + start) as f64 * BAR_MODULE,
            0.0,
            len as f64 * BAR_MODULE,
            BAR_HEIGHT,
        ))
    });

    let width = (modules.len() + 2 * BAR_QUIET_ZONE) as f64 * BAR_MODULE;
    let height = BAR_HEIGHT + BAR_DIGIT_SIZE * 1.5;
    let digits = TextNode::new(
        "digits",
        Style::default()
            .font("monospace", BAR_DIGIT_SIZE)
            .letter_spacing(4.0)
            .anchor_middle(),
    )
    .span(Span::new(width / 2.0, BAR_HEIGHT + BAR_DIGIT_SIZE * 1.2, upc));

    Ok(Graphic {
        width,
        height,
        root: Group::new("barcode")
            .style(Style::fill(ink))
            .children(bars)
            .child(digits),
    })
}

/// Draw a QR code for `data` at error-correction level L.
pub fn render_qr(data: &str, color: &str) -> Result<Graphic, LabelError> {
    let ink = Rgb::from_hex(color)?.to_hex();
    let code = QrCode::with_error_correction_level(data, EcLevel::L)
        .map_err(|e| LabelError::Symbology(format!("QR code generation failed: {}", e)))?;

    let size = code.width();
    debug!(data, size, "encoded QR code");

    let mut cells: Vec<Node> = Vec::new();
    for qy in 0..size {
        let row = (0..size).map(|qx| code[(qx, qy)] == qrcode::Color::Dark);
        for (start, len) in runs(row) {
            cells.push(
                Rect::new(
                    (QR_QUIET_ZONE + start) as f64 * QR_MODULE,
                    (QR_QUIET_ZONE + qy) as f64 * QR_MODULE,
                    len as f64 * QR_MODULE,
                    QR_MODULE,
                )
                .into(),
            );
        }
    }

    let extent = (size + 2 * QR_QUIET_ZONE) as f64 * QR_MODULE;
    Ok(Graphic {
        width: extent,
        height: extent,
        root: Group::new("qr").style(Style::fill(ink)).children(cells),
    })
}

/// The beer page a label's QR code points at.
///
/// The variant becomes one percent-encoded path segment below `base`.
pub fn qr_url(base: &str, variant: &str) -> Result<String, LabelError> {
    let invalid = || LabelError::Symbology(format!("invalid QR base URL: {}", base));
    let mut url = Url::parse(base).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .push(variant);
    Ok(url.into())
}

/// Draw the QR code for a variant's page.
pub fn render_variant_qr(base: &str, variant: &str, color: &str) -> Result<Graphic, LabelError> {
    if variant.trim().is_empty() {
        return Err(LabelError::Symbology(
            "a variant is required for the QR code".to_string(),
        ));
    }
    render_qr(&qr_url(base, variant.trim())?, color)
}

pub fn barcode_filename(upc: &str) -> String {
    format!("barcode_{}.svg", upc.trim())
}

pub fn qr_filename(variant: &str) -> String {
    let stem = filename_slug(variant);
    if stem.is_empty() {
        "qr.svg".to_string()
    } else {
        format!("qr_{}.svg", stem)
    }
}

/// Start and length of each run of `true` values.
fn runs(cells: impl IntoIterator<Item = bool>) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut current: Option<(usize, usize)> = None;

    for (i, dark) in cells.into_iter().enumerate() {
        if !dark {
            runs.extend(current.take());
        } else if let Some((_, len)) = current.as_mut() {
            *len += 1;
        } else {
            current = Some((i, 1));
        }
    }
    runs.extend(current);
    runs
}
