//! # Color Model
//!
//! Label colors are specified in print-safe CMYK but edited and rendered as
//! RGB / hex. This module converts between the three.
//!
//! ## Conversions
//!
//! ```text
//! CMYK → RGB:  r = 255 · (1 − c/100) · (1 − k/100)        (g, b alike)
//! RGB → CMYK:  k = 1 − max(r', g', b')                    (r' = r / 255)
//!              c = (1 − r' − k) / (1 − k)                 (m, y alike)
//!              k = 1  ⇒  c = m = y = 0
//! ```
//!
//! CMYK → hex → CMYK is not exact. Two rounding steps sit in between, so a
//! round trip may move a channel by one. Values with all three of c/m/y above
//! zero also fold part of their ink into k, since RGB cannot tell the difference.

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// A CMYK color with integer channels in `[0, 100]`.
///
/// Channels are clamped on construction, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "CmykChannels", into = "CmykChannels")]
pub struct Cmyk {
    c: u8,
    m: u8,
    y: u8,
    k: u8,
}

/// Unclamped wire form of [`Cmyk`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CmykChannels {
    c: f64,
    m: f64,
    y: f64,
    k: f64,
}

impl From<CmykChannels> for Cmyk {
    fn from(raw: CmykChannels) -> Self {
        Cmyk::from_f64(raw.c, raw.m, raw.y, raw.k)
    }
}

impl From<Cmyk> for CmykChannels {
    fn from(cmyk: Cmyk) -> Self {
        Self {
            c: cmyk.c as f64,
            m: cmyk.m as f64,
            y: cmyk.y as f64,
            k: cmyk.k as f64,
        }
    }
}

fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

impl Cmyk {
    /// Paper white.
    pub const WHITE: Self = Self { c: 0, m: 0, y: 0, k: 0 };

    /// Rich-free black (key only).
    pub const BLACK: Self = Self { c: 0, m: 0, y: 0, k: 100 };

    /// Create a color, clamping every channel to 100.
    pub fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self {
            c: c.min(100),
            m: m.min(100),
            y: y.min(100),
            k: k.min(100),
        }
    }

    /// Create a color from arbitrary numbers, rounding and clamping to `[0, 100]`.
    pub fn from_f64(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self {
            c: clamp_channel(c),
            m: clamp_channel(m),
            y: clamp_channel(y),
            k: clamp_channel(k),
        }
    }

    /// Key-only gray at the given percentage.
    pub fn key(k: u8) -> Self {
        Self::new(0, 0, 0, k)
    }

    pub fn c(&self) -> u8 {
        self.c
    }

    pub fn m(&self) -> u8 {
        self.m
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn k(&self) -> u8 {
        self.k
    }

    /// Convert to `#RRGGBB`.
    pub fn to_hex(self) -> String {
        cmyk_to_hex(self)
    }

    /// Parse a `#RRGGBB` color.
    pub fn from_hex(hex: &str) -> Result<Self, LabelError> {
        hex_to_cmyk(hex)
    }

    /// Largest per-channel difference between two colors.
    pub fn max_channel_delta(&self, other: &Cmyk) -> u8 {
        [
            self.c.abs_diff(other.c),
            self.m.abs_diff(other.m),
            self.y.abs_diff(other.y),
            self.k.abs_diff(other.k),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as upper-case `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse `#RRGGBB` (the `#` is optional, case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, LabelError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LabelError::InvalidColorFormat(format!(
                "expected #RRGGBB, got '{}'",
                hex
            )));
        }

        // All six bytes are ASCII hex digits, so slicing by byte offset is safe.
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| LabelError::InvalidColorFormat(format!("'{}': {}", hex, e)))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_cmyk(self) -> Cmyk {
        rgb_to_cmyk(self.r, self.g, self.b)
    }
}

/// Convert CMYK to RGB, rounding each channel to the nearest integer.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let key = 1.0 - cmyk.k as f64 / 100.0;
    let channel = |ink: u8| (255.0 * (1.0 - ink as f64 / 100.0) * key).round() as u8;

    Rgb {
        r: channel(cmyk.c),
        g: channel(cmyk.m),
        b: channel(cmyk.y),
    }
}

/// Convert CMYK to `#RRGGBB` via [`cmyk_to_rgb`].
pub fn cmyk_to_hex(cmyk: Cmyk) -> String {
    cmyk_to_rgb(cmyk).to_hex()
}

/// Convert 8-bit RGB to CMYK.
pub fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> Cmyk {
    let max = r.max(g).max(b);

    // Pure black: k = 1 and the ink channels would divide by zero.
    if max == 0 {
        return Cmyk::BLACK;
    }

    let (r, g, b) = (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
    let k = 1.0 - max as f64 / 255.0;
    let ink = |v: f64| (1.0 - v - k) / (1.0 - k) * 100.0;

    Cmyk::from_f64(ink(r), ink(g), ink(b), k * 100.0)
}

/// Parse `#RRGGBB` into CMYK.
///
/// Fails with [`LabelError::InvalidColorFormat`] instead of producing
/// garbage for malformed input.
pub fn hex_to_cmyk(hex: &str) -> Result<Cmyk, LabelError> {
    Rgb::from_hex(hex).map(Rgb::to_cmyk)
}
