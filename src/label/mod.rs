//! # Label Configuration
//!
//! [`LabelConfig`] is the single value the rest of the crate works from. It is
//! built from defaults or decoded from a URL, edited one field at a time, and
//! read by the composer and the codec on demand.
//!
//! ## Brand pattern
//!
//! The lager triangle and the Marlboro chevron are mutually exclusive. They
//! are stored as one [`BrandPattern`] so both can never be on at once; the
//! boolean accessors exist for callers that think in toggles.

use serde::{Deserialize, Serialize};

use crate::codec::derive_variant;
use crate::color::Cmyk;
use crate::metrics::DEFAULT_WARNING_FONT_SIZE;

/// Background polygon drawn behind the label content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrandPattern {
    /// Flat primary color only.
    #[default]
    None,
    /// Diagonal triangle in the secondary color (lower right half).
    LagerTriangle,
    /// Chevron in the secondary color.
    Marlboro,
}

/// Fields that must be filled in before a label can render.
///
/// Declared in the order they are checked and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RequiredField {
    Name,
    Style,
    Abv,
    Temperature,
}

impl RequiredField {
    pub const ALL: [RequiredField; 4] = [
        RequiredField::Name,
        RequiredField::Style,
        RequiredField::Abv,
        RequiredField::Temperature,
    ];

    /// Label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Name => "Name",
            RequiredField::Style => "Style",
            RequiredField::Abv => "ABV",
            RequiredField::Temperature => "Temperature",
        }
    }
}

/// Everything needed to render one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub name: String,
    pub style: String,
    /// Alcohol by volume, kept as entered (e.g. `"5.5"`).
    pub abv: String,
    pub notes: String,
    /// Hop varieties, one per line.
    pub hops: String,
    /// Serving temperature in °F, kept as entered.
    pub temperature: String,
    pub upc: String,
    /// URL-safe slug; see [`derive_variant`].
    pub variant: String,

    pub primary_color: Cmyk,
    pub secondary_color: Cmyk,
    pub text_color: Cmyk,

    pub show_margins: bool,
    pub show_qr: bool,
    pub show_barcode: bool,
    pub show_bleed: bool,
    pub pattern: BrandPattern,

    pub warning_font_size: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            style: String::new(),
            abv: "0".to_string(),
            notes: String::new(),
            hops: String::new(),
            temperature: "0".to_string(),
            upc: String::new(),
            variant: String::new(),
            primary_color: Cmyk::WHITE,
            secondary_color: Cmyk::key(10),
            text_color: Cmyk::BLACK,
            show_margins: false,
            show_qr: false,
            show_barcode: false,
            show_bleed: false,
            pattern: BrandPattern::None,
            warning_font_size: DEFAULT_WARNING_FONT_SIZE,
        }
    }
}

impl LabelConfig {
    pub fn show_lager_triangle(&self) -> bool {
        self.pattern == BrandPattern::LagerTriangle
    }

    pub fn show_marlboro(&self) -> bool {
        self.pattern == BrandPattern::Marlboro
    }

    /// Turn the lager triangle on (clearing Marlboro) or off.
    pub fn set_lager_triangle(&mut self, on: bool) {
        self.set_pattern_toggle(BrandPattern::LagerTriangle, on);
    }

    /// Turn the Marlboro chevron on (clearing the lager triangle) or off.
    pub fn set_marlboro(&mut self, on: bool) {
        self.set_pattern_toggle(BrandPattern::Marlboro, on);
    }

    fn set_pattern_toggle(&mut self, pattern: BrandPattern, on: bool) {
        if on {
            self.pattern = pattern;
        } else if self.pattern == pattern {
            self.pattern = BrandPattern::None;
        }
    }

    /// Replace the variant with the one derived from the current name.
    pub fn derive_variant(&mut self) {
        self.variant = derive_variant(&self.name);
    }

    /// Builder form of [`LabelConfig::derive_variant`].
    pub fn with_derived_variant(mut self) -> Self {
        self.derive_variant();
        self
    }

    /// Required fields that are empty, in check order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .filter(|field| self.required_value(*field).is_empty())
            .collect()
    }

    fn required_value(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::Name => &self.name,
            RequiredField::Style => &self.style,
            RequiredField::Abv => &self.abv,
            RequiredField::Temperature => &self.temperature,
        }
    }

    /// Whether the UPC is already a 12-digit code, so no guide box is needed.
    pub fn has_valid_upc(&self) -> bool {
        is_valid_upc(&self.upc)
    }

    /// Browser-style page title for this label.
    pub fn title(&self) -> String {
        format!("Beer Label: {}", self.name)
    }
}

/// A UPC-A code is exactly twelve ASCII digits.
///
/// This is a format check only; the check digit is verified when a barcode
/// is actually drawn.
pub fn is_valid_upc(upc: &str) -> bool {
    upc.len() == 12 && upc.bytes().all(|b| b.is_ascii_digit())
}
