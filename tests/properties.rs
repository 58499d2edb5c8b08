//! # Property Tests
//!
//! Randomized checks for the pure core: word wrapping, color conversion,
//! slugs and the URL codec.

use lolev_label::LabelConfig;
use lolev_label::codec::{decode, derive_variant, encode, export_filename};
use lolev_label::color::{Cmyk, cmyk_to_hex, hex_to_cmyk};
use lolev_label::compose;
use lolev_label::label::BrandPattern;
use lolev_label::layout::wrap_text;
use proptest::prelude::*;

/// Colors that survive the hex round trip exactly.
fn lossless_color() -> impl Strategy<Value = Cmyk> {
    prop::sample::select(vec![
        Cmyk::WHITE,
        Cmyk::BLACK,
        Cmyk::key(10),
        Cmyk::key(50),
        Cmyk::new(0, 100, 100, 0),
        Cmyk::new(100, 0, 100, 0),
        Cmyk::new(100, 100, 0, 0),
        Cmyk::new(0, 0, 100, 0),
    ])
}

fn pattern() -> impl Strategy<Value = BrandPattern> {
    prop::sample::select(vec![
        BrandPattern::None,
        BrandPattern::LagerTriangle,
        BrandPattern::Marlboro,
    ])
}

fn field() -> impl Strategy<Value = String> {
    "\\PC{1,24}"
}

prop_compose! {
    fn full_config()(
        text in prop::collection::vec(field(), 8),
        colors in prop::collection::vec(lossless_color(), 3),
        toggles in prop::collection::vec(any::<bool>(), 4),
        pattern in pattern(),
    ) -> LabelConfig {
        LabelConfig {
            name: text[0].clone(),
            style: text[1].clone(),
            abv: text[2].clone(),
            notes: text[3].clone(),
            hops: text[4].clone(),
            temperature: text[5].clone(),
            upc: text[6].clone(),
            variant: text[7].clone(),
            primary_color: colors[0],
            secondary_color: colors[1],
            text_color: colors[2],
            show_margins: toggles[0],
            show_qr: toggles[1],
            show_barcode: toggles[2],
            show_bleed: toggles[3],
            pattern,
            ..Default::default()
        }
    }
}

proptest! {
    /// Wrapping never loses, reorders or merges words.
    #[test]
    fn wrap_preserves_words(
        words in prop::collection::vec("[a-zA-Z0-9,.]{1,12}", 1..40),
        max_width in 1.0f64..5000.0,
        font_size in 1.0f64..200.0,
        indent in 0.0f64..1000.0,
    ) {
        let text = words.join(" ");
        let lines = wrap_text(&text, max_width, font_size, indent);
        prop_assert!(!lines.is_empty());
        prop_assert!(lines.iter().all(|line| !line.is_empty()));
        prop_assert_eq!(lines.join(" "), text);
    }

    /// A line holding several words fits the width, not counting the space
    /// before its last word.
    #[test]
    fn wrap_respects_width(
        words in prop::collection::vec("[a-z]{1,8}", 1..40),
        max_width in 200.0f64..3000.0,
    ) {
        let text = words.join(" ");
        for line in wrap_text(&text, max_width, 50.0, 0.0) {
            if line.contains(' ') {
                let width = (line.chars().count() - 1) as f64 * 30.0;
                prop_assert!(width < max_width, "{:?} at {}", line, max_width);
            }
        }
    }

    /// Hex round trip moves each channel by at most one for normalized colors.
    #[test]
    fn hex_round_trip_within_one(
        a in 0u8..=100,
        b in 0u8..=100,
        k in 0u8..=70,
        zero_channel in 0usize..3,
    ) {
        let cmyk = match zero_channel {
            0 => Cmyk::new(0, a, b, k),
            1 => Cmyk::new(a, 0, b, k),
            _ => Cmyk::new(a, b, 0, k),
        };
        let back = hex_to_cmyk(&cmyk_to_hex(cmyk)).unwrap();
        prop_assert!(cmyk.max_channel_delta(&back) <= 1, "{:?} -> {:?}", cmyk, back);
    }

    #[test]
    fn derive_variant_is_idempotent(name in "\\PC{0,40}") {
        let once = derive_variant(&name);
        prop_assert_eq!(derive_variant(&once), once.clone());
        prop_assert!(once.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!once.starts_with('-') && !once.ends_with('-'));
        prop_assert!(!once.contains("--"));
    }

    #[test]
    fn export_filename_is_safe(name in "\\PC{0,30}", variant in "\\PC{0,30}") {
        let filename = export_filename(&name, &variant);
        prop_assert!(filename.ends_with(".svg"));
        let stem = filename.trim_end_matches(".svg");
        prop_assert!(!stem.is_empty());
        prop_assert!(stem.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn decode_inverts_encode(config in full_config()) {
        prop_assert_eq!(decode(&encode(&config)), config);
    }

    /// The placeholder names exactly the empty required fields.
    #[test]
    fn placeholder_lists_missing_fields(
        has_style in any::<bool>(),
        has_abv in any::<bool>(),
        has_temperature in any::<bool>(),
    ) {
        let value = |present: bool| if present { "x".to_string() } else { String::new() };
        let config = LabelConfig {
            name: String::new(),
            style: value(has_style),
            abv: value(has_abv),
            temperature: value(has_temperature),
            ..Default::default()
        };
        let scene = compose(&config);
        let message = scene.message().unwrap();
        prop_assert!(message.contains("Name"));
        prop_assert_eq!(message.contains("Style"), !has_style);
        prop_assert_eq!(message.contains("ABV"), !has_abv);
        prop_assert_eq!(message.contains("Temperature"), !has_temperature);
    }
}
