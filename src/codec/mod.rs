//! # Configuration Codec
//!
//! Maps a [`LabelConfig`] to and from a flat URL query string so label states
//! can be shared and bookmarked.
//!
//! ## Parameters
//!
//! | Key | Field | Encoded when |
//! |-----|-------|--------------|
//! | `name`, `style`, `abv`, `notes`, `hops`, `temperature`, `upc`, `variant` | text | non-empty |
//! | `primary`, `secondary`, `black` | colors as `#RRGGBB` | always |
//! | `margins`, `qr`, `barcode`, `bleed`, `lager`, `marlboro` | toggles as `true`/`false` | always |
//!
//! Decoding never fails as a whole. Unknown keys are ignored, and each field
//! falls back to its default on its own when missing, empty or malformed.
//!
//! ## Round trip
//!
//! `decode(encode(config))` gives back `config`, except that colors may move
//! by one per channel (see [`crate::color`]) and empty text fields come back
//! as their defaults.

mod slug;

pub use slug::*;

use std::collections::HashMap;

use tracing::warn;
use url::{Url, form_urlencoded};

use crate::color::Cmyk;
use crate::label::LabelConfig;

/// Query keys for the text fields, in encoding order.
pub const TEXT_KEYS: [&str; 8] = [
    "name",
    "style",
    "abv",
    "notes",
    "hops",
    "temperature",
    "upc",
    "variant",
];

/// Query keys for the colors, in encoding order.
pub const COLOR_KEYS: [&str; 3] = ["primary", "secondary", "black"];

/// Query keys for the toggles, in encoding order.
pub const TOGGLE_KEYS: [&str; 6] = ["margins", "qr", "barcode", "bleed", "lager", "marlboro"];

/// Encode a configuration as a query string (without the leading `?`).
pub fn encode(config: &LabelConfig) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    let text = [
        ("name", &config.name),
        ("style", &config.style),
        ("abv", &config.abv),
        ("notes", &config.notes),
        ("hops", &config.hops),
        ("temperature", &config.temperature),
        ("upc", &config.upc),
        ("variant", &config.variant),
    ];
    for (key, value) in text {
        if !value.is_empty() {
            query.append_pair(key, value);
        }
    }

    query.append_pair("primary", &config.primary_color.to_hex());
    query.append_pair("secondary", &config.secondary_color.to_hex());
    query.append_pair("black", &config.text_color.to_hex());

    let toggles = [
        ("margins", config.show_margins),
        ("qr", config.show_qr),
        ("barcode", config.show_barcode),
        ("bleed", config.show_bleed),
        ("lager", config.show_lager_triangle()),
        ("marlboro", config.show_marlboro()),
    ];
    for (key, on) in toggles {
        query.append_pair(key, if on { "true" } else { "false" });
    }

    query.finish()
}

/// Decode a query string (with or without the leading `?`).
pub fn decode(query: &str) -> LabelConfig {
    let params = parse_params(query);
    let defaults = LabelConfig::default();

    let text = |key: &str, default: &str| -> String {
        params
            .get(key)
            .filter(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| default.to_string())
    };

    let color = |key: &str, default: Cmyk| -> Cmyk {
        match params.get(key).filter(|value| !value.is_empty()) {
            Some(hex) => Cmyk::from_hex(hex).unwrap_or_else(|e| {
                warn!(key, value = %hex, error = %e, "ignoring malformed color");
                default
            }),
            None => default,
        }
    };

    let toggle = |key: &str| params.get(key).is_some_and(|value| value == "true");

    let mut config = LabelConfig {
        name: text("name", &defaults.name),
        style: text("style", &defaults.style),
        abv: text("abv", &defaults.abv),
        notes: text("notes", &defaults.notes),
        hops: text("hops", &defaults.hops),
        temperature: text("temperature", &defaults.temperature),
        upc: text("upc", &defaults.upc),
        variant: text("variant", &defaults.variant),
        primary_color: color("primary", defaults.primary_color),
        secondary_color: color("secondary", defaults.secondary_color),
        text_color: color("black", defaults.text_color),
        show_margins: toggle("margins"),
        show_qr: toggle("qr"),
        show_barcode: toggle("barcode"),
        show_bleed: toggle("bleed"),
        ..defaults
    };

    // Applied in key order: when both are set, Marlboro wins.
    config.set_lager_triangle(toggle("lager"));
    config.set_marlboro(toggle("marlboro"));

    config
}

/// Decode either a full URL or a bare query string.
pub fn decode_url(input: &str) -> LabelConfig {
    decode(&query_of(input))
}

/// The query part of a full URL, or `input` itself when it is a bare query.
pub fn query_of(input: &str) -> String {
    match Url::parse(input) {
        Ok(url) => url.query().unwrap_or_default().to_string(),
        Err(_) => input
            .split_once('?')
            .map_or(input, |(_, query)| query)
            .to_string(),
    }
}

/// Whether a query carries any label parameter at all.
///
/// Used to decide between URL state and the locally cached configuration.
pub fn has_label_params(query: &str) -> bool {
    parse_params(query).keys().any(|key| {
        TEXT_KEYS.contains(&key.as_str())
            || COLOR_KEYS.contains(&key.as_str())
            || TOGGLE_KEYS.contains(&key.as_str())
    })
}

/// Build a shareable link: `base` with its query replaced by the encoded config.
pub fn share_url(base: &str, config: &LabelConfig) -> String {
    let query = encode(config);
    match Url::parse(base) {
        Ok(mut url) => {
            url.set_query(Some(&query));
            url.to_string()
        }
        Err(_) => {
            let base = base.split_once('?').map_or(base, |(path, _)| path);
            format!("{}?{}", base, query)
        }
    }
}

/// Parse a query into a map; the last occurrence of a key wins.
fn parse_params(query: &str) -> HashMap<String, String> {
    let query = query.trim().trim_start_matches('?');
    form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::BrandPattern;
    use pretty_assertions::assert_eq;

    fn sample() -> LabelConfig {
        LabelConfig {
            name: "Hazy Daze".into(),
            style: "New England IPA".into(),
            abv: "6.8".into(),
            notes: "Mango, pineapple & soft bitterness".into(),
            hops: "Citra\nMosaic".into(),
            temperature: "45".into(),
            upc: "036000291452".into(),
            variant: "hazy-daze".into(),
            primary_color: Cmyk::new(0, 100, 100, 0),
            secondary_color: Cmyk::WHITE,
            text_color: Cmyk::BLACK,
            show_margins: true,
            show_qr: false,
            show_barcode: true,
            show_bleed: false,
            pattern: BrandPattern::LagerTriangle,
            ..Default::default()
        }
    }

    #[test]
    fn test_encode_order_and_format() {
        let query = encode(&sample());
        assert_eq!(
            query,
            "name=Hazy+Daze&style=New+England+IPA&abv=6.8\
             &notes=Mango%2C+pineapple+%26+soft+bitterness&hops=Citra%0AMosaic\
             &temperature=45&upc=036000291452&variant=hazy-daze\
             &primary=%23FF0000&secondary=%23FFFFFF&black=%23000000\
             &margins=true&qr=false&barcode=true&bleed=false&lager=true&marlboro=false"
        );
    }

    #[test]
    fn test_encode_omits_empty_text_but_never_toggles() {
        let config = LabelConfig {
            abv: String::new(),
            temperature: String::new(),
            ..Default::default()
        };
        let query = encode(&config);
        assert!(!query.contains("name="));
        assert!(!query.contains("abv="));
        assert!(query.contains("primary=%23FFFFFF"));
        for key in TOGGLE_KEYS {
            assert!(query.contains(&format!("{}=false", key)), "{} missing", key);
        }
    }

    #[test]
    fn test_round_trip() {
        let config = sample();
        assert_eq!(decode(&encode(&config)), config);
    }

    #[test]
    fn test_decode_empty_is_default() {
        assert_eq!(decode(""), LabelConfig::default());
        assert_eq!(decode("?"), LabelConfig::default());
    }

    #[test]
    fn test_decode_defaults() {
        let config = decode("name=Pils");
        assert_eq!(config.name, "Pils");
        assert_eq!(config.abv, "0");
        assert_eq!(config.temperature, "0");
        assert_eq!(config.style, "");
        assert_eq!(config.primary_color, Cmyk::WHITE);
        assert_eq!(config.secondary_color, Cmyk::key(10));
        assert_eq!(config.text_color, Cmyk::BLACK);
        assert!(!config.show_bleed);
    }

    #[test]
    fn test_decode_is_field_by_field() {
        let config = decode("?name=Pils&primary=%23ZZZZZZ&secondary=red&black=%23FF0000&bogus=1&qr=yes");
        assert_eq!(config.name, "Pils");
        assert_eq!(config.primary_color, Cmyk::WHITE);
        assert_eq!(config.secondary_color, Cmyk::key(10));
        assert_eq!(config.text_color, Cmyk::new(0, 100, 100, 0));
        assert!(!config.show_qr);
    }

    #[test]
    fn test_decode_empty_value_is_absent() {
        let config = decode("abv=&temperature=");
        assert_eq!(config.abv, "0");
        assert_eq!(config.temperature, "0");
    }

    #[test]
    fn test_decode_last_value_wins() {
        assert_eq!(decode("name=a&name=b").name, "b");
    }

    #[test]
    fn test_decode_pattern_exclusive() {
        assert_eq!(decode("lager=true").pattern, BrandPattern::LagerTriangle);
        assert_eq!(decode("marlboro=true").pattern, BrandPattern::Marlboro);
        assert_eq!(decode("lager=true&marlboro=true").pattern, BrandPattern::Marlboro);
        assert_eq!(decode("lager=false&marlboro=false").pattern, BrandPattern::None);
    }

    #[test]
    fn test_decode_url() {
        let config = decode_url("https://labels.lolev.beer/?name=Gose&style=Sour#top");
        assert_eq!(config.name, "Gose");
        assert_eq!(config.style, "Sour");

        assert_eq!(decode_url("/editor?name=Gose").name, "Gose");
        assert_eq!(decode_url("name=Gose").name, "Gose");
    }

    #[test]
    fn test_has_label_params() {
        assert!(has_label_params("name=x"));
        assert!(has_label_params("?bleed=false"));
        assert!(!has_label_params(""));
        assert!(!has_label_params("utm_source=mail"));
    }

    #[test]
    fn test_share_url_replaces_query() {
        let config = LabelConfig {
            name: "Pils".into(),
            ..Default::default()
        };
        let url = share_url("https://labels.lolev.beer/?old=1", &config);
        assert!(url.starts_with("https://labels.lolev.beer/?name=Pils&abv=0"));
        assert!(!url.contains("old=1"));

        let url = share_url("editor?old=1", &config);
        assert!(url.starts_with("editor?name=Pils"));
    }
}
