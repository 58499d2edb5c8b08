//! # Label Tests
//!
//! End-to-end checks from a share link to SVG output.
//!
//! ## Test Coverage
//!
//! - **Composition**: required fields, brand pattern, guide visibility
//! - **SVG output**: preview keeps hidden overlays, export strips them
//! - **Sharing**: link round trip and filenames
//! - **Adapters**: directory export, clipboard and store working together

use lolev_label::codec::{self, decode, decode_url, share_url};
use lolev_label::color::Cmyk;
use lolev_label::compose::{warning_first_line_x, warning_lines};
use lolev_label::export::{ClipboardWriter, DirectoryExporter, ExportArtifact, FileExporter, StreamClipboard};
use lolev_label::metrics::{SHARE_BASE_URL, WARNING_TEXT};
use lolev_label::render::{Viewport, export_svg, to_svg, to_svg_with_viewport};
use lolev_label::scene::{Node, ids};
use lolev_label::store::{self, LabelStore};
use lolev_label::{LabelConfig, compose};
use pretty_assertions::assert_eq;
use std::fs;

const HAZY: &str = "name=Hazy+Daze&style=New+England+IPA&abv=6.8\
    &notes=Mango%2C+pineapple+and+a+soft+bitterness&hops=Citra%0AMosaic%0AGalaxy\
    &temperature=45&upc=036000291452&primary=%23FF0000&secondary=%23FFFFFF\
    &black=%23000000&margins=true&qr=true&barcode=true&bleed=true&lager=true&marlboro=false";

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn hazy() -> LabelConfig {
    decode(HAZY)
}

fn span_texts(node: &Node) -> Vec<String> {
    match node {
        Node::Text(text) => text.spans.iter().map(|s| s.text.clone()).collect(),
        _ => panic!("expected a text node"),
    }
}

fn scratch(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("lolev-label-it-{}-{}", name, std::process::id()))
}

// ============================================================================
// COMPOSITION
// ============================================================================

#[test]
fn test_decoded_link_composes_complete_label() {
    let scene = compose(&hazy());
    assert!(scene.is_complete());

    let sections = span_texts(scene.find(ids::SECTIONS).unwrap());
    assert_eq!(
        sections,
        vec![
            "1 PINT",
            "6.8% alc by vol",
            "",
            "TASTING NOTES",
            "Mango, pineapple and",
            "a soft bitterness",
            "",
            "HOPS",
            "Citra",
            "Mosaic",
            "Galaxy",
            "",
            "SERVE AT",
            "45°F",
        ]
    );
}

#[test]
fn test_missing_fields_render_placeholder_not_error() {
    let config = decode("style=Stout&abv=8");
    let scene = compose(&config);
    assert!(!scene.is_complete());
    assert_eq!(
        scene.message(),
        Some("Please fill in the following required fields: Name")
    );

    // Temperature defaults to "0", which counts as filled in.
    let svg = to_svg(&scene);
    assert!(svg.contains("Please fill in the following required fields: Name"));
    assert!(!svg.contains("id=\"static\""));
}

#[test]
fn test_guides_follow_variant_and_upc() {
    let config = hazy();
    let scene = compose(&config);
    // Valid UPC, so the barcode box is no longer needed.
    assert!(!scene.find(ids::BARCODE).unwrap().is_visible());
    // No variant yet, so the QR box is shown.
    assert!(scene.find(ids::QR).unwrap().is_visible());

    let config = config.with_derived_variant();
    assert_eq!(config.variant, "hazy-daze");
    assert!(!compose(&config).find(ids::QR).unwrap().is_visible());
}

#[test]
fn test_warning_block_layout() {
    let config = LabelConfig {
        warning_font_size: 60.0,
        ..hazy()
    };
    let scene = compose(&config);
    let Some(Node::Text(warning)) = scene.find(ids::WARNING) else {
        panic!("warning missing");
    };

    let lines = warning_lines(60.0);
    assert_eq!(lines.join(" "), WARNING_TEXT);
    assert_eq!(warning.spans[1].x, warning_first_line_x(60.0));
    for (i, span) in warning.spans.iter().enumerate().skip(2) {
        assert_eq!(span.x, 2864.0);
        assert_eq!(span.y, 1520.0 + (i - 1) as f64 * 75.0);
    }
}

// ============================================================================
// SVG OUTPUT
// ============================================================================

#[test]
fn test_preview_and_export_differ_only_in_overlays() {
    let scene = compose(&hazy());
    let preview = to_svg(&scene);
    let export = export_svg(&scene);

    for id in ["guides", "QR", "Barcode", "bleed"] {
        let attr = format!("id=\"{}\"", id);
        assert!(preview.contains(&attr), "{} missing from preview", id);
        assert!(!export.contains(&attr), "{} left in export", id);
    }
    for id in ["background", "optionalBackground", "static", "nameStyle", "abvNotesHopsTemp"] {
        assert!(export.contains(&format!("id=\"{}\"", id)), "{} missing from export", id);
    }
    assert!(export.contains("viewBox=\"0 0 4876 3076\""));
}

#[test]
fn test_brand_pattern_visibility_in_svg() {
    let svg = to_svg(&compose(&hazy()));
    assert!(svg.contains("<polygon id=\"Lager-Triangle\" points="));
    assert!(svg.contains("<polygon id=\"Marlboro\" display=\"none\""));

    let svg = to_svg(&compose(&decode(&HAZY.replace("marlboro=false", "marlboro=true"))));
    assert!(svg.contains("<polygon id=\"Lager-Triangle\" display=\"none\""));
    assert!(svg.contains("<polygon id=\"Marlboro\" points="));
}

#[test]
fn test_colors_reach_svg() {
    let svg = to_svg(&compose(&hazy()));
    assert!(svg.contains("<rect id=\"background\" x=\"0\" y=\"0\" width=\"4876\" height=\"3076\" fill=\"#FF0000\" />"));
    assert!(svg.contains("<g id=\"optionalBackground\" fill=\"#FFFFFF\">"));
}

#[test]
fn test_zoomed_preview() {
    let scene = compose(&hazy());
    let svg = to_svg_with_viewport(&scene, &Viewport::new(4.0, 0.0, 0.0));
    assert!(svg.contains("viewBox=\"0 0 1219 769\""));
}

// ============================================================================
// SHARING
// ============================================================================

#[test]
fn test_share_link_round_trip() {
    let config = LabelConfig {
        primary_color: Cmyk::new(0, 100, 100, 0),
        ..hazy().with_derived_variant()
    };
    let link = share_url(SHARE_BASE_URL, &config);
    assert!(link.starts_with("https://labels.lolev.beer/?name=Hazy+Daze"));
    assert_eq!(decode_url(&link), config);
    assert_eq!(config.title(), "Beer Label: Hazy Daze");
}

#[test]
fn test_export_filename() {
    let config = hazy().with_derived_variant();
    assert_eq!(ExportArtifact::label(&config).filename, "hazy-daze-hazy-daze.svg");
    assert_eq!(codec::export_filename("", ""), "label.svg");
}

// ============================================================================
// ADAPTERS
// ============================================================================

#[test]
fn test_export_to_directory() {
    let dir = scratch("export");
    let exporter = DirectoryExporter::new(&dir);

    let label = exporter.export(&ExportArtifact::label(&hazy())).unwrap();
    let barcode = exporter
        .export(&ExportArtifact::barcode("036000291452", "#000000").unwrap())
        .unwrap();

    assert_eq!(label.file_name().unwrap(), "hazy-daze.svg");
    assert_eq!(barcode.file_name().unwrap(), "barcode_036000291452.svg");
    assert!(fs::read_to_string(&label).unwrap().starts_with("<svg id=\"label-svg\""));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_share_through_clipboard() {
    let mut clipboard = StreamClipboard::new(Vec::new());
    clipboard
        .write_text(&share_url(SHARE_BASE_URL, &hazy()))
        .unwrap();
    let copied = String::from_utf8(clipboard.into_inner()).unwrap();
    assert_eq!(decode_url(copied.trim_end()), hazy());
}

#[test]
fn test_store_resumes_last_label() {
    let dir = scratch("store");
    let store = LabelStore::new(dir.join("label.json"));

    store.save(&hazy()).unwrap();
    assert_eq!(store::resolve("", Some(&store)), hazy());
    assert_eq!(store::resolve("name=Other", Some(&store)).name, "Other");

    fs::remove_dir_all(&dir).unwrap();
}
