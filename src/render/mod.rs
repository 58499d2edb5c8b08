//! # Rendering Module
//!
//! Turns a [`RenderScene`] into SVG markup.
//!
//! ## Modules
//!
//! - `svg`: node-by-node serialization with escaping and number formatting
//! - `viewport`: zoom and pan mapped onto the SVG `viewBox`
//!
//! Hidden overlays are kept in preview output with `display="none"` so the
//! markup mirrors the scene tree. Exported artwork drops them entirely.
//!
//! ## Usage Example
//!
//! ```
//! use lolev_label::{compose, LabelConfig};
//! use lolev_label::render::{export_svg, to_svg};
//!
//! let config = LabelConfig {
//!     name: "Hazy Daze".into(),
//!     style: "IPA".into(),
//!     abv: "6.8".into(),
//!     temperature: "45".into(),
//!     ..Default::default()
//! };
//! let scene = compose(&config);
//!
//! let preview = to_svg(&scene);
//! assert!(preview.contains("id=\"guides\""));
//!
//! let artwork = export_svg(&scene);
//! assert!(!artwork.contains("id=\"guides\""));
//! ```

mod svg;
mod viewport;

pub use svg::{escape, fmt_num};
pub use viewport::{ViewBox, Viewport};

use crate::scene::{Group, RenderScene};
use svg::SvgWriter;

/// Render a scene at full-canvas zoom.
pub fn to_svg(scene: &RenderScene) -> String {
    to_svg_with_viewport(scene, &Viewport::default())
}

/// Render a scene through a zoomed or panned viewport.
pub fn to_svg_with_viewport(scene: &RenderScene, viewport: &Viewport) -> String {
    document("label-svg", viewport.view_box(), &scene.root)
}

/// Render the scene as final artwork, without guides or placeholders.
pub fn export_svg(scene: &RenderScene) -> String {
    to_svg(&scene.for_export())
}

/// Wrap a node tree in a standalone SVG document.
pub fn document(id: &str, view_box: ViewBox, root: &Group) -> String {
    let mut writer = SvgWriter::new();
    writer.start(
        "svg",
        &[
            ("id", id.to_string()),
            ("viewBox", view_box.to_string()),
            ("version", "1.1".to_string()),
            ("xmlns", "http://www.w3.org/2000/svg".to_string()),
        ],
    );
    writer.group(root);
    writer.end("svg");
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::label::LabelConfig;
    use crate::scene::ids;

    fn complete() -> LabelConfig {
        LabelConfig {
            name: "Salt & Lime".into(),
            style: "Gose".into(),
            abv: "4.2".into(),
            temperature: "38".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_document_header() {
        let svg = to_svg(&compose(&complete()));
        assert!(svg.starts_with(
            "<svg id=\"label-svg\" viewBox=\"0 0 4876 3076\" version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">\n"
        ));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_text_is_escaped() {
        let svg = to_svg(&compose(&complete()));
        assert!(svg.contains("SALT &amp; LIME"));
        assert!(!svg.contains("SALT & LIME"));
    }

    #[test]
    fn test_hidden_overlays_in_preview() {
        let svg = to_svg(&compose(&complete()));
        assert!(svg.contains("<g id=\"bleed\" display=\"none\""));
        assert!(svg.contains("<g id=\"guides\" display=\"none\""));
    }

    #[test]
    fn test_export_drops_overlays() {
        let mut config = complete();
        config.show_margins = true;
        config.show_bleed = true;
        config.show_qr = true;
        config.show_barcode = true;

        let svg = export_svg(&compose(&config));
        for id in ids::EXPORT_STRIPPED {
            assert!(!svg.contains(&format!("id=\"{}\"", id)), "{} exported", id);
        }
        assert!(svg.contains("id=\"static\""));
    }

    #[test]
    fn test_viewport_sets_view_box() {
        let scene = compose(&complete());
        let svg = to_svg_with_viewport(&scene, &Viewport::new(2.0, 2438.0, 1538.0));
        assert!(svg.contains("viewBox=\"1219 769 2438 1538\""));
    }
}
