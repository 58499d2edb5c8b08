//! # Lolev Label - Printable Beverage Label Library
//!
//! Renders a fixed-size print label for a can or bottle from a small
//! configuration: name, style, ABV, tasting notes, hops, serving temperature,
//! UPC, a CMYK palette and a few visual toggles. It provides:
//!
//! - **Composition**: a positioned scene tree with stable element ids
//! - **SVG output**: live preview with print guides, and export without them
//! - **Shareable state**: the whole configuration as a URL query string
//! - **Symbols**: UPC-A barcode and QR code downloads
//!
//! ## Quick Start
//!
//! ```
//! use lolev_label::{codec, compose, render};
//!
//! let config = codec::decode("name=Hazy+Daze&style=IPA&abv=6.8&temperature=45&lager=true");
//! let scene = compose(&config);
//! assert!(scene.is_complete());
//!
//! let svg = render::export_svg(&scene);
//! assert!(svg.contains("HAZY DAZE"));
//!
//! // And back to a link
//! let query = codec::encode(&config);
//! assert!(query.starts_with("name=Hazy+Daze&style=IPA"));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`color`] | CMYK, RGB and hex conversions |
//! | [`layout`] | Greedy word wrap and text section stacking |
//! | [`label`] | The label configuration |
//! | [`codec`] | URL query encode/decode, slugs and filenames |
//! | [`compose`] | Configuration to scene |
//! | [`scene`] | Scene tree and element ids |
//! | [`render`] | Scene to SVG, zoom and pan |
//! | [`symbology`] | Barcode and QR renderers |
//! | [`export`] | File and clipboard adapters |
//! | [`store`] | Last-edited configuration on disk |
//! | [`server`] | HTTP preview and export API |
//! | [`metrics`] | Canvas geometry and brand copy |
//! | [`error`] | Error types |
//!
//! ## Canvas
//!
//! Every coordinate is in label units on a 4876 × 3076 canvas. Text width is
//! estimated as `chars × font_size × 0.6`; no font metrics are loaded.

pub mod codec;
pub mod color;
pub mod compose;
pub mod error;
pub mod export;
pub mod label;
pub mod layout;
pub mod metrics;
pub mod render;
pub mod scene;
pub mod server;
pub mod store;
pub mod symbology;

// Re-exports for convenience
pub use compose::compose;
pub use error::LabelError;
pub use label::LabelConfig;
pub use scene::RenderScene;
