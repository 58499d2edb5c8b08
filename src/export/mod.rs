//! # Export Adapters
//!
//! Core code never performs side effects. It produces an [`ExportArtifact`]
//! (filename, MIME type and content) or a share string, and hands it to one of
//! two capabilities:
//!
//! | Capability | Trait | Adapter |
//! |------------|-------|---------|
//! | Save a download | [`FileExporter`] | [`DirectoryExporter`] writes into a directory |
//! | Copy text | [`ClipboardWriter`] | [`StreamClipboard`] writes a line to any `io::Write` |
//!
//! Callers that need a different sink (a browser bridge, a test double)
//! implement the trait themselves.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::codec::export_filename;
use crate::compose::compose;
use crate::error::LabelError;
use crate::label::LabelConfig;
use crate::render::export_svg;
use crate::symbology::{
    barcode_filename, qr_filename, render_barcode, render_variant_qr,
};

/// MIME type of every artifact this crate produces.
pub const SVG_MIME: &str = "image/svg+xml";

/// A file ready to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime: &'static str,
    pub content: String,
}

impl ExportArtifact {
    pub fn svg(filename: impl Into<String>, content: String) -> Self {
        Self {
            filename: filename.into(),
            mime: SVG_MIME,
            content,
        }
    }

    /// The export form of a label: guides, placeholders and bleed removed.
    pub fn label(config: &LabelConfig) -> Self {
        let scene = compose(config);
        Self::svg(
            export_filename(&config.name, &config.variant),
            export_svg(&scene),
        )
    }

    /// The UPC-A barcode download for `upc`.
    pub fn barcode(upc: &str, color: &str) -> Result<Self, LabelError> {
        let graphic = render_barcode(upc, color)?;
        Ok(Self::svg(barcode_filename(upc), graphic.to_svg()))
    }

    /// The QR code download for a variant's page under `base`.
    pub fn qr(base: &str, variant: &str, color: &str) -> Result<Self, LabelError> {
        let graphic = render_variant_qr(base, variant, color)?;
        Ok(Self::svg(qr_filename(variant), graphic.to_svg()))
    }
}

/// Saves an artifact somewhere and reports where.
pub trait FileExporter {
    fn export(&self, artifact: &ExportArtifact) -> Result<PathBuf, LabelError>;
}

/// Copies text for the user to paste elsewhere.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), LabelError>;
}

/// Writes artifacts as files inside a directory, creating it when missing.
#[derive(Debug, Clone)]
pub struct DirectoryExporter {
    dir: PathBuf,
}

impl DirectoryExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileExporter for DirectoryExporter {
    fn export(&self, artifact: &ExportArtifact) -> Result<PathBuf, LabelError> {
        // Only the final path component is kept.
        let name = Path::new(&artifact.filename)
            .file_name()
            .ok_or_else(|| {
                LabelError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("invalid export filename {:?}", artifact.filename),
                ))
            })?;

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        fs::write(&path, &artifact.content)?;

        info!(path = %path.display(), bytes = artifact.content.len(), "exported");
        Ok(path)
    }
}

/// Clipboard stand-in that writes each text as one line to a stream.
///
/// The CLI uses it over stdout; tests use it over a `Vec<u8>`.
pub struct StreamClipboard<W: Write> {
    out: W,
}

impl<W: Write> StreamClipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipboardWriter for StreamClipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), LabelError> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LabelConfig {
        LabelConfig {
            name: "Hazy Daze".into(),
            style: "IPA".into(),
            abv: "6.8".into(),
            temperature: "45".into(),
            variant: "v2".into(),
            show_margins: true,
            ..Default::default()
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lolev-label-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_label_artifact() {
        let artifact = ExportArtifact::label(&config());
        assert_eq!(artifact.filename, "hazy-daze-v2.svg");
        assert_eq!(artifact.mime, "image/svg+xml");
        assert!(artifact.content.contains("viewBox=\"0 0 4876 3076\""));
        assert!(!artifact.content.contains("id=\"guides\""));
    }

    #[test]
    fn test_unnamed_label_falls_back_to_generic_filename() {
        let artifact = ExportArtifact::label(&LabelConfig::default());
        assert_eq!(artifact.filename, "label.svg");
    }

    #[test]
    fn test_symbol_artifacts() {
        let barcode = ExportArtifact::barcode("036000291452", "#000000").unwrap();
        assert_eq!(barcode.filename, "barcode_036000291452.svg");

        let qr = ExportArtifact::qr("https://lolev.beer/beer", "hazy-daze", "#000000").unwrap();
        assert_eq!(qr.filename, "qr_hazy-daze.svg");

        assert!(ExportArtifact::barcode("1234", "#000000").is_err());
    }

    #[test]
    fn test_directory_exporter_writes_file() {
        let dir = scratch_dir("export");
        let exporter = DirectoryExporter::new(&dir);
        let artifact = ExportArtifact::svg("../escape.svg", "<svg />".to_string());

        let path = exporter.export(&artifact).unwrap();
        assert_eq!(path, dir.join("escape.svg"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg />");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_stream_clipboard() {
        let mut clipboard = StreamClipboard::new(Vec::new());
        clipboard.write_text("https://labels.lolev.beer/?name=A").unwrap();
        assert_eq!(
            String::from_utf8(clipboard.into_inner()).unwrap(),
            "https://labels.lolev.beer/?name=A\n"
        );
    }
}
