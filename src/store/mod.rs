//! # Configuration Store
//!
//! Remembers the last edited label as a JSON file so a session can pick up
//! where it left off.
//!
//! URL parameters always win: the stored configuration is only used when the
//! incoming query carries no label parameter at all (see [`resolve`]).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::codec::{decode, has_label_params};
use crate::error::LabelError;
use crate::label::LabelConfig;

/// A JSON file holding one [`LabelConfig`].
#[derive(Debug, Clone)]
pub struct LabelStore {
    path: PathBuf,
}

impl LabelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored configuration. A missing file is not an error.
    pub fn load(&self) -> Result<Option<LabelConfig>, LabelError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&json).map(Some).map_err(|e| {
            LabelError::Store(format!("{}: {}", self.path.display(), e))
        })
    }

    /// Overwrite the stored configuration.
    pub fn save(&self, config: &LabelConfig) -> Result<(), LabelError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "saved label configuration");
        Ok(())
    }
}

/// Pick the configuration to start from.
///
/// A query with any label parameter is decoded as-is. Otherwise the stored
/// configuration is used when present and readable, and the defaults when not.
pub fn resolve(query: &str, store: Option<&LabelStore>) -> LabelConfig {
    if has_label_params(query) {
        return decode(query);
    }

    match store.map(LabelStore::load) {
        Some(Ok(Some(config))) => config,
        Some(Err(e)) => {
            warn!(error = %e, "ignoring unreadable stored configuration");
            decode(query)
        }
        _ => decode(query),
    }
}
