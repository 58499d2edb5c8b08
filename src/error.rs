//! # Error Types
//!
//! This module defines error types used throughout the label library.
//!
//! Composition, wrapping and the URL codec are total and never fail; errors
//! only come from parsing user-supplied colors, the barcode/QR encoders, and
//! the adapters that touch the outside world (files, the HTTP listener).

use thiserror::Error;

/// Main error type for label operations
#[derive(Debug, Error)]
pub enum LabelError {
    /// Hex color that is not `#RRGGBB`
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    /// Value cannot be drawn as a UPC-A barcode
    #[error("Invalid UPC: {0}")]
    InvalidUpc(String),

    /// Barcode or QR encoder rejected the payload
    #[error("Symbology error: {0}")]
    Symbology(String),

    /// Persisted configuration could not be read back
    #[error("Store error: {0}")]
    Store(String),

    /// HTTP listener errors (bind, serve)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
