//! HTTP handlers for the server.

pub mod label;
pub mod symbols;

use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::error::LabelError;
use crate::export::ExportArtifact;

/// Map a crate error to a handler error.
///
/// Bad colors and codes are the caller's fault; anything else is ours.
pub(super) fn reject(e: LabelError) -> (StatusCode, String) {
    let status = match e {
        LabelError::InvalidColorFormat(_)
        | LabelError::InvalidUpc(_)
        | LabelError::Symbology(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}

/// Respond with an artifact as a file download.
pub(super) fn download(artifact: ExportArtifact) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, artifact.mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", artifact.filename),
            ),
        ],
        artifact.content,
    )
}
