//! Barcode and QR download handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::export::ExportArtifact;

use super::super::state::AppState;
use super::{download, reject};

fn default_color() -> String {
    "#000000".to_string()
}

/// Query parameters for the barcode endpoint.
#[derive(Debug, Deserialize)]
pub struct BarcodeQuery {
    pub upc: String,
    #[serde(default = "default_color")]
    pub color: String,
}

/// Query parameters for the QR endpoint.
#[derive(Debug, Deserialize)]
pub struct QrQuery {
    pub variant: String,
    #[serde(default = "default_color")]
    pub color: String,
}

/// GET /api/barcode - UPC-A barcode download.
pub async fn barcode(
    Query(query): Query<BarcodeQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let artifact = ExportArtifact::barcode(&query.upc, &query.color).map_err(reject)?;
    Ok(download(artifact))
}

/// GET /api/qr - QR code download for a variant's page.
pub async fn qr(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QrQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let artifact = ExportArtifact::qr(&state.config.qr_base_url, &query.variant, &query.color)
        .map_err(reject)?;
    Ok(download(artifact))
}
