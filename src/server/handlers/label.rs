//! Label API handlers.
//!
//! Every GET endpoint reads the label from the same query parameters the share
//! link uses, so a link can be previewed, exported or inspected directly.

use axum::{
    Json,
    extract::{Query, RawQuery, State},
    http::header,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    codec::{decode, encode, export_filename, share_url},
    compose::compose,
    export::{ExportArtifact, SVG_MIME},
    label::LabelConfig,
    render::{Viewport, to_svg_with_viewport},
};

use super::super::state::AppState;
use super::download;

/// Zoom and pan parameters accepted next to the label parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub zoom: Option<f64>,
    pub cx: Option<f64>,
    pub cy: Option<f64>,
}

impl ViewQuery {
    fn viewport(&self) -> Viewport {
        let default = Viewport::default();
        Viewport::new(
            self.zoom.unwrap_or(default.zoom()),
            self.cx.unwrap_or(default.center_x()),
            self.cy.unwrap_or(default.center_y()),
        )
    }
}

/// Response for the share endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShareResponse {
    pub url: String,
    pub query: String,
    pub filename: String,
    pub title: String,
}

/// Response for the encode endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct EncodeResponse {
    pub query: String,
}

/// GET /api/label/preview - Live preview, guides included.
pub async fn preview(
    RawQuery(query): RawQuery,
    Query(view): Query<ViewQuery>,
) -> impl IntoResponse {
    let config = decode(query.as_deref().unwrap_or_default());
    let scene = compose(&config);
    let svg = to_svg_with_viewport(&scene, &view.viewport());
    ([(header::CONTENT_TYPE, SVG_MIME)], svg)
}

/// GET /api/label/export - Final artwork as a download.
pub async fn export(RawQuery(query): RawQuery) -> impl IntoResponse {
    let config = decode(query.as_deref().unwrap_or_default());
    download(ExportArtifact::label(&config))
}

/// GET /api/label/share - Canonical share link for the label.
pub async fn share(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Json<ShareResponse> {
    let config = decode(query.as_deref().unwrap_or_default());
    Json(ShareResponse {
        url: share_url(&state.config.share_base_url, &config),
        query: encode(&config),
        filename: export_filename(&config.name, &config.variant),
        title: config.title(),
    })
}

/// GET /api/label/config - The decoded configuration.
pub async fn config(RawQuery(query): RawQuery) -> Json<LabelConfig> {
    Json(decode(query.as_deref().unwrap_or_default()))
}

/// POST /api/label/encode - Query string for a configuration.
pub async fn encode_config(Json(config): Json<LabelConfig>) -> Json<EncodeResponse> {
    Json(EncodeResponse {
        query: encode(&config),
    })
}
