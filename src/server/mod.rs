//! # HTTP Server for Label Preview and Export
//!
//! Serves live SVG previews, export downloads and share links for labels
//! described by URL query parameters.
//!
//! ## Usage
//!
//! ```bash
//! lolev-label serve --listen 0.0.0.0:8080
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/api/label/preview?…&zoom&cx&cy` | SVG with guides |
//! | GET | `/api/label/export?…` | SVG download without guides |
//! | GET | `/api/label/share?…` | `{url, query, filename, title}` |
//! | GET | `/api/label/config?…` | decoded configuration |
//! | POST | `/api/label/encode` | `{query}` for a JSON configuration |
//! | GET | `/api/barcode?upc&color` | barcode download |
//! | GET | `/api/qr?variant&color` | QR code download |

mod handlers;
mod state;

pub use handlers::label::{EncodeResponse, ShareResponse};
pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::LabelError;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Label API
        .route("/api/label/preview", get(handlers::label::preview))
        .route("/api/label/export", get(handlers::label::export))
        .route("/api/label/share", get(handlers::label::share))
        .route("/api/label/config", get(handlers::label::config))
        .route("/api/label/encode", post(handlers::label::encode_config))
        // Symbol downloads
        .route("/api/barcode", get(handlers::symbols::barcode))
        .route("/api/qr", get(handlers::symbols::qr))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use lolev_label::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), lolev_label::LabelError> {
/// let config = ServerConfig {
///     listen_addr: "127.0.0.1:8080".to_string(),
///     ..Default::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), LabelError> {
    let app = router(Arc::new(AppState::new(config.clone())));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            LabelError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    info!(
        listen = %config.listen_addr,
        share_base_url = %config.share_base_url,
        qr_base_url = %config.qr_base_url,
        "label server listening"
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| LabelError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
