//! Server state and configuration.

use crate::metrics::{QR_BASE_URL, SHARE_BASE_URL};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Page that share links point at
    pub share_base_url: String,
    /// Prefix of the beer pages QR codes link to
    pub qr_base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            share_base_url: SHARE_BASE_URL.to_string(),
            qr_base_url: QR_BASE_URL.to_string(),
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}
