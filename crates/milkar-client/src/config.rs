//! Client configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the app can start with zero
//! configuration.

use std::path::PathBuf;

use milkar_shared::constants::{DEFAULT_EXPIRY_HOURS, DEFAULT_QR_ENDPOINT, DEFAULT_SHARE_ENDPOINT};

/// Client configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory for the local database.
    /// Env: `MILKAR_DATA_DIR`
    /// Default: the platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Base URL of the QR image endpoint.
    /// Env: `MILKAR_QR_ENDPOINT`
    pub qr_endpoint: String,

    /// Base URL of the messaging share target.
    /// Env: `MILKAR_SHARE_ENDPOINT`
    pub share_endpoint: String,

    /// Hours after creation at which a live event goes stale and the
    /// sweep archives it.
    /// Env: `MILKAR_EXPIRY_HOURS`
    /// Default: `48`
    pub expiry_hours: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            qr_endpoint: DEFAULT_QR_ENDPOINT.to_string(),
            share_endpoint: DEFAULT_SHARE_ENDPOINT.to_string(),
            expiry_hours: DEFAULT_EXPIRY_HOURS,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("MILKAR_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Ok(url) = std::env::var("MILKAR_QR_ENDPOINT") {
            config.qr_endpoint = url;
        }

        if let Ok(url) = std::env::var("MILKAR_SHARE_ENDPOINT") {
            config.share_endpoint = url;
        }

        if let Ok(val) = std::env::var("MILKAR_EXPIRY_HOURS") {
            match val.parse::<i64>() {
                Ok(hours) if hours > 0 => config.expiry_hours = hours,
                _ => {
                    tracing::warn!(
                        value = %val,
                        "Invalid MILKAR_EXPIRY_HOURS, using default"
                    );
                }
            }
        }

        config
    }
}
