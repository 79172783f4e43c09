//! Application configuration with TOML file support.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the membership application.
///
/// Can be loaded from a TOML file via [`AppConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the ledger gateway.
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// How long a success notice stays visible, in milliseconds.
    #[serde(default = "default_success_hold_ms")]
    pub status_success_hold_ms: u64,

    /// How long an error notice stays visible, in milliseconds.
    #[serde(default = "default_error_hold_ms")]
    pub status_error_hold_ms: u64,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AppError::Config(format!("failed to read config file: {e}")))?;
        toml::from_str(&raw).map_err(|e| AppError::Config(format!("invalid config: {e}")))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gateway_url: default_gateway_url(),
            log_format: default_log_format(),
            log_level: default_log_level(),
            status_success_hold_ms: default_success_hold_ms(),
            status_error_hold_ms: default_error_hold_ms(),
        }
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_gateway_url() -> String {
    "http://127.0.0.1:7077".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_success_hold_ms() -> u64 {
    2_000
}

fn default_error_hold_ms() -> u64 {
    3_000
}
