//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration for the site data client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Remote API settings.
    pub api: ApiConfig,

    /// Bundled static snapshot settings.
    pub snapshots: SnapshotConfig,

    /// Where the bearer credential is persisted.
    pub credentials: CredentialConfig,

    /// Demo event shown in the countdown.
    pub event: EventConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Remote API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the remote API (e.g., "https://es117.example.org").
    /// When unset the site runs from static snapshots only.
    pub base_url: Option<String>,

    /// Default per-request timeout in milliseconds.
    pub timeout_ms: u64,

    /// Timeout for the identity check after login, in milliseconds.
    pub identity_timeout_ms: u64,

    /// Honor HTTP(S)_PROXY environment variables.
    pub use_system_proxy: bool,
}

impl ApiConfig {
    /// Default request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Identity check timeout as a `Duration`.
    pub fn identity_timeout(&self) -> Duration {
        Duration::from_millis(self.identity_timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: 3_000,
            identity_timeout_ms: 8_000,
            use_system_proxy: true,
        }
    }
}

/// Static snapshot configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Directory holding `teams.json`, `quotes.json`, `updates/weekNN.json`, ...
    pub root: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("data"),
        }
    }
}

/// Credential persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CredentialConfig {
    /// Token file path. `None` keeps the credential in memory only.
    pub path: Option<PathBuf>,
}

/// Demo event configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EventConfig {
    /// Display name of the event.
    pub name: String,

    /// Event start (seconds since epoch).
    pub demo_day_unix: Option<u64>,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            name: "Demo Day".to_string(),
            demo_day_unix: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
