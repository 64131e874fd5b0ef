//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0)
//! - Check the API base URL is an absolute http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::SiteConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("api.base_url '{url}' is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("api.base_url '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("snapshots.root must not be empty")]
    EmptySnapshotRoot,
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.api.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "api.timeout_ms" });
    }
    if config.api.identity_timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "api.identity_timeout_ms",
        });
    }

    if let Some(raw) = &config.api.base_url {
        match Url::parse(raw) {
            Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
                errors.push(ValidationError::UnsupportedScheme(raw.clone()));
            }
            Ok(_) => {}
            Err(e) => errors.push(ValidationError::InvalidBaseUrl {
                url: raw.clone(),
                reason: e.to_string(),
            }),
        }
    }

    if config.snapshots.root.as_os_str().is_empty() {
        errors.push(ValidationError::EmptySnapshotRoot);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
