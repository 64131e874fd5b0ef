//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (COURSE_SITE_*)
//!     → validation.rs (semantic checks)
//!     → SiteConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - An unset `api.base_url` means static-snapshot-only mode
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{resolve_config, ConfigError};
pub use schema::{ApiConfig, CredentialConfig, EventConfig, ObservabilityConfig, SiteConfig, SnapshotConfig};
pub use validation::ValidationError;
