//! Data layer for the ES117 "World of Engineering" course site.
//!
//! Reads come from a remote JSON API when one is configured and reachable,
//! otherwise from bundled static snapshots, otherwise they come back empty.
//! Writes go to the API only and report whether the UI should confirm, ask
//! the user to sign in, or offer a retry.

pub mod auth;
pub mod client;
pub mod config;
pub mod loader;
pub mod models;
pub mod observability;
pub mod resilience;
pub mod session;
pub mod snapshot;

pub use client::{ApiClient, ApiRequest, FailureKind, FetchOutcome, Method};
pub use config::SiteConfig;
pub use loader::{DataLoader, Resource};
pub use session::{AuthStatus, Session, WriteOutcome};
pub use snapshot::SnapshotStore;

/// Build the session and loader described by a configuration.
pub fn build(config: &SiteConfig) -> DataLoader {
    let session = Session::from_config(config);
    DataLoader::new(session, SnapshotStore::new(&config.snapshots.root))
}
