//! Bundled static snapshots.
//!
//! # Data Flow
//! ```text
//! snapshots.root/
//!     teams.json, quotes.json, shoutouts.json, polls.json, photos.json
//!     comments/<team>.json
//!     updates/week01.json, week02.json, ... (read until the first empty batch)
//!         → store.rs (read + deserialize into the resource type)
//! ```
//!
//! # Design Decisions
//! - Snapshots are read-only; they are produced outside this crate
//! - Errors are returned typed so the loader can log them before degrading

pub mod store;

pub use store::{SnapshotError, SnapshotStore, MAX_WEEKS};
