//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client / loader / session produce:
//!     → logging.rs (subscriber setup for structured log events)
//!     → metrics.rs (request outcomes, latency, fallbacks, credential erasure)
//!
//! Consumers:
//!     → stderr (fmt layer, filtered by EnvFilter)
//!     → any `metrics` recorder installed by the embedding application
//! ```
//!
//! # Design Decisions
//! - Library code only emits; installing subscribers/recorders is the binary's job
//! - Every remote request carries an `x-request-id` that also appears in its logs

pub mod logging;
pub mod metrics;
