//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to remote API:
//!     → timeouts.rs (race the exchange against a deadline)
//!     → On expiry: in-flight exchange dropped, caller sees a timeout
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every remote call has a deadline
//! - No automatic retries: a failure is reported once and the caller falls back

pub mod timeouts;

pub use timeouts::{race_deadline, Elapsed};
