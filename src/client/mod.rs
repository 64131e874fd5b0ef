//! Resilient remote data client.
//!
//! # Data Flow
//! ```text
//! ApiRequest (endpoint, method, body?, auth_required, timeout?)
//!     → api.rs: base configured? ── no ──▶ Failure(NotConfigured)
//!     → attach Bearer credential + x-request-id
//!     → race(exchange, deadline) ── timer first ──▶ Failure(Timeout)
//!     → 401 ──▶ Unauthorized
//!     → other non-2xx ──▶ Failure(Status)
//!     → body parses as T? ── no ──▶ Failure(Malformed)
//!     → Success(T)
//! ```

pub mod api;
pub mod endpoints;
pub mod outcome;
pub mod request;

pub use api::ApiClient;
pub use outcome::{FailureKind, FetchOutcome};
pub use request::{ApiRequest, Method};
