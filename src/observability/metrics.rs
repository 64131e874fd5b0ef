//! Metrics collection.
//!
//! # Metrics
//! - `site_client_requests_total` (counter): remote requests by outcome
//! - `site_client_request_duration_seconds` (histogram): remote request latency
//! - `site_loader_fallbacks_total` (counter): loads served by snapshot or empty default
//! - `site_credentials_cleared_total` (counter): credential erasures by reason
//!
//! # Design Decisions
//! - Uses the `metrics` facade; without an installed recorder these are no-ops

use std::time::Duration;

/// Record the outcome of one remote request.
pub fn record_request(outcome: &'static str, elapsed: Duration) {
    metrics::counter!("site_client_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("site_client_request_duration_seconds").record(elapsed.as_secs_f64());
}

/// Record that a load was served from a fallback source ("snapshot" or "empty").
pub fn record_fallback(source: &'static str) {
    metrics::counter!("site_loader_fallbacks_total", "source" => source).increment(1);
}

/// Record a credential erasure ("unauthorized" or "logout").
pub fn record_credential_cleared(reason: &'static str) {
    metrics::counter!("site_credentials_cleared_total", "reason" => reason).increment(1);
}
