//! Three-way result of a remote call.

use std::time::Duration;
use thiserror::Error;

/// Why a remote call produced no usable answer.
///
/// None of these say anything about the credential's validity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("no remote API configured")]
    NotConfigured,

    #[error("invalid endpoint '{0}'")]
    InvalidEndpoint(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("failed to encode request body: {0}")]
    Encode(String),
}

/// Result of one remote call: worked, definitely not authorized, or could not determine.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Success(T),
    Unauthorized,
    Failure(FailureKind),
}

impl<T> FetchOutcome<T> {
    /// Whether the call succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    /// Whether the server rejected the credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FetchOutcome::Unauthorized)
    }

    /// The payload, if the call succeeded.
    pub fn success(self) -> Option<T> {
        match self {
            FetchOutcome::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Transform the payload, keeping the outcome class.
    pub fn map<U, F>(self, f: F) -> FetchOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            FetchOutcome::Success(value) => FetchOutcome::Success(f(value)),
            FetchOutcome::Unauthorized => FetchOutcome::Unauthorized,
            FetchOutcome::Failure(kind) => FetchOutcome::Failure(kind),
        }
    }

    /// Metric/log label for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            FetchOutcome::Success(_) => "success",
            FetchOutcome::Unauthorized => "unauthorized",
            FetchOutcome::Failure(FailureKind::Timeout(_)) => "timeout",
            FetchOutcome::Failure(FailureKind::NotConfigured) => "not_configured",
            FetchOutcome::Failure(_) => "failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_class() {
        let ok: FetchOutcome<u32> = FetchOutcome::Success(2);
        assert_eq!(ok.map(|v| v * 2), FetchOutcome::Success(4));

        let unauthorized: FetchOutcome<u32> = FetchOutcome::Unauthorized;
        assert!(unauthorized.map(|v| v * 2).is_unauthorized());

        let failed: FetchOutcome<u32> = FetchOutcome::Failure(FailureKind::Status(500));
        assert_eq!(failed.clone().label(), "failure");
        assert_eq!(failed.success(), None);
    }

    #[test]
    fn test_failure_display() {
        assert_eq!(FailureKind::Status(503).to_string(), "server responded with status 503");
        assert_eq!(
            FailureKind::Timeout(Duration::from_millis(200)).to_string(),
            "request timed out after 200ms"
        );
    }
}
