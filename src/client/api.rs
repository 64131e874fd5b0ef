//! Remote API client.
//!
//! # Responsibilities
//! - Resolve endpoints against the configured base URL
//! - Attach the stored bearer credential and a request ID
//! - Bound every exchange with a deadline
//! - Classify the response into a `FetchOutcome`
//!
//! # Design Decisions
//! - Never returns `Err` and never panics; every failure mode is an outcome
//! - Reads the credential store once per request and never mutates it
//! - 401 is the only status that maps to `Unauthorized`

use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;
use uuid::Uuid;

use crate::auth::CredentialStore;
use crate::client::outcome::{FailureKind, FetchOutcome};
use crate::client::request::ApiRequest;
use crate::config::ApiConfig;
use crate::observability::metrics;
use crate::resilience::race_deadline;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Client for the remote JSON API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Option<Url>,
    credentials: Arc<dyn CredentialStore>,
    default_timeout: Duration,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// An unparsable base URL is logged and treated as "no remote configured".
    pub fn new(config: &ApiConfig, credentials: Arc<dyn CredentialStore>) -> Self {
        let base = config.base_url.as_deref().and_then(|raw| match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(base_url = %raw, error = %e, "Invalid API base URL, running static-only");
                None
            }
        });

        let mut builder = reqwest::Client::builder();
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default HTTP client");
            reqwest::Client::new()
        });

        Self {
            http,
            base,
            credentials,
            default_timeout: config.timeout(),
        }
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_http_client(
        http: reqwest::Client,
        base: Option<Url>,
        credentials: Arc<dyn CredentialStore>,
        default_timeout: Duration,
    ) -> Self {
        Self {
            http,
            base,
            credentials,
            default_timeout,
        }
    }

    /// The configured API base, if any.
    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    /// Whether a remote API is configured at all.
    pub fn is_configured(&self) -> bool {
        self.base.is_some()
    }

    /// The credential store this client reads from.
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Perform one request and deserialize a successful body into `T`.
    pub async fn request<T: DeserializeOwned>(&self, req: ApiRequest) -> FetchOutcome<T> {
        let started = Instant::now();
        let request_id = Uuid::new_v4();
        let outcome = self.dispatch(&req, request_id).await;

        let elapsed = started.elapsed();
        metrics::record_request(outcome.label(), elapsed);
        match &outcome {
            FetchOutcome::Success(_) => tracing::debug!(
                request_id = %request_id,
                method = %req.method,
                endpoint = %req.endpoint,
                elapsed_ms = elapsed.as_millis() as u64,
                "Request succeeded"
            ),
            FetchOutcome::Unauthorized => tracing::info!(
                request_id = %request_id,
                method = %req.method,
                endpoint = %req.endpoint,
                "Request unauthorized"
            ),
            FetchOutcome::Failure(FailureKind::NotConfigured) => tracing::trace!(
                endpoint = %req.endpoint,
                "No remote API configured"
            ),
            FetchOutcome::Failure(kind) => tracing::warn!(
                request_id = %request_id,
                method = %req.method,
                endpoint = %req.endpoint,
                elapsed_ms = elapsed.as_millis() as u64,
                error = %kind,
                "Request failed"
            ),
        }

        outcome
    }

    async fn dispatch<T: DeserializeOwned>(&self, req: &ApiRequest, request_id: Uuid) -> FetchOutcome<T> {
        let Some(base) = &self.base else {
            return FetchOutcome::Failure(FailureKind::NotConfigured);
        };

        let url = match endpoint_url(base, &req.endpoint) {
            Ok(url) => url,
            Err(e) => return FetchOutcome::Failure(FailureKind::InvalidEndpoint(format!("{}: {}", req.endpoint, e))),
        };

        let token = self.credentials.get();
        if token.is_none() && req.auth_required {
            return FetchOutcome::Unauthorized;
        }

        let mut builder = self
            .http
            .request(req.method.into(), url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(X_REQUEST_ID, request_id.to_string());
        if let Some(token) = &token {
            builder = builder.bearer_auth(token.expose());
        }
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }

        // Send and body read share one deadline
        let exchange = async move {
            let response = builder.send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, bytes))
        };

        let limit = req.timeout.unwrap_or(self.default_timeout);
        match race_deadline(limit, exchange).await {
            Err(_) => FetchOutcome::Failure(FailureKind::Timeout(limit)),
            Ok(Err(e)) => FetchOutcome::Failure(FailureKind::Network(e.to_string())),
            Ok(Ok((status, bytes))) => classify(status, &bytes),
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base.as_ref().map(Url::as_str))
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

/// Join `endpoint` onto `base`, keeping any path prefix the base carries.
pub fn endpoint_url(base: &Url, endpoint: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    ))
}

/// Map status and body to an outcome.
fn classify<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> FetchOutcome<T> {
    if status == StatusCode::UNAUTHORIZED {
        return FetchOutcome::Unauthorized;
    }
    if !status.is_success() {
        return FetchOutcome::Failure(FailureKind::Status(status.as_u16()));
    }

    let parsed = if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_slice(body)
    };

    match parsed {
        Ok(value) => FetchOutcome::Success(value),
        Err(e) => FetchOutcome::Failure(FailureKind::Malformed(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryCredentialStore;
    use serde_json::json;

    #[test]
    fn test_endpoint_url_keeps_prefix() {
        let base = Url::parse("https://api.example.org/es117/").unwrap();
        assert_eq!(
            endpoint_url(&base, "/api/polls").unwrap().as_str(),
            "https://api.example.org/es117/api/polls"
        );

        let bare = Url::parse("http://127.0.0.1:8000").unwrap();
        assert_eq!(
            endpoint_url(&bare, "api/polls/3/vote").unwrap().as_str(),
            "http://127.0.0.1:8000/api/polls/3/vote"
        );
    }

    #[test]
    fn test_classify() {
        let ok: FetchOutcome<Value> = classify(StatusCode::OK, br#"{"a": [1, 2]}"#);
        assert_eq!(ok, FetchOutcome::Success(json!({"a": [1, 2]})));

        let unauthorized: FetchOutcome<Value> = classify(StatusCode::UNAUTHORIZED, b"{}");
        assert_eq!(unauthorized, FetchOutcome::Unauthorized);

        let forbidden: FetchOutcome<Value> = classify(StatusCode::FORBIDDEN, b"");
        assert_eq!(forbidden, FetchOutcome::Failure(FailureKind::Status(403)));

        let malformed: FetchOutcome<Vec<u32>> = classify(StatusCode::OK, br#"{"not": "a list"}"#);
        assert!(matches!(malformed, FetchOutcome::Failure(FailureKind::Malformed(_))));
    }

    #[test]
    fn test_classify_empty_body() {
        let unit: FetchOutcome<()> = classify(StatusCode::NO_CONTENT, b"");
        assert_eq!(unit, FetchOutcome::Success(()));

        let list: FetchOutcome<Vec<u32>> = classify(StatusCode::OK, b"  ");
        assert!(matches!(list, FetchOutcome::Failure(FailureKind::Malformed(_))));
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_fast() {
        let client = ApiClient::new(&ApiConfig::default(), Arc::new(MemoryCredentialStore::new()));
        assert!(!client.is_configured());

        let started = Instant::now();
        let outcome: FetchOutcome<Value> = client.request(ApiRequest::get("/api/quotes")).await;
        assert_eq!(outcome, FetchOutcome::Failure(FailureKind::NotConfigured));
        assert!(started.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_auth_required_without_credential() {
        let config = ApiConfig {
            base_url: Some("http://127.0.0.1:9".into()),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config, Arc::new(MemoryCredentialStore::new()));

        let outcome: FetchOutcome<Value> = client
            .request(ApiRequest::post("/api/shoutouts").require_auth())
            .await;
        assert_eq!(outcome, FetchOutcome::Unauthorized);
    }

    #[test]
    fn test_invalid_base_is_static_only() {
        let config = ApiConfig {
            base_url: Some("not a url".into()),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config, Arc::new(MemoryCredentialStore::new()));
        assert!(!client.is_configured());
    }
}
