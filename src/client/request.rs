//! Request description.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use crate::client::outcome::FailureKind;

/// HTTP method of a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Uppercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One logical read or write against the remote API.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Path relative to the API base, e.g. "/api/shoutouts".
    pub endpoint: String,
    pub method: Method,
    pub body: Option<Value>,
    /// When set and no credential is stored, the call is not attempted.
    pub auth_required: bool,
    /// Per-call deadline; `None` uses the client default.
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    /// Create a request with no body, optional auth and the default timeout.
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            body: None,
            auth_required: false,
            timeout: None,
        }
    }

    /// GET request.
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Get, endpoint)
    }

    /// POST request.
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Post, endpoint)
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize and attach a JSON body.
    pub fn with_json<B: Serialize>(self, body: &B) -> Result<Self, FailureKind> {
        let value = serde_json::to_value(body).map_err(|e| FailureKind::Encode(e.to_string()))?;
        Ok(self.with_body(value))
    }

    /// Require a stored credential.
    pub fn require_auth(mut self) -> Self {
        self.auth_required = true;
        self
    }

    /// Override the client's default timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
