//! Shared utilities for integration testing.

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use url::Url;

use course_site::auth::{AuthToken, CredentialStore, MemoryCredentialStore};
use course_site::{ApiClient, Session};

/// A request as seen by the mock API.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// What the mock API answers with.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Responder = Arc<dyn Fn(&Recorded) -> Reply + Send + Sync>;

#[derive(Clone)]
struct MockState {
    responder: Responder,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// A programmable HTTP API on an ephemeral local port.
pub struct MockApi {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockApi {
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).unwrap()
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Start a mock API whose answers come from `responder`.
pub async fn start_mock_api<F>(responder: F) -> MockApi
where
    F: Fn(&Recorded) -> Reply + Send + Sync + 'static,
{
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        responder: Arc::new(responder),
        requests: requests.clone(),
    };
    let app = Router::new().fallback(handle).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi { addr, requests }
}

async fn handle(State(state): State<MockState>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let recorded = Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    let reply = (state.responder)(&recorded);
    state.requests.lock().unwrap().push(recorded);

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    (
        StatusCode::from_u16(reply.status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response()
}

/// A base URL nothing listens on.
pub fn unreachable_base() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}", addr)).unwrap()
}

pub fn memory_store(token: Option<&str>) -> Arc<dyn CredentialStore> {
    match token {
        Some(raw) => Arc::new(MemoryCredentialStore::with_token(AuthToken::new(raw).unwrap())),
        None => Arc::new(MemoryCredentialStore::new()),
    }
}

/// A client against `base` that never goes through a system proxy.
pub fn client(base: Option<Url>, store: Arc<dyn CredentialStore>, timeout: Duration) -> ApiClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    ApiClient::with_http_client(http, base, store, timeout)
}

/// A session whose identity check uses the same deadline as every other call.
pub fn session(base: Option<Url>, store: Arc<dyn CredentialStore>, timeout: Duration) -> Session {
    session_with_identity_timeout(base, store, timeout, timeout)
}

pub fn session_with_identity_timeout(
    base: Option<Url>,
    store: Arc<dyn CredentialStore>,
    timeout: Duration,
    identity_timeout: Duration,
) -> Session {
    Session::new(client(base, store, timeout), identity_timeout)
}
