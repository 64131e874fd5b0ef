//! Signed-in session: credential policy, identity check and write actions.
//!
//! # Data Flow
//! ```text
//! read / write call
//!     → ApiClient::request
//!     → Unauthorized? ── yes ──▶ CredentialStore::clear (only erasure path besides logout)
//!     → outcome to caller
//!
//! identify():
//!     no credential      → SignedOut (no network)
//!     Success(user)      → SignedIn(user)
//!     Unauthorized       → credential erased, SignedOut
//!     Failure (timeout…) → Unverified, credential kept
//! ```

pub mod optimistic;
pub mod writes;

pub use optimistic::{OptimisticList, Ticket};
pub use writes::WriteOutcome;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::{token_from_redirect, AuthToken, CredentialError, CredentialStore, FileCredentialStore, MemoryCredentialStore};
use crate::client::{endpoints, ApiClient, ApiRequest, FetchOutcome};
use crate::config::SiteConfig;
use crate::models::User;
use crate::observability::metrics;

/// Result of checking who the stored credential belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "user", rename_all = "snake_case")]
pub enum AuthStatus {
    /// The server confirmed the credential.
    SignedIn(User),
    /// No credential, or the server rejected it.
    SignedOut,
    /// A credential is stored but could not be checked right now.
    Unverified,
}

/// A client bound to a credential store, enforcing the erasure policy.
#[derive(Debug, Clone)]
pub struct Session {
    client: ApiClient,
    identity_timeout: Duration,
}

impl Session {
    /// Create a session around an existing client.
    pub fn new(client: ApiClient, identity_timeout: Duration) -> Self {
        Self {
            client,
            identity_timeout,
        }
    }

    /// Build the credential store and client described by `config`.
    pub fn from_config(config: &SiteConfig) -> Self {
        let store: Arc<dyn CredentialStore> = match &config.credentials.path {
            Some(path) => Arc::new(FileCredentialStore::open(path)),
            None => Arc::new(MemoryCredentialStore::new()),
        };
        let client = ApiClient::new(&config.api, store);
        Self::new(client, config.api.identity_timeout())
    }

    /// The underlying client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn credentials(&self) -> &Arc<dyn CredentialStore> {
        self.client.credentials()
    }

    /// Whether a credential is currently stored.
    pub fn has_credential(&self) -> bool {
        self.credentials().get().is_some()
    }

    /// Store a credential issued by the OAuth callback.
    pub fn login(&self, token: AuthToken) -> Result<(), CredentialError> {
        self.credentials().set(token)
    }

    /// Store the token carried by an OAuth redirect URL. Returns `false` when
    /// the URL carries no token.
    pub fn login_from_redirect(&self, redirect: &str) -> Result<bool, CredentialError> {
        match token_from_redirect(redirect) {
            Some(token) => {
                self.login(token)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Erase the credential on explicit logout.
    pub fn logout(&self) -> Result<(), CredentialError> {
        self.credentials().clear()?;
        metrics::record_credential_cleared("logout");
        tracing::info!("Signed out");
        Ok(())
    }

    /// Perform a request; an `Unauthorized` outcome erases the stored credential.
    pub async fn fetch<T: DeserializeOwned>(&self, req: ApiRequest) -> FetchOutcome<T> {
        let outcome = self.client.request(req).await;
        if outcome.is_unauthorized() {
            self.erase_rejected_credential();
        }
        outcome
    }

    fn erase_rejected_credential(&self) {
        if !self.has_credential() {
            return;
        }
        match self.credentials().clear() {
            Ok(()) => {
                metrics::record_credential_cleared("unauthorized");
                tracing::info!("Credential rejected by server, signed out");
            }
            Err(e) => tracing::warn!(error = %e, "Failed to erase rejected credential"),
        }
    }

    /// Check the stored credential against the server.
    ///
    /// Uses the longer identity timeout. Only an `Unauthorized` answer signs the
    /// user out; a timeout or network error keeps the credential.
    pub async fn identify(&self) -> AuthStatus {
        if !self.has_credential() {
            return AuthStatus::SignedOut;
        }

        let req = ApiRequest::get(endpoints::IDENTITY)
            .require_auth()
            .with_timeout(self.identity_timeout);

        match self.fetch::<User>(req).await {
            FetchOutcome::Success(user) => AuthStatus::SignedIn(user),
            FetchOutcome::Unauthorized => AuthStatus::SignedOut,
            FetchOutcome::Failure(kind) => {
                tracing::info!(error = %kind, "Identity check inconclusive, keeping credential");
                AuthStatus::Unverified
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn offline_session(store: Arc<dyn CredentialStore>) -> Session {
        Session::new(ApiClient::new(&ApiConfig::default(), store), Duration::from_secs(1))
    }

    #[tokio::test]
    async fn test_identify_without_credential() {
        let session = offline_session(Arc::new(MemoryCredentialStore::new()));
        assert_eq!(session.identify().await, AuthStatus::SignedOut);
    }

    #[tokio::test]
    async fn test_identify_offline_keeps_credential() {
        let token = AuthToken::new("stored").unwrap();
        let session = offline_session(Arc::new(MemoryCredentialStore::with_token(token)));

        assert_eq!(session.identify().await, AuthStatus::Unverified);
        assert!(session.has_credential());
    }

    #[test]
    fn test_login_from_redirect() {
        let session = offline_session(Arc::new(MemoryCredentialStore::new()));
        assert!(!session.login_from_redirect("https://site.example.org/").unwrap());
        assert!(!session.has_credential());

        assert!(session.login_from_redirect("https://site.example.org/?token=abc").unwrap());
        assert!(session.has_credential());

        session.logout().unwrap();
        assert!(!session.has_credential());
    }

    #[test]
    fn test_auth_status_serialization() {
        let json = serde_json::to_value(AuthStatus::Unverified).unwrap();
        assert_eq!(json, serde_json::json!({"status": "unverified"}));
    }
}
