//! Credential handling subsystem.
//!
//! # Data Flow
//! ```text
//! OAuth callback redirect (?token=...)
//!     → redirect.rs (extract the bearer token)
//!     → store.rs (CredentialStore::set, persisted for file-backed stores)
//!
//! Every request:
//!     → CredentialStore::get → Authorization: Bearer <token>
//!
//! Logout or confirmed Unauthorized:
//!     → CredentialStore::clear
//! ```
//!
//! # Security Constraints
//! - Tokens are never logged; `AuthToken`'s Debug output is redacted
//! - The store is only cleared on logout or a confirmed Unauthorized outcome

pub mod redirect;
pub mod store;
pub mod token;

pub use redirect::{login_url, token_from_redirect};
pub use store::{CredentialError, CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use token::AuthToken;
