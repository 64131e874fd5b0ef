//! Credential storage.
//!
//! # Responsibilities
//! - Hold the current bearer token behind an injectable `get/set/clear` capability
//! - Persist it across runs (file-backed store)
//!
//! # Design Decisions
//! - Reads are lock-free (`ArcSwapOption`); a request reads the slot exactly once
//! - The file store keeps the slot as the source of truth and mirrors it to disk
//! - An unreadable token file is treated as "signed out", not as a fatal error
//! - A token file that could not be removed is retried on the next `get`, so a
//!   rejected token never comes back on the next run

use arc_swap::ArcSwapOption;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::auth::token::AuthToken;

/// Errors from persisting credentials.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode credential: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Capability for reading and mutating the stored credential.
pub trait CredentialStore: Send + Sync {
    /// Current credential, if any.
    fn get(&self) -> Option<AuthToken>;

    /// Replace the stored credential.
    fn set(&self, token: AuthToken) -> Result<(), CredentialError>;

    /// Erase the stored credential. Clearing an empty store is a no-op.
    fn clear(&self) -> Result<(), CredentialError>;
}

/// Process-local credential store.
#[derive(Default)]
pub struct MemoryCredentialStore {
    slot: ArcSwapOption<AuthToken>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `token`.
    pub fn with_token(token: AuthToken) -> Self {
        Self {
            slot: ArcSwapOption::from_pointee(token),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<AuthToken> {
        self.slot.load_full().map(|t| (*t).clone())
    }

    fn set(&self, token: AuthToken) -> Result<(), CredentialError> {
        self.slot.store(Some(Arc::new(token)));
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        self.slot.store(None);
        Ok(())
    }
}

/// On-disk representation of the stored credential.
#[derive(Debug, Serialize, Deserialize)]
struct StoredCredential {
    token: AuthToken,
    /// When the token was stored (seconds since epoch).
    stored_at: u64,
}

/// Durable credential store backed by a small JSON file.
pub struct FileCredentialStore {
    path: PathBuf,
    slot: ArcSwapOption<AuthToken>,
    removal_pending: AtomicBool,
}

impl FileCredentialStore {
    /// Open the store at `path`, loading an existing token if the file holds one.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let loaded = match read_token_file(&path) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring unreadable credential file"
                );
                None
            }
        };

        if loaded.is_some() {
            tracing::debug!(path = %path.display(), "Loaded stored credential");
        }

        Self {
            path,
            slot: ArcSwapOption::new(loaded.map(Arc::new)),
            removal_pending: AtomicBool::new(false),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> CredentialError {
        CredentialError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn remove_file(&self) -> Result<(), CredentialError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "Credential removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn persist(&self, token: &AuthToken) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let stored = StoredCredential {
            token: token.clone(),
            stored_at: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
        };
        let bytes = serde_json::to_vec_pretty(&stored)?;

        // Atomic replace
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

fn read_token_file(path: &Path) -> io::Result<Option<AuthToken>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let stored: StoredCredential = serde_json::from_slice(&bytes)?;
    Ok(AuthToken::new(stored.token.expose()))
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<AuthToken> {
        if self.removal_pending.load(Ordering::Acquire) {
            match self.remove_file() {
                Ok(()) => self.removal_pending.store(false, Ordering::Release),
                Err(e) => tracing::warn!(error = %e, "Credential file still present"),
            }
        }
        self.slot.load_full().map(|t| (*t).clone())
    }

    fn set(&self, token: AuthToken) -> Result<(), CredentialError> {
        self.persist(&token)?;
        self.removal_pending.store(false, Ordering::Release);
        self.slot.store(Some(Arc::new(token)));
        tracing::info!(path = %self.path.display(), "Credential stored");
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        let removed = self.remove_file();
        self.removal_pending.store(removed.is_err(), Ordering::Release);
        self.slot.store(None);
        removed
    }
}
