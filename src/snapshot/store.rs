//! Snapshot file access.

use serde::de::DeserializeOwned;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Update;

/// Upper bound on weekly batches read in one pass.
pub const MAX_WEEKS: u32 = 20;

/// Errors reading a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot {path} not found")]
    Missing { path: PathBuf },

    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed snapshot {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("snapshot name '{0}' escapes the snapshot root")]
    InvalidName(String),
}

/// Read-only view of the snapshot directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a relative snapshot name, refusing absolute paths and `..`.
    fn resolve(&self, name: &str) -> Result<PathBuf, SnapshotError> {
        let relative = Path::new(name);
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|c| !matches!(c, std::path::Component::Normal(_)));
        if name.is_empty() || escapes {
            return Err(SnapshotError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(relative))
    }

    /// Read and deserialize one snapshot, e.g. `load("quotes.json")`.
    pub async fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, SnapshotError> {
        let path = self.resolve(name)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SnapshotError::Missing { path });
            }
            Err(source) => return Err(SnapshotError::Io { path, source }),
        };

        serde_json::from_slice(&bytes).map_err(|source| SnapshotError::Malformed { path, source })
    }

    /// Snapshot name of a weekly batch: `updates/week01.json`.
    pub fn week_name(week: u32) -> String {
        format!("updates/week{:02}.json", week)
    }

    /// Read weekly batches from week 1 until the first empty or missing one.
    ///
    /// A malformed batch also ends the scan; earlier batches are kept.
    pub async fn load_weekly_updates(&self) -> Vec<Update> {
        let mut updates = Vec::new();
        for week in 1..=MAX_WEEKS {
            match self.load::<Vec<Update>>(&Self::week_name(week)).await {
                Ok(batch) if batch.is_empty() => break,
                Ok(batch) => updates.extend(batch),
                Err(SnapshotError::Missing { .. }) => break,
                Err(e) => {
                    tracing::warn!(week, error = %e, "Stopping weekly update scan");
                    break;
                }
            }
        }
        updates
    }
}
