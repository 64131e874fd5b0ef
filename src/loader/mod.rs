//! Fallback composition for every data-loading call site.
//!
//! # Data Flow
//! ```text
//! load(resource)
//!     → Session::fetch(GET endpoint) ── Success ──▶ payload
//!     → otherwise: SnapshotStore::load(snapshot) ── Ok ──▶ snapshot payload
//!     → otherwise: T::default() (empty collection)
//! ```
//!
//! # Design Decisions
//! - Loads never fail; the worst case is an empty section
//! - No caching: each call re-fetches

pub mod resource;

pub use resource::Resource;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::SystemTime;

use crate::client::{ApiRequest, FetchOutcome};
use crate::models::{
    quote::day_number, quote_of_the_day, updates_for_team, Comment, Photo, Poll, Quote, RosterStats, Shoutout, Team,
    Update, UpvoteCount,
};
use crate::observability::metrics;
use crate::session::Session;
use crate::snapshot::{SnapshotError, SnapshotStore};

/// Everything the home page shows, loaded concurrently.
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub stats: RosterStats,
    pub teams: Vec<Team>,
    pub quote_of_the_day: Option<Quote>,
    pub polls: Vec<Poll>,
}

/// A team with its weekly updates, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct TeamDetail {
    pub team: Team,
    pub updates: Vec<Update>,
}

/// Loads resources remote-first with snapshot and empty fallbacks.
#[derive(Debug, Clone)]
pub struct DataLoader {
    session: Session,
    snapshots: SnapshotStore,
}

impl DataLoader {
    /// Create a loader.
    pub fn new(session: Session, snapshots: SnapshotStore) -> Self {
        Self { session, snapshots }
    }

    /// The session used for remote calls.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Try the remote API only.
    async fn remote<T: DeserializeOwned>(&self, resource: &Resource) -> Option<T> {
        match self.session.fetch(ApiRequest::get(resource.endpoint())).await {
            FetchOutcome::Success(value) => Some(value),
            other => {
                tracing::debug!(resource = %resource, outcome = other.label(), "Remote load fell through");
                None
            }
        }
    }

    /// Load a resource, falling back to its snapshot and then to an empty value.
    pub async fn load<T>(&self, resource: &Resource) -> T
    where
        T: DeserializeOwned + Default,
    {
        if let Some(value) = self.remote(resource).await {
            return value;
        }

        if let Some(name) = resource.snapshot() {
            match self.snapshots.load::<T>(&name).await {
                Ok(value) => {
                    metrics::record_fallback("snapshot");
                    return value;
                }
                Err(e @ SnapshotError::Missing { .. }) => {
                    tracing::debug!(resource = %resource, error = %e, "No snapshot");
                }
                Err(e) => {
                    tracing::warn!(resource = %resource, error = %e, "Unusable snapshot");
                }
            }
        }

        metrics::record_fallback("empty");
        T::default()
    }

    /// Team roster.
    pub async fn teams(&self) -> Vec<Team> {
        self.load(&Resource::Teams).await
    }

    /// A single team by id.
    pub async fn team(&self, team_id: &str) -> Option<Team> {
        self.teams().await.into_iter().find(|t| t.id == team_id)
    }

    /// All weekly updates: remote list, else the weekly snapshot batches.
    pub async fn updates(&self) -> Vec<Update> {
        if let Some(updates) = self.remote(&Resource::Updates).await {
            return updates;
        }
        let updates = self.snapshots.load_weekly_updates().await;
        metrics::record_fallback(if updates.is_empty() { "empty" } else { "snapshot" });
        updates
    }

    /// A team and its updates, or `None` when the team is unknown.
    pub async fn team_detail(&self, team_id: &str) -> Option<TeamDetail> {
        let (team, updates) = tokio::join!(self.team(team_id), self.updates());
        let team = team?;
        let updates = updates_for_team(&updates, &team.id).into_iter().cloned().collect();
        Some(TeamDetail { team, updates })
    }

    /// Quotes.
    pub async fn quotes(&self) -> Vec<Quote> {
        self.load(&Resource::Quotes).await
    }

    /// Today's quote.
    pub async fn quote_of_the_day(&self, now: SystemTime) -> Option<Quote> {
        let quotes = self.quotes().await;
        quote_of_the_day(&quotes, day_number(now)).cloned()
    }

    /// Shoutout wall.
    pub async fn shoutouts(&self) -> Vec<Shoutout> {
        self.load(&Resource::Shoutouts).await
    }

    /// Active polls.
    pub async fn polls(&self) -> Vec<Poll> {
        self.load(&Resource::Polls).await
    }

    /// Photo gallery.
    pub async fn photos(&self) -> Vec<Photo> {
        self.load(&Resource::Photos).await
    }

    /// Comments on a team page.
    pub async fn comments(&self, team_id: &str) -> Vec<Comment> {
        self.load(&Resource::Comments {
            team_id: team_id.to_string(),
        })
        .await
    }

    /// Upvote tally for a team (zero when unavailable).
    pub async fn upvotes(&self, team_id: &str) -> UpvoteCount {
        let mut count: UpvoteCount = self
            .load(&Resource::Upvotes {
                team_id: team_id.to_string(),
            })
            .await;
        if count.team_id.is_empty() {
            count.team_id = team_id.to_string();
        }
        count
    }

    /// Home page data: roster, stats, quote of the day and polls in parallel.
    pub async fn home(&self, now: SystemTime) -> HomePage {
        let (teams, quote, polls) = tokio::join!(self.teams(), self.quote_of_the_day(now), self.polls());
        HomePage {
            stats: RosterStats::from_teams(&teams),
            teams,
            quote_of_the_day: quote,
            polls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryCredentialStore;
    use crate::client::ApiClient;
    use crate::config::ApiConfig;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn static_loader(root: &std::path::Path) -> DataLoader {
        let client = ApiClient::new(&ApiConfig::default(), Arc::new(MemoryCredentialStore::new()));
        DataLoader::new(Session::new(client, Duration::from_secs(1)), SnapshotStore::new(root))
    }

    fn write(root: &std::path::Path, name: &str, value: serde_json::Value) {
        let path = root.join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, serde_json::to_vec(&value).unwrap()).unwrap();
    }

    #[tokio::test]
    async fn test_static_only_mode_reads_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "teams.json",
            json!([
                {"id": "team01", "name": "Rover", "type": "hardware", "memberCount": 25},
                {"id": "team02", "name": "Planner", "type": "software", "memberCount": 10}
            ]),
        );
        write(dir.path(), "updates/week01.json", json!([{"teamId": "team01", "week": 1}]));
        write(dir.path(), "updates/week02.json", json!([{"teamId": "team01", "week": 2}]));

        let loader = static_loader(dir.path());
        let home = loader.home(SystemTime::now()).await;
        assert_eq!(home.stats.teams, 2);
        assert_eq!(home.stats.students, 35);
        assert!(home.quote_of_the_day.is_none());
        assert!(home.polls.is_empty());

        let detail = loader.team_detail("team01").await.unwrap();
        assert_eq!(detail.updates.iter().map(|u| u.week).collect::<Vec<_>>(), vec![2, 1]);
        assert!(loader.team_detail("team99").await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_snapshot_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shoutouts.json"), b"{\"oops\": ").unwrap();

        let loader = static_loader(dir.path());
        assert!(loader.shoutouts().await.is_empty());
        assert!(loader.photos().await.is_empty());
    }

    #[tokio::test]
    async fn test_upvotes_default_names_team() {
        let dir = tempfile::tempdir().unwrap();
        let count = static_loader(dir.path()).upvotes("team07").await;
        assert_eq!(count.team_id, "team07");
        assert_eq!(count.count, 0);
    }
}
