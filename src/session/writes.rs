//! Write actions: shoutouts, polls, votes, comments, upvotes.
//!
//! A write's outcome is reported to the UI as one of four states. A timed-out
//! write is "outcome unknown" and is surfaced as a retry prompt; it is never
//! reported as committed.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::{endpoints, ApiRequest, FetchOutcome};
use crate::models::{Comment, InputError, NewComment, NewPoll, NewShoutout, Poll, Shoutout, UpvoteCount, VoteReceipt};
use crate::session::Session;

/// Notice shown when a write could not be confirmed.
pub const RETRY_NOTICE: &str = "Failed to post. Please try again.";

/// What the UI should do after a write.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", content = "detail", rename_all = "snake_case")]
pub enum WriteOutcome<T> {
    /// The server accepted the write.
    Committed(T),
    /// No credential, or the server rejected it; the credential is now erased.
    SignInRequired,
    /// Transient failure; show a non-blocking notice and let the user retry.
    RetryPrompt(String),
    /// The input failed validation and was never sent.
    Rejected(InputError),
}

impl<T> WriteOutcome<T> {
    /// Whether the server accepted the write.
    pub fn is_committed(&self) -> bool {
        matches!(self, WriteOutcome::Committed(_))
    }
}

impl<T> From<FetchOutcome<T>> for WriteOutcome<T> {
    fn from(outcome: FetchOutcome<T>) -> Self {
        match outcome {
            FetchOutcome::Success(value) => WriteOutcome::Committed(value),
            FetchOutcome::Unauthorized => WriteOutcome::SignInRequired,
            FetchOutcome::Failure(kind) => {
                tracing::warn!(error = %kind, "Write not confirmed");
                WriteOutcome::RetryPrompt(RETRY_NOTICE.to_string())
            }
        }
    }
}

impl Session {
    async fn write<B, T>(&self, endpoint: String, body: &B) -> WriteOutcome<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let req = match ApiRequest::post(endpoint).require_auth().with_json(body) {
            Ok(req) => req,
            Err(kind) => return FetchOutcome::<T>::Failure(kind).into(),
        };
        self.fetch(req).await.into()
    }

    /// Post a message to the shoutout wall.
    pub async fn post_shoutout(&self, message: &str) -> WriteOutcome<Shoutout> {
        match NewShoutout::new(message) {
            Ok(body) => self.write(endpoints::SHOUTOUTS.to_string(), &body).await,
            Err(e) => WriteOutcome::Rejected(e),
        }
    }

    /// Create a poll with at least two options.
    pub async fn create_poll(&self, question: &str, options: &[String]) -> WriteOutcome<Poll> {
        match NewPoll::new(question, options) {
            Ok(body) => self.write(endpoints::POLLS.to_string(), &body).await,
            Err(e) => WriteOutcome::Rejected(e),
        }
    }

    /// Vote for `option_id` in `poll`. Voting again changes the vote.
    pub async fn vote(&self, poll: &Poll, option_id: i64) -> WriteOutcome<VoteReceipt> {
        match poll.vote_request(option_id) {
            Ok(body) => self.write(endpoints::poll_vote(poll.id), &body).await,
            Err(e) => WriteOutcome::Rejected(e),
        }
    }

    /// Comment on a team page.
    pub async fn post_comment(&self, team_id: &str, text: &str) -> WriteOutcome<Comment> {
        match NewComment::new(text) {
            Ok(body) => self.write(endpoints::team_comments(team_id), &body).await,
            Err(e) => WriteOutcome::Rejected(e),
        }
    }

    /// Upvote a team; returns the new tally.
    pub async fn upvote(&self, team_id: &str) -> WriteOutcome<UpvoteCount> {
        self.write(endpoints::team_upvotes(team_id), &serde_json::json!({}))
            .await
    }
}
