//! Team comments and upvotes.

use serde::{Deserialize, Serialize};

use super::{validate_message, InputError};

/// A comment left on a team page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub team_id: String,
    pub text: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Body for posting a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    text: String,
}

impl NewComment {
    /// Validate and trim a comment (1–500 characters).
    pub fn new(text: &str) -> Result<Self, InputError> {
        Ok(Self {
            text: validate_message(text)?,
        })
    }
}

/// Upvote tally for a team.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpvoteCount {
    #[serde(default)]
    pub team_id: String,
    pub count: u64,
    /// Whether the signed-in user has already upvoted.
    #[serde(default)]
    pub user_upvoted: bool,
}
