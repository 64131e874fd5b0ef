//! Polls and voting.

use serde::{Deserialize, Serialize};

use super::InputError;

/// One choice in a poll, with its running vote count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub votes: u64,
}

/// A poll as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub id: i64,
    pub question: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub options: Vec<PollOption>,
    /// Option the signed-in user voted for, if any.
    #[serde(default)]
    pub user_voted_option: Option<i64>,
    #[serde(default)]
    pub created_at: String,
}

fn default_active() -> bool {
    true
}

impl Poll {
    /// Total votes across all options.
    pub fn total_votes(&self) -> u64 {
        self.options.iter().map(|o| o.votes).sum()
    }

    /// Whether `option_id` belongs to this poll.
    pub fn has_option(&self, option_id: i64) -> bool {
        self.options.iter().any(|o| o.id == option_id)
    }

    /// Build a vote for `option_id`, refusing options from other polls.
    pub fn vote_request(&self, option_id: i64) -> Result<VoteRequest, InputError> {
        if self.has_option(option_id) {
            Ok(VoteRequest { option_id })
        } else {
            Err(InputError::UnknownOption {
                poll_id: self.id,
                option_id,
            })
        }
    }

    /// Share of the vote for an option, in percent (0 when nobody voted).
    pub fn percentage(&self, option_id: i64) -> f64 {
        let total = self.total_votes();
        match self.options.iter().find(|o| o.id == option_id) {
            Some(option) if total > 0 => option.votes as f64 * 100.0 / total as f64,
            _ => 0.0,
        }
    }
}

/// Body for casting a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {
    pub option_id: i64,
}

/// Acknowledgement returned after voting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub status: String,
    pub voted: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct NewPollOption {
    text: String,
}

/// Body for creating a poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPoll {
    question: String,
    options: Vec<NewPollOption>,
}

impl NewPoll {
    /// Validate a poll: non-empty question and at least two non-blank options.
    pub fn new<I, S>(question: &str, options: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let question = question.trim();
        if question.is_empty() {
            return Err(InputError::EmptyQuestion);
        }

        let options: Vec<NewPollOption> = options
            .into_iter()
            .map(|o| o.as_ref().trim().to_string())
            .filter(|o| !o.is_empty())
            .map(|text| NewPollOption { text })
            .collect();
        if options.len() < 2 {
            return Err(InputError::TooFewOptions { given: options.len() });
        }

        Ok(Self {
            question: question.to_string(),
            options,
        })
    }
}
