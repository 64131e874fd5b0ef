//! Typed resources.
//!
//! Every payload the client reads or writes is deserialized into one of these
//! types at the boundary; a body that does not fit is a malformed payload, never
//! a partially-typed value.
//!
//! Field naming follows the producer: static snapshot resources (teams, updates,
//! quotes, photos) use camelCase, API resources use snake_case.

pub mod comment;
pub mod event;
pub mod photo;
pub mod poll;
pub mod quote;
pub mod shoutout;
pub mod team;
pub mod update;
pub mod user;

pub use comment::{Comment, NewComment, UpvoteCount};
pub use event::Countdown;
pub use photo::Photo;
pub use poll::{NewPoll, Poll, PollOption, VoteReceipt, VoteRequest};
pub use quote::{quote_of_the_day, Quote};
pub use shoutout::{NewShoutout, Shoutout};
pub use team::{RosterStats, Team, TeamFilter, TeamKind};
pub use update::{updates_for_team, Update};
pub use user::User;

use serde::Serialize;
use thiserror::Error;

/// Longest message accepted for shoutouts and comments.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Client-side validation failure for a write body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputError {
    #[error("message must not be empty")]
    EmptyMessage,

    #[error("message is {actual} characters, the limit is {max}")]
    MessageTooLong { max: usize, actual: usize },

    #[error("poll question must not be empty")]
    EmptyQuestion,

    #[error("poll needs at least 2 options, got {given}")]
    TooFewOptions { given: usize },

    #[error("option {option_id} is not part of poll {poll_id}")]
    UnknownOption { poll_id: i64, option_id: i64 },
}

/// Trim a user message and check it is 1..=500 characters.
pub(crate) fn validate_message(raw: &str) -> Result<String, InputError> {
    let message = raw.trim();
    let chars = message.chars().count();
    if chars == 0 {
        return Err(InputError::EmptyMessage);
    }
    if chars > MAX_MESSAGE_CHARS {
        return Err(InputError::MessageTooLong {
            max: MAX_MESSAGE_CHARS,
            actual: chars,
        });
    }
    Ok(message.to_string())
}
