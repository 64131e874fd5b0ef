//! Quotes and the quote of the day.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_DAY: u64 = 86_400;

/// An inspirational quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
}

/// Whole days elapsed since the Unix epoch at `now`.
pub fn day_number(now: SystemTime) -> u64 {
    now.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs() / SECS_PER_DAY
}

/// Pick the quote for a given day; stable for the whole day, rotates daily.
pub fn quote_of_the_day(quotes: &[Quote], day: u64) -> Option<&Quote> {
    if quotes.is_empty() {
        return None;
    }
    let index = (day % quotes.len() as u64) as usize;
    quotes.get(index)
}
