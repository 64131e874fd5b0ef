//! Demo-day countdown.

use serde::Serialize;

/// Time remaining until an event, split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    /// Countdown from `now_unix` to `event_unix`; all zero once the event has started.
    pub fn until(event_unix: u64, now_unix: u64) -> Self {
        let remaining = event_unix.saturating_sub(now_unix);
        Self {
            days: remaining / 86_400,
            hours: remaining % 86_400 / 3_600,
            minutes: remaining % 3_600 / 60,
            seconds: remaining % 60,
        }
    }

    /// Whether the event has started.
    pub fn is_over(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_units() {
        let c = Countdown::until(1_000 + 2 * 86_400 + 3 * 3_600 + 4 * 60 + 5, 1_000);
        assert_eq!(c, Countdown { days: 2, hours: 3, minutes: 4, seconds: 5 });
        assert!(!c.is_over());
    }

    #[test]
    fn test_countdown_past_event() {
        assert!(Countdown::until(10, 500).is_over());
    }
}
