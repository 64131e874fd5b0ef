//! Timeout enforcement.
//!
//! # Responsibilities
//! - Race a remote exchange against a timer
//! - Cancel the exchange when the timer fires (by dropping it)
//!
//! # Design Decisions
//! - The timer is polled first, so it wins when both are ready in the same wakeup
//! - Timeout errors are distinct from transport errors

use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// The deadline fired before the operation completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deadline of {limit:?} elapsed")]
pub struct Elapsed {
    pub limit: Duration,
}

/// Run `operation` until it completes or `limit` elapses, whichever is first.
///
/// Dropping the losing future is the only cancellation performed; the remote
/// side may still process a request that timed out here.
pub async fn race_deadline<F>(limit: Duration, operation: F) -> Result<F::Output, Elapsed>
where
    F: Future,
{
    tokio::select! {
        biased;
        _ = tokio::time::sleep(limit) => Err(Elapsed { limit }),
        output = operation => Ok(output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fast_operation_wins() {
        let result = race_deadline(Duration::from_secs(1), async { 7 }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_operation_times_out() {
        let result = race_deadline(Duration::from_millis(100), async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            7
        })
        .await;
        assert_eq!(result, Err(Elapsed { limit: Duration::from_millis(100) }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_wins_tie() {
        let limit = Duration::from_millis(250);
        let result = race_deadline(limit, async move {
            tokio::time::sleep(limit).await;
            "response"
        })
        .await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_operation_is_dropped_on_timeout() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();
        let result = race_deadline(Duration::from_millis(50), async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            flag.store(true, Ordering::SeqCst);
        })
        .await;

        assert!(result.is_err());
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(!finished.load(Ordering::SeqCst));
    }
}
