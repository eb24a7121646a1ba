//! Request-scoped deadline.
//!
//! A [`RequestContext`] is created once per resolver invocation and passed by reference
//! through every downstream call that invocation makes. It carries the deadline and a
//! request id for log correlation.

use crate::error::DeadlineExceeded;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use ulid::Ulid;

#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: Ulid,
    deadline: Instant,
}

impl RequestContext {
    /// A context whose deadline is `budget` from now.
    pub fn with_timeout(budget: Duration) -> Self {
        Self {
            request_id: Ulid::new(),
            deadline: Instant::now() + budget,
        }
    }

    pub fn request_id(&self) -> Ulid {
        self.request_id
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Fails fast when the deadline has already passed.
    pub fn ensure_live(&self) -> Result<(), DeadlineExceeded> {
        if self.is_expired() {
            Err(DeadlineExceeded)
        } else {
            Ok(())
        }
    }

    /// Runs `fut` until it completes or the deadline passes. On expiry the future is
    /// dropped and its result discarded.
    pub async fn bound<F: Future>(&self, fut: F) -> Result<F::Output, DeadlineExceeded> {
        tokio::time::timeout_at(self.deadline, fut)
            .await
            .map_err(|_| DeadlineExceeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bound_returns_output_before_deadline() {
        let ctx = RequestContext::with_timeout(Duration::from_secs(1));
        let value = ctx.bound(async { 7 }).await.unwrap();
        assert_eq!(value, 7);
        assert!(ctx.ensure_live().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn bound_times_out_slow_futures() {
        let ctx = RequestContext::with_timeout(Duration::from_millis(50));
        let result = ctx
            .bound(tokio::time::sleep(Duration::from_secs(10)))
            .await;
        assert_eq!(result, Err(DeadlineExceeded));
        assert!(ctx.is_expired());
        assert_eq!(ctx.ensure_live(), Err(DeadlineExceeded));
        assert_eq!(ctx.remaining(), Duration::ZERO);
    }

    #[tokio::test]
    async fn each_context_gets_its_own_id() {
        let a = RequestContext::with_timeout(Duration::from_secs(1));
        let b = RequestContext::with_timeout(Duration::from_secs(1));
        assert_ne!(a.request_id(), b.request_id());
    }
}
