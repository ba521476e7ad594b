//! Client-side pacing of outbound requests.
//!
//! A token bucket with room for a single token, implemented as a GCRA: one
//! atomic holds the time (nanoseconds since the limiter was created) at which
//! the next token becomes available. Callers reserve a slot with a
//! compare-and-swap and then sleep until it starts.

use crate::request::error::RequestError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;

/// Tokens added per second when none is specified.
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;

#[derive(Debug)]
pub struct RateLimiter {
    origin: Instant,
    interval_nanos: u64,
    next_slot: AtomicU64,
}

/// A reserved slot that is handed back if it is dropped before being granted.
struct Reservation<'a> {
    limiter: &'a RateLimiter,
    slot: u64,
    granted: bool,
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        if !self.granted {
            self.limiter.release(self.slot);
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_REQUESTS_PER_SECOND)
    }
}

impl RateLimiter {
    /// Creates a limiter admitting `per_second` requests per second with a burst of one.
    /// A rate of zero is treated as one; the interval never drops below one nanosecond.
    pub fn new(per_second: u32) -> Self {
        let per_second = u64::from(per_second.max(1));
        Self {
            origin: Instant::now(),
            interval_nanos: (1_000_000_000 / per_second).max(1),
            next_slot: AtomicU64::new(0),
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_nanos(self.interval_nanos)
    }

    fn elapsed_nanos(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    fn reserve(&self) -> Reservation<'_> {
        let now = self.elapsed_nanos();
        let mut current = self.next_slot.load(Ordering::Acquire);
        loop {
            let slot = current.max(now);
            let next = slot.saturating_add(self.interval_nanos);
            match self
                .next_slot
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => {
                    return Reservation {
                        limiter: self,
                        slot,
                        granted: false,
                    }
                }
                Err(actual) => current = actual,
            }
        }
    }

    /// Gives an unused slot back, but only if nobody reserved after it.
    fn release(&self, slot: u64) {
        let _ = self.next_slot.compare_exchange(
            slot.saturating_add(self.interval_nanos),
            slot,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Waits for a token.
    ///
    /// Returns [`RequestError::RateLimitCancelled`] when `cancel` fires first.
    /// Dropping the returned future has the same effect on the bucket as a
    /// cancellation: the reserved slot is returned.
    pub async fn acquire(&self, cancel: Option<&CancellationToken>) -> Result<(), RequestError> {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return Err(RequestError::RateLimitCancelled);
        }

        let mut reservation = self.reserve();
        let ready_at = self.origin + Duration::from_nanos(reservation.slot);

        if ready_at > Instant::now() {
            match cancel {
                Some(token) => {
                    tokio::select! {
                        _ = token.cancelled() => return Err(RequestError::RateLimitCancelled),
                        _ = sleep_until(ready_at) => {}
                    }
                }
                None => sleep_until(ready_at).await,
            }
        }

        reservation.granted = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_first_request_is_immediate() -> Result<(), RequestError> {
        let limiter = RateLimiter::default();
        let start = Instant::now();
        limiter.acquire(None).await?;
        assert!(start.elapsed() < Duration::from_millis(20));
        Ok(())
    }

    #[tokio::test]
    async fn test_second_request_waits_one_interval() -> Result<(), RequestError> {
        let limiter = RateLimiter::default();
        assert_eq!(limiter.interval(), Duration::from_millis(100));

        limiter.acquire(None).await?;
        let start = Instant::now();
        limiter.acquire(None).await?;
        let waited = start.elapsed();
        assert!(waited >= Duration::from_millis(90), "waited {waited:?}");
        assert!(waited < Duration::from_millis(300), "waited {waited:?}");
        Ok(())
    }

    #[tokio::test]
    async fn test_sequential_requests_are_paced() -> Result<(), RequestError> {
        let limiter = RateLimiter::new(20);
        let start = Instant::now();
        for _ in 0..5 {
            limiter.acquire(None).await?;
        }
        // First token is free, the remaining four are 50ms apart.
        assert!(start.elapsed() >= Duration::from_millis(190));
        Ok(())
    }

    #[test]
    fn test_interval_is_never_zero() {
        assert_eq!(RateLimiter::new(0).interval(), Duration::from_secs(1));
        assert_eq!(RateLimiter::new(u32::MAX).interval(), Duration::from_nanos(1));
        assert_eq!(
            RateLimiter::new(2_000_000_000).interval(),
            Duration::from_nanos(1)
        );
    }

    #[tokio::test]
    async fn test_cancelled_token_fails_without_waiting() {
        let limiter = RateLimiter::default();
        let token = CancellationToken::new();
        token.cancel();
        assert!(matches!(
            limiter.acquire(Some(&token)).await,
            Err(RequestError::RateLimitCancelled)
        ));
    }

    #[tokio::test]
    async fn test_cancel_while_waiting_returns_slot() -> Result<(), RequestError> {
        let limiter = Arc::new(RateLimiter::default());
        limiter.acquire(None).await?;
        let start = Instant::now();

        let token = CancellationToken::new();
        let waiter = {
            let limiter = Arc::clone(&limiter);
            let token = token.clone();
            tokio::spawn(async move { limiter.acquire(Some(&token)).await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();

        let result = waiter.await.expect("waiter task panicked");
        assert!(matches!(result, Err(RequestError::RateLimitCancelled)));
        assert!(start.elapsed() < Duration::from_millis(90));

        // The cancelled slot was handed back, so the next caller only waits
        // for the remainder of the first interval.
        limiter.acquire(None).await?;
        assert!(start.elapsed() < Duration::from_millis(180));
        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_callers_are_all_admitted() -> Result<(), RequestError> {
        let limiter = Arc::new(RateLimiter::new(50));
        let start = Instant::now();
        let tasks: Vec<_> = (0..5)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                tokio::spawn(async move { limiter.acquire(None).await })
            })
            .collect();
        for task in tasks {
            task.await.expect("task panicked")?;
        }
        assert!(start.elapsed() >= Duration::from_millis(75));
        Ok(())
    }
}
