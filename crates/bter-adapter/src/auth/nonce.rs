/*
[INPUT]:  System clock or caller-supplied generator
[OUTPUT]: Nonce values for signed private requests
[POS]:    Auth layer - replay protection token source
[UPDATE]: When adding nonce strategies
*/

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Source of nonce values for private API requests.
///
/// Called exactly once per private request, right before the payload is
/// encoded. Uniqueness is the provider's responsibility.
pub trait NonceProvider: Send + Sync {
    fn next_nonce(&self) -> u64;
}

impl<F> NonceProvider for F
where
    F: Fn() -> u64 + Send + Sync,
{
    fn next_nonce(&self) -> u64 {
        self()
    }
}

/// Current Unix time in whole seconds, truncated.
///
/// Truncation means the value can be one lower than a rounded
/// `ms / 1000` clock for the second half of each second. Two calls within the
/// same second yield the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixTimeNonce;

impl NonceProvider for UnixTimeNonce {
    fn next_nonce(&self) -> u64 {
        Utc::now().timestamp().max(0) as u64
    }
}

/// Strictly increasing counter, safe to share between tasks
pub struct CounterNonce {
    next: AtomicU64,
}

impl CounterNonce {
    /// Start counting from `start`
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// Start from the current Unix time in milliseconds
    pub fn from_clock() -> Self {
        Self::starting_at(Utc::now().timestamp_millis().max(0) as u64)
    }
}

impl Default for CounterNonce {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl NonceProvider for CounterNonce {
    fn next_nonce(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl fmt::Debug for CounterNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterNonce")
            .field("next", &self.next.load(Ordering::Relaxed))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_unix_time_nonce_is_seconds() {
        let before = Utc::now().timestamp() as u64;
        let nonce = UnixTimeNonce.next_nonce();
        let after = Utc::now().timestamp() as u64;

        assert!(nonce >= before && nonce <= after);
    }

    #[test]
    fn test_unix_time_nonce_truncates_milliseconds() {
        let before_ms = Utc::now().timestamp_millis() as u64;
        let nonce = UnixTimeNonce.next_nonce();
        let after_ms = Utc::now().timestamp_millis() as u64;

        // A rounded value could reach after_ms / 1000 + 1
        assert!(nonce >= before_ms / 1000);
        assert!(nonce <= after_ms / 1000);
    }

    #[test]
    fn test_unix_time_nonce_repeats_within_a_second() {
        // Retry a few times in case the clock ticks over between calls.
        let repeated = (0..5).any(|_| UnixTimeNonce.next_nonce() == UnixTimeNonce.next_nonce());
        assert!(repeated);
    }

    #[test]
    fn test_counter_nonce_increments() {
        let counter = CounterNonce::starting_at(10);
        assert_eq!(counter.next_nonce(), 10);
        assert_eq!(counter.next_nonce(), 11);
        assert_eq!(counter.next_nonce(), 12);
    }

    #[test]
    fn test_counter_nonce_unique_across_threads() {
        let counter = Arc::new(CounterNonce::starting_at(0));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counter = Arc::clone(&counter);
                std::thread::spawn(move || {
                    (0..100).map(|_| counter.next_nonce()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 400);
    }

    #[test]
    fn test_closure_is_provider() {
        let provider: Box<dyn NonceProvider> = Box::new(|| 42u64);
        assert_eq!(provider.next_nonce(), 42);
    }
}
