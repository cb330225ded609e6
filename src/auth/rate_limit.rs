/**
 * Rate Limiter
 *
 * Bounds authentication-endpoint attempts per client address over a fixed
 * window: 100 requests per 15 minutes. Each key holds exactly one active
 * window, overwritten (not accumulated) when it expires, so memory stays
 * O(distinct keys).
 *
 * The per-key read-increment-compare runs under the table mutex, so two
 * concurrent requests from the same address cannot both slip past the cap.
 */

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Window length (15 minutes)
pub const WINDOW: Duration = Duration::from_secs(15 * 60);

/// Maximum requests per window per client address
pub const MAX_REQUESTS: u32 = 100;

/// Per-key request counter
#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    window_start: Instant,
}

/// Fixed-window rate limiter keyed by client address
///
/// Cheap to clone; all clones share the same window table.
#[derive(Clone)]
pub struct RateLimiter {
    windows: Arc<Mutex<HashMap<IpAddr, Window>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            windows: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Record a request from `key` and decide whether it is allowed
    ///
    /// Returns `true` if the request is within the cap for the current
    /// window. The first request after a window expires starts a fresh
    /// window and is always allowed.
    pub fn allow(&self, key: IpAddr) -> bool {
        self.allow_at(key, Instant::now())
    }

    fn allow_at(&self, key: IpAddr, now: Instant) -> bool {
        let mut windows = self.windows.lock().unwrap();

        match windows.get_mut(&key) {
            Some(window) if now.duration_since(window.window_start) < WINDOW => {
                window.count += 1;
                window.count <= MAX_REQUESTS
            }
            _ => {
                // No window, or the previous one expired: start fresh
                windows.insert(
                    key,
                    Window {
                        count: 1,
                        window_start: now,
                    },
                );
                true
            }
        }
    }

    /// Drop windows that expired before `now`
    ///
    /// Called periodically so addresses that stopped sending requests do
    /// not keep an entry around forever.
    pub fn evict_expired(&self) {
        self.evict_expired_at(Instant::now());
    }

    fn evict_expired_at(&self, now: Instant) {
        self.windows
            .lock()
            .unwrap()
            .retain(|_, window| now.duration_since(window.window_start) < WINDOW);
    }

    /// Number of tracked keys
    pub fn tracked_keys(&self) -> usize {
        self.windows.lock().unwrap().len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> IpAddr {
        "127.0.0.1".parse().unwrap()
    }

    #[test]
    fn test_allows_up_to_cap() {
        let limiter = RateLimiter::new();
        let now = Instant::now();

        for _ in 0..MAX_REQUESTS {
            assert!(limiter.allow_at(key(), now));
        }
    }

    #[test]
    fn test_rejects_over_cap() {
        let limiter = RateLimiter::new();
        let now = Instant::now();

        for _ in 0..MAX_REQUESTS {
            assert!(limiter.allow_at(key(), now));
        }
        assert!(!limiter.allow_at(key(), now));
    }

    #[test]
    fn test_fresh_window_after_expiry() {
        let limiter = RateLimiter::new();
        let start = Instant::now();

        // Exhaust the first window
        for _ in 0..=MAX_REQUESTS {
            limiter.allow_at(key(), start);
        }
        assert!(!limiter.allow_at(key(), start));

        // First request in the next window is accepted again
        let later = start + WINDOW;
        assert!(limiter.allow_at(key(), later));
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = RateLimiter::new();
        let now = Instant::now();
        let other: IpAddr = "10.0.0.2".parse().unwrap();

        for _ in 0..=MAX_REQUESTS {
            limiter.allow_at(key(), now);
        }
        assert!(!limiter.allow_at(key(), now));
        assert!(limiter.allow_at(other, now));
    }

    #[test]
    fn test_expired_window_is_overwritten_not_accumulated() {
        let limiter = RateLimiter::new();
        let start = Instant::now();

        limiter.allow_at(key(), start);
        limiter.allow_at(key(), start + WINDOW);
        assert_eq!(limiter.tracked_keys(), 1);
    }

    #[test]
    fn test_evict_expired() {
        let limiter = RateLimiter::new();
        let start = Instant::now();
        limiter.allow_at(key(), start);
        assert_eq!(limiter.tracked_keys(), 1);

        // Still live just before expiry
        limiter.evict_expired_at(start + WINDOW - Duration::from_secs(1));
        assert_eq!(limiter.tracked_keys(), 1);

        limiter.evict_expired_at(start + WINDOW);
        assert_eq!(limiter.tracked_keys(), 0);
    }
}
