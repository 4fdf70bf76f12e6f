use std::collections::HashMap;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Sliding-window rate limiter for the layer that invokes analysis.
///
/// Owned and injected by the caller; the extraction engine itself holds no
/// shared mutable state. One instance tracks one scope (e.g. one API
/// surface), with independent windows per key.
#[derive(Debug)]
pub struct RateLimiter {
    max_calls: usize,
    window: Duration,
    calls: HashMap<String, VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(max_calls: usize, window: Duration) -> Self {
        Self {
            max_calls,
            window,
            calls: HashMap::new(),
        }
    }

    /// Record an attempted call for `key`. Returns false when the key has
    /// exhausted its window.
    pub fn check(&mut self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&mut self, key: &str, now: Instant) -> bool {
        let window = self.window;
        let calls = self.calls.entry(key.to_string()).or_default();

        while let Some(&front) = calls.front() {
            if now.duration_since(front) >= window {
                calls.pop_front();
            } else {
                break;
            }
        }

        if calls.len() >= self.max_calls {
            return false;
        }
        calls.push_back(now);
        true
    }
}
