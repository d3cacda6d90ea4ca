//! Fixed window rate limiting keyed by client identifier

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct RateBucket {
    count: u32,
    window_start: Instant,
}

/// Per-key request counter over a recurring fixed window. The whole
/// bucket map sits behind one mutex so the reset-and-increment step is
/// atomic under parallel request handlers.
///
/// Stale keys are never evicted so the map grows with the number of
/// distinct clients seen over the process lifetime.
pub struct RateLimiter {
    buckets: Mutex<HashMap<String, RateBucket>>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            buckets: Mutex::new(HashMap::new()),
            limit,
            window,
        }
    }

    /// Record a request for `key` and report whether it must be
    /// rejected. Requests up to and including the limit pass within a
    /// window; the counter resets once the window elapses.
    pub fn check_and_record(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut buckets = self.buckets.lock().expect("Rate limiter lock poisoned");
        let bucket = buckets.entry(key.to_string()).or_insert(RateBucket {
            count: 0,
            window_start: now,
        });

        if now.duration_since(bucket.window_start) > self.window {
            bucket.count = 0;
            bucket.window_start = now;
        }
        bucket.count += 1;

        bucket.count > self.limit
    }
}
