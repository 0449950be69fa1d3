//! Wall-clock abstraction
//!
//! Scheduling writes absolute due times in epoch milliseconds, so the
//! engine reads time through this seam instead of the system clock.
//! Tests inject a fixed clock and assert exact due times.

use chrono::Utc;

/// Source of the current wall-clock time
pub trait ReviewClock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch
    fn now_ms(&self) -> i64;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ReviewClock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
