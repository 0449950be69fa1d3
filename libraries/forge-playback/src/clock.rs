//! Transport clock abstraction
//!
//! The transport derives playback position from clock arithmetic rather
//! than asking the platform source, so the clock is a seam: production
//! code uses the monotonic system clock, tests substitute a manual one
//! and step time explicitly.

use std::time::Instant;

/// Monotonic clock read by the transport
pub trait TransportClock: Send {
    /// Current time in seconds since an arbitrary fixed origin
    ///
    /// Must never decrease between calls.
    fn now(&self) -> f64;
}

/// System clock measuring from its own creation
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock with origin "now"
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportClock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}
