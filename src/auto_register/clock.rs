//! Monotonic clock capability
//!
//! The controller compares elapsed milliseconds, never wall-clock time, so
//! NTP steps cannot break the debounce/retry windows. Injected as a trait so
//! tests drive time by hand.

use std::time::Instant;

/// Millisecond monotonic clock
pub trait MonotonicClock {
    /// Milliseconds elapsed since some fixed origin
    fn now_ms(&self) -> u64;
}

/// Production clock over `std::time::Instant`
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
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

impl MonotonicClock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
