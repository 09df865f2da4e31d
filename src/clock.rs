//! Wall-clock access.
//!
//! Handlers never call `chrono` directly; they go through [`Clock`] so the
//! minute-based behavior can be pinned in tests.

use chrono::{Local, Timelike};

/// Source of the current wall-clock minute.
pub trait Clock: Send + Sync + 'static {
    /// Minute of the current hour, 0..=59.
    fn current_minute(&self) -> u32;
}

/// Reads the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_minute(&self) -> u32 {
        Local::now().minute()
    }
}

/// Always reports the same minute.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn current_minute(&self) -> u32 {
        self.0 % 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_stays_in_range() {
        assert!(SystemClock.current_minute() < 60);
    }

    #[test]
    fn fixed_clock_wraps_out_of_range_minutes() {
        assert_eq!(FixedClock(14).current_minute(), 14);
        assert_eq!(FixedClock(75).current_minute(), 15);
    }
}
