//! Clock seam for store-captured timestamps.
//!
//! Observation timestamps are assigned by the store itself, never supplied
//! by the caller, so the writer cannot spoof capture time. The trait exists
//! so tests can pin time.

/// Source of "now" for observation timestamps.
pub trait Clock: Send + Sync {
    /// Current time in seconds since the Unix epoch.
    fn now_unix(&self) -> u64;
}

/// Wall-clock implementation used outside tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> u64 {
        chrono::Utc::now().timestamp().max(0) as u64
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_unix(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_past_2020() {
        assert!(SystemClock.now_unix() > 1_577_836_800);
    }

    #[test]
    fn fixed_clock_is_pinned() {
        let clock = FixedClock(123);
        assert_eq!(clock.now_unix(), 123);
        assert_eq!(clock.now_unix(), 123);
    }
}
