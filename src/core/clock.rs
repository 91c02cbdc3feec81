//=========================================================================
// Clock
//=========================================================================
//
// Monotonic time source abstraction.
//
// Architecture:
//   Clock::now() → Timestamp (opaque ns count) → elapsed_seconds(a, b)
//
// `MonotonicClock` reads the OS monotonic clock (immune to wall-clock
// adjustments). `ManualClock` is driven explicitly and is what tests and
// deterministic replays use.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::time::{Duration, Instant};

//=== Constants ===========================================================

/// Resolution of a [`Timestamp`]: ticks per second.
pub const TICKS_PER_SECOND: u64 = 1_000_000_000;

//=== Timestamp ===========================================================

/// Opaque monotonic instant, in nanoseconds since the clock's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Builds a timestamp from a raw tick count.
    pub const fn from_ticks(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Raw tick count.
    pub const fn ticks(self) -> u64 {
        self.0
    }
}

/// Seconds between `a` and `b` (`b - a`).
///
/// A monotonic source never yields `b < a`; if it happens anyway the
/// result saturates to `0.0`.
pub fn elapsed_seconds(a: Timestamp, b: Timestamp) -> f64 {
    b.0.saturating_sub(a.0) as f64 / TICKS_PER_SECOND as f64
}

//=== Clock ===============================================================

/// Source of monotonically non-decreasing timestamps.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

//=== MonotonicClock ======================================================

/// Clock backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Timestamp {
        // u64 nanoseconds covers ~584 years of process uptime
        Timestamp(self.origin.elapsed().as_nanos() as u64)
    }
}

//=== ManualClock =========================================================

/// Explicitly driven clock.
///
/// Time only moves through [`advance`](Self::advance) or, when configured
/// with [`auto_advance`](Self::auto_advance), by a fixed amount after every
/// `now()` read. The latter lets a blocking loop observe time passing
/// without touching the wall clock.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
    auto_advance: u64,
}

impl ManualClock {
    /// Creates a clock frozen at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock that moves forward by `step` after each read.
    pub fn auto_advance(step: Duration) -> Self {
        Self {
            now: Cell::new(0),
            auto_advance: duration_ticks(step),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(duration_ticks(by)));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        let current = self.now.get();
        self.now.set(current.saturating_add(self.auto_advance));
        Timestamp(current)
    }
}

fn duration_ticks(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_converts_ticks_to_seconds() {
        let a = Timestamp::from_ticks(1_000);
        let b = Timestamp::from_ticks(1_000 + 2 * TICKS_PER_SECOND + 500_000_000);
        assert!((elapsed_seconds(a, b) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn elapsed_saturates_when_reversed() {
        let a = Timestamp::from_ticks(10);
        let b = Timestamp::from_ticks(5);
        assert_eq!(elapsed_seconds(a, b), 0.0);
    }

    #[test]
    fn monotonic_clock_never_decreases() {
        let clock = MonotonicClock::new();
        let mut last = clock.now();
        for _ in 0..1_000 {
            let next = clock.now();
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn manual_clock_only_moves_when_told() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), clock.now());

        clock.advance(Duration::from_millis(16));
        assert_eq!(clock.now().ticks(), 16_000_000);
    }

    #[test]
    fn manual_clock_auto_advances_after_each_read() {
        let clock = ManualClock::auto_advance(Duration::from_millis(5));
        let a = clock.now();
        let b = clock.now();
        assert!((elapsed_seconds(a, b) - 0.005).abs() < 1e-12);
    }
}
