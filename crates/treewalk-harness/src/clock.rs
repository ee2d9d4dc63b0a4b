//! Monotonic stopwatch for trial timing

use std::time::Instant;

/// Elapsed wall-clock time of one walk, in nanoseconds
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WalkTime(u64);

impl WalkTime {
    pub const ZERO: WalkTime = WalkTime(0);

    #[inline]
    pub fn from_nanos(nanos: u64) -> Self {
        WalkTime(nanos)
    }

    #[inline]
    pub fn as_nanos(self) -> u64 {
        self.0
    }

    /// Nanosecond difference scaled by 10^9
    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1_000_000_000.0
    }

    #[inline]
    pub fn saturating_add(self, rhs: WalkTime) -> Self {
        WalkTime(self.0.saturating_add(rhs.0))
    }
}

impl std::fmt::Debug for WalkTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "walk({:.9}s)", self.as_secs_f64())
    }
}

/// One-shot stopwatch over the monotonic OS clock.
/// INVARIANT: the end timestamp is never before the start timestamp -
/// `Instant` is monotonic and `WalkTime` is unsigned, so every reading
/// is non-negative by construction.
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Record the start timestamp
    pub fn start() -> Self {
        Stopwatch {
            started: Instant::now(),
        }
    }

    /// Record the end timestamp and return the difference
    pub fn elapsed(&self) -> WalkTime {
        let nanos = self.started.elapsed().as_nanos();
        WalkTime(nanos.min(u64::MAX as u128) as u64)
    }
}
