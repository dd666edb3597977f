//! Monotonic tick sources.

use crate::Ticks;

/// Something that can report the current master clock count.
///
/// Implementations must never report a smaller count than a previous call.
pub trait TickSource {
    /// The current tick count.
    fn now(&self) -> Ticks;
}

/// A clock that only moves when told to.
///
/// Headless hosts and tests advance it explicitly, which keeps a run fully
/// deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteppedClock {
    now: Ticks,
}

impl SteppedClock {
    #[must_use]
    pub const fn new() -> Self {
        Self { now: Ticks::ZERO }
    }

    /// Start the clock at an arbitrary count.
    #[must_use]
    pub const fn starting_at(now: Ticks) -> Self {
        Self { now }
    }

    /// Move the clock forward by `count` ticks.
    pub fn advance(&mut self, count: u64) {
        self.now += Ticks(count);
    }
}

impl TickSource for SteppedClock {
    fn now(&self) -> Ticks {
        self.now
    }
}
