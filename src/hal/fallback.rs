//! Software tick source for targets without a configured timer.

use core::cell::Cell;
use core::num::NonZeroU32;

use crate::config::{TickConfig, DEFAULT_TICK_HZ};
use crate::traits::TickSource;

/// Ticks added to the fallback counter on every read.
pub const FALLBACK_TICK_STEP: u32 = 100;

/// Deterministic incrementing tick source.
///
/// Each read advances the counter by [`FALLBACK_TICK_STEP`] ticks, so time
/// appears to pass at a fixed rate per call rather than per second. Useful
/// only where no hardware timer is available; elapsed values are
/// reproducible across runs.
///
/// The state lives in the instance. Share one source by reference between
/// counters that should observe the same timeline.
///
/// # Example
///
/// ```rust
/// use tick_elapsed::TickCounter;
/// use tick_elapsed::hal::FallbackTickSource;
///
/// let source = FallbackTickSource::new();
/// let counter = TickCounter::start(&source);
///
/// // One read later: 100 ticks at 100 Hz
/// assert_eq!(counter.elapsed_ms(&source), 1000);
/// ```
#[derive(Debug)]
pub struct FallbackTickSource {
    ticks: Cell<u32>,
    tick_hz: NonZeroU32,
}

impl FallbackTickSource {
    /// Creates a fallback source at the default tick frequency.
    pub fn new() -> Self {
        Self {
            ticks: Cell::new(0),
            tick_hz: NonZeroU32::new(DEFAULT_TICK_HZ).unwrap_or(NonZeroU32::MIN),
        }
    }

    /// Creates a fallback source reporting the configured frequency.
    pub fn from_config(config: &TickConfig) -> Self {
        Self {
            ticks: Cell::new(0),
            tick_hz: config.tick_hz(),
        }
    }
}

impl Default for FallbackTickSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for FallbackTickSource {
    fn now_ticks(&self) -> u32 {
        let next = self.ticks.get().wrapping_add(FALLBACK_TICK_STEP);
        self.ticks.set(next);
        next
    }

    fn tick_hz(&self) -> NonZeroU32 {
        self.tick_hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_per_read() {
        let source = FallbackTickSource::new();
        assert_eq!(source.now_ticks(), 100);
        assert_eq!(source.now_ticks(), 200);
        assert_eq!(source.tick_hz().get(), DEFAULT_TICK_HZ);
    }

    #[test]
    fn instances_do_not_share_state() {
        let a = FallbackTickSource::new();
        let b = FallbackTickSource::new();
        a.now_ticks();
        a.now_ticks();
        assert_eq!(b.now_ticks(), 100);
    }

    #[test]
    fn from_config_uses_frequency() {
        let source = FallbackTickSource::from_config(&TickConfig::default().with_tick_hz(1000));
        assert_eq!(source.tick_hz().get(), 1000);
    }
}
