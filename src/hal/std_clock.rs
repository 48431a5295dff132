//! Desktop tick source backed by `std::time::Instant`.

use core::num::NonZeroU32;
use std::time::Instant;

use crate::traits::TickSource;

/// Tick rate of [`StdTickSource`]: one tick per millisecond.
pub const STD_TICK_HZ: u32 = 1000;

/// Millisecond tick source for desktop builds.
///
/// Reports milliseconds since construction, plus an optional starting
/// offset, truncated to 32 bits so it wraps exactly like a hardware tick
/// counter.
///
/// # Example
///
/// ```rust
/// use tick_elapsed::hal::StdTickSource;
/// use tick_elapsed::traits::TickSource;
///
/// // Start just short of the wrap point
/// let source = StdTickSource::with_offset(u32::MAX - 10);
/// assert_eq!(source.tick_hz().get(), 1000);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StdTickSource {
    epoch: Instant,
    offset: u32,
}

impl StdTickSource {
    /// Creates a source whose counter starts at 0 now.
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a source whose counter starts at `offset` now.
    pub fn with_offset(offset: u32) -> Self {
        Self {
            epoch: Instant::now(),
            offset,
        }
    }
}

impl Default for StdTickSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for StdTickSource {
    fn now_ticks(&self) -> u32 {
        // Truncation is the modulo-2^32 wrap.
        let millis = self.epoch.elapsed().as_millis() as u32;
        self.offset.wrapping_add(millis)
    }

    fn tick_hz(&self) -> NonZeroU32 {
        NonZeroU32::new(STD_TICK_HZ).unwrap_or(NonZeroU32::MIN)
    }
}
