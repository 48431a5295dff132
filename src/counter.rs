//! Elapsed-tick counter and the tick-to-millisecond arithmetic.
//!
//! A [`TickCounter`] remembers the raw tick value seen when it was started.
//! Elapsed time is the forward distance from that origin to the current
//! tick, computed with wrapping `u32` subtraction so a counter that rolls
//! over between the two reads still yields the right answer. The distance
//! is valid as long as the true elapsed tick count fits in 32 bits
//! (about 49.7 days at 1000 Hz, 497 days at 100 Hz).
//!
//! # Example
//!
//! ```rust
//! use tick_elapsed::TickCounter;
//! use tick_elapsed::hal::MockTickSource;
//!
//! let source = MockTickSource::new(100);
//! source.set(u32::MAX - 50);
//!
//! let counter = TickCounter::start(&source);
//!
//! // Counter wraps past u32::MAX
//! source.advance(150);
//! assert_eq!(counter.elapsed_ticks(&source), 150);
//! assert_eq!(counter.elapsed_ms(&source), 1500);
//! ```

use core::num::NonZeroU32;

use crate::traits::TickSource;

/// Milliseconds per second, the numerator of the tick scaling.
pub const MS_PER_SECOND: u64 = 1000;

/// Forward tick distance from `origin` to `now` modulo 2^32.
///
/// # Examples
///
/// ```
/// use tick_elapsed::counter::ticks_between;
///
/// assert_eq!(ticks_between(333, 1533), 1200);
/// assert_eq!(ticks_between(u32::MAX - 1299, 99), 1399);
/// ```
#[inline]
pub const fn ticks_between(origin: u32, now: u32) -> u32 {
    now.wrapping_sub(origin)
}

/// Scales a tick count to whole milliseconds.
///
/// Multiplies before dividing in a 64-bit intermediate, so no precision is
/// lost for tick rates above 1000 Hz and no overflow occurs for any `u32`
/// delta. The result is truncated toward zero.
///
/// # Examples
///
/// ```
/// use core::num::NonZeroU32;
/// use tick_elapsed::counter::ticks_to_ms;
///
/// let hz = NonZeroU32::new(100).unwrap();
/// assert_eq!(ticks_to_ms(1200, hz), 12_000);
///
/// let hz = NonZeroU32::new(32_768).unwrap();
/// assert_eq!(ticks_to_ms(32_767, hz), 999);
/// ```
#[inline]
pub const fn ticks_to_ms(ticks: u32, tick_hz: NonZeroU32) -> u64 {
    ticks as u64 * MS_PER_SECOND / tick_hz.get() as u64
}

/// Stopwatch over a [`TickSource`].
///
/// Holds the tick value captured by [`start`](Self::start). The origin is
/// fixed for the counter's lifetime; there is no way to reset it other than
/// starting a new counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickCounter {
    origin_tick: u32,
}

impl TickCounter {
    /// Starts a counter, reading `source` exactly once.
    pub fn start<S: TickSource>(source: &S) -> Self {
        Self {
            origin_tick: source.now_ticks(),
        }
    }

    /// Raw tick value captured at start.
    #[inline]
    pub const fn origin_tick(&self) -> u32 {
        self.origin_tick
    }

    /// Ticks elapsed since start. Reads `source` once.
    pub fn elapsed_ticks<S: TickSource>(&self, source: &S) -> u32 {
        ticks_between(self.origin_tick, source.now_ticks())
    }

    /// Milliseconds elapsed since start. Reads `source` once.
    pub fn elapsed_ms<S: TickSource>(&self, source: &S) -> u64 {
        ticks_to_ms(self.elapsed_ticks(source), source.tick_hz())
    }

    /// Milliseconds elapsed since start, truncated to 32 bits.
    ///
    /// Matches a 32-bit millisecond counter: wraps after about 49.7 days
    /// regardless of tick rate.
    pub fn elapsed_ms_u32<S: TickSource>(&self, source: &S) -> u32 {
        self.elapsed_ms(source) as u32
    }
}
