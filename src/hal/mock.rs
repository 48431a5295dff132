//! Mock tick source for testing without hardware.
//!
//! [`MockTickSource`] is a fully controllable [`TickSource`]: set the raw
//! counter anywhere in the 32-bit range (including just below `u32::MAX` to
//! exercise wraparound), advance it by hand, or make every read advance it
//! by a fixed step the way a live timer would.
//!
//! # Example
//!
//! ```rust
//! use tick_elapsed::{CounterPool, hal::MockTickSource};
//!
//! let source = MockTickSource::new(100);
//! let mut pool: CounterPool<_, 4> = CounterPool::new(&source);
//!
//! let handle = pool.create().unwrap();
//! source.advance(1200);
//!
//! assert_eq!(pool.get_elapsed_ms(Some(&handle)), Ok(12_000));
//! pool.destroy(Some(handle));
//! ```
//!
//! [`TickSource`]: crate::traits::TickSource

use core::cell::Cell;
use core::num::NonZeroU32;

use crate::config::TickConfig;
use crate::traits::TickSource;

/// Mock tick source for testing.
///
/// Interior mutability lets tests drive the counter while counters and
/// pools hold a shared reference to it.
///
/// # Example
///
/// ```rust
/// use tick_elapsed::hal::MockTickSource;
/// use tick_elapsed::traits::TickSource;
///
/// let source = MockTickSource::new(1000).with_step(10);
/// source.set(u32::MAX - 5);
///
/// // Each read advances by the step, wrapping past u32::MAX
/// assert_eq!(source.now_ticks(), 4);
/// assert_eq!(source.now_ticks(), 14);
/// assert_eq!(source.reads(), 2);
/// ```
#[derive(Debug)]
pub struct MockTickSource {
    ticks: Cell<u32>,
    step: Cell<u32>,
    reads: Cell<usize>,
    tick_hz: NonZeroU32,
}

impl MockTickSource {
    /// Creates a mock source at tick 0 running at `tick_hz`.
    ///
    /// A zero frequency is raised to 1 Hz.
    pub fn new(tick_hz: u32) -> Self {
        Self {
            ticks: Cell::new(0),
            step: Cell::new(0),
            reads: Cell::new(0),
            tick_hz: NonZeroU32::new(tick_hz).unwrap_or(NonZeroU32::MIN),
        }
    }

    /// Creates a mock source using the configured tick frequency.
    pub fn from_config(config: &TickConfig) -> Self {
        Self::new(config.tick_hz().get())
    }

    /// Advances the counter by `step` ticks before every read.
    pub fn with_step(self, step: u32) -> Self {
        self.step.set(step);
        self
    }

    /// Sets the raw counter value.
    pub fn set(&self, ticks: u32) {
        self.ticks.set(ticks);
    }

    /// Advances the counter, wrapping past `u32::MAX`.
    pub fn advance(&self, ticks: u32) {
        self.ticks.set(self.ticks.get().wrapping_add(ticks));
    }

    /// Current raw counter value, without counting as a read.
    pub fn peek(&self) -> u32 {
        self.ticks.get()
    }

    /// Number of times [`now_ticks`](TickSource::now_ticks) was called.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Resets the read counter.
    pub fn reset_reads(&self) {
        self.reads.set(0);
    }
}

impl Default for MockTickSource {
    fn default() -> Self {
        Self::from_config(&TickConfig::default())
    }
}

impl TickSource for MockTickSource {
    fn now_ticks(&self) -> u32 {
        self.reads.set(self.reads.get() + 1);
        self.advance(self.step.get());
        self.ticks.get()
    }

    fn tick_hz(&self) -> NonZeroU32 {
        self.tick_hz
    }
}
