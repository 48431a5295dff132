//! Tick source abstraction for platform timers.
//!
//! This module defines the single hardware capability the crate depends on:
//! a free-running unsigned 32-bit tick counter incremented at a fixed rate.
//!
//! # Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`TickSource`] | Raw tick counter plus its configured frequency |
//!
//! # Implementation
//!
//! For testing and desktop development, use the mock implementations
//! from [`crate::hal::mock`]. On desktop with `std`, `hal::StdTickSource`
//! wraps `std::time::Instant`. For ESP32 hardware, use
//! `hal::esp32::FreeRtosTickSource` (requires `esp32` feature).
//!
//! # Example
//!
//! ```rust
//! use tick_elapsed::traits::TickSource;
//! use tick_elapsed::hal::MockTickSource;
//!
//! let source = MockTickSource::new(1000);
//! assert_eq!(source.now_ticks(), 0);
//!
//! source.advance(250);
//! assert_eq!(source.now_ticks(), 250);
//! assert_eq!(source.tick_hz().get(), 1000);
//! ```

use core::num::NonZeroU32;

/// Platform tick counter.
///
/// Implementors return a counter that increases monotonically modulo 2^32
/// at [`tick_hz`](Self::tick_hz) ticks per second. Reading the counter has
/// no failure path.
///
/// `now_ticks` takes `&self`: sources that need to mutate on read (software
/// stubs, simulated timers) use interior mutability.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use core::num::NonZeroU32;
/// use tick_elapsed::traits::TickSource;
///
/// struct SysTick;
///
/// impl TickSource for SysTick {
///     fn now_ticks(&self) -> u32 {
///         // Read the SysTick overflow counter...
///         0
///     }
///
///     fn tick_hz(&self) -> NonZeroU32 {
///         NonZeroU32::new(1000).unwrap()
///     }
/// }
/// ```
pub trait TickSource {
    /// Returns the current raw tick count.
    ///
    /// Wraps to zero after `u32::MAX`.
    fn now_ticks(&self) -> u32;

    /// Ticks per second. Fixed for the lifetime of the source.
    fn tick_hz(&self) -> NonZeroU32;
}

impl<T: TickSource + ?Sized> TickSource for &T {
    #[inline]
    fn now_ticks(&self) -> u32 {
        (**self).now_ticks()
    }

    #[inline]
    fn tick_hz(&self) -> NonZeroU32 {
        (**self).tick_hz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct TestSource {
        ticks: Cell<u32>,
        reads: Cell<usize>,
    }

    impl TickSource for TestSource {
        fn now_ticks(&self) -> u32 {
            self.reads.set(self.reads.get() + 1);
            self.ticks.get()
        }

        fn tick_hz(&self) -> NonZeroU32 {
            NonZeroU32::new(1000).unwrap()
        }
    }

    fn read_through<S: TickSource>(source: S) -> u32 {
        source.now_ticks()
    }

    #[test]
    fn reference_forwards_to_source() {
        let source = TestSource {
            ticks: Cell::new(42),
            reads: Cell::new(0),
        };

        assert_eq!(read_through(&source), 42);
        assert_eq!((&source).tick_hz().get(), 1000);
        assert_eq!(source.reads.get(), 1);
    }
}
