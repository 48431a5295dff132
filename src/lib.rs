//! # tick-elapsed
//!
//! Wraparound-safe elapsed-time counters over a platform tick source, for
//! firmware and real-time code that only has a free-running 32-bit tick
//! counter to work with.
//!
//! ## Features
//!
//! - **Hardware abstraction**: A [`TickSource`] trait for the platform tick counter
//! - **Wraparound-safe**: Elapsed ticks use modulo-2^32 subtraction, correct across counter rollover
//! - **Exact scaling**: Ticks to milliseconds via a 64-bit multiply-then-divide, truncated
//! - **No heap required**: [`CounterPool`] stores counters in fixed-capacity slots
//!
//! ## Architecture
//!
//! - `traits` - Tick source abstraction
//! - `counter` - [`TickCounter`] and the tick arithmetic
//! - `pool` - Fixed-capacity counter storage with handles
//! - `hal` - Concrete tick sources (mock and fallback for testing, std and esp32 for real timers)
//! - `config` - Tick frequency configuration
//!
//! ## Example
//!
//! ```rust
//! use tick_elapsed::{CounterPool, hal::MockTickSource};
//!
//! // 100 Hz tick, counter about to wrap
//! let source = MockTickSource::new(100);
//! source.set(u32::MAX - 1300);
//!
//! let mut pool: CounterPool<_, 4> = CounterPool::new(&source);
//! let handle = pool.create().unwrap();
//!
//! source.advance(1200);
//! assert_eq!(pool.get_elapsed_ms(Some(&handle)), Ok(12_000));
//!
//! pool.destroy(Some(handle));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Tick source configuration.
pub mod config;
/// Elapsed-tick counter and tick-to-millisecond arithmetic.
pub mod counter;
/// Error type for counter operations.
pub mod error;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Fixed-capacity counter storage.
pub mod pool;
/// Core traits for hardware abstraction.
pub mod traits;

// Re-exports for convenience
pub use config::{TickConfig, DEFAULT_TICK_HZ};
pub use counter::{ticks_between, ticks_to_ms, TickCounter};
pub use error::CounterError;
pub use pool::{CounterHandle, CounterPool};
pub use traits::TickSource;
