//! Trait definitions for hardware abstraction.
//!
//! This module defines the core abstraction that allows tick-elapsed to:
//! - Run on different timers (FreeRTOS tick count, `std::time::Instant`, mocks)
//! - Be tested deterministically on desktop, including counter wraparound
//!
//! # Submodules
//!
//! - `tick`: Platform tick counter and its frequency
//!
//! # Hardware Abstraction
//!
//! - [`TickSource`]: Free-running 32-bit tick counter for `no_std` environments

pub mod tick;

pub use tick::*;
