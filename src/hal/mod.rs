//! Hardware Abstraction Layer implementations.
//!
//! This module contains concrete implementations of the traits
//! defined in [`crate::traits`] for various platforms.
//!
//! # Available Implementations
//!
//! - `mock`: Controllable tick source for tests
//! - `fallback`: Deterministic incrementing source for targets without a timer
//! - `std_clock`: `std::time::Instant` at 1000 Hz (requires `std` feature)
//! - `esp32`: FreeRTOS tick count on ESP32 (requires `esp32` feature)

pub mod fallback;
pub mod mock;

#[cfg(feature = "std")]
pub mod std_clock;

#[cfg(feature = "esp32")]
pub mod esp32;

pub use fallback::*;
pub use mock::*;

#[cfg(feature = "std")]
pub use std_clock::*;

#[cfg(feature = "esp32")]
pub use esp32::*;

/// Tick source used when the application does not supply one.
#[cfg(feature = "esp32")]
pub type DefaultTickSource = esp32::FreeRtosTickSource;

/// Tick source used when the application does not supply one.
#[cfg(not(feature = "esp32"))]
pub type DefaultTickSource = fallback::FallbackTickSource;
