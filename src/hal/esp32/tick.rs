//! ESP32 tick source using the FreeRTOS scheduler tick.

use core::num::NonZeroU32;

use crate::traits::TickSource;

/// FreeRTOS tick count source.
///
/// Reads `xTaskGetTickCount()`, which increments at `CONFIG_FREERTOS_HZ`
/// (set in `sdkconfig`, typically 100 or 1000) and wraps at `u32::MAX`.
///
/// # Example
///
/// ```ignore
/// use tick_elapsed::hal::esp32::FreeRtosTickSource;
/// use tick_elapsed::TickCounter;
///
/// let source = FreeRtosTickSource::new();
/// let counter = TickCounter::start(&source);
/// // ... do work ...
/// let elapsed = counter.elapsed_ms(&source);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FreeRtosTickSource;

impl FreeRtosTickSource {
    /// Creates a new FreeRTOS tick source.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FreeRtosTickSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for FreeRtosTickSource {
    #[inline]
    fn now_ticks(&self) -> u32 {
        // Safe: reads the scheduler tick counter, callable from any task
        unsafe { esp_idf_hal::sys::xTaskGetTickCount() }
    }

    #[inline]
    fn tick_hz(&self) -> NonZeroU32 {
        NonZeroU32::new(esp_idf_hal::sys::CONFIG_FREERTOS_HZ).unwrap_or(NonZeroU32::MIN)
    }
}
