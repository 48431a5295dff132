//! Tick source configuration.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`.
//!
//! # Example
//!
//! ```rust
//! use tick_elapsed::config::TickConfig;
//!
//! // Use defaults (100 Hz, the FreeRTOS default)
//! let config = TickConfig::default();
//! assert_eq!(config.tick_hz().get(), 100);
//!
//! // Or customize
//! let config = TickConfig::default()
//!     .with_tick_hz(1000)
//!     .with_label("systick");
//! assert_eq!(config.label.as_str(), "systick");
//! ```

use core::num::NonZeroU32;

use heapless::String as HString;

/// Tick frequency used when none is configured.
pub const DEFAULT_TICK_HZ: u32 = 100;

/// Maximum length for config labels
pub const MAX_SHORT_STRING: usize = 32;

/// Type alias for short config strings
pub type ShortString = HString<MAX_SHORT_STRING>;

/// Create a ShortString from a &str, truncating if too long
pub fn short_string(s: &str) -> ShortString {
    let mut hs = ShortString::new();
    let take = s.len().min(MAX_SHORT_STRING);
    // Cut on a char boundary
    let valid_end = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|end| *end <= take)
        .last()
        .unwrap_or(0);
    let _ = hs.push_str(&s[..valid_end]);
    hs
}

// ============================================================================
// Tick Config
// ============================================================================

/// Tick source configuration
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickConfig {
    /// Ticks per second of the platform counter
    tick_hz: u32,
    /// Name reported in diagnostics
    pub label: ShortString,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            tick_hz: DEFAULT_TICK_HZ,
            label: short_string("tick"),
        }
    }
}

impl TickConfig {
    /// Set the tick frequency (zero is raised to 1 Hz)
    pub fn with_tick_hz(mut self, hz: u32) -> Self {
        self.tick_hz = hz.max(1);
        self
    }

    /// Set the diagnostic label
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = short_string(label);
        self
    }

    /// Configured tick frequency.
    ///
    /// Deserialized configs may carry zero; it reads back as 1 Hz.
    pub fn tick_hz(&self) -> NonZeroU32 {
        NonZeroU32::new(self.tick_hz).unwrap_or(NonZeroU32::MIN)
    }

    /// Milliseconds represented by one tick, truncated.
    ///
    /// Zero for tick rates above 1000 Hz.
    pub fn ms_per_tick(&self) -> u64 {
        crate::counter::ticks_to_ms(1, self.tick_hz())
    }

    /// Longest interval, in milliseconds, that a 32-bit tick delta can
    /// represent at this frequency before wraparound aliases it.
    pub fn max_interval_ms(&self) -> u64 {
        crate::counter::ticks_to_ms(u32::MAX, self.tick_hz())
    }
}

// ============================================================================
// Tests
// ============================================================================
