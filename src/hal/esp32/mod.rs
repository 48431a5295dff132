//! ESP32 (ESP-IDF / FreeRTOS) hardware abstraction layer.
//!
//! # Hardware Configuration
//!
//! - **MCU**: ESP32-C3 (RISC-V 160MHz)
//! - **Tick source**: FreeRTOS scheduler tick at `CONFIG_FREERTOS_HZ`

mod tick;

pub use tick::FreeRtosTickSource;
