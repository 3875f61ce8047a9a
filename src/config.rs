//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters and the pin map live here so they can be tuned
//! in one place.

/// Millisecond timestamp from a free-running, wrapping counter.
pub type Millis = u32;

// Timing

/// Time a raw button level must stay unchanged before it is accepted (ms).
///
/// The level is confirmed once strictly more than this has elapsed.
pub const DEBOUNCE_MS: Millis = 50;

/// Interval between flash-phase inversions (ms). 1000 ms = 1 Hz toggle.
pub const FLASH_PERIOD_MS: Millis = 1000;

/// Delay between two controller ticks in the firmware loop (ms).
pub const POLL_INTERVAL_MS: u64 = 1;

// Light bank

/// Number of mutually exclusive colour lights.
pub const SELECTABLE_COUNT: usize = 4;

// GPIO pin assignments (nRF52840)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` pins
// are bound in `main.rs`.  Buttons are wired to VDD with the internal
// pull-down enabled, so a press reads high.
//
//   Colour 0  button P0.02 → LED P0.13
//   Colour 1  button P0.03 → LED P0.14
//   Colour 2  button P0.04 → LED P0.15
//   Colour 3  button P0.05 → LED P0.16
//   White     button P0.28 → LED P0.06
