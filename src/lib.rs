//! Pushbutton-driven indicator light bank.
//!
//! Four colour lights form a mutually exclusive group: pressing a colour
//! button selects that light (it starts flashing at 1 Hz) and deselects
//! whichever colour was active. Pressing the active colour again turns it
//! off. A fifth, white light cycles on its own through
//! Off → Flashing → Solid → Off.
//!
//! Everything here is hardware-independent and runs on the host with
//! `cargo test`. The lights are generic over `embedded-hal` digital pins;
//! the firmware in `main.rs` binds them to nRF52840 GPIOs and calls
//! [`Controller::tick`] from its polling loop.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod controller;
pub mod debounce;
pub mod light;
pub mod mode;

pub use controller::Controller;
pub use debounce::DebouncedInput;
pub use light::Light;
pub use mode::{Action, Mode, ModePolicy};

use core::convert::Infallible;

/// Unwrap the result of a pin operation that cannot fail.
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Host-side pin doubles
// ═══════════════════════════════════════════════════════════════════════════
