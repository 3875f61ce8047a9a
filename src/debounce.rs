//! Time-window debouncing of a raw digital input.
//!
//! The raw level is sampled once per controller tick. A new level is only
//! accepted after it has stayed unchanged for longer than
//! [`DEBOUNCE_MS`]; contact bounce that flips the level faster than that
//! never gets through.
//!
//! All time arithmetic uses `wrapping_sub`, so the filter keeps working
//! when the millisecond counter rolls over.

use crate::config::{Millis, DEBOUNCE_MS};
use crate::infallible;
use core::convert::Infallible;
use embedded_hal::digital::{InputPin, PinState};

/// A button input together with its debounce state.
pub struct DebouncedInput<P> {
    pin: P,
    /// Last level that survived the debounce window.
    stable: PinState,
    /// Level seen on the previous sample.
    last_raw: PinState,
    /// When `last_raw` last changed.
    run_start: Millis,
}

impl<P> DebouncedInput<P>
where
    P: InputPin<Error = Infallible>,
{
    /// Wrap an already configured input pin. The line is assumed low.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            stable: PinState::Low,
            last_raw: PinState::Low,
            run_start: 0,
        }
    }

    /// Sample the pin and feed the reading through [`update`](Self::update).
    pub fn poll(&mut self, now: Millis) -> Option<PinState> {
        let raw = PinState::from(infallible(self.pin.is_high()));
        self.update(raw, now)
    }

    /// Feed one raw reading taken at `now`.
    ///
    /// Returns `Some(level)` exactly once per accepted change of the stable
    /// level, `None` otherwise.
    pub fn update(&mut self, raw: PinState, now: Millis) -> Option<PinState> {
        if raw != self.last_raw {
            self.last_raw = raw;
            self.run_start = now;
        }

        if now.wrapping_sub(self.run_start) > DEBOUNCE_MS && raw != self.stable {
            self.stable = raw;
            return Some(raw);
        }

        None
    }

    /// Last debounced level.
    pub fn stable(&self) -> PinState {
        self.stable
    }
}
