//! One indicator light: an output pin, its pushbutton and its mode.

use crate::config::Millis;
use crate::debounce::DebouncedInput;
use crate::infallible;
use crate::mode::{Action, Mode, ModePolicy};
use core::convert::Infallible;
use embedded_hal::digital::{InputPin, OutputPin, PinState};

/// A light driven by one output pin and controlled by one button.
pub struct Light<I, O> {
    output: O,
    state: PinState,
    mode: Mode,
    policy: ModePolicy,
    button: DebouncedInput<I>,
}

impl<I, O> Light<I, O>
where
    I: InputPin<Error = Infallible>,
    O: OutputPin<Error = Infallible>,
{
    /// Build a light from configured pins. The output is driven low.
    pub fn new(button: I, output: O, policy: ModePolicy) -> Self {
        let mut light = Self {
            output,
            state: PinState::Low,
            mode: policy.initial_mode(),
            policy,
            button: DebouncedInput::new(button),
        };
        light.set_output_off();
        light
    }

    /// Drive the output low.
    pub fn set_output_off(&mut self) {
        self.drive(PinState::Low);
    }

    /// Drive the output high.
    pub fn set_output_on(&mut self) {
        self.drive(PinState::High);
    }

    /// Invert the output. Only call this while the light is flashing.
    pub fn flash_tick(&mut self) {
        self.drive(!self.state);
    }

    /// Sample the button and apply a confirmed press to the mode.
    ///
    /// Releases are debounced as well but never change the mode.
    pub fn poll_button(&mut self, now: Millis) -> Action {
        let Some(level) = self.button.poll(now) else {
            return Action::Nothing;
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("{} button edge {} at {}ms", self.policy, level, now);

        match level {
            PinState::High => {
                let (mode, action) = self.policy.on_press(self.mode);
                self.mode = mode;
                action
            }
            PinState::Low => Action::Nothing,
        }
    }

    /// Debounced level of the button.
    pub fn button_level(&self) -> PinState {
        self.button.stable()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn policy(&self) -> ModePolicy {
        self.policy
    }

    /// Level currently driven on the output pin.
    pub fn output(&self) -> PinState {
        self.state
    }

    pub fn is_lit(&self) -> bool {
        self.state == PinState::High
    }

    fn drive(&mut self, state: PinState) {
        infallible(self.output.set_state(state));
        self.state = state;
    }
}
