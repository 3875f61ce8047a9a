//! The light bank: selection exclusion, auxiliary light and flash ticker.
//!
//! `Controller::tick` is called once per pass of the firmware's polling
//! loop. Each call:
//!
//! 1. polls the selectable buttons in array order and honours only the
//!    first toggle (later buttons are not sampled on that tick);
//! 2. moves the selection: a different light takes over from the current
//!    one, the current light's own button clears it;
//! 3. polls the auxiliary button and makes its output match its new mode;
//! 4. every [`FLASH_PERIOD_MS`], inverts whichever lights are flashing.
//!
//! At most one selectable light is ever lit. Only the selected light is
//! flashed, and every deselection drives the old light low before a new
//! one is driven high, so the exclusion holds after every tick.

use crate::config::{Millis, FLASH_PERIOD_MS};
use crate::light::Light;
use crate::mode::{Action, Mode, ModePolicy};
use core::convert::Infallible;
use embedded_hal::digital::{InputPin, OutputPin};

/// Owns every light of the bank.
pub struct Controller<I, O, const N: usize> {
    selectables: [Light<I, O>; N],
    auxiliary: Light<I, O>,
    selected: Option<usize>,
    last_flash: Millis,
}

impl<I, O, const N: usize> Controller<I, O, N>
where
    I: InputPin<Error = Infallible>,
    O: OutputPin<Error = Infallible>,
{
    /// Build the bank from `(button, output)` pin pairs.
    ///
    /// All outputs start low and nothing is selected.
    pub fn new(selectables: [(I, O); N], auxiliary: (I, O)) -> Self {
        let (aux_button, aux_output) = auxiliary;
        Self {
            selectables: selectables
                .map(|(button, output)| Light::new(button, output, ModePolicy::Selectable)),
            auxiliary: Light::new(aux_button, aux_output, ModePolicy::Auxiliary),
            selected: None,
            last_flash: 0,
        }
    }

    /// Run one pass of the control loop at time `now`.
    pub fn tick(&mut self, now: Millis) {
        let pressed = self
            .selectables
            .iter_mut()
            .position(|light| light.poll_button(now) == Action::Toggle);
        if let Some(index) = pressed {
            self.toggle_selection(index);
        }

        self.poll_auxiliary(now);

        if now.wrapping_sub(self.last_flash) >= FLASH_PERIOD_MS {
            self.last_flash = now;
            self.flash();
        }
    }

    /// Index of the selected light, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selectable(&self, index: usize) -> Option<&Light<I, O>> {
        self.selectables.get(index)
    }

    pub fn selectables(&self) -> &[Light<I, O>; N] {
        &self.selectables
    }

    pub fn auxiliary(&self) -> &Light<I, O> {
        &self.auxiliary
    }

    fn toggle_selection(&mut self, index: usize) {
        match self.selected {
            Some(current) if current == index => {
                self.selectables[index].set_output_off();
                self.selected = None;
                #[cfg(feature = "defmt")]
                defmt::info!("light {} deselected", index);
            }
            previous => {
                if let Some(previous) = previous {
                    self.selectables[previous].set_output_off();
                }
                self.selectables[index].set_output_on();
                self.selected = Some(index);
                #[cfg(feature = "defmt")]
                defmt::info!("light {} selected (was {})", index, previous);
            }
        }
    }

    fn poll_auxiliary(&mut self, now: Millis) {
        let before = self.auxiliary.mode();
        let action = self.auxiliary.poll_button(now);
        let mode = self.auxiliary.mode();
        // Flashing -> Solid is silent but still has to light the output.
        if action == Action::Nothing && mode == before {
            return;
        }

        #[cfg(feature = "defmt")]
        defmt::info!("auxiliary {} -> {} ({})", before, mode, action);

        match mode {
            Mode::Off => self.auxiliary.set_output_off(),
            Mode::Solid => self.auxiliary.set_output_on(),
            // The flash ticker drives it from here.
            Mode::Flashing => {}
        }
    }

    fn flash(&mut self) {
        if let Some(index) = self.selected {
            self.selectables[index].flash_tick();
        }
        if self.auxiliary.mode() == Mode::Flashing {
            self.auxiliary.flash_tick();
        }
    }
}
