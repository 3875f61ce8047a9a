//! Display modes and the per-light press policies.
//!
//! A confirmed button press is mapped to the light's next [`Mode`] and an
//! [`Action`] telling the controller whether the press should toggle the
//! light's selection. The mapping depends on the light's class, which is
//! fixed when the light is built.

/// What a light shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Dark.
    Off,
    /// Steady on.
    Solid,
    /// Alternating on/off, driven by the flash ticker.
    Flashing,
}

/// Outward signal produced by a press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// No effect outside the light.
    Nothing,
    /// The light's selection should flip.
    Toggle,
}

/// How a light reacts to presses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModePolicy {
    /// Member of the mutually exclusive colour group. Always flashes while
    /// selected; every press toggles selection.
    Selectable,
    /// Independent light cycling Off → Flashing → Solid → Off.
    Auxiliary,
}

impl ModePolicy {
    /// Mode a freshly built light starts in.
    pub fn initial_mode(self) -> Mode {
        match self {
            ModePolicy::Selectable => Mode::Flashing,
            ModePolicy::Auxiliary => Mode::Off,
        }
    }

    /// Next mode and signal for a press received while in `mode`.
    ///
    /// The auxiliary cycle only signals when it enters or leaves `Off`;
    /// the Flashing → Solid step is silent.
    pub fn on_press(self, mode: Mode) -> (Mode, Action) {
        match (self, mode) {
            (ModePolicy::Selectable, _) => (Mode::Flashing, Action::Toggle),
            (ModePolicy::Auxiliary, Mode::Off) => (Mode::Flashing, Action::Toggle),
            (ModePolicy::Auxiliary, Mode::Flashing) => (Mode::Solid, Action::Nothing),
            (ModePolicy::Auxiliary, Mode::Solid) => (Mode::Off, Action::Toggle),
        }
    }
}
