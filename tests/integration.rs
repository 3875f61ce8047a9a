//! Integration tests for the light bank, driven through the public API
//! with simulated buttons and LEDs.

use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, PinState};
use smartjock::config::Millis;
use smartjock::{Controller, DebouncedInput, Mode};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct Pin(Rc<Cell<bool>>);

impl Pin {
    fn set(&self, high: bool) {
        self.0.set(high);
    }

    fn get(&self) -> bool {
        self.0.get()
    }
}

impl ErrorType for Pin {
    type Error = Infallible;
}

impl InputPin for Pin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.get())
    }
}

impl OutputPin for Pin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set(true);
        Ok(())
    }
}

/// Four colour lights plus the white one, with a millisecond clock that
/// ticks the controller once per simulated millisecond.
struct Board {
    buttons: [Pin; 4],
    leds: [Pin; 4],
    white_button: Pin,
    white_led: Pin,
    controller: Controller<Pin, Pin, 4>,
    now: Millis,
}

impl Board {
    fn new() -> Self {
        let buttons: [Pin; 4] = Default::default();
        let leds: [Pin; 4] = Default::default();
        let white_button = Pin::default();
        let white_led = Pin::default();
        let controller = Controller::new(
            [0, 1, 2, 3].map(|i| (buttons[i].clone(), leds[i].clone())),
            (white_button.clone(), white_led.clone()),
        );
        Self {
            buttons,
            leds,
            white_button,
            white_led,
            controller,
            now: 0,
        }
    }

    /// Advance the clock by `ms`, ticking every millisecond, and check the
    /// exclusion invariant on every tick.
    fn run(&mut self, ms: Millis) {
        for _ in 0..ms {
            self.now = self.now.wrapping_add(1);
            self.controller.tick(self.now);
            assert!(self.colours_lit() <= 1, "two colour lights on at {}", self.now);
        }
    }

    /// A 100 ms press followed by 100 ms of settling.
    fn press(&mut self, button: &Pin) {
        button.set(true);
        self.run(100);
        button.set(false);
        self.run(100);
    }

    fn press_colour(&mut self, index: usize) {
        let button = self.buttons[index].clone();
        self.press(&button);
    }

    fn press_white(&mut self) {
        let button = self.white_button.clone();
        self.press(&button);
    }

    fn colours_lit(&self) -> usize {
        self.leds.iter().filter(|led| led.get()).count()
    }
}

#[test]
fn colour_selection_scenario() {
    let mut board = Board::new();

    board.press_colour(0);
    assert_eq!(board.controller.selected(), Some(0));
    assert!(board.leds[0].get());

    board.press_colour(1);
    assert_eq!(board.controller.selected(), Some(1));
    assert!(!board.leds[0].get());
    assert!(board.leds[1].get());

    // Flash tick at t = 1000 inverts the selected light.
    board.run(1_000 - board.now);
    assert!(!board.leds[1].get());
    board.run(1_000);
    assert!(board.leds[1].get());

    board.press_colour(1);
    assert_eq!(board.controller.selected(), None);
    assert!(!board.leds[1].get());

    // No flashing once deselected.
    for _ in 0..3 {
        board.run(1_000);
        assert_eq!(board.colours_lit(), 0);
    }
}

#[test]
fn white_light_scenario() {
    let mut board = Board::new();

    board.press_white();
    assert_eq!(board.controller.auxiliary().mode(), Mode::Flashing);
    assert!(!board.white_led.get());
    board.run(1_000 - board.now);
    assert!(board.white_led.get());

    // Press lands while the flash phase is dark.
    board.run(1_000);
    assert!(!board.white_led.get());
    board.press_white();
    assert_eq!(board.controller.auxiliary().mode(), Mode::Solid);
    assert!(board.white_led.get());
    board.run(3_000);
    assert!(board.white_led.get());

    board.press_white();
    assert_eq!(board.controller.auxiliary().mode(), Mode::Off);
    assert!(!board.white_led.get());
    board.run(3_000);
    assert!(!board.white_led.get());
}

#[test]
fn bouncy_press_registers_once() {
    let mut board = Board::new();
    let button = board.buttons[2].clone();

    // Contact bounce: level flips every few ms before settling high.
    for level in [true, false, true, false, true, false, true] {
        button.set(level);
        board.run(7);
    }
    board.run(100);
    button.set(false);
    board.run(100);

    // A second confirmed press would have deselected it again.
    assert_eq!(board.controller.selected(), Some(2));
    assert!(board.leds[2].get());
}

#[test]
fn random_mashing_keeps_one_colour_at_most() {
    let mut board = Board::new();
    // Deterministic xorshift so the test is reproducible.
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..400 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let index = (seed % 5) as usize;
        let hold = 20 + seed % 120;
        let button = if index < 4 {
            board.buttons[index].clone()
        } else {
            board.white_button.clone()
        };
        button.set(true);
        board.run(hold);
        button.set(false);
        board.run(60);

        match board.controller.selected() {
            Some(selected) => {
                for (i, led) in board.leds.iter().enumerate() {
                    if i != selected {
                        assert!(!led.get());
                    }
                }
            }
            None => assert_eq!(board.colours_lit(), 0),
        }
    }
}

#[test]
fn debounced_input_is_usable_standalone() {
    let pin = Pin::default();
    let mut input = DebouncedInput::new(pin.clone());

    pin.set(true);
    let confirmations = (0..200)
        .filter_map(|now| input.poll(now))
        .collect::<Vec<_>>();
    assert_eq!(confirmations, vec![PinState::High]);
    assert_eq!(input.stable(), PinState::High);
}
