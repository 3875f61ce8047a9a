//! smartjock firmware entry point (nRF52840).
//!
//! Binds the light bank to its GPIOs and runs the controller in a single
//! polling loop. See `config.rs` for the pin map.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_time::{Instant, Timer};
use smartjock::config::{Millis, POLL_INTERVAL_MS, SELECTABLE_COUNT};
use smartjock::Controller;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    // Buttons read high when pressed (wired to VDD, internal pull-down).
    let colours = [
        (
            Input::new(p.P0_02, Pull::Down),
            Output::new(p.P0_13, Level::Low, OutputDrive::Standard),
        ),
        (
            Input::new(p.P0_03, Pull::Down),
            Output::new(p.P0_14, Level::Low, OutputDrive::Standard),
        ),
        (
            Input::new(p.P0_04, Pull::Down),
            Output::new(p.P0_15, Level::Low, OutputDrive::Standard),
        ),
        (
            Input::new(p.P0_05, Pull::Down),
            Output::new(p.P0_16, Level::Low, OutputDrive::Standard),
        ),
    ];
    let white = (
        Input::new(p.P0_28, Pull::Down),
        Output::new(p.P0_06, Level::Low, OutputDrive::Standard),
    );

    let mut controller: Controller<_, _, SELECTABLE_COUNT> = Controller::new(colours, white);
    info!("smartjock: {} colour lights + white ready", SELECTABLE_COUNT);

    loop {
        // The counter wraps after ~49 days; the controller only ever takes
        // differences, so truncation is fine.
        controller.tick(Instant::now().as_millis() as Millis);
        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}
