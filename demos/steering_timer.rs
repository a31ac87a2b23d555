//! A six-digit hold-to-start timer driven by a push button.
//!
//! Runs on a Raspberry Pi Pico RP2040. A bench push button stands in for the
//! wireless remote: it publishes the same wire bytes through the same inbound
//! boundary the radio callback would use. Hold the button for more than five
//! seconds to start the timer; press it rapidly five times to reset.
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "single-threaded")]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::Input;
use embassy_time::{Instant, Timer};
use panic_probe as _;
use wheel_timer::{
    BUTTON_DEBOUNCE_DELAY, ControlLoop, Error, Hardware, Led6, Led6Static, Never, RemoteButton,
    Result, WIRE_PRESSED, WIRE_RELEASED,
};

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Never> {
    let hardware = Hardware::default();

    static LED6_STATIC: Led6Static = Led6::new_static();
    let led6 = Led6::new(
        &LED6_STATIC,
        hardware.display_clk,
        hardware.display_dio,
        spawner,
    )?;

    static REMOTE_BUTTON: RemoteButton = RemoteButton::new_static();
    spawner
        .spawn(bench_button_loop(&REMOTE_BUTTON, hardware.bench_button))
        .map_err(Error::TaskSpawn)?;

    info!("wheel timer up, hold the button 5 s to start");
    ControlLoop::new(&REMOTE_BUTTON, led6, hardware.mirror_pins)
        .run()
        .await
}

/// Feeds debounced press/release wire bytes from the bench button.
#[embassy_executor::task]
async fn bench_button_loop(remote_button: &'static RemoteButton, mut button: Input<'static>) -> ! {
    loop {
        button.wait_for_high().await;
        let _ = remote_button.on_wire_event(WIRE_PRESSED, Instant::now());
        Timer::after(BUTTON_DEBOUNCE_DELAY).await;
        button.wait_for_low().await;
        let _ = remote_button.on_wire_event(WIRE_RELEASED, Instant::now());
        Timer::after(BUTTON_DEBOUNCE_DELAY).await;
    }
}
