//! A device abstraction for a six-digit TM1637-style 7-segment LED module.
//!
//! See [`Led6`] for usage.
//!
//! The module sits on a two-wire serial bus (clock plus bidirectional data)
//! that this driver bit-bangs. Every [`TimerFrame`] sent with
//! [`write_frame`](Led6::write_frame) is latched by the module's own
//! controller, so the background task writes a frame once and then sleeps
//! until the next one arrives; there is no multiplex refresh to keep up.

#[cfg(feature = "display-trace")]
use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Flex, Output};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::Timer;

use crate::bit_frame_led6::BitFrameLed6;
use crate::timer_frame::TimerFrame;
use crate::{Error, Result};

// TM1637 command set
const CMD_DATA_AUTO_INCREMENT: u8 = 0x40;
const CMD_SET_ADDRESS: u8 = 0xC0;
const CMD_DISPLAY_ON: u8 = 0x88;

/// Typical brightness, on a 0 (dim) to 7 (max) scale.
const BRIGHT_TYPICAL: u8 = 0x02;

/// Half-period of the bit-banged bus clock.
const BIT_DELAY_MICROS: u64 = 10;

// ===== Public API ===========================================================

/// Static for the [`Led6`] device.
pub struct Led6Static(Signal<CriticalSectionRawMutex, TimerFrame>);

impl Led6Static {
    pub const fn new() -> Self {
        Self(Signal::new())
    }

    fn signal(&self, frame: TimerFrame) {
        self.0.signal(frame);
    }

    async fn wait(&self) -> TimerFrame {
        self.0.wait().await
    }
}

/// A device abstraction for a six-digit TM1637-style 7-segment LED module.
pub struct Led6<'a>(&'a Led6Static);

impl Led6<'_> {
    /// Creates static channel resources for the display.
    #[must_use]
    pub const fn new_static() -> Led6Static {
        Led6Static::new()
    }

    /// Creates the display device and spawns its background task.
    ///
    /// `dio` must be the module's data pin with its pull-up enabled; the
    /// driver emulates an open-drain line by switching the pin's direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be spawned.
    #[must_use = "Must be used to manage the spawned task"]
    pub fn new(
        led6_static: &'static Led6Static,
        clk: Output<'static>,
        dio: Flex<'static>,
        spawner: Spawner,
    ) -> Result<Self> {
        spawner
            .spawn(device_loop(Led6Device::new(clk, dio), led6_static))
            .map_err(Error::TaskSpawn)?;
        Ok(Self(led6_static))
    }

    /// Sends a frame to the display, replacing any frame still unwritten.
    pub fn write_frame(&self, frame: TimerFrame) {
        #[cfg(feature = "display-trace")]
        info!("write_frame: {:?}", frame);
        self.0.signal(frame);
    }
}

// ===== Concrete device passed to the task (non-generic) =====================

struct Led6Device {
    clk: Output<'static>,
    dio: Flex<'static>,
}

impl Led6Device {
    fn new(clk: Output<'static>, mut dio: Flex<'static>) -> Self {
        // Open-drain emulation: the output latch stays low forever and the
        // line is worked by direction alone. Output drives low; input lets
        // the pull-up raise it.
        dio.set_low();
        dio.set_as_input();
        Self { clk, dio }
    }

    fn dio_low(&mut self) {
        self.dio.set_as_output();
    }

    fn dio_release(&mut self) {
        self.dio.set_as_input();
    }

    /// Start condition: data falls while the clock is high.
    async fn bus_start(&mut self) {
        self.clk.set_high();
        self.dio_release();
        Timer::after_micros(BIT_DELAY_MICROS).await;
        self.dio_low();
        Timer::after_micros(BIT_DELAY_MICROS).await;
        self.clk.set_low();
    }

    /// Stop condition: data rises while the clock is high.
    async fn bus_stop(&mut self) {
        self.clk.set_low();
        self.dio_low();
        Timer::after_micros(BIT_DELAY_MICROS).await;
        self.clk.set_high();
        Timer::after_micros(BIT_DELAY_MICROS).await;
        self.dio_release();
        Timer::after_micros(BIT_DELAY_MICROS).await;
    }

    /// Clocks one byte out LSB-first, then runs the ack cycle. The module
    /// pulls the data line low for the ack; nothing useful can be done on a
    /// missing ack mid-refresh, so it is not sampled.
    async fn write_byte(&mut self, byte: u8) {
        let mut bits = byte;
        for _ in 0..u8::BITS {
            self.clk.set_low();
            if bits & 1 == 1 {
                self.dio_release();
            } else {
                self.dio_low();
            }
            Timer::after_micros(BIT_DELAY_MICROS).await;
            self.clk.set_high();
            Timer::after_micros(BIT_DELAY_MICROS).await;
            bits >>= 1;
        }

        self.clk.set_low();
        self.dio_release();
        Timer::after_micros(BIT_DELAY_MICROS).await;
        self.clk.set_high();
        Timer::after_micros(BIT_DELAY_MICROS).await;
        self.clk.set_low();
    }

    /// One full refresh: data command, all six grids, brightness command.
    async fn show(&mut self, bit_frame: BitFrameLed6) {
        self.bus_start().await;
        self.write_byte(CMD_DATA_AUTO_INCREMENT).await;
        self.bus_stop().await;

        self.bus_start().await;
        self.write_byte(CMD_SET_ADDRESS).await;
        for byte in bit_frame {
            self.write_byte(byte).await;
        }
        self.bus_stop().await;

        self.bus_start().await;
        self.write_byte(CMD_DISPLAY_ON | BRIGHT_TYPICAL).await;
        self.bus_stop().await;
    }
}

// ===== The non-generic task =================================================

#[embassy_executor::task]
async fn device_loop(mut device: Led6Device, led6_static: &'static Led6Static) -> ! {
    // Show the placeholder until the first real frame arrives.
    let mut frame = TimerFrame::NO_VALUE;
    loop {
        device.show(BitFrameLed6::from_timer_frame(&frame)).await;
        frame = led6_static.wait().await;
    }
}
