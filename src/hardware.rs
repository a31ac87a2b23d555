use embassy_rp::gpio::{self, Flex, Level};

use crate::output_array::OutputArray;
use crate::shared_constants::MIRROR_PIN_COUNT;

pub struct Hardware {
    pub display_clk: gpio::Output<'static>,
    pub display_dio: Flex<'static>,
    pub mirror_pins: OutputArray<'static, MIRROR_PIN_COUNT>,
    pub bench_button: gpio::Input<'static>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        // Bus idles high; the display driver needs the data line pulled up
        // because it only ever drives it low.
        let display_clk = gpio::Output::new(peripherals.PIN_12, Level::High);
        let mut display_dio = Flex::new(peripherals.PIN_13);
        display_dio.set_pull(gpio::Pull::Up);

        // Console-button line first, status LED second, always written together.
        let mirror_pins = OutputArray::new([
            gpio::Output::new(peripherals.PIN_14, Level::Low),
            gpio::Output::new(peripherals.PIN_15, Level::Low),
        ]);

        let bench_button = gpio::Input::new(peripherals.PIN_16, gpio::Pull::Down);

        Self {
            display_clk,
            display_dio,
            mirror_pins,
            bench_button,
        }
    }
}
