use embassy_time::Duration;

// The display is a 6-digit 8-segment module.
pub const CELL_COUNT: usize = 6;

// A hold must be strictly longer than this at release for the timer to arm.
pub const HOLD_THRESHOLD: Duration = Duration::from_millis(5000);

// A completed press/release pair shorter than this counts toward the reset gesture.
pub const FAST_PAIR_WINDOW: Duration = Duration::from_millis(333);

// Fast pairs in a row needed to reset the timer.
pub const FAST_REPEAT_COUNT: u8 = 5;

// Cadence of the control loop.
pub const TICK_PERIOD: Duration = Duration::from_millis(10);

// The button level is mirrored to two lines, the console button and the status LED.
pub const MIRROR_PIN_COUNT: usize = 2;

pub const BUTTON_DEBOUNCE_DELAY: Duration = Duration::from_millis(10);

// Wire payload values for the remote button's two edges. Anything else is ignored.
pub const WIRE_PRESSED: i8 = 1;
pub const WIRE_RELEASED: i8 = 0;
