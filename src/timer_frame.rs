//! Pure encoding of an elapsed duration into a six-cell display frame.
//!
//! A [`TimerFrame`] carries one [`Glyph`] and one [`Point`] per cell. Slot 0
//! is the rightmost cell of the physical module; reading order runs from slot
//! 5 down to slot 0. (The further grid-wire permutation inside the module is
//! owned by the display driver, not here.)
//!
//! Two layouts, chosen by magnitude:
//!
//! - under 10 minutes: `M _ S S _ h` (minutes-low, blank, seconds, blank,
//!   hundredths-of-second), all decimal points off;
//! - 10 minutes and up: `H M M S S h` with decimal points after the hours,
//!   minutes, and seconds groups as each unit becomes active.
//!
//! A zero elapsed value means "no timer yet" and encodes as the all-dashes
//! [`NO_VALUE`](TimerFrame::NO_VALUE) sentinel, which the driver renders as a
//! placeholder clearly distinct from `0 00 00 0`.

use embassy_time::Duration;

use crate::shared_constants::CELL_COUNT;

/// What a single display cell shows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, defmt::Format)]
pub enum Glyph {
    /// A decimal digit value. The driver renders values above 9 as blank.
    Digit(u8),
    #[default]
    Blank,
    Dash,
}

/// A single cell's decimal point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, defmt::Format)]
pub enum Point {
    On,
    #[default]
    Off,
}

impl Point {
    /// `On` when the condition holds.
    #[must_use]
    pub const fn lit(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }

    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// One complete frame for the six-cell display.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, defmt::Format)]
pub struct TimerFrame {
    pub glyphs: [Glyph; CELL_COUNT],
    pub points: [Point; CELL_COUNT],
}

impl TimerFrame {
    /// The "no timer yet" sentinel: every cell a dash, no points.
    pub const NO_VALUE: Self = Self {
        glyphs: [Glyph::Dash; CELL_COUNT],
        points: [Point::Off; CELL_COUNT],
    };

    /// Encodes an elapsed duration.
    ///
    /// Zero encodes as [`NO_VALUE`](Self::NO_VALUE). Otherwise the duration
    /// is decomposed into hundredths-of-second, seconds, minutes, and hours
    /// digits and laid out per the module docs. The minutes-high cell only
    /// ever shows the sub-hour tens of minutes (0 through 5); the hours cell
    /// carries the full hour count as one value, capped at 99.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::integer_division_remainder_used,
        reason = "Modulo keeps every digit in u8 range"
    )]
    #[must_use]
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let ms = elapsed.as_millis();
        if ms == 0 {
            return Self::NO_VALUE;
        }

        let hundredths = (ms % 1000 / 100) as u8;
        let sec = ms / 1000;
        let seconds_low = (sec % 10) as u8;
        let seconds_high = (sec % 60 / 10) as u8;
        let minutes_low = (sec / 60 % 10) as u8;
        let minutes_high = (sec / 600 % 6) as u8;
        let hours = (sec / 3600).min(99) as u8;

        if sec < 600 {
            Self {
                glyphs: [
                    Glyph::Digit(hundredths),
                    Glyph::Blank,
                    Glyph::Digit(seconds_low),
                    Glyph::Digit(seconds_high),
                    Glyph::Blank,
                    Glyph::Digit(minutes_low),
                ],
                points: [Point::Off; CELL_COUNT],
            }
        } else {
            Self {
                glyphs: [
                    Glyph::Digit(hundredths),
                    Glyph::Digit(seconds_low),
                    Glyph::Digit(seconds_high),
                    Glyph::Digit(minutes_low),
                    Glyph::Digit(minutes_high),
                    Glyph::Digit(hours),
                ],
                points: [
                    Point::Off,
                    Point::lit(sec >= 1),
                    Point::Off,
                    Point::lit(sec >= 60),
                    Point::Off,
                    Point::lit(sec >= 3600),
                ],
            }
        }
    }
}
