//! Internal segment state representation for the six-digit 7-segment module.
//!
//! Converts a [`TimerFrame`] into the raw segment bytes the display driver
//! clocks out, including the module's cell-to-grid wiring permutation. Pure
//! data work; the two-wire protocol lives in the driver.

use crate::shared_constants::CELL_COUNT;
use crate::timer_frame::{Glyph, Point, TimerFrame};

// ============================================================================
// LED Constants
// ============================================================================

/// Constants for 7-segment LED cells.
struct Leds;

impl Leds {
    /// Array representing the segments for digits 0-9 on a 7-segment display.
    const DIGITS: [u8; 10] = [
        0b_0011_1111, // Digit 0
        0b_0000_0110, // Digit 1
        0b_0101_1011, // Digit 2
        0b_0100_1111, // Digit 3
        0b_0110_0110, // Digit 4
        0b_0110_1101, // Digit 5
        0b_0111_1101, // Digit 6
        0b_0000_0111, // Digit 7
        0b_0111_1111, // Digit 8
        0b_0110_1111, // Digit 9
    ];

    /// Segment G alone, the placeholder dash.
    const DASH: u8 = 0b_0100_0000;

    /// Decimal point of the 7-segment display.
    const DECIMAL: u8 = 0b_1000_0000;
}

/// Cell-to-grid wiring of the six-digit module: the two 3-digit halves are
/// crossed, so logical slot 0 (the rightmost cell) drives grid 3, and slot 3
/// drives grid 0.
const GRID_FOR_SLOT: [usize; CELL_COUNT] = [3, 4, 5, 0, 1, 2];

// ============================================================================
// BitFrameLed6
// ============================================================================

/// Raw segment bytes for one display refresh, ordered by grid address.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, defmt::Format)]
pub struct BitFrameLed6([u8; CELL_COUNT]);

impl BitFrameLed6 {
    /// Converts a frame's glyphs and points into grid-ordered segment bytes.
    ///
    /// Digit values above 9 have no segment pattern and come out blank.
    #[must_use]
    pub fn from_timer_frame(frame: &TimerFrame) -> Self {
        let mut bytes = [0_u8; CELL_COUNT];
        for ((&grid, &glyph), &point) in GRID_FOR_SLOT
            .iter()
            .zip(frame.glyphs.iter())
            .zip(frame.points.iter())
        {
            if let Some(cell) = bytes.get_mut(grid) {
                *cell = segments(glyph, point);
            }
        }
        Self(bytes)
    }
}

impl IntoIterator for BitFrameLed6 {
    type Item = u8;
    type IntoIter = core::array::IntoIter<u8, CELL_COUNT>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn segments(glyph: Glyph, point: Point) -> u8 {
    let bits = match glyph {
        Glyph::Digit(value) => Leds::DIGITS.get(value as usize).copied().unwrap_or(0),
        Glyph::Blank => 0,
        Glyph::Dash => Leds::DASH,
    };
    if point.is_on() { bits | Leds::DECIMAL } else { bits }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;
    use embassy_time::Duration;

    #[test]
    fn test_grid_crossing() {
        // Distinct digits in slots 0 and 3 swap halves on the wire.
        let frame = TimerFrame {
            glyphs: [
                Glyph::Digit(1),
                Glyph::Blank,
                Glyph::Blank,
                Glyph::Digit(2),
                Glyph::Blank,
                Glyph::Blank,
            ],
            points: [Point::Off; CELL_COUNT],
        };
        let bytes = BitFrameLed6::from_timer_frame(&frame).0;
        assert_eq!(bytes[0], 0b_0101_1011); // '2' from slot 3
        assert_eq!(bytes[3], 0b_0000_0110); // '1' from slot 0
        assert_eq!(bytes[1], 0);
        assert_eq!(bytes[2], 0);
    }

    #[test]
    fn test_sentinel_is_all_dashes() {
        for byte in BitFrameLed6::from_timer_frame(&TimerFrame::NO_VALUE) {
            assert_eq!(byte, 0b_0100_0000);
        }
    }

    #[test]
    fn test_point_sets_the_high_bit() {
        let frame = TimerFrame {
            glyphs: [Glyph::Digit(8); CELL_COUNT],
            points: [
                Point::On,
                Point::Off,
                Point::On,
                Point::Off,
                Point::On,
                Point::Off,
            ],
        };
        let bytes = BitFrameLed6::from_timer_frame(&frame).0;
        // Points follow their slots through the grid permutation.
        for (grid, lit) in [(3, true), (4, false), (5, true), (0, false), (1, true), (2, false)] {
            assert_eq!(bytes[grid] & 0b_1000_0000 != 0, lit, "grid {grid}");
        }
    }

    #[test]
    fn test_digit_overflow_is_blank() {
        let frame = TimerFrame {
            glyphs: [Glyph::Digit(99); CELL_COUNT],
            points: [Point::Off; CELL_COUNT],
        };
        for byte in BitFrameLed6::from_timer_frame(&frame) {
            assert_eq!(byte, 0);
        }
    }

    #[test]
    fn test_encoded_timer_value() {
        // 1 m 23.4 s, compressed layout: "1 23 4" reading from slot 5 down.
        let frame = TimerFrame::from_elapsed(Duration::from_millis(83_400));
        let bytes = BitFrameLed6::from_timer_frame(&frame).0;
        // Grids 0..=2 carry slots 3..=5: seconds-high '2', blank, minutes-low '1'.
        assert_eq!(bytes[0], 0b_0101_1011);
        assert_eq!(bytes[1], 0);
        assert_eq!(bytes[2], 0b_0000_0110);
        // Grids 3..=5 carry slots 0..=2: hundredths '4', blank, seconds-low '3'.
        assert_eq!(bytes[3], 0b_0110_0110);
        assert_eq!(bytes[4], 0);
        assert_eq!(bytes[5], 0b_0100_1111);
    }
}
