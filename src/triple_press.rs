//! Rapid-repeat gesture detection.
//!
//! Each completed press/release pair is classified by its held duration: under
//! [`FAST_PAIR_WINDOW`] counts toward a run, anything slower breaks the run.
//! A run of [`FAST_REPEAT_COUNT`] consecutive fast pairs fires once; the
//! caller uses that to reset the hold timer.

use embassy_time::Duration;

use crate::shared_constants::{FAST_PAIR_WINDOW, FAST_REPEAT_COUNT};

/// Counts consecutive fast press/release pairs.
#[derive(Debug, Default, defmt::Format)]
pub struct TriplePress {
    fast_run: u8,
}

impl TriplePress {
    /// Creates the detector with an empty run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies one completed pair. Returns `true` when the run reaches
    /// [`FAST_REPEAT_COUNT`]; the run starts over either way.
    pub fn observe(&mut self, pair: Duration) -> bool {
        if pair < FAST_PAIR_WINDOW {
            self.fast_run = self.fast_run.saturating_add(1);
            if self.fast_run >= FAST_REPEAT_COUNT {
                self.fast_run = 0;
                return true;
            }
            false
        } else {
            self.fast_run = 0;
            false
        }
    }

    /// Length of the current fast run.
    #[must_use]
    pub const fn fast_run(&self) -> u8 {
        self.fast_run
    }
}
