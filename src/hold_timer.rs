//! Press/release bookkeeping and the long-hold elapsed timer.
//!
//! [`HoldTimer`] consumes the edge stream one event at a time. A release that
//! ends a hold longer than [`HOLD_THRESHOLD`] arms the timer: from then on
//! [`elapsed`](HoldTimer::elapsed) counts up from that release until
//! [`reset`](HoldTimer::reset) disarms it. The threshold is checked once, at
//! the release edge; holding the button does not arm anything by itself.

use embassy_time::{Duration, Instant};

use crate::remote_button::{ButtonEdge, EdgeEvent};
use crate::shared_constants::HOLD_THRESHOLD;

/// One completed press/release pair, reported as [`apply_edge`] returns it.
///
/// [`apply_edge`]: HoldTimer::apply_edge
#[derive(Copy, Clone, Debug, PartialEq, Eq, defmt::Format)]
pub struct CompletedHold {
    /// How long the button was held.
    pub held: Duration,
    /// Whether this pair crossed the threshold and armed the timer.
    pub armed_timer: bool,
}

/// Edge-driven state machine for the hold-to-start timer.
///
/// Starts released, unarmed. Owned by the control loop; nothing here is
/// shared or interior-mutable.
#[derive(Debug, Default, defmt::Format)]
pub struct HoldTimer {
    current: ButtonEdge,
    last_press: Option<Instant>,
    last_release: Option<Instant>,
    // `Some` exactly while the timer is armed. Holds the timestamp of the
    // release that completed the qualifying hold.
    baseline: Option<Instant>,
}

impl HoldTimer {
    /// Creates the machine in its startup state (released, unarmed).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one edge event.
    ///
    /// A press records its timestamp. A release completes a pair against the
    /// most recent press and returns it; if the pair exceeds
    /// [`HOLD_THRESHOLD`] the timer arms with the release timestamp as its
    /// baseline. Returns `None` for presses, for a release with no press ever
    /// recorded, and for a release timestamped before its press.
    pub fn apply_edge(&mut self, event: EdgeEvent) -> Option<CompletedHold> {
        self.current = event.edge;
        match event.edge {
            ButtonEdge::Press => {
                self.last_press = Some(event.at);
                None
            }
            ButtonEdge::Release => {
                self.last_release = Some(event.at);
                let pressed_at = self.last_press?;
                let held = event.at.checked_duration_since(pressed_at)?;
                let armed_timer = held > HOLD_THRESHOLD;
                if armed_timer {
                    self.baseline = Some(event.at);
                }
                Some(CompletedHold { held, armed_timer })
            }
        }
    }

    /// Time since the qualifying release, or zero while unarmed.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.baseline
            .map_or(Duration::from_ticks(0), |baseline| {
                now.saturating_duration_since(baseline)
            })
    }

    /// Disarms the timer. Elapsed time is derived from the baseline, so
    /// disarming zeroes it. Edge bookkeeping is untouched.
    pub fn reset(&mut self) {
        self.baseline = None;
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.baseline.is_some()
    }

    /// The most recently applied edge.
    #[must_use]
    pub const fn current(&self) -> ButtonEdge {
        self.current
    }

    /// Timestamp of the most recent press, if any.
    #[must_use]
    pub const fn last_press(&self) -> Option<Instant> {
        self.last_press
    }

    /// Timestamp of the most recent release, if any.
    #[must_use]
    pub const fn last_release(&self) -> Option<Instant> {
        self.last_release
    }
}
