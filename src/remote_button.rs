//! The inbound edge-event boundary for the remote button.
//!
//! The wireless peer reports the button as discrete press/release packets.
//! [`RemoteButton`] validates each payload, timestamps it, and holds at most one
//! pending [`EdgeEvent`] (latest wins). The control loop drains the slot once
//! per tick with [`take_pending`](RemoteButton::take_pending), so a consumed
//! event is never seen twice.
//!
//! Unlike the display devices in this crate, `RemoteButton` spawns no task of
//! its own: the feeder (radio callback or bench button task) and the control
//! loop meet at the static slot.

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::Instant;

use crate::shared_constants::{WIRE_PRESSED, WIRE_RELEASED};

// ===== Public API ===========================================================

/// The two observable transitions of the remote button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, defmt::Format)]
pub enum ButtonEdge {
    Press,
    #[default]
    Release,
}

impl ButtonEdge {
    /// Decodes a wire payload byte. Returns `None` for anything that is not a
    /// valid edge; such payloads must cause no state change anywhere.
    #[must_use]
    pub const fn from_wire(raw: i8) -> Option<Self> {
        match raw {
            WIRE_PRESSED => Some(Self::Press),
            WIRE_RELEASED => Some(Self::Release),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::Press)
    }
}

/// A timestamped press or release notification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, defmt::Format)]
pub struct EdgeEvent {
    pub edge: ButtonEdge,
    /// When the notification arrived, not when the packet was sent.
    pub at: Instant,
}

/// Single-slot mailbox for the most recent unconsumed [`EdgeEvent`].
///
/// Declare one as a `static` and share it between the feeder context and the
/// control loop. If the loop falls behind, the slot keeps only the newest
/// event; the stale one is dropped rather than queued.
pub struct RemoteButton(Signal<CriticalSectionRawMutex, EdgeEvent>);

impl RemoteButton {
    /// Creates the static slot.
    #[must_use]
    pub const fn new_static() -> Self {
        Self(Signal::new())
    }

    /// Feeds one wire payload byte, timestamping it with `at`.
    ///
    /// Returns the accepted edge, or `None` if the payload is not a valid
    /// edge (in which case nothing is stored).
    pub fn on_wire_event(&self, raw: i8, at: Instant) -> Option<ButtonEdge> {
        let edge = ButtonEdge::from_wire(raw)?;
        self.publish(EdgeEvent { edge, at });
        Some(edge)
    }

    /// Stores `event` as the pending event, replacing any unconsumed one.
    pub fn publish(&self, event: EdgeEvent) {
        self.0.signal(event);
    }

    /// Takes the pending event, if any. Each event is returned at most once.
    pub fn take_pending(&self) -> Option<EdgeEvent> {
        self.0.try_take()
    }

    /// Waits until an event is pending, then takes it.
    ///
    /// The control loop polls with [`take_pending`](Self::take_pending)
    /// instead; this is for feeders and tests that block on the next edge.
    pub async fn wait(&self) -> EdgeEvent {
        self.0.wait().await
    }
}
