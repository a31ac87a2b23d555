//! The fixed-cadence loop tying the button, timer, and display together.
//!
//! Once per [`TICK_PERIOD`] the loop drains the pending button edge (if any),
//! feeds it through [`HoldTimer`] and [`TriplePress`], mirrors the button
//! level to the output pins, and pushes the freshly encoded elapsed-time
//! frame to the display. Edges arriving faster than the tick coalesce to the
//! newest one; that is the accepted contract of the single-slot mailbox.

use defmt::info;
use embassy_rp::gpio::Level;
use embassy_time::{Instant, Ticker};

use crate::hold_timer::HoldTimer;
use crate::led6::Led6;
use crate::output_array::OutputArray;
use crate::remote_button::{ButtonEdge, EdgeEvent, RemoteButton};
use crate::shared_constants::{MIRROR_PIN_COUNT, TICK_PERIOD};
use crate::timer_frame::TimerFrame;
use crate::triple_press::TriplePress;
use crate::{Never, Result};

/// Owns all session state; see the module docs.
pub struct ControlLoop {
    remote_button: &'static RemoteButton,
    led6: Led6<'static>,
    mirror_pins: OutputArray<'static, MIRROR_PIN_COUNT>,
    hold_timer: HoldTimer,
    triple_press: TriplePress,
}

impl ControlLoop {
    /// Creates the loop with fresh (released, unarmed) session state.
    #[must_use]
    pub fn new(
        remote_button: &'static RemoteButton,
        led6: Led6<'static>,
        mirror_pins: OutputArray<'static, MIRROR_PIN_COUNT>,
    ) -> Self {
        Self {
            remote_button,
            led6,
            mirror_pins,
            hold_timer: HoldTimer::new(),
            triple_press: TriplePress::new(),
        }
    }

    /// Runs forever at the tick cadence.
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror pins cannot be written.
    pub async fn run(mut self) -> Result<Never> {
        info!("control loop started, tick {} ms", TICK_PERIOD.as_millis());
        let mut ticker = Ticker::every(TICK_PERIOD);
        let mut last_frame: Option<TimerFrame> = None;
        loop {
            if let Some(event) = self.remote_button.take_pending() {
                self.on_edge(event)?;
            }

            let elapsed = self.hold_timer.elapsed(Instant::now());
            let frame = TimerFrame::from_elapsed(elapsed);
            // The module latches, so identical frames are not resent.
            if last_frame != Some(frame) {
                self.led6.write_frame(frame);
                last_frame = Some(frame);
            }

            ticker.next().await;
        }
    }

    fn on_edge(&mut self, event: EdgeEvent) -> Result<()> {
        info!(
            "remote button {:?} at {} ms",
            event.edge,
            event.at.as_millis()
        );
        self.mirror_pins.set_all(level_for(event.edge))?;

        if let Some(completed) = self.hold_timer.apply_edge(event) {
            if completed.armed_timer {
                info!("timer armed after {} ms hold", completed.held.as_millis());
            }
            if self.triple_press.observe(completed.held) {
                self.hold_timer.reset();
                info!("rapid presses, timer reset");
            }
        }
        Ok(())
    }
}

const fn level_for(edge: ButtonEdge) -> Level {
    if edge.is_pressed() {
        Level::High
    } else {
        Level::Low
    }
}
