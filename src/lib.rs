//! Shared items for the wheel timer project.
#![no_std]

mod bit_frame_led6;
#[cfg(feature = "pico1")]
mod control_loop;
mod error;
#[cfg(feature = "pico1")]
mod hardware;
mod hold_timer;
#[cfg(feature = "pico1")]
mod led6;
#[cfg(feature = "pico1")]
mod output_array;
mod remote_button;
mod shared_constants;
mod timer_frame;
mod triple_press;

// Re-export commonly used items
pub use bit_frame_led6::BitFrameLed6;
#[cfg(feature = "pico1")]
pub use control_loop::ControlLoop;
pub use error::{Error, Never, Result};
#[cfg(feature = "pico1")]
pub use hardware::Hardware;
pub use hold_timer::{CompletedHold, HoldTimer};
#[cfg(feature = "pico1")]
pub use led6::{Led6, Led6Static};
#[cfg(feature = "pico1")]
pub use output_array::OutputArray;
pub use remote_button::{ButtonEdge, EdgeEvent, RemoteButton};
pub use shared_constants::*;
pub use timer_frame::{Glyph, Point, TimerFrame};
pub use triple_press::TriplePress;
