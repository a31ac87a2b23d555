use embassy_rp::gpio::{self, Level};
use embedded_hal::digital::OutputPin;

use crate::Result;

/// A fixed set of output pins always driven to the same level.
pub struct OutputArray<'a, const N: usize>([gpio::Output<'a>; N]);

impl<'a, const N: usize> OutputArray<'a, N> {
    pub fn new(outputs: [gpio::Output<'a>; N]) -> Self {
        Self(outputs)
    }

    #[inline]
    #[must_use = "Possible error result should not be ignored"]
    // on some hardware (but not here), setting a pin can fail, so we return a Result
    pub fn set_all(&mut self, level: Level) -> Result<()> {
        let state: bool = level.into();
        for output in &mut self.0 {
            output.set_state(state.into())?;
        }
        Ok(())
    }
}
