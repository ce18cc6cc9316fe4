//! Three-button panel
//!
//! Increment and Decrement report their level, so a held button repeats
//! at the caller's polling cadence. Select reports only its rising edge:
//! one press confirms or cancels once, however long it is held.

use hotplate_core::traits::{InputSource, Inputs};
use hotplate_hal::InputPin;

/// Active-high Increment, Decrement and Select buttons
pub struct Buttons<I, D, S> {
    increment: I,
    decrement: D,
    select: S,
    select_was_high: bool,
}

impl<I: InputPin, D: InputPin, S: InputPin> Buttons<I, D, S> {
    /// Create the panel
    ///
    /// A Select already held at construction is not reported until it
    /// has been released and pressed again.
    pub fn new(increment: I, decrement: D, select: S) -> Self {
        let select_was_high = select.is_high();
        Self {
            increment,
            decrement,
            select,
            select_was_high,
        }
    }
}

impl<I: InputPin, D: InputPin, S: InputPin> InputSource for Buttons<I, D, S> {
    fn poll(&mut self) -> Inputs {
        let select_high = self.select.is_high();
        let pressed = select_high && !self.select_was_high;
        self.select_was_high = select_high;

        Inputs {
            increment: self.increment.is_high(),
            decrement: self.decrement.is_high(),
            select: pressed,
        }
    }
}
