//! GPIO adapters
//!
//! Thin wrappers giving embassy-rp pins the `hotplate-hal` pin traits.

use embassy_rp::gpio::{Input, Output};

/// Push-pull output pin
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    /// Wrap a configured embassy-rp output
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl hotplate_hal::OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Digital input pin
pub struct RpInput<'d>(Input<'d>);

impl<'d> RpInput<'d> {
    /// Wrap a configured embassy-rp input
    pub fn new(pin: Input<'d>) -> Self {
        Self(pin)
    }
}

impl hotplate_hal::InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
