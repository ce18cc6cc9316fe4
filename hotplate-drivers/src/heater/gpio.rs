//! Plate element gate
//!
//! The element is switched by a MOSFET whose gate hangs off one GPIO.
//! Boards with an inverting gate driver need the element on at a low level.

use hotplate_core::traits::HeaterOutput;
use hotplate_hal::{Level, OutputPin};

/// Element gate on a GPIO
pub struct GpioHeater<P> {
    gate: P,
    /// Gate level that energizes the element
    on_level: Level,
    on: bool,
}

impl<P: OutputPin> GpioHeater<P> {
    /// Take the gate pin and drive the element off
    ///
    /// `active_low` is set when the element conducts with the gate low.
    pub fn new(gate: P, active_low: bool) -> Self {
        let on_level = if active_low { Level::Low } else { Level::High };
        let mut heater = Self {
            gate,
            on_level,
            on: false,
        };
        heater.set_on(false);
        heater
    }

    /// Gate driven high energizes the element
    pub fn new_active_high(gate: P) -> Self {
        Self::new(gate, false)
    }

    /// Gate driven low energizes the element
    pub fn new_active_low(gate: P) -> Self {
        Self::new(gate, true)
    }

    /// Get access to the gate pin
    pub fn pin(&self) -> &P {
        &self.gate
    }
}

impl<P: OutputPin> HeaterOutput for GpioHeater<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        let level = if on { self.on_level } else { !self.on_level };
        self.gate.set_level(level);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
