//! Heater output and plate sensor traits

use crate::units::{Celsius, Millivolts};

/// Plate measurements consumed by every control tick
///
/// Readings block until their acquisitions complete and cannot fail.
/// Takes `&mut self` because ADC reads require mutable access.
pub trait PlateSensors {
    /// Read the current plate temperature
    fn read_temperature(&mut self) -> Celsius;

    /// Read the current supply voltage
    fn read_voltage(&mut self) -> Millivolts;
}

/// Trait for heater output control
///
/// Implementations switch the heating element via GPIO, MOSFET or SSR.
pub trait HeaterOutput {
    /// Energize or de-energize the element
    fn set_on(&mut self, on: bool);

    /// Check if the element is currently energized
    fn is_on(&self) -> bool;
}
