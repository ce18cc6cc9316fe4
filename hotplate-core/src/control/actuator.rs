//! Bang-bang actuator decision
//!
//! The element is fully on below target and fully off at or above it. There
//! is no hysteresis band: the tick cadence bounds the switching frequency.

use crate::units::{Celsius, Millivolts};

/// Minimum supply voltage on the ADC divider
///
/// 2000 mV on the divider is roughly 6.5 V at the supply input.
pub const MIN_SUPPLY: Millivolts = Millivolts(2000);

/// Outcome of one control decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decision {
    /// Switch the element on
    Energize,
    /// Switch the element off
    DeEnergize,
    /// Supply below the safety floor; heating must stop
    Fault,
}

impl Decision {
    /// Heater output level this decision requires
    pub fn heater_on(self) -> bool {
        matches!(self, Decision::Energize)
    }
}

/// Bang-bang controller with under-voltage interlock
///
/// Pure with respect to hardware: the caller applies the decision to the
/// output, which keeps the control law testable on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorController {
    min_supply: Millivolts,
}

impl Default for ActuatorController {
    fn default() -> Self {
        Self::new(MIN_SUPPLY)
    }
}

impl ActuatorController {
    /// Create a controller with the given supply floor
    pub const fn new(min_supply: Millivolts) -> Self {
        Self { min_supply }
    }

    /// Get the supply floor
    pub fn min_supply(&self) -> Millivolts {
        self.min_supply
    }

    /// Decide the heater state for one tick
    ///
    /// The supply check comes first and dominates: an under-voltage reading
    /// is a fault whatever the temperatures say.
    pub fn decide(&self, measured: Celsius, target: Celsius, supply: Millivolts) -> Decision {
        if supply < self.min_supply {
            return Decision::Fault;
        }

        if measured < target {
            Decision::Energize
        } else {
            Decision::DeEnergize
        }
    }
}
