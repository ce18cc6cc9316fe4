//! Controller timing and safety tuning

use crate::control::MIN_SUPPLY;
use crate::units::Millivolts;

/// Timing and safety constants for the process controller
///
/// Time is approximated by counting ticks; the sensor acquisitions inside
/// each tick stretch it by a few milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    /// Heat and Cool polling cadence
    pub tick_ms: u32,
    /// One Hold countdown step
    pub hold_tick_ms: u32,
    /// Editor and menu cadence (sets the auto-repeat rate of held buttons)
    pub edit_tick_ms: u32,
    /// Boot banner duration
    pub splash_ms: u32,
    /// Pause after persisting or finishing a program
    pub settle_ms: u32,
    /// Supply safety floor
    pub min_supply: Millivolts,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tick_ms: 10,
            hold_tick_ms: 1000,
            edit_tick_ms: 100,
            splash_ms: 3000,
            settle_ms: 1000,
            min_supply: MIN_SUPPLY,
        }
    }
}
