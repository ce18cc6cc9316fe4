//! Physical units
//!
//! Integer newtypes keep temperatures and voltages from being mixed up at
//! the control seams.

/// Whole degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Celsius(pub u16);

/// Millivolts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millivolts(pub u16);

impl Celsius {
    /// Raw value in degrees
    pub const fn degrees(self) -> u16 {
        self.0
    }
}

impl Millivolts {
    /// Raw value in millivolts
    pub const fn millivolts(self) -> u16 {
        self.0
    }
}

impl From<u8> for Celsius {
    fn from(value: u8) -> Self {
        Celsius(value as u16)
    }
}
