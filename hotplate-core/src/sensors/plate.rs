//! ADC-backed plate sensors

use hotplate_hal::{AdcChannel, AdcReader};

use super::conversion::{celsius_from_mean, millivolts_from_mean, SUPPLY_SAMPLES, TEMP_SAMPLES};
use crate::traits::PlateSensors;
use crate::units::{Celsius, Millivolts};

/// Plate temperature probe and supply divider on one ADC
///
/// Every reading blocks for its whole burst of conversions.
pub struct Sensors<A> {
    adc: A,
}

impl<A: AdcReader> Sensors<A> {
    /// Create sensors reading through `adc`
    pub fn new(adc: A) -> Self {
        Self { adc }
    }

    /// Get access to the underlying ADC
    pub fn adc(&self) -> &A {
        &self.adc
    }

    fn accumulate(&mut self, channel: AdcChannel, count: u8) -> u32 {
        (0..count)
            .map(|_| self.adc.read_channel(channel) as u32)
            .sum()
    }
}

impl<A: AdcReader> PlateSensors for Sensors<A> {
    fn read_temperature(&mut self) -> Celsius {
        let sum = self.accumulate(AdcChannel::Temperature, TEMP_SAMPLES);
        celsius_from_mean(sum, TEMP_SAMPLES)
    }

    fn read_voltage(&mut self) -> Millivolts {
        let sum = self.accumulate(AdcChannel::Supply, SUPPLY_SAMPLES);
        millivolts_from_mean(sum, SUPPLY_SAMPLES)
    }
}
