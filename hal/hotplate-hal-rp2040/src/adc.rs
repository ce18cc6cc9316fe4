//! Blocking ADC reader
//!
//! The RP2040 converts to 12 bits; the controller works with 8-bit
//! samples, so each conversion keeps its top eight bits.

use embassy_rp::adc::{Adc, Blocking, Channel};
use hotplate_hal::{AdcChannel, AdcReader};

/// Sample returned when a conversion fails
///
/// Reads as the hottest plate (heater off) on the temperature channel and
/// as 0 mV (under-voltage fault) on the supply channel.
pub const FAILED_SAMPLE: u8 = 0;

/// Reduce a 12-bit conversion to 8 bits
pub const fn to_8bit(raw: u16) -> u8 {
    ((raw >> 4) & 0xFF) as u8
}

/// ADC with the temperature probe and supply divider channels
pub struct RpAdc<'d> {
    adc: Adc<'d, Blocking>,
    temperature: Channel<'d>,
    supply: Channel<'d>,
}

impl<'d> RpAdc<'d> {
    /// Create the reader from a blocking ADC and the two input channels
    pub fn new(adc: Adc<'d, Blocking>, temperature: Channel<'d>, supply: Channel<'d>) -> Self {
        Self {
            adc,
            temperature,
            supply,
        }
    }
}

impl AdcReader for RpAdc<'_> {
    fn read_channel(&mut self, channel: AdcChannel) -> u8 {
        let input = match channel {
            AdcChannel::Temperature => &mut self.temperature,
            AdcChannel::Supply => &mut self.supply,
        };

        match self.adc.blocking_read(input) {
            Ok(raw) => to_8bit(raw),
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("ADC conversion failed on {}: {}", channel, _e);
                FAILED_SAMPLE
            }
        }
    }
}
