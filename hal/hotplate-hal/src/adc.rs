//! Analog acquisition
//!
//! The controller only ever reads two analog inputs, and only as
//! left-justified 8-bit samples.

/// Analog input identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// Plate temperature probe
    Temperature,
    /// Supply voltage divider
    Supply,
}

/// Single-conversion ADC access
///
/// Each call starts one conversion and blocks until it completes. There is
/// no error path: implementations must return a sample that drives the
/// controller towards a safe state if the conversion itself fails.
pub trait AdcReader {
    /// Acquire one 8-bit sample from `channel`
    fn read_channel(&mut self, channel: AdcChannel) -> u8;
}
