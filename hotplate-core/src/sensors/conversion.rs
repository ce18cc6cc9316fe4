//! Raw sample to physical unit conversion
//!
//! The probe is read through a fixed linear transfer function:
//!
//! ```text
//! mV = mean(raw) * 5000 / 256
//! °C = (mV - 2637) / -13.6
//! ```
//!
//! The calibration is a hand-derived fit and is reproduced as-is. Higher
//! probe voltage means a colder plate.

use crate::units::{Celsius, Millivolts};

/// Samples averaged per temperature reading
pub const TEMP_SAMPLES: u8 = 100;

/// Samples averaged per supply voltage reading
pub const SUPPLY_SAMPLES: u8 = 20;

/// ADC scale: 5.0 V reference over 256 counts, in mV
pub const MV_PER_COUNT: f32 = 19.531_25;

/// Probe output at 0 °C (mV)
pub const SENSOR_OFFSET_MV: f32 = 2637.0;

/// Probe slope (mV per °C)
pub const SENSOR_SLOPE_MV_PER_C: f32 = -13.6;

/// Scale the mean of `count` samples summing to `sum` into millivolts
///
/// `count` must be non-zero.
pub fn mean_to_mv(sum: u32, count: u8) -> f32 {
    let mean = sum as f32 / count as f32;
    mean * MV_PER_COUNT
}

/// Convert a sample sum into a plate temperature
///
/// Readings colder than 0 °C (probe voltage above the offset) saturate to 0.
pub fn celsius_from_mean(sum: u32, count: u8) -> Celsius {
    let mv = mean_to_mv(sum, count);
    // Float to int casts saturate, so negative temperatures become 0
    Celsius(((mv - SENSOR_OFFSET_MV) / SENSOR_SLOPE_MV_PER_C) as u16)
}

/// Convert a sample sum into a supply voltage
pub fn millivolts_from_mean(sum: u32, count: u8) -> Millivolts {
    Millivolts(mean_to_mv(sum, count) as u16)
}
