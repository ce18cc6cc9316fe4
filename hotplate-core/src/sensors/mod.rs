//! Plate sensing
//!
//! Converts averaged raw ADC samples into plate temperature and supply
//! voltage.

pub mod conversion;
pub mod plate;

pub use conversion::{celsius_from_mean, millivolts_from_mean};
pub use plate::Sensors;
