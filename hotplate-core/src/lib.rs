//! Board-agnostic control logic for the hot plate firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Sensor conversion (raw ADC counts to °C and mV)
//! - Bang-bang actuator decision with the under-voltage interlock
//! - Set points with validated persistence
//! - Process phases (heat, hold, cool, fault) and the mode pipelines
//! - The controller driver loop that ties them together
//! - Hardware abstraction traits for the heater, display and buttons

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod process;
pub mod sensors;
pub mod state;
pub mod traits;
pub mod units;

/// Firmware version shown on the boot banner
pub const VERSION: &str = "Version 1.0";
