//! RP2040-specific HAL for the hot plate firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `hotplate-hal` traits:
//!
//! - GPIO output and input pins (`OutputPin`, `InputPin`)
//! - Blocking two-channel ADC reader (`AdcReader`)
//! - Flash-backed set-point storage (`ConfigStore`)

#![no_std]

pub mod adc;
pub mod flash;
pub mod gpio;

// Re-export shared traits from hotplate-hal for convenience
pub use hotplate_hal::{AdcChannel, AdcReader, ConfigStore, InputPin, OutputPin, Slot};
