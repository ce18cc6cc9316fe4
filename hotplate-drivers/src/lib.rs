//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in hotplate-core, built
//! on the pin capabilities of hotplate-hal:
//!
//! - Two-wire bus bit-banged over two output pins
//! - SSD1306 OLED text display with a 6x8 font
//! - GPIO heater output (MOSFET gate)
//! - Three-button input panel

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod display;
pub mod heater;
pub mod input;
