//! Heater control
//!
//! Bang-bang actuation with the supply under-voltage interlock.

pub mod actuator;

pub use actuator::{ActuatorController, Decision, MIN_SUPPLY};
