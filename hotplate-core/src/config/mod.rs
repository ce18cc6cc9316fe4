//! Configuration types
//!
//! Compile-time controller tuning plus the operator set points persisted in
//! one-byte storage slots.

pub mod controller;
pub mod setpoints;

pub use controller::ControllerConfig;
pub use setpoints::{SetPointKind, SetPoints, Unit};
