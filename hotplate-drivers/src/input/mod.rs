//! Operator inputs

pub mod buttons;

pub use buttons::Buttons;
