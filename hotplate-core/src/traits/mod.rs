//! Hardware abstraction traits
//!
//! These traits define the interface between the process controller and
//! the board-specific drivers.

pub mod display;
pub mod heater;
pub mod input;

pub use display::{TextDisplay, TextDisplayExt};
pub use heater::{HeaterOutput, PlateSensors};
pub use input::{InputSource, Inputs};
