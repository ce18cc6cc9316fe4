//! Process sequencing
//!
//! A mode is a pipeline of phases. Each phase runs as a loop of ticks, and
//! every tick reports a [`TickOutcome`] to the driver loop in
//! [`Controller`], which sequences phases and latches faults.
//!
//! ```text
//! Idle ──► Normal: edit ──► Heat(target) ──► Cool
//!    │
//!    └───► Curve:  edit ×4 ──► Heat(preheat) ──► Hold(soak)
//!                          ──► Heat(reflow)  ──► Hold(liquidus) ──► Cool
//!
//! any heating tick ──(supply < floor)──► Fault ──(Select)──► Idle
//! ```

pub mod controller;
pub mod editor;
pub mod phase;
pub mod program;
pub mod screens;

pub use controller::Controller;
pub use editor::{edit_step, menu_step, EditStep, MenuStep};
pub use phase::{ActivePhase, Phase, ProgramOutcome, TickOutcome};
pub use program::{Mode, Program, MAX_PHASES};
