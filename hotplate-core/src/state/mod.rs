//! Process phase bookkeeping
//!
//! The controller's loops do the work; this state machine records which
//! phase is active and rejects transitions that make no sense, so the
//! heater permission and the current phase are always a function of the
//! event history.

pub mod events;
pub mod machine;

pub use events::PhaseEvent;
pub use machine::ProcessPhase;
