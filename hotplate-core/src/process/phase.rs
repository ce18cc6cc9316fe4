//! Phase definitions and tick outcomes

use crate::config::ControllerConfig;
use crate::state::PhaseEvent;
use crate::units::Celsius;

/// One stage of a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Regulate towards `target`
    ///
    /// With `stop_on_reached` the phase ends at the first reading at or
    /// above the target; otherwise it runs until cancelled.
    Heat {
        target: Celsius,
        stop_on_reached: bool,
    },
    /// Regulate at `target` for `seconds` one-second ticks
    Hold { target: Celsius, seconds: u8 },
    /// Heater off until cancelled
    Cool,
}

impl Phase {
    /// Event recorded when the phase starts
    pub fn entry_event(&self) -> PhaseEvent {
        match self {
            Phase::Heat { .. } => PhaseEvent::EnterHeat,
            Phase::Hold { .. } => PhaseEvent::EnterHold,
            Phase::Cool => PhaseEvent::EnterCool,
        }
    }

    /// Regulation target, if the phase heats
    pub fn target(&self) -> Option<Celsius> {
        match *self {
            Phase::Heat { target, .. } | Phase::Hold { target, .. } => Some(target),
            Phase::Cool => None,
        }
    }

    /// Screen heading
    pub fn title(&self) -> &'static str {
        match self {
            Phase::Heat { .. } => "Heating...",
            Phase::Hold { .. } => "Holding...",
            Phase::Cool => "Cooling...",
        }
    }
}

/// Result of one phase tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Keep ticking after the phase cadence
    Continue,
    /// Phase over (target reached, countdown done or cancelled)
    PhaseComplete,
    /// Supply fault; the program is abandoned
    Fault,
}

/// Result of running a whole program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProgramOutcome {
    /// Every phase completed or was cancelled through
    Completed,
    /// A fault abandoned the program and was acknowledged
    Faulted,
}

/// A phase in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivePhase {
    phase: Phase,
    remaining: u8,
}

impl ActivePhase {
    /// Start a phase
    pub fn new(phase: Phase) -> Self {
        let remaining = match phase {
            Phase::Hold { seconds, .. } => seconds,
            _ => 0,
        };
        Self { phase, remaining }
    }

    /// The phase being run
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Hold ticks left (always 0 for other phases)
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Consume one hold tick
    pub fn count_down(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Delay between ticks of this phase
    pub fn tick_ms(&self, config: &ControllerConfig) -> u32 {
        match self.phase {
            Phase::Hold { .. } => config.hold_tick_ms,
            _ => config.tick_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_starts_with_full_countdown() {
        let mut active = ActivePhase::new(Phase::Hold {
            target: Celsius(100),
            seconds: 2,
        });
        assert_eq!(active.remaining(), 2);

        active.count_down();
        active.count_down();
        active.count_down();
        assert_eq!(active.remaining(), 0);
    }

    #[test]
    fn test_tick_cadence() {
        let config = ControllerConfig::default();
        let hold = ActivePhase::new(Phase::Hold {
            target: Celsius(100),
            seconds: 1,
        });
        assert_eq!(hold.tick_ms(&config), 1000);
        assert_eq!(ActivePhase::new(Phase::Cool).tick_ms(&config), 10);
    }

    #[test]
    fn test_entry_events() {
        let heat = Phase::Heat {
            target: Celsius(120),
            stop_on_reached: false,
        };
        assert_eq!(heat.entry_event(), PhaseEvent::EnterHeat);
        assert_eq!(heat.target(), Some(Celsius(120)));
        assert_eq!(Phase::Cool.entry_event(), PhaseEvent::EnterCool);
        assert_eq!(Phase::Cool.target(), None);
    }
}
