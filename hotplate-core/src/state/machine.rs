//! Process phase definition
//!
//! Heater permission and screen selection are a function of the current
//! phase.

use super::events::PhaseEvent;

/// Process phases; exactly one is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessPhase {
    /// Mode menu and set-point editing; heater off
    #[default]
    Idle,
    /// Driving the plate towards a target
    Heat,
    /// Regulating at a target for a counted duration
    Hold,
    /// Heater off, showing temperature until cancelled
    Cool,
    /// Supply fault latched; heater off until acknowledged
    Fault,
}

impl ProcessPhase {
    /// Check if this phase allows heater operation
    pub fn heater_allowed(&self) -> bool {
        matches!(self, ProcessPhase::Heat | ProcessPhase::Hold)
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: PhaseEvent) -> Self {
        use PhaseEvent::*;
        use ProcessPhase::*;

        match (self, event) {
            // Program start and sequencing
            (Idle | Heat | Hold, EnterHeat) => Heat,
            (Idle | Heat | Hold, EnterHold) => Hold,
            (Idle | Heat | Hold, EnterCool) => Cool,

            // Program end
            (Heat | Hold | Cool, ProgramFinished) => Idle,

            // Under-voltage is only monitored while heating
            (Heat | Hold, UnderVoltage) => Fault,

            // Fault latches until acknowledged
            (Fault, Acknowledge) => Idle,

            // Default: stay in current phase
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_flow() {
        let heat = ProcessPhase::Idle.transition(PhaseEvent::EnterHeat);
        assert_eq!(heat, ProcessPhase::Heat);

        let cool = heat.transition(PhaseEvent::EnterCool);
        assert_eq!(cool, ProcessPhase::Cool);

        let idle = cool.transition(PhaseEvent::ProgramFinished);
        assert_eq!(idle, ProcessPhase::Idle);
    }

    #[test]
    fn test_curve_mode_flow() {
        let mut phase = ProcessPhase::Idle;
        for (event, expected) in [
            (PhaseEvent::EnterHeat, ProcessPhase::Heat),
            (PhaseEvent::EnterHold, ProcessPhase::Hold),
            (PhaseEvent::EnterHeat, ProcessPhase::Heat),
            (PhaseEvent::EnterHold, ProcessPhase::Hold),
            (PhaseEvent::EnterCool, ProcessPhase::Cool),
            (PhaseEvent::ProgramFinished, ProcessPhase::Idle),
        ] {
            phase = phase.transition(event);
            assert_eq!(phase, expected);
        }
    }

    #[test]
    fn test_under_voltage_from_heating_phases() {
        for phase in [ProcessPhase::Heat, ProcessPhase::Hold] {
            assert_eq!(
                phase.transition(PhaseEvent::UnderVoltage),
                ProcessPhase::Fault
            );
        }
    }

    #[test]
    fn test_under_voltage_ignored_when_not_heating() {
        assert_eq!(
            ProcessPhase::Idle.transition(PhaseEvent::UnderVoltage),
            ProcessPhase::Idle
        );
        assert_eq!(
            ProcessPhase::Cool.transition(PhaseEvent::UnderVoltage),
            ProcessPhase::Cool
        );
    }

    #[test]
    fn test_fault_latches_until_acknowledged() {
        let fault = ProcessPhase::Fault;
        for event in [
            PhaseEvent::EnterHeat,
            PhaseEvent::EnterHold,
            PhaseEvent::EnterCool,
            PhaseEvent::ProgramFinished,
        ] {
            assert_eq!(fault.transition(event), ProcessPhase::Fault);
        }

        assert_eq!(fault.transition(PhaseEvent::Acknowledge), ProcessPhase::Idle);
    }

    #[test]
    fn test_only_under_voltage_enters_fault() {
        let phases = [
            ProcessPhase::Idle,
            ProcessPhase::Heat,
            ProcessPhase::Hold,
            ProcessPhase::Cool,
        ];
        let events = [
            PhaseEvent::EnterHeat,
            PhaseEvent::EnterHold,
            PhaseEvent::EnterCool,
            PhaseEvent::ProgramFinished,
            PhaseEvent::UnderVoltage,
            PhaseEvent::Acknowledge,
        ];

        for phase in phases {
            for event in events {
                let entered = phase.transition(event) == ProcessPhase::Fault;
                assert_eq!(entered, event == PhaseEvent::UnderVoltage && phase.heater_allowed());
            }
        }
    }

    #[test]
    fn test_heater_allowed() {
        assert!(ProcessPhase::Heat.heater_allowed());
        assert!(ProcessPhase::Hold.heater_allowed());
        assert!(!ProcessPhase::Idle.heater_allowed());
        assert!(!ProcessPhase::Cool.heater_allowed());
        assert!(!ProcessPhase::Fault.heater_allowed());
    }
}
