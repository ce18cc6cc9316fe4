//! Events that trigger phase transitions

/// Events that can change the process phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseEvent {
    // Program events
    /// A heat phase starts
    EnterHeat,
    /// A hold phase starts
    EnterHold,
    /// The cool phase starts
    EnterCool,
    /// The program ran to completion or was cancelled from Cool
    ProgramFinished,

    // Safety events
    /// Supply dropped below the floor during a heating phase
    UnderVoltage,
    /// Operator pressed Select on the fault screen
    Acknowledge,
}
