//! Mode pipelines

use heapless::Vec;

use crate::config::{SetPointKind, SetPoints};
use crate::units::Celsius;

use super::phase::Phase;

/// Longest program (the curve)
pub const MAX_PHASES: usize = 5;

/// Operating mode chosen from the idle menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Heat to one temperature until cancelled, then cool
    #[default]
    Normal,
    /// Preheat, soak, reflow, liquidus hold, then cool
    Curve,
}

impl Mode {
    /// Menu order
    pub const ALL: [Mode; 2] = [Mode::Normal, Mode::Curve];

    /// Menu entry text
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "Normal",
            Mode::Curve => "Curve",
        }
    }

    /// Set points edited before the program starts, in order
    pub fn set_points(self) -> &'static [SetPointKind] {
        match self {
            Mode::Normal => &[SetPointKind::NormalTemp],
            Mode::Curve => &SetPointKind::CURVE,
        }
    }
}

/// The phases a mode runs, built from the current set points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    mode: Mode,
    phases: Vec<Phase, MAX_PHASES>,
}

impl Program {
    /// Build the program for `mode`
    pub fn for_mode(mode: Mode, set_points: &SetPoints) -> Self {
        match mode {
            Mode::Normal => Self::normal(set_points),
            Mode::Curve => Self::curve(set_points),
        }
    }

    /// Heat to the normal target until cancelled, then cool
    pub fn normal(set_points: &SetPoints) -> Self {
        let phases = [
            Phase::Heat {
                target: set_points.normal_target(),
                stop_on_reached: false,
            },
            Phase::Cool,
        ];

        Self {
            mode: Mode::Normal,
            phases: phases.into_iter().collect(),
        }
    }

    /// Reflow curve
    pub fn curve(set_points: &SetPoints) -> Self {
        let preheat = Celsius::from(set_points.preheat_temp);
        let reflow = Celsius::from(set_points.reflow_temp);

        let phases = [
            Phase::Heat {
                target: preheat,
                stop_on_reached: true,
            },
            Phase::Hold {
                target: preheat,
                seconds: set_points.soak_s,
            },
            Phase::Heat {
                target: reflow,
                stop_on_reached: true,
            },
            Phase::Hold {
                target: reflow,
                seconds: set_points.liquidus_s,
            },
            Phase::Cool,
        ];

        Self {
            mode: Mode::Curve,
            phases: phases.into_iter().collect(),
        }
    }

    /// Mode this program implements
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Phases in execution order
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }
}
