//! Set-point editor and mode menu steps
//!
//! One step per editor tick. At most one action applies per step, in
//! priority order: Increment, then Decrement, then Select.

use crate::config::SetPointKind;
use crate::traits::Inputs;

use super::program::Mode;

/// Outcome of one editor tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditStep {
    /// New value to show
    Set(u8),
    /// Value accepted
    Confirm,
    /// Nothing to do this tick
    Wait,
}

/// Outcome of one menu tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuStep {
    /// Move the marker
    Move(Mode),
    /// Mode chosen
    Choose(Mode),
    /// Nothing to do this tick
    Wait,
}

/// Apply one tick of input to a set point being edited
///
/// A held button at its bound falls through to the next one, so holding
/// Increment at max while pressing Select still confirms.
pub fn edit_step(kind: SetPointKind, value: u8, inputs: Inputs) -> EditStep {
    let range = kind.range();

    if inputs.increment && value < *range.end() {
        EditStep::Set(value + 1)
    } else if inputs.decrement && value > *range.start() {
        EditStep::Set(value - 1)
    } else if inputs.select {
        EditStep::Confirm
    } else {
        EditStep::Wait
    }
}

/// Apply one tick of input to the mode menu
pub fn menu_step(current: Mode, inputs: Inputs) -> MenuStep {
    if inputs.increment && current == Mode::Normal {
        MenuStep::Move(Mode::Curve)
    } else if inputs.decrement && current == Mode::Curve {
        MenuStep::Move(Mode::Normal)
    } else if inputs.select {
        MenuStep::Choose(current)
    } else {
        MenuStep::Wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: Inputs = Inputs {
        increment: true,
        decrement: true,
        select: true,
    };

    #[test]
    fn test_increment_wins() {
        assert_eq!(
            edit_step(SetPointKind::NormalTemp, 120, ALL),
            EditStep::Set(121)
        );
    }

    #[test]
    fn test_bounds_fall_through() {
        // At max, Increment is ignored and Decrement applies
        assert_eq!(
            edit_step(SetPointKind::NormalTemp, 180, ALL),
            EditStep::Set(179)
        );
        // At min with only Decrement held, nothing happens
        assert_eq!(
            edit_step(SetPointKind::NormalTemp, 50, Inputs::DECREMENT),
            EditStep::Wait
        );
        // At max with Increment and Select, Select confirms
        let inputs = Inputs {
            increment: true,
            select: true,
            ..Inputs::NONE
        };
        assert_eq!(
            edit_step(SetPointKind::NormalTemp, 180, inputs),
            EditStep::Confirm
        );
    }

    #[test]
    fn test_seconds_go_to_zero() {
        assert_eq!(
            edit_step(SetPointKind::SoakSeconds, 1, Inputs::DECREMENT),
            EditStep::Set(0)
        );
        assert_eq!(
            edit_step(SetPointKind::SoakSeconds, 0, Inputs::DECREMENT),
            EditStep::Wait
        );
    }

    #[test]
    fn test_menu() {
        assert_eq!(
            menu_step(Mode::Normal, Inputs::INCREMENT),
            MenuStep::Move(Mode::Curve)
        );
        assert_eq!(menu_step(Mode::Curve, Inputs::INCREMENT), MenuStep::Wait);
        assert_eq!(
            menu_step(Mode::Curve, Inputs::DECREMENT),
            MenuStep::Move(Mode::Normal)
        );
        assert_eq!(
            menu_step(Mode::Curve, Inputs::SELECT),
            MenuStep::Choose(Mode::Curve)
        );
        assert_eq!(menu_step(Mode::Normal, Inputs::NONE), MenuStep::Wait);
    }
}
