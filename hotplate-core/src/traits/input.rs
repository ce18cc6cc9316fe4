//! Operator input trait

/// Button state sampled once per tick
///
/// `increment` and `decrement` stay true while held; `select` is expected
/// to be an edge so one press confirms or cancels exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Inputs {
    /// Raise the value being edited / move the menu marker down
    pub increment: bool,
    /// Lower the value being edited / move the menu marker up
    pub decrement: bool,
    /// Confirm, cancel the current phase or acknowledge a fault
    pub select: bool,
}

impl Inputs {
    /// No buttons pressed
    pub const NONE: Self = Self {
        increment: false,
        decrement: false,
        select: false,
    };

    /// Only Increment pressed
    pub const INCREMENT: Self = Self {
        increment: true,
        ..Self::NONE
    };

    /// Only Decrement pressed
    pub const DECREMENT: Self = Self {
        decrement: true,
        ..Self::NONE
    };

    /// Only Select pressed
    pub const SELECT: Self = Self {
        select: true,
        ..Self::NONE
    };
}

/// Source of operator input events
pub trait InputSource {
    /// Sample the buttons for this tick
    fn poll(&mut self) -> Inputs;
}
