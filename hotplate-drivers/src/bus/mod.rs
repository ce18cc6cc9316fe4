//! Bit-banged buses

pub mod two_wire;

pub use two_wire::{Line, PinPair, SignalLines, Stream, TwoWire};
