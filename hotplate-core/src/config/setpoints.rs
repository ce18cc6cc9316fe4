//! Operator set points
//!
//! Each set point is one byte in its own storage slot, with a static range
//! and a compiled default. Stored bytes are validated on load: anything out
//! of range (including an erased `0xFF` slot) silently falls back to the
//! default.

use core::ops::RangeInclusive;

use hotplate_hal::{ConfigStore, Slot};

use crate::units::Celsius;

/// Hottest set point any mode accepts (°C)
pub const MAX_TEMP_C: u8 = 180;

/// Coolest set point any mode accepts (°C)
pub const MIN_TEMP_C: u8 = 50;

/// Unit a set point is edited in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    /// Degrees Celsius
    Celsius,
    /// Seconds
    Seconds,
}

impl Unit {
    /// Suffix drawn after the value
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Celsius => "C",
            Unit::Seconds => "s",
        }
    }
}

/// Identifies one operator set point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetPointKind {
    /// Constant-temperature mode target
    NormalTemp,
    /// Curve preheat target
    PreheatTemp,
    /// Curve soak duration at preheat
    SoakSeconds,
    /// Curve reflow target
    ReflowTemp,
    /// Curve time held at reflow
    LiquidusSeconds,
}

impl SetPointKind {
    /// Set points edited before a curve run, in editing order
    pub const CURVE: [SetPointKind; 4] = [
        SetPointKind::PreheatTemp,
        SetPointKind::SoakSeconds,
        SetPointKind::ReflowTemp,
        SetPointKind::LiquidusSeconds,
    ];

    /// Storage slot holding this set point
    pub fn slot(self) -> Slot {
        match self {
            SetPointKind::NormalTemp => Slot::NormalTemp,
            SetPointKind::PreheatTemp => Slot::PreheatTemp,
            SetPointKind::ReflowTemp => Slot::ReflowTemp,
            SetPointKind::SoakSeconds => Slot::SoakSeconds,
            SetPointKind::LiquidusSeconds => Slot::LiquidusSeconds,
        }
    }

    /// Accepted values
    pub fn range(self) -> RangeInclusive<u8> {
        match self {
            SetPointKind::NormalTemp | SetPointKind::PreheatTemp | SetPointKind::ReflowTemp => {
                MIN_TEMP_C..=MAX_TEMP_C
            }
            SetPointKind::SoakSeconds => 0..=240,
            SetPointKind::LiquidusSeconds => 0..=120,
        }
    }

    /// Compiled default used when the stored byte is unusable
    pub fn default_value(self) -> u8 {
        match self {
            SetPointKind::NormalTemp => 50,
            SetPointKind::PreheatTemp => 100,
            SetPointKind::ReflowTemp => 150,
            SetPointKind::SoakSeconds => 90,
            SetPointKind::LiquidusSeconds => 45,
        }
    }

    /// Editor screen title
    pub fn title(self) -> &'static str {
        match self {
            SetPointKind::NormalTemp => "Set temperature",
            SetPointKind::PreheatTemp => "Preheat temp",
            SetPointKind::SoakSeconds => "Soak time",
            SetPointKind::ReflowTemp => "Reflow temp",
            SetPointKind::LiquidusSeconds => "Liquidus time",
        }
    }

    /// Editor value label
    pub fn label(self) -> &'static str {
        match self {
            SetPointKind::NormalTemp => "Set Temp: ",
            SetPointKind::PreheatTemp => "Preheat: ",
            SetPointKind::SoakSeconds => "Soak: ",
            SetPointKind::ReflowTemp => "Reflow: ",
            SetPointKind::LiquidusSeconds => "Liquidus: ",
        }
    }

    /// Unit the value is edited in
    pub fn unit(self) -> Unit {
        match self {
            SetPointKind::NormalTemp | SetPointKind::PreheatTemp | SetPointKind::ReflowTemp => {
                Unit::Celsius
            }
            SetPointKind::SoakSeconds | SetPointKind::LiquidusSeconds => Unit::Seconds,
        }
    }

    /// Validate a stored byte, returning it only if in range
    pub fn validate(self, stored: u8) -> Option<u8> {
        self.range().contains(&stored).then_some(stored)
    }
}

/// All operator set points
///
/// Owned by the controller for the whole run; phases only borrow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SetPoints {
    /// Constant-temperature mode target (°C)
    pub normal_temp: u8,
    /// Curve preheat target (°C)
    pub preheat_temp: u8,
    /// Curve soak duration (s)
    pub soak_s: u8,
    /// Curve reflow target (°C)
    pub reflow_temp: u8,
    /// Curve time at reflow (s)
    pub liquidus_s: u8,
}

impl Default for SetPoints {
    fn default() -> Self {
        Self {
            normal_temp: SetPointKind::NormalTemp.default_value(),
            preheat_temp: SetPointKind::PreheatTemp.default_value(),
            soak_s: SetPointKind::SoakSeconds.default_value(),
            reflow_temp: SetPointKind::ReflowTemp.default_value(),
            liquidus_s: SetPointKind::LiquidusSeconds.default_value(),
        }
    }
}

impl SetPoints {
    /// Load every set point from `store`, falling back to defaults
    pub fn load<S: ConfigStore>(store: &mut S) -> Self {
        let mut points = Self::default();

        for kind in [SetPointKind::NormalTemp]
            .into_iter()
            .chain(SetPointKind::CURVE)
        {
            let stored = store.load(kind.slot());
            match kind.validate(stored) {
                Some(value) => points.set(kind, value),
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("Stored {} = {} out of range, using default", kind, stored);
                }
            }
        }

        points
    }

    /// Write one set point back to its slot
    pub fn persist<S: ConfigStore>(&self, kind: SetPointKind, store: &mut S) {
        let value = self.get(kind);
        #[cfg(feature = "defmt")]
        defmt::debug!("Persisting {} = {}", kind, value);
        store.store(kind.slot(), value);
    }

    /// Get a set point value
    pub fn get(&self, kind: SetPointKind) -> u8 {
        match kind {
            SetPointKind::NormalTemp => self.normal_temp,
            SetPointKind::PreheatTemp => self.preheat_temp,
            SetPointKind::SoakSeconds => self.soak_s,
            SetPointKind::ReflowTemp => self.reflow_temp,
            SetPointKind::LiquidusSeconds => self.liquidus_s,
        }
    }

    /// Set a set point value, clamped into its range
    pub fn set(&mut self, kind: SetPointKind, value: u8) {
        let range = kind.range();
        let value = value.clamp(*range.start(), *range.end());

        match kind {
            SetPointKind::NormalTemp => self.normal_temp = value,
            SetPointKind::PreheatTemp => self.preheat_temp = value,
            SetPointKind::SoakSeconds => self.soak_s = value,
            SetPointKind::ReflowTemp => self.reflow_temp = value,
            SetPointKind::LiquidusSeconds => self.liquidus_s = value,
        }
    }

    /// Normal mode target as a temperature
    pub fn normal_target(&self) -> Celsius {
        Celsius::from(self.normal_temp)
    }
}
