//! Persistent set-point storage
//!
//! Every persisted value is a single byte in a fixed slot. The slot map is
//! part of the on-device layout and must not be renumbered.

/// Storage slots for persisted set points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Slot {
    /// Constant-temperature mode target (°C)
    NormalTemp = 0,
    /// Curve preheat target (°C)
    PreheatTemp = 1,
    /// Curve reflow target (°C)
    ReflowTemp = 2,
    /// Curve soak duration (s)
    SoakSeconds = 3,
    /// Curve time above liquidus (s)
    LiquidusSeconds = 4,
}

impl Slot {
    /// All slots in layout order
    pub const ALL: [Slot; 5] = [
        Slot::NormalTemp,
        Slot::PreheatTemp,
        Slot::ReflowTemp,
        Slot::SoakSeconds,
        Slot::LiquidusSeconds,
    ];

    /// Get the slot as a byte address
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a slot from a byte address
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Slot::NormalTemp),
            1 => Some(Slot::PreheatTemp),
            2 => Some(Slot::ReflowTemp),
            3 => Some(Slot::SoakSeconds),
            4 => Some(Slot::LiquidusSeconds),
            _ => None,
        }
    }
}

/// Byte-per-slot persistent storage
///
/// Both operations complete before returning and a stored byte is durable
/// once `store` returns. Implementations report a missing or unreadable
/// slot as the erased value `0xFF`; callers validate every byte they load.
pub trait ConfigStore {
    /// Load the byte held in `slot`
    fn load(&mut self, slot: Slot) -> u8;

    /// Store `value` into `slot`
    fn store(&mut self, slot: Slot, value: u8);
}

/// Value an erased or never-written slot reads as
pub const ERASED: u8 = 0xFF;

// Implement the sequential-storage Key trait when the feature is enabled
#[cfg(feature = "sequential-storage")]
impl sequential_storage::map::Key for Slot {
    fn serialize_into(
        &self,
        buffer: &mut [u8],
    ) -> Result<usize, sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        buffer[0] = self.as_u8();
        Ok(1)
    }

    fn deserialize_from(
        buffer: &[u8],
    ) -> Result<(Self, usize), sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        match Slot::from_u8(buffer[0]) {
            Some(slot) => Ok((slot, 1)),
            None => Err(sequential_storage::map::SerializationError::InvalidFormat),
        }
    }
}
