//! Flash-backed set-point storage for RP2040
//!
//! The RP2040 has no EEPROM, so each set-point slot is an item in a
//! sequential-storage map in the last 64KB of flash. Writes are
//! wear-levelled across the partition.
//!
//! The map API is async; the controller loop is not, so every operation
//! is driven to completion with `block_on`.

use embassy_futures::block_on;
use embassy_rp::dma::Channel;
use embassy_rp::flash::{Async, Flash};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use hotplate_hal::storage::ERASED;
use hotplate_hal::{ConfigStore, Slot};
use sequential_storage::cache::NoCache;
use sequential_storage::map;

/// Flash storage configuration
pub const FLASH_SIZE: usize = 2 * 1024 * 1024; // 2MB flash on the Pico
pub const CONFIG_PARTITION_SIZE: usize = 64 * 1024; // 64KB for set points
pub const CONFIG_PARTITION_START: usize = FLASH_SIZE - CONFIG_PARTITION_SIZE;

/// Flash range for the config partition
pub const CONFIG_RANGE: core::ops::Range<u32> =
    (CONFIG_PARTITION_START as u32)..(FLASH_SIZE as u32);

/// Scratch space for one map item (key byte plus value byte, with headroom)
const ITEM_BUFFER_SIZE: usize = 16;

/// Storage failures, logged and absorbed by the `ConfigStore` impl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Flash driver error
    Flash,
    /// No free space even after garbage collection
    Full,
    /// Map data failed its checks
    Corrupted,
    /// Any other map error
    Storage,
}

impl<E> From<sequential_storage::Error<E>> for StorageError {
    fn from(err: sequential_storage::Error<E>) -> Self {
        match err {
            sequential_storage::Error::Storage { .. } => StorageError::Flash,
            sequential_storage::Error::FullStorage => StorageError::Full,
            sequential_storage::Error::Corrupted { .. } => StorageError::Corrupted,
            _ => StorageError::Storage,
        }
    }
}

/// RP2040 set-point store
pub struct Rp2040ConfigStore<'d> {
    flash: Flash<'d, FLASH, Async, FLASH_SIZE>,
}

impl<'d> Rp2040ConfigStore<'d> {
    /// Create a new store on the config partition
    pub fn new(flash: Peri<'d, FLASH>, dma: Peri<'d, impl Channel>) -> Self {
        Self {
            flash: Flash::new(flash, dma),
        }
    }

    /// Read one slot, `None` if it was never written
    pub fn try_load(&mut self, slot: Slot) -> Result<Option<u8>, StorageError> {
        let mut buffer = [0u8; ITEM_BUFFER_SIZE];

        let value = block_on(map::fetch_item::<Slot, u8, _>(
            &mut self.flash,
            CONFIG_RANGE,
            &mut NoCache::new(),
            &mut buffer,
            &slot,
        ))?;

        Ok(value)
    }

    /// Write one slot
    pub fn try_store(&mut self, slot: Slot, value: u8) -> Result<(), StorageError> {
        let mut buffer = [0u8; ITEM_BUFFER_SIZE];

        block_on(map::store_item(
            &mut self.flash,
            CONFIG_RANGE,
            &mut NoCache::new(),
            &mut buffer,
            &slot,
            &value,
        ))?;

        Ok(())
    }
}

impl ConfigStore for Rp2040ConfigStore<'_> {
    fn load(&mut self, slot: Slot) -> u8 {
        match self.try_load(slot) {
            Ok(Some(value)) => value,
            Ok(None) => ERASED,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Flash read of {} failed: {}", slot, _e);
                ERASED
            }
        }
    }

    fn store(&mut self, slot: Slot, value: u8) {
        if let Err(_e) = self.try_store(slot, value) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Flash write of {} failed: {}", slot, _e);
        }
    }
}
