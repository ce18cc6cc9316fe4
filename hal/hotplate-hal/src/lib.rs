//! Hotplate Hardware Abstraction Layer
//!
//! This crate defines the capability traits the controller needs from the
//! board. Chip-specific HALs (currently RP2040) implement them, and the core
//! and driver crates only ever see these traits, so every piece of control
//! and protocol logic can be exercised on the host with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  hotplate-firmware (board wiring)       │
//! └─────────────────────────────────────────┘
//!            │                   │
//!            ▼                   ▼
//! ┌───────────────────┐ ┌───────────────────┐
//! │  hotplate-core    │ │ hotplate-drivers  │
//! └───────────────────┘ └───────────────────┘
//!            │                   │
//!            ▼                   ▼
//! ┌─────────────────────────────────────────┐
//! │  hotplate-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!          ┌─────────────────────┐
//!          │ hotplate-hal-rp2040 │
//!          └─────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`adc::AdcReader`] - 8-bit sample acquisition per channel
//! - [`storage::ConfigStore`] - One-byte persistent slots

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod storage;

// Re-export key traits at crate root for convenience
pub use adc::{AdcChannel, AdcReader};
pub use gpio::{InputPin, Level, OutputPin};
pub use storage::{ConfigStore, Slot};
