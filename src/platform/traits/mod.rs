//! Platform abstraction traits
//!
//! This module defines the traits that driver implementations must provide.

pub mod eeprom;

// Re-export trait interfaces
pub use eeprom::EepromInterface;
