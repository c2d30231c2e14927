//! Mock platform implementation for testing
//!
//! This module provides a mock EEPROM driver that can be used for unit testing
//! without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use pico_eeprom::platform::mock::MockEeprom;
//! use pico_eeprom::platform::traits::EepromInterface;
//!
//! let eeprom = MockEeprom::with_capacity(16);
//! eeprom.write_byte(3, 0x42)?;
//! assert_eq!(eeprom.read_byte(3)?, 0x42);
//! assert_eq!(eeprom.write_count(3), 1);
//! ```

#![cfg(any(test, feature = "mock"))]

mod eeprom;

pub use eeprom::{MockEeprom, DEFAULT_CAPACITY, ERASED_VALUE};
