//! EEPROM interface trait
//!
//! This module defines the byte-level EEPROM interface that driver implementations
//! must provide. Everything in [`crate::eeprom`] is built on these four operations.

use crate::platform::Result;

/// EEPROM interface trait
///
/// Drivers expose single-byte blocking access to the device's EEPROM array.
///
/// # EEPROM Characteristics
///
/// - Byte-addressable, no erase step (unlike Flash)
/// - Reads are fast; writes take several milliseconds (~3.3 ms on AVR)
/// - Each cell tolerates a bounded number of write cycles (~100k on AVR)
/// - The device reports busy while a write is in progress
///
/// # Contract
///
/// - `read_byte` and `write_byte` block until the device is ready, then complete
/// - Methods take `&self`: a driver stands for a register block, not owned data,
///   and uses interior mutability where it keeps state
/// - The storage layer never validates addresses; a driver decides what an
///   access at or beyond [`capacity`](EepromInterface::capacity) does
/// - No mutual exclusion is implied. If an interrupt handler shares the driver,
///   read-modify-write sequences built on top of it can lose updates
///
/// # Memory Layout (ATmega328P)
///
/// ```text
/// [Cell 0]     0x000
/// ...
/// [Cell 1023]  0x3FF   (E2END)
/// ```
pub trait EepromInterface {
    /// Read one byte
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Eeprom(EepromError::InvalidAddress)` if the driver
    /// rejects `address`.
    /// Returns `PlatformError::Eeprom(EepromError::ReadFailed)` if the read fails.
    fn read_byte(&self, address: usize) -> Result<u8>;

    /// Write one byte
    ///
    /// Always commits, even when `value` equals the stored byte. Callers wanting
    /// to save wear compare first (see [`CellRef::update`](crate::CellRef::update)).
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Eeprom(EepromError::InvalidAddress)` if the driver
    /// rejects `address`.
    /// Returns `PlatformError::Eeprom(EepromError::WriteFailed)` if the write fails.
    fn write_byte(&self, address: usize, value: u8) -> Result<()>;

    /// Check whether the device can accept a new operation without blocking
    fn is_ready(&self) -> bool;

    /// Get total EEPROM size
    ///
    /// Returns the number of addressable bytes. Fixed for the device's lifetime.
    fn capacity(&self) -> usize;
}

impl<T: EepromInterface + ?Sized> EepromInterface for &T {
    fn read_byte(&self, address: usize) -> Result<u8> {
        (**self).read_byte(address)
    }

    fn write_byte(&self, address: usize, value: u8) -> Result<()> {
        (**self).write_byte(address, value)
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }
}
