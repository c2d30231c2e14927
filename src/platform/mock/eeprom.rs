//! Mock EEPROM implementation for testing
//!
//! Provides in-memory EEPROM simulation for unit tests.

extern crate alloc;

use crate::platform::{error::EepromError, traits::EepromInterface, Result};
use crate::{log_debug, log_warn};
use alloc::{vec, vec::Vec};
use core::cell::{Cell, RefCell};

/// Default capacity in bytes (from `EEPROM_MOCK_CAPACITY` at build time)
pub const DEFAULT_CAPACITY: usize = parse_decimal(env!("EEPROM_MOCK_CAPACITY"));

/// Value of a never-written cell (from `EEPROM_MOCK_ERASED` at build time)
pub const ERASED_VALUE: u8 = parse_byte(env!("EEPROM_MOCK_ERASED"));

const fn parse_decimal(text: &str) -> usize {
    let bytes = text.as_bytes();
    assert!(!bytes.is_empty(), "expected a decimal number");
    let mut value = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        assert!(digit.is_ascii_digit(), "expected a decimal number");
        value = value * 10 + (digit - b'0') as usize;
        i += 1;
    }
    value
}

const fn parse_byte(text: &str) -> u8 {
    let value = parse_decimal(text);
    assert!(value <= u8::MAX as usize, "expected a value in 0..=255");
    value as u8
}

/// Mock EEPROM implementation
///
/// Simulates a byte-addressable EEPROM in memory. Supports:
/// - Read/write operations with address validation
/// - Per-cell read and write counters for wear validation
/// - Ready/busy simulation
/// - Interrupt injection between the halves of a read-modify-write
///
/// # Example
///
/// ```ignore
/// use pico_eeprom::platform::mock::MockEeprom;
/// use pico_eeprom::platform::traits::EepromInterface;
///
/// let eeprom = MockEeprom::with_capacity(32);
///
/// eeprom.write_byte(4, 0x55).unwrap();
/// assert_eq!(eeprom.read_byte(4).unwrap(), 0x55);
///
/// // Check wear
/// assert_eq!(eeprom.write_count(4), 1);
/// ```
#[derive(Debug)]
pub struct MockEeprom {
    /// Cell storage (initialized to the erased value)
    storage: RefCell<Vec<u8>>,
    /// Read count per cell
    read_counts: RefCell<Vec<u32>>,
    /// Write count per cell (for wear validation)
    write_counts: RefCell<Vec<u32>>,
    /// Simulated ready flag
    ready: Cell<bool>,
    /// Write delivered right after the next successful read
    pending_interrupt: Cell<Option<(usize, u8)>>,
}

impl MockEeprom {
    /// Create a new mock EEPROM with [`DEFAULT_CAPACITY`] bytes
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new mock EEPROM with `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: RefCell::new(vec![ERASED_VALUE; capacity]),
            read_counts: RefCell::new(vec![0; capacity]),
            write_counts: RefCell::new(vec![0; capacity]),
            ready: Cell::new(true),
            pending_interrupt: Cell::new(None),
        }
    }

    /// Get EEPROM contents (for test verification, not counted)
    pub fn get_contents(&self, address: usize, len: usize) -> Vec<u8> {
        self.storage.borrow()[address..address + len].to_vec()
    }

    /// Preload contents without counting reads or writes
    pub fn preload(&self, address: usize, data: &[u8]) {
        self.storage.borrow_mut()[address..address + data.len()].copy_from_slice(data);
    }

    /// Get number of physical reads at `address`
    pub fn read_count(&self, address: usize) -> u32 {
        self.read_counts.borrow()[address]
    }

    /// Get number of physical writes at `address`
    pub fn write_count(&self, address: usize) -> u32 {
        self.write_counts.borrow()[address]
    }

    /// Get total reads across all cells
    pub fn total_reads(&self) -> u32 {
        self.read_counts.borrow().iter().sum()
    }

    /// Get total writes across all cells
    pub fn total_writes(&self) -> u32 {
        self.write_counts.borrow().iter().sum()
    }

    /// Reset all read and write counters
    pub fn reset_counters(&self) {
        self.read_counts.borrow_mut().fill(0);
        self.write_counts.borrow_mut().fill(0);
    }

    /// Simulate the device being busy (`false`) or idle (`true`)
    ///
    /// While busy, reads and writes fail with `EepromError::NotReady`.
    pub fn set_ready(&self, ready: bool) {
        self.ready.set(ready);
    }

    /// Simulate an interrupt handler writing `value` to `address`
    ///
    /// The write lands immediately after the next successful read, i.e. in the
    /// gap between the read and the write of a read-modify-write sequence.
    pub fn inject_write_after_read(&self, address: usize, value: u8) {
        self.pending_interrupt.set(Some((address, value)));
    }

    fn check(&self, address: usize) -> Result<()> {
        if !self.ready.get() {
            return Err(EepromError::NotReady.into());
        }

        if address >= self.capacity() {
            log_warn!("mock eeprom: access at {} beyond {}", address, self.capacity());
            return Err(EepromError::InvalidAddress.into());
        }

        Ok(())
    }

    fn commit(&self, address: usize, value: u8) {
        self.storage.borrow_mut()[address] = value;
        self.write_counts.borrow_mut()[address] += 1;
    }
}

impl Default for MockEeprom {
    fn default() -> Self {
        Self::new()
    }
}

impl EepromInterface for MockEeprom {
    fn read_byte(&self, address: usize) -> Result<u8> {
        self.check(address)?;

        let value = self.storage.borrow()[address];
        self.read_counts.borrow_mut()[address] += 1;

        if let Some((target, injected)) = self.pending_interrupt.take() {
            if target < self.capacity() {
                log_debug!("mock eeprom: interrupt writes {} to {}", injected, target);
                self.commit(target, injected);
            }
        }

        Ok(value)
    }

    fn write_byte(&self, address: usize, value: u8) -> Result<()> {
        self.check(address)?;
        self.commit(address, value);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready.get()
    }

    fn capacity(&self) -> usize {
        self.storage.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformError;

    #[test]
    fn test_mock_eeprom_read_write() {
        let eeprom = MockEeprom::with_capacity(16);

        eeprom.write_byte(5, 0xA5).unwrap();
        assert_eq!(eeprom.read_byte(5).unwrap(), 0xA5);
    }

    #[test]
    fn test_mock_eeprom_starts_erased() {
        let eeprom = MockEeprom::new();

        assert_eq!(eeprom.capacity(), DEFAULT_CAPACITY);
        assert!(eeprom
            .get_contents(0, DEFAULT_CAPACITY)
            .iter()
            .all(|&b| b == ERASED_VALUE));
    }

    #[test]
    fn test_mock_eeprom_counts_wear() {
        let eeprom = MockEeprom::with_capacity(8);

        eeprom.write_byte(2, 1).unwrap();
        eeprom.write_byte(2, 1).unwrap();
        eeprom.read_byte(2).unwrap();

        assert_eq!(eeprom.write_count(2), 2);
        assert_eq!(eeprom.read_count(2), 1);
        assert_eq!(eeprom.total_writes(), 2);

        eeprom.reset_counters();
        assert_eq!(eeprom.total_reads(), 0);
        assert_eq!(eeprom.total_writes(), 0);
    }

    #[test]
    fn test_mock_eeprom_invalid_address() {
        let eeprom = MockEeprom::with_capacity(8);

        let result = eeprom.write_byte(8, 0);
        assert_eq!(
            result,
            Err(PlatformError::Eeprom(EepromError::InvalidAddress))
        );

        let result = eeprom.read_byte(100);
        assert!(result.is_err());
    }

    #[test]
    fn test_mock_eeprom_not_ready() {
        let eeprom = MockEeprom::with_capacity(8);

        eeprom.set_ready(false);
        assert!(!eeprom.is_ready());
        assert_eq!(
            eeprom.read_byte(0),
            Err(PlatformError::Eeprom(EepromError::NotReady))
        );

        eeprom.set_ready(true);
        assert!(eeprom.read_byte(0).is_ok());
    }

    #[test]
    fn test_mock_eeprom_interrupt_fires_once_after_read() {
        let eeprom = MockEeprom::with_capacity(8);
        eeprom.preload(0, &[10]);

        eeprom.inject_write_after_read(0, 99);
        // Read observes the value before the interrupt
        assert_eq!(eeprom.read_byte(0).unwrap(), 10);
        assert_eq!(eeprom.get_contents(0, 1), vec![99]);

        // Only delivered once
        eeprom.write_byte(0, 1).unwrap();
        eeprom.read_byte(0).unwrap();
        assert_eq!(eeprom.get_contents(0, 1), vec![1]);
    }

    #[test]
    fn test_mock_eeprom_preload_is_not_counted() {
        let eeprom = MockEeprom::with_capacity(8);
        eeprom.preload(1, &[1, 2, 3]);

        assert_eq!(eeprom.get_contents(1, 3), vec![1, 2, 3]);
        assert_eq!(eeprom.total_writes(), 0);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1024"), 1024);
        assert_eq!(parse_decimal("0"), 0);
        assert_eq!(parse_decimal("255"), 255);
    }

    #[test]
    fn test_parse_byte() {
        assert_eq!(parse_byte("0"), 0);
        assert_eq!(parse_byte("255"), 255);
    }

    #[test]
    #[should_panic(expected = "expected a decimal number")]
    fn test_parse_decimal_rejects_empty() {
        parse_decimal("");
    }

    #[test]
    #[should_panic(expected = "expected a value in 0..=255")]
    fn test_parse_byte_rejects_out_of_range() {
        parse_byte("300");
    }
}
