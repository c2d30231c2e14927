//! EEPROM facade
//!
//! [`Eeprom`] owns the driver and represents the whole device. It hands out
//! lazy references and pointers, and moves whole objects in and out of storage.
//!
//! # Object Layout
//!
//! [`get`](Eeprom::get) and [`put`](Eeprom::put) copy the exact in-memory bytes
//! of a [`Pod`] value: native byte order, no header, no checksum. Data written
//! on one architecture is not guaranteed to read back identically on another.
//!
//! # Bounds
//!
//! Nothing here checks addresses against [`length`](Eeprom::length). Keep
//! `address + size_of::<T>() <= length()` for `get`/`put`; an access past
//! the end is reported, or not, by the driver.
//!
//! # Single Instance
//!
//! Build one `Eeprom` at startup and pass references to it around. When a
//! `'static` instance is needed, put it in a `static_cell::StaticCell`:
//!
//! ```ignore
//! static EEPROM: StaticCell<Eeprom<AvrEeprom>> = StaticCell::new();
//!
//! let eeprom: &'static Eeprom<AvrEeprom> = EEPROM.init(Eeprom::new(AvrEeprom::take()));
//! ```

use core::mem::size_of;

use bytemuck::Pod;

use super::bit::BitRef;
use super::cell::CellRef;
use super::error::Result;
use super::ptr::{CellPtr, CellRange};
use crate::log_trace;
use crate::platform::EepromInterface;

/// The device's EEPROM as a flat array of lazily accessed cells
#[derive(Debug)]
pub struct Eeprom<D> {
    driver: D,
}

impl<D: EepromInterface> Eeprom<D> {
    /// Wrap a driver
    pub const fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Get the driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Release the driver
    pub fn into_inner(self) -> D {
        self.driver
    }

    /// Index: a reference to the cell at `address`
    pub fn cell(&self, address: usize) -> CellRef<'_, D> {
        CellRef::new(&self.driver, address)
    }

    /// A pointer at `address`
    pub fn pointer(&self, address: usize) -> CellPtr<'_, D> {
        CellPtr::new(&self.driver, address)
    }

    /// Read the byte at `address`
    pub fn read(&self, address: usize) -> Result<u8> {
        self.cell(address).read()
    }

    /// Write `value` at `address` unconditionally
    pub fn write(&self, address: usize, value: u8) -> Result<()> {
        self.cell(address).write(value)
    }

    /// Write `value` at `address` only if it differs; returns whether it wrote
    pub fn update(&self, address: usize, value: u8) -> Result<bool> {
        self.cell(address).update(value)
    }

    /// A reference to bit `index` of the cell at `address`
    pub fn bit(&self, address: usize, index: u8) -> BitRef<'_, D> {
        self.cell(address).bit(index)
    }

    /// Read bit `index` of the byte at `address`
    pub fn read_bit(&self, address: usize, index: u8) -> Result<bool> {
        self.bit(address, index).read()
    }

    /// Write bit `index` of the byte at `address`
    pub fn write_bit(&self, address: usize, index: u8, value: bool) -> Result<()> {
        self.bit(address, index).write(value)
    }

    /// Pointer to the first cell (address 0)
    pub fn begin(&self) -> CellPtr<'_, D> {
        self.pointer(0)
    }

    /// Pointer one past the last cell; never dereference it
    pub fn end(&self) -> CellPtr<'_, D> {
        self.pointer(self.length())
    }

    /// Iterate every cell from `begin()` to `end()`
    pub fn iter(&self) -> CellRange<'_, D> {
        CellRange::new(self.begin(), self.end())
    }

    /// Number of addressable bytes
    pub fn length(&self) -> usize {
        self.driver.capacity()
    }

    /// Whether the device can take a new operation without blocking
    ///
    /// Purely informational: no other method here checks it or waits on it.
    pub fn ready(&self) -> bool {
        self.driver.is_ready()
    }

    /// Read a `T` starting at `address`
    ///
    /// One physical read per byte of `T`.
    pub fn get<T: Pod>(&self, address: usize) -> Result<T> {
        let mut value = T::zeroed();
        self.get_into(address, &mut value)?;
        Ok(value)
    }

    /// Read a `T` starting at `address` into `value`
    ///
    /// On error, `value` holds the bytes read so far followed by its old bytes.
    pub fn get_into<'v, T: Pod>(&self, address: usize, value: &'v mut T) -> Result<&'v mut T> {
        let mut ptr = self.pointer(address);
        for byte in bytemuck::bytes_of_mut(value) {
            *byte = ptr.post_advance().cell().read()?;
        }
        Ok(value)
    }

    /// Store `value` starting at `address`
    ///
    /// Each byte goes through [`CellRef::update`], so bytes that already match
    /// are not rewritten. Returns the number of physical writes issued.
    pub fn put<T: Pod>(&self, address: usize, value: &T) -> Result<usize> {
        let mut ptr = self.pointer(address);
        let mut written = 0;
        for &byte in bytemuck::bytes_of(value) {
            if ptr.post_advance().cell().update(byte)? {
                written += 1;
            }
        }
        log_trace!(
            "put {} bytes at {}, {} written",
            size_of::<T>(),
            address,
            written
        );
        Ok(written)
    }
}

impl<'a, D: EepromInterface> IntoIterator for &'a Eeprom<D> {
    type Item = CellRef<'a, D>;
    type IntoIter = CellRange<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
