//! Byte reference
//!
//! [`CellRef`] designates one EEPROM cell. It holds an address and a borrow of the
//! driver, never a copy of the data: every [`read`](CellRef::read) goes to the
//! device, and every method that changes the cell issues the writes it names.
//!
//! # Access Cost
//!
//! | Method                         | Reads | Writes        |
//! |--------------------------------|-------|---------------|
//! | `read`                         | 1     | 0             |
//! | `write`                        | 0     | 1             |
//! | `update`                       | 1     | 0 or 1        |
//! | `modify`, `add` .. `shr`       | 1     | 1             |
//! | `increment`, `decrement`       | 1     | 1             |
//! | `post_increment`, `post_decrement` | 2 | 1             |
//! | `bit`, `pointer`               | 0     | 0             |
//!
//! # Lost Updates
//!
//! Read-modify-write methods are a read followed by a separate write. If an
//! interrupt handler writes the same cell in between, its value is overwritten.
//! Wrap the call in a critical section, or use
//! [`modify_guarded`](CellRef::modify_guarded), when handlers share cells.

use core::fmt;

use super::bit::BitRef;
use super::error::{Result, StorageError};
use super::ptr::CellPtr;
use crate::log_trace;
use crate::platform::EepromInterface;

/// Lazy reference to one EEPROM byte
///
/// Cheap to create and copy. Constructing one performs no access.
pub struct CellRef<'a, D> {
    driver: &'a D,
    address: usize,
}

impl<'a, D> CellRef<'a, D> {
    /// Create a reference to `address`
    ///
    /// The address is not validated; it must be below the device's length.
    pub const fn new(driver: &'a D, address: usize) -> Self {
        Self { driver, address }
    }

    /// Get the referenced address
    pub const fn address(&self) -> usize {
        self.address
    }

    /// Get a pointer at the same address (address-of)
    pub const fn pointer(&self) -> CellPtr<'a, D> {
        CellPtr::new(self.driver, self.address)
    }

    /// Get a reference to bit `index` of this cell
    ///
    /// `index` must be in `0..8`. Larger values are reduced modulo 8 in release
    /// builds and trip a debug assertion in debug builds.
    pub fn bit(&self, index: u8) -> BitRef<'a, D> {
        BitRef::new(*self, index)
    }
}

impl<'a, D: EepromInterface> CellRef<'a, D> {
    /// Read the current byte (one physical read)
    pub fn read(&self) -> Result<u8> {
        Ok(self.driver.read_byte(self.address)?)
    }

    /// Write `value` (one physical write, even if unchanged)
    pub fn write(&self, value: u8) -> Result<()> {
        Ok(self.driver.write_byte(self.address, value)?)
    }

    /// Write `value` only if it differs from the stored byte
    ///
    /// Returns `true` if a physical write was issued. This is the only
    /// operation that avoids wear; repeated updates with the same value cost
    /// one read each and no writes.
    pub fn update(&self, value: u8) -> Result<bool> {
        if self.read()? == value {
            return Ok(false);
        }
        self.write(value)?;
        Ok(true)
    }

    /// Assign the value stored in `other` to this cell
    ///
    /// Copies the byte, not the address: one read of `other`, one write here.
    pub fn copy_from<E: EepromInterface>(&self, other: &CellRef<'_, E>) -> Result<()> {
        let value = other.read()?;
        self.write(value)
    }

    /// Read, apply `f`, write the result back unconditionally
    ///
    /// Returns the value written. Not atomic: see the module docs.
    pub fn modify<F>(&self, f: F) -> Result<u8>
    where
        F: FnOnce(u8) -> u8,
    {
        let value = f(self.read()?);
        self.write(value)?;
        Ok(value)
    }

    /// Same as [`modify`](Self::modify), inside a critical section
    ///
    /// Interrupt handlers cannot run between the read and the write. The
    /// write itself may take milliseconds, so interrupts stay masked that long.
    pub fn modify_guarded<F>(&self, f: F) -> Result<u8>
    where
        F: FnOnce(u8) -> u8,
    {
        log_trace!("guarded modify at {}", self.address);
        critical_section::with(|_| self.modify(f))
    }

    /// `cell += rhs` (wrapping)
    pub fn add(&self, rhs: u8) -> Result<u8> {
        self.modify(|v| v.wrapping_add(rhs))
    }

    /// `cell -= rhs` (wrapping)
    pub fn sub(&self, rhs: u8) -> Result<u8> {
        self.modify(|v| v.wrapping_sub(rhs))
    }

    /// `cell *= rhs` (wrapping)
    pub fn mul(&self, rhs: u8) -> Result<u8> {
        self.modify(|v| v.wrapping_mul(rhs))
    }

    /// `cell /= rhs`
    ///
    /// Fails with [`StorageError::DivideByZero`] before any access if `rhs` is 0.
    pub fn div(&self, rhs: u8) -> Result<u8> {
        if rhs == 0 {
            return Err(StorageError::DivideByZero);
        }
        self.modify(|v| v / rhs)
    }

    /// `cell %= rhs`
    ///
    /// Fails with [`StorageError::DivideByZero`] before any access if `rhs` is 0.
    pub fn rem(&self, rhs: u8) -> Result<u8> {
        if rhs == 0 {
            return Err(StorageError::DivideByZero);
        }
        self.modify(|v| v % rhs)
    }

    /// `cell &= rhs`
    pub fn and(&self, rhs: u8) -> Result<u8> {
        self.modify(|v| v & rhs)
    }

    /// `cell |= rhs`
    pub fn or(&self, rhs: u8) -> Result<u8> {
        self.modify(|v| v | rhs)
    }

    /// `cell ^= rhs`
    pub fn xor(&self, rhs: u8) -> Result<u8> {
        self.modify(|v| v ^ rhs)
    }

    /// `cell <<= rhs`; shifting by 8 or more clears the cell
    pub fn shl(&self, rhs: u8) -> Result<u8> {
        self.modify(|v| v.checked_shl(u32::from(rhs)).unwrap_or(0))
    }

    /// `cell >>= rhs`; shifting by 8 or more clears the cell
    pub fn shr(&self, rhs: u8) -> Result<u8> {
        self.modify(|v| v.checked_shr(u32::from(rhs)).unwrap_or(0))
    }

    /// Prefix increment, returns the new value
    pub fn increment(&self) -> Result<u8> {
        self.add(1)
    }

    /// Prefix decrement, returns the new value
    pub fn decrement(&self) -> Result<u8> {
        self.sub(1)
    }

    /// Postfix increment, returns the value before the increment
    ///
    /// Costs two reads and one write: the returned value is read separately
    /// from the read-modify-write.
    pub fn post_increment(&self) -> Result<u8> {
        let previous = self.read()?;
        self.increment()?;
        Ok(previous)
    }

    /// Postfix decrement, returns the value before the decrement
    pub fn post_decrement(&self) -> Result<u8> {
        let previous = self.read()?;
        self.decrement()?;
        Ok(previous)
    }
}

impl<D> Clone for CellRef<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for CellRef<'_, D> {}

impl<D> fmt::Debug for CellRef<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellRef")
            .field("address", &self.address)
            .finish()
    }
}
