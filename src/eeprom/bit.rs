//! Bit reference
//!
//! [`BitRef`] designates a single bit inside an EEPROM cell. It has no storage
//! path of its own; all access goes through the underlying [`CellRef`].

use core::fmt;

use super::cell::CellRef;
use super::error::Result;
use crate::platform::EepromInterface;

/// Lazy reference to one bit of an EEPROM byte
///
/// Writing a bit always costs one read and one write of the whole cell, even
/// if the bit already holds the requested value. Like every read-modify-write,
/// a bit write can lose a concurrent update to the same cell.
pub struct BitRef<'a, D> {
    cell: CellRef<'a, D>,
    mask: u8,
}

impl<'a, D> BitRef<'a, D> {
    /// Create a reference to bit `index` of `cell`
    pub fn new(cell: CellRef<'a, D>, index: u8) -> Self {
        Self {
            cell,
            mask: mask_for(index),
        }
    }

    /// Move this reference to another bit of the same cell
    pub fn set_index(&mut self, index: u8) -> &mut Self {
        self.mask = mask_for(index);
        self
    }

    /// Get the bit position (`0..8`)
    pub fn index(&self) -> u8 {
        self.mask.trailing_zeros() as u8
    }

    /// Get the single-bit mask
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Get the underlying cell
    pub fn cell(&self) -> CellRef<'a, D> {
        self.cell
    }
}

impl<D: EepromInterface> BitRef<'_, D> {
    /// Read the bit (one physical read)
    pub fn read(&self) -> Result<bool> {
        Ok((self.cell.read()? & self.mask) != 0)
    }

    /// Write the bit (one physical read and one physical write)
    pub fn write(&self, value: bool) -> Result<()> {
        let mask = self.mask;
        self.cell
            .modify(|byte| if value { byte | mask } else { byte & !mask })?;
        Ok(())
    }

    /// Set the bit to 1
    pub fn set(&self) -> Result<()> {
        self.write(true)
    }

    /// Clear the bit to 0
    pub fn clear(&self) -> Result<()> {
        self.write(false)
    }

    /// Assign the value of `other` to this bit
    ///
    /// Copies the boolean, not the address or mask.
    pub fn copy_from<E: EepromInterface>(&self, other: &BitRef<'_, E>) -> Result<()> {
        let value = other.read()?;
        self.write(value)
    }
}

fn mask_for(index: u8) -> u8 {
    debug_assert!(index < 8, "bit index {} out of range", index);
    1 << (index & 0x07)
}

impl<D> Clone for BitRef<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for BitRef<'_, D> {}

impl<D> fmt::Debug for BitRef<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitRef")
            .field("address", &self.cell.address())
            .field("mask", &self.mask)
            .finish()
    }
}
