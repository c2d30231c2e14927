//! Cell pointer and range iteration
//!
//! [`CellPtr`] is a cursor over the EEPROM address space. Moving it or indexing
//! through it never touches the device; only the [`CellRef`]s it hands out do.
//!
//! [`CellRange`] walks `[start, end)` and yields one `CellRef` per address.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use super::cell::CellRef;

/// Repositionable pointer to an EEPROM cell
///
/// Two pointers are equal iff their addresses are equal. A pointer may sit one
/// past the last cell (see [`Eeprom::end`](crate::Eeprom::end)); such a pointer
/// must not be dereferenced.
pub struct CellPtr<'a, D> {
    driver: &'a D,
    address: usize,
}

impl<'a, D> CellPtr<'a, D> {
    /// Create a pointer at `address`
    pub const fn new(driver: &'a D, address: usize) -> Self {
        Self { driver, address }
    }

    /// Get the current address
    pub const fn address(&self) -> usize {
        self.address
    }

    /// Reposition the pointer to `address`
    pub fn set_address(&mut self, address: usize) -> &mut Self {
        self.address = address;
        self
    }

    /// Dereference: a reference to the cell under the pointer
    pub const fn cell(&self) -> CellRef<'a, D> {
        CellRef::new(self.driver, self.address)
    }

    /// Index: a reference to the cell `offset` away, without moving
    pub fn at(&self, offset: isize) -> CellRef<'a, D> {
        CellRef::new(self.driver, self.address.wrapping_add_signed(offset))
    }

    /// Prefix increment
    pub fn advance(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Prefix decrement
    pub fn retreat(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Postfix increment, returns the pointer before moving
    pub fn post_advance(&mut self) -> Self {
        let previous = *self;
        self.advance();
        previous
    }

    /// Postfix decrement, returns the pointer before moving
    pub fn post_retreat(&mut self) -> Self {
        let previous = *self;
        self.retreat();
        previous
    }

    /// Signed number of cells from `self` to `other`
    pub fn distance_to(&self, other: &Self) -> isize {
        other.address.wrapping_sub(self.address) as isize
    }

    /// Iterate the cells in `[self, end)`
    pub fn range_to(self, end: Self) -> CellRange<'a, D> {
        CellRange::new(self, end)
    }
}

impl<D> AddAssign<isize> for CellPtr<'_, D> {
    fn add_assign(&mut self, offset: isize) {
        self.address = self.address.wrapping_add_signed(offset);
    }
}

impl<D> SubAssign<isize> for CellPtr<'_, D> {
    fn sub_assign(&mut self, offset: isize) {
        self.address = self.address.wrapping_add_signed(offset.wrapping_neg());
    }
}

impl<D> Add<isize> for CellPtr<'_, D> {
    type Output = Self;

    fn add(mut self, offset: isize) -> Self {
        self += offset;
        self
    }
}

impl<D> Sub<isize> for CellPtr<'_, D> {
    type Output = Self;

    fn sub(mut self, offset: isize) -> Self {
        self -= offset;
        self
    }
}

impl<D> PartialEq for CellPtr<'_, D> {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl<D> Eq for CellPtr<'_, D> {}

impl<'a, D> From<CellRef<'a, D>> for CellPtr<'a, D> {
    fn from(cell: CellRef<'a, D>) -> Self {
        cell.pointer()
    }
}

impl<D> Clone for CellPtr<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for CellPtr<'_, D> {}

impl<D> fmt::Debug for CellPtr<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellPtr")
            .field("address", &self.address)
            .finish()
    }
}

/// Iterator over the cells in `[start, end)`
///
/// Lazy and restartable: cloning the range, or building a new one from the same
/// start, yields the same references again. Iterating performs no device access.
pub struct CellRange<'a, D> {
    next: CellPtr<'a, D>,
    end: CellPtr<'a, D>,
}

impl<'a, D> CellRange<'a, D> {
    /// Create a range from `start` up to, not including, `end`
    ///
    /// A range whose end lies before its start is empty.
    pub fn new(start: CellPtr<'a, D>, end: CellPtr<'a, D>) -> Self {
        Self { next: start, end }
    }

    fn remaining(&self) -> usize {
        self.end.address.saturating_sub(self.next.address)
    }
}

impl<'a, D> Iterator for CellRange<'a, D> {
    type Item = CellRef<'a, D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        Some(self.next.post_advance().cell())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<D> DoubleEndedIterator for CellRange<'_, D> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        Some(self.end.retreat().cell())
    }
}

impl<D> ExactSizeIterator for CellRange<'_, D> {}

impl<D> FusedIterator for CellRange<'_, D> {}

impl<D> Clone for CellRange<'_, D> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            end: self.end,
        }
    }
}

impl<D> fmt::Debug for CellRange<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellRange")
            .field("next", &self.next.address)
            .field("end", &self.end.address)
            .finish()
    }
}
