//! Lazy EEPROM references
//!
//! Value types that address EEPROM cells without caching them:
//!
//! - [`CellRef`]: one byte; all device access funnels through it
//! - [`BitRef`]: one bit, built on a `CellRef` and a mask
//! - [`CellPtr`]: a cursor that yields `CellRef`s, and [`CellRange`] over `[start, end)`
//! - [`Eeprom`]: the facade owning the driver
//!
//! # Example
//!
//! ```ignore
//! use pico_eeprom::Eeprom;
//!
//! let eeprom = Eeprom::new(driver);
//!
//! // Boot counter that survives resets
//! let boots = eeprom.cell(0).post_increment()?;
//!
//! // Flags byte
//! eeprom.bit(1, 0).set()?;
//!
//! // Zero the whole device, skipping cells that are already zero
//! for cell in &eeprom {
//!     cell.update(0)?;
//! }
//! ```

pub mod bit;
pub mod cell;
pub mod error;
pub mod manager;
pub mod ptr;

pub use bit::BitRef;
pub use cell::CellRef;
pub use error::{Result, StorageError};
pub use manager::Eeprom;
pub use ptr::{CellPtr, CellRange};
