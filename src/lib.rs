#![cfg_attr(not(test), no_std)]

//! pico_eeprom - Lazy byte and bit references over on-chip EEPROM
//!
//! This library gives RAM-like access (read, write, compound assignment,
//! iteration, whole-object get/put) to a small block of byte-addressable
//! non-volatile storage, without ever caching its contents.
//!
//! # Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Eeprom<D>          facade: read/write/update, get/put   │
//! │    ├── CellPtr      repositionable cursor, CellRange     │
//! │    ├── CellRef      one byte, every access hits D        │
//! │    └── BitRef       one bit, proxied through CellRef     │
//! ├──────────────────────────────────────────────────────────┤
//! │  EepromInterface    driver trait (read/write/ready/size) │
//! │    └── MockEeprom   in-memory driver (test / "mock")     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use core::cell::Cell;
//! use pico_eeprom::{Eeprom, EepromInterface};
//!
//! // Application-supplied driver; real targets wrap the EEPROM registers
//! struct RamDriver([Cell<u8>; 64]);
//!
//! impl EepromInterface for RamDriver {
//!     fn read_byte(&self, address: usize) -> pico_eeprom::platform::Result<u8> {
//!         Ok(self.0[address].get())
//!     }
//!     fn write_byte(&self, address: usize, value: u8) -> pico_eeprom::platform::Result<()> {
//!         self.0[address].set(value);
//!         Ok(())
//!     }
//!     fn is_ready(&self) -> bool {
//!         true
//!     }
//!     fn capacity(&self) -> usize {
//!         self.0.len()
//!     }
//! }
//!
//! let eeprom = Eeprom::new(RamDriver(core::array::from_fn(|_| Cell::new(0xFF))));
//!
//! eeprom.write(0, 41)?;
//! eeprom.cell(0).increment()?;
//! assert_eq!(eeprom.read(0)?, 42);
//!
//! eeprom.write_bit(1, 3, true)?;
//! assert!(eeprom.read_bit(1, 3)?);
//!
//! let written = eeprom.put(8, &0x1234_5678u32)?;
//! assert_eq!(written, 4);
//! assert_eq!(eeprom.get::<u32>(8)?, 0x1234_5678);
//! # Ok::<(), pico_eeprom::StorageError>(())
//! ```
//!
//! Host tests can use `platform::mock::MockEeprom` instead (`mock` feature).

// Platform abstraction layer (driver trait, errors, mock driver)
pub mod platform;

// Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
pub mod core;

// Lazy references and the storage facade
pub mod eeprom;

pub use eeprom::{BitRef, CellPtr, CellRange, CellRef, Eeprom, StorageError};
pub use platform::{EepromError, EepromInterface, PlatformError};
