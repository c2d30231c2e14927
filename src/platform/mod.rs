//! Platform abstraction layer
//!
//! This module defines the boundary between the storage layer and the
//! physical EEPROM driver. Drivers live outside this crate; the only
//! implementation shipped here is the in-memory mock.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{EepromError, PlatformError, Result};
pub use traits::EepromInterface;
