//! Storage error types
//!
//! Provides the error type for cell, bit and object operations.

use crate::platform::{EepromError, PlatformError};

/// Result type for storage operations
pub type Result<T> = core::result::Result<T, StorageError>;

/// Errors from storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// The driver rejected or failed an access
    Platform(PlatformError),
    /// Compound division or remainder by zero (no access was issued)
    DivideByZero,
}

impl From<PlatformError> for StorageError {
    fn from(error: PlatformError) -> Self {
        StorageError::Platform(error)
    }
}

impl From<EepromError> for StorageError {
    fn from(error: EepromError) -> Self {
        StorageError::Platform(PlatformError::Eeprom(error))
    }
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StorageError::Platform(e) => write!(f, "{}", e),
            StorageError::DivideByZero => write!(f, "division by zero"),
        }
    }
}
