//! Platform error types
//!
//! This module defines error types for driver operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All driver implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// EEPROM operation failed
    Eeprom(EepromError),
}

/// EEPROM-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EepromError {
    /// Address is outside the device's addressable range
    InvalidAddress,
    /// Device is busy with a previous operation
    NotReady,
    /// Read operation failed
    ReadFailed,
    /// Write operation failed
    WriteFailed,
}

impl From<EepromError> for PlatformError {
    fn from(error: EepromError) -> Self {
        PlatformError::Eeprom(error)
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Eeprom(e) => write!(f, "EEPROM error: {}", e),
        }
    }
}

impl fmt::Display for EepromError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EepromError::InvalidAddress => write!(f, "invalid address"),
            EepromError::NotReady => write!(f, "device not ready"),
            EepromError::ReadFailed => write!(f, "read failed"),
            EepromError::WriteFailed => write!(f, "write failed"),
        }
    }
}
