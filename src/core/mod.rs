//! Core infrastructure
//!
//! Cross-cutting support shared by the platform and storage layers.

pub mod logging;
