//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Configuration file loading

#[cfg(feature = "serde")]
pub mod config;
pub mod error;

// Re-export commonly used items
#[cfg(feature = "serde")]
pub use config::{Config, ConfigError};
pub use error::{ConversionError, ConversionResult, ConversionWarning, WarningKind};
