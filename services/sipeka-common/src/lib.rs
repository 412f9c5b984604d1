//! Sipeka Common - Shared types, utilities, and configuration for the Sipeka ecosystem.
//!
//! This crate provides:
//! - Configuration types and loading
//! - Error types and handling utilities
//! - Logging setup and structured logging helpers
//! - Domain types for annual statistic indicators and their yearly values
//! - The numeric coercion policy applied to raw yearly values

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod util;

pub use config::{Config, ObservabilityConfig, StorageConfig};
pub use error::{Error, Result};
pub use types::{Indicator, IndicatorKind, RawValue, StatCategory, YearlyValue};
pub use util::coerce_numeric_or_zero;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::logging::init_logging;
    pub use crate::types::{Indicator, RawValue, StatCategory, YearlyValue};
    pub use crate::util::coerce_numeric_or_zero;
}
