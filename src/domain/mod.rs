//! Domain layer for agent configuration
//!
//! This module contains the configuration model, its errors, and the
//! port through which configuration files are read.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{ConfigError, ConfigResult};
