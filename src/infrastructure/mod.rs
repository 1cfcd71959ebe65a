//! Infrastructure layer module
//!
//! This module contains the adapters around the domain:
//! - Configuration loading and properties parsing
//! - Configuration sources (file system, in-memory)
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
pub mod sources;
