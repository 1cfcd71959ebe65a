//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Level taken from the agent's `logger-level` property
//! - JSON or pretty console output
//! - Optional rotated JSON log files

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::{LoggerImpl, LOG_FILE_NAME};
