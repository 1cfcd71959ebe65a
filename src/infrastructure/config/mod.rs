//! Configuration management infrastructure
//!
//! Properties-file configuration:
//! - Properties text parsing
//! - Loading from an injected source
//! - Defaults for every recognized key

pub mod loader;
pub mod parser;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
