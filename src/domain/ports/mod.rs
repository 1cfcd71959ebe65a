//! Port trait definitions (Hexagonal Architecture)
//!
//! - ConfigSource: read access to the store holding configuration files
//!
//! Infrastructure adapters implement these so the loader stays independent
//! of where files actually live.

pub mod config_source;

pub use config_source::ConfigSource;
