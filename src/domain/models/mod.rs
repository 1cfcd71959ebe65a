//! Domain models for the agent configuration.

pub mod logger_level;
pub mod properties;

pub use logger_level::LoggerLevel;
pub use properties::{keys, AgentProperties, RawProperties};
