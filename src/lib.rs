//! JoularJX agent configuration
//!
//! Loads the agent's `config.properties` file into a typed, immutable
//! [`AgentProperties`] with a default for every setting.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): configuration model, errors and the
//!   `ConfigSource` port
//! - **Infrastructure Layer** (`infrastructure`): properties parsing, the
//!   loader, file system and in-memory sources, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use joularjx_config::{ConfigLoader, InMemorySource, LoggerLevel};
//!
//! let source = InMemorySource::new()
//!     .with_file("config.properties", "save-runtime-data=TrUe\nlogger-level=FINE");
//! let properties = ConfigLoader::new(source).load()?;
//!
//! assert!(properties.save_runtime_data());
//! assert_eq!(properties.logger_level(), LoggerLevel::Info);
//! # Ok::<(), joularjx_config::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{AgentProperties, LoggerLevel, RawProperties};
pub use domain::ports::ConfigSource;
pub use domain::{ConfigError, ConfigResult};
pub use infrastructure::config::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use infrastructure::sources::{FileSystemSource, InMemorySource};
