//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use joularjx_config::{AgentProperties, ConfigLoader, InMemorySource, DEFAULT_CONFIG_FILE};
use tempfile::TempDir;

/// In-memory source holding a `config.properties` with `contents`.
#[allow(dead_code)]
pub fn source_with(contents: &str) -> InMemorySource {
    InMemorySource::new().with_file(DEFAULT_CONFIG_FILE, contents)
}

/// Load properties from a `config.properties` holding `contents`.
#[allow(dead_code)]
pub fn load(contents: &str) -> AgentProperties {
    ConfigLoader::new(source_with(contents))
        .load()
        .expect("config file present")
}

/// Temporary directory containing a `config.properties` with `contents`.
#[allow(dead_code)]
pub fn config_dir_with(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), contents)
        .expect("Failed to write config file");
    dir
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
