use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::parser;
use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::{AgentProperties, RawProperties};
use crate::domain::ports::ConfigSource;

/// File name looked up when none is configured.
pub const DEFAULT_CONFIG_FILE: &str = "config.properties";

/// Loads [`AgentProperties`] from a [`ConfigSource`].
///
/// The loader either returns a fully defaulted configuration or an error;
/// deciding whether an error terminates the process is left to the caller.
#[derive(Debug, Clone)]
pub struct ConfigLoader<S> {
    source: S,
    file_name: PathBuf,
}

impl<S: ConfigSource> ConfigLoader<S> {
    /// Loader reading [`DEFAULT_CONFIG_FILE`] from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            file_name: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Read a different file, relative to the source root.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Load and interpret the configuration file.
    ///
    /// # Errors
    /// - [`ConfigError::MissingConfigFile`] when the file does not exist
    /// - [`ConfigError::Read`] when it exists but cannot be read
    pub fn load(&self) -> ConfigResult<AgentProperties> {
        self.load_raw().map(AgentProperties::from_raw)
    }

    /// Load the configuration file without interpreting any key.
    pub fn load_raw(&self) -> ConfigResult<RawProperties> {
        let location = self.source.describe(&self.file_name);
        debug!(location = %location, "resolving agent configuration");

        if !self.source.exists(&self.file_name) {
            return Err(ConfigError::MissingConfigFile { location });
        }

        let bytes = match self.read_all() {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::MissingConfigFile { location });
            }
            Err(source) => return Err(ConfigError::Read { location, source }),
        };

        let properties = parser::parse(&String::from_utf8_lossy(&bytes));
        info!(
            location = %location,
            keys = properties.len(),
            "loaded agent configuration"
        );
        Ok(properties)
    }

    fn read_all(&self) -> io::Result<Vec<u8>> {
        let mut reader = self.source.open(&self.file_name)?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::LoggerLevel;
    use crate::infrastructure::sources::InMemorySource;

    struct BrokenSource;

    impl ConfigSource for BrokenSource {
        fn exists(&self, _path: &Path) -> bool {
            true
        }

        fn open(&self, _path: &Path) -> io::Result<Box<dyn Read + '_>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    struct VanishingSource;

    impl ConfigSource for VanishingSource {
        fn exists(&self, _path: &Path) -> bool {
            true
        }

        fn open(&self, _path: &Path) -> io::Result<Box<dyn Read + '_>> {
            Err(io::Error::from(io::ErrorKind::NotFound))
        }
    }

    #[test]
    fn test_default_file_name() {
        let loader = ConfigLoader::new(InMemorySource::new());
        assert_eq!(loader.file_name(), Path::new("config.properties"));
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigLoader::new(InMemorySource::new()).load().unwrap_err();
        assert!(matches!(err, ConfigError::MissingConfigFile { .. }));
        assert_eq!(err.location(), "memory:config.properties");
    }

    #[test]
    fn test_custom_file_name() {
        let source = InMemorySource::new().with_file("agent.properties", "logger-level=OFF");
        let loader = ConfigLoader::new(&source).with_file_name("agent.properties");
        assert_eq!(loader.load().unwrap().logger_level(), LoggerLevel::Off);

        let err = ConfigLoader::new(&source).load().unwrap_err();
        assert!(matches!(err, ConfigError::MissingConfigFile { .. }));
    }

    #[test]
    fn test_read_failure() {
        let err = ConfigLoader::new(BrokenSource).load().unwrap_err();
        match err {
            ConfigError::Read { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("Expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn test_file_vanishing_after_exists_check() {
        let err = ConfigLoader::new(VanishingSource).load().unwrap_err();
        assert!(matches!(err, ConfigError::MissingConfigFile { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let source = InMemorySource::new()
            .with_file("config.properties", b"logger-level=SEVERE\nname=\xff\n".to_vec());
        let raw = ConfigLoader::new(source).load_raw().unwrap();
        assert_eq!(raw.get("logger-level"), Some("SEVERE"));
        assert_eq!(raw.get("name"), Some("\u{fffd}"));
    }
}
