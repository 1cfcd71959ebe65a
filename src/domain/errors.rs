//! Domain errors for agent configuration loading.

use std::io;

use thiserror::Error;

/// Errors that prevent an [`AgentProperties`](super::models::AgentProperties)
/// from being constructed.
///
/// Individual field problems never show up here: malformed values fall back
/// to their defaults instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {location}")]
    MissingConfigFile { location: String },

    #[error("Failed to read configuration file {location}")]
    Read {
        location: String,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Process exit status the agent reports for this error.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingConfigFile { .. } | Self::Read { .. } => 1,
        }
    }

    /// Where the configuration file was looked up, as described by its
    /// source.
    pub fn location(&self) -> &str {
        match self {
            Self::MissingConfigFile { location } | Self::Read { location, .. } => {
                location.as_str()
            }
        }
    }
}

/// Result alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_message() {
        let err = ConfigError::MissingConfigFile {
            location: "config.properties".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Configuration file not found: config.properties"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_read_error_keeps_source() {
        let err = ConfigError::Read {
            location: "conf/config.properties".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.location(), "conf/config.properties");
        assert!(std::error::Error::source(&err).is_some());
    }
}
