use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Severity level gating the agent's log output.
///
/// Only four levels are meaningful to the agent. Finer-grained names found
/// in a configuration file (`FINE`, `CONFIG`, `ALL`, `FINER`, `FINEST`) and
/// anything unrecognized collapse to [`LoggerLevel::Info`].
///
/// # Examples
///
/// ```
/// use joularjx_config::LoggerLevel;
///
/// assert_eq!(LoggerLevel::parse("WARNING"), LoggerLevel::Warning);
/// assert_eq!(LoggerLevel::parse("FINEST"), LoggerLevel::Info);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoggerLevel {
    /// No output at all
    Off,
    /// Failures only
    Severe,
    /// Failures and warnings
    Warning,
    /// Regular operational messages
    #[default]
    Info,
}

impl LoggerLevel {
    /// Parse a level name. Never fails: unknown names map to `Info`.
    ///
    /// Surrounding whitespace and letter case are ignored.
    pub fn parse(raw: &str) -> Self {
        Self::recognize(raw).unwrap_or_default()
    }

    /// Parse a level name, returning `None` for anything but the four
    /// supported names.
    pub(crate) fn recognize(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "OFF" => Some(Self::Off),
            "SEVERE" => Some(Self::Severe),
            "WARNING" => Some(Self::Warning),
            "INFO" => Some(Self::Info),
            _ => None,
        }
    }

    /// Canonical upper-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Severe => "SEVERE",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }

    /// Equivalent `tracing` filter.
    pub const fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::OFF,
            Self::Severe => LevelFilter::ERROR,
            Self::Warning => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
        }
    }
}

impl fmt::Display for LoggerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LoggerLevel> for LevelFilter {
    fn from(level: LoggerLevel) -> Self {
        level.to_level_filter()
    }
}
