use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use super::logger_level::LoggerLevel;

/// Recognized keys of the agent configuration file.
pub mod keys {
    /// Comma-separated method name prefixes to monitor
    pub const FILTER_METHOD_NAMES: &str = "filter-method-names";
    /// Path to the Windows power monitor executable
    pub const POWER_MONITOR_PATH: &str = "powermonitor-path";
    /// Whether runtime data is written to disk
    pub const SAVE_RUNTIME_DATA: &str = "save-runtime-data";
    /// Whether runtime data files are overwritten
    pub const OVERWRITE_RUNTIME_DATA: &str = "overwrite-runtime-data";
    /// Agent log severity
    pub const LOGGER_LEVEL: &str = "logger-level";
    pub const HIDE_AGENT_CONSUMPTION: &str = "hide-agent-consumption";
    pub const TRACK_CONSUMPTION_EVOLUTION: &str = "track-consumption-evolution";
    pub const EVOLUTION_DATA_PATH: &str = "evolution-data-path";
    pub const ENABLE_CALL_TREES_CONSUMPTION: &str = "enable-call-trees-consumption";
    pub const SAVE_CALL_TREES_RUNTIME_DATA: &str = "save-call-trees-runtime-data";
    pub const OVERWRITE_CALL_TREES_RUNTIME_DATA: &str = "overwrite-call-trees-runtime-data";
    /// Stack sampling rate in milliseconds
    pub const STACK_MONITORING_SAMPLE_RATE: &str = "stack-monitoring-sample-rate";
    pub const APPLICATION_SERVER: &str = "application-server";
}

const DEFAULT_EVOLUTION_DATA_PATH: &str = "evolution";
const DEFAULT_STACK_MONITORING_SAMPLE_RATE: u32 = 10;
const MAX_STACK_MONITORING_SAMPLE_RATE: u32 = 1000;

/// Key/value pairs exactly as decoded from a properties file.
///
/// Keys are case-sensitive. Inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProperties {
    entries: HashMap<String, String>,
}

impl RawProperties {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut raw = Self::new();
        for (key, value) in iter {
            raw.insert(key, value);
        }
        raw
    }
}

/// Typed, defaulted view over the agent configuration file.
///
/// Built once at startup and never mutated afterwards. Every field has a
/// default, so an empty file yields a fully usable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentProperties {
    filter_method_names: Vec<String>,
    power_monitor_path: Option<String>,
    save_runtime_data: bool,
    overwrite_runtime_data: bool,
    logger_level: LoggerLevel,
    hide_agent_consumption: bool,
    track_consumption_evolution: bool,
    evolution_data_path: String,
    call_trees_consumption: bool,
    save_call_trees_runtime_data: bool,
    overwrite_call_trees_runtime_data: bool,
    stack_monitoring_sample_rate: u32,
    application_server: bool,
    #[serde(skip)]
    raw: RawProperties,
}

impl AgentProperties {
    /// Interpret raw properties, applying defaults to missing or malformed
    /// values.
    pub fn from_raw(raw: RawProperties) -> Self {
        Self {
            filter_method_names: parse_list(raw.get(keys::FILTER_METHOD_NAMES)),
            power_monitor_path: raw
                .get(keys::POWER_MONITOR_PATH)
                .filter(|path| !path.is_empty())
                .map(str::to_owned),
            save_runtime_data: parse_flag(&raw, keys::SAVE_RUNTIME_DATA),
            overwrite_runtime_data: parse_flag(&raw, keys::OVERWRITE_RUNTIME_DATA),
            logger_level: parse_logger_level(raw.get(keys::LOGGER_LEVEL)),
            hide_agent_consumption: parse_flag(&raw, keys::HIDE_AGENT_CONSUMPTION),
            track_consumption_evolution: parse_flag(&raw, keys::TRACK_CONSUMPTION_EVOLUTION),
            evolution_data_path: raw
                .get(keys::EVOLUTION_DATA_PATH)
                .map(str::trim)
                .filter(|path| !path.is_empty())
                .unwrap_or(DEFAULT_EVOLUTION_DATA_PATH)
                .to_owned(),
            call_trees_consumption: parse_flag(&raw, keys::ENABLE_CALL_TREES_CONSUMPTION),
            save_call_trees_runtime_data: parse_flag(&raw, keys::SAVE_CALL_TREES_RUNTIME_DATA),
            overwrite_call_trees_runtime_data: parse_flag(
                &raw,
                keys::OVERWRITE_CALL_TREES_RUNTIME_DATA,
            ),
            stack_monitoring_sample_rate: parse_sample_rate(
                raw.get(keys::STACK_MONITORING_SAMPLE_RATE),
            ),
            application_server: parse_flag(&raw, keys::APPLICATION_SERVER),
            raw,
        }
    }

    /// Method name prefixes to monitor, in file order.
    pub fn filter_method_names(&self) -> &[String] {
        &self.filter_method_names
    }

    /// Power monitor executable path, backslashes preserved.
    pub fn power_monitor_path(&self) -> Option<&str> {
        self.power_monitor_path.as_deref()
    }

    pub const fn save_runtime_data(&self) -> bool {
        self.save_runtime_data
    }

    pub const fn overwrite_runtime_data(&self) -> bool {
        self.overwrite_runtime_data
    }

    pub const fn logger_level(&self) -> LoggerLevel {
        self.logger_level
    }

    /// Whether the agent's own threads are excluded from measurements.
    pub const fn hide_agent_consumption(&self) -> bool {
        self.hide_agent_consumption
    }

    pub const fn track_consumption_evolution(&self) -> bool {
        self.track_consumption_evolution
    }

    /// Directory for consumption evolution files.
    pub fn evolution_data_path(&self) -> &str {
        &self.evolution_data_path
    }

    pub const fn call_trees_consumption(&self) -> bool {
        self.call_trees_consumption
    }

    pub const fn save_call_trees_runtime_data(&self) -> bool {
        self.save_call_trees_runtime_data
    }

    pub const fn overwrite_call_trees_runtime_data(&self) -> bool {
        self.overwrite_call_trees_runtime_data
    }

    /// Stack sampling interval in milliseconds, within `1..=1000`.
    pub const fn stack_monitoring_sample_rate(&self) -> u32 {
        self.stack_monitoring_sample_rate
    }

    pub const fn application_server(&self) -> bool {
        self.application_server
    }

    /// Underlying key/value pairs, including keys the agent does not use.
    pub const fn raw(&self) -> &RawProperties {
        &self.raw
    }
}

impl Default for AgentProperties {
    fn default() -> Self {
        Self::from_raw(RawProperties::new())
    }
}

fn parse_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_flag(raw: &RawProperties, key: &str) -> bool {
    let Some(value) = raw.get(key) else {
        return false;
    };
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        true
    } else {
        if !value.eq_ignore_ascii_case("false") {
            warn!(key, value, "unrecognized boolean, using false");
        }
        false
    }
}

fn parse_logger_level(value: Option<&str>) -> LoggerLevel {
    let Some(value) = value else {
        return LoggerLevel::default();
    };
    LoggerLevel::recognize(value).unwrap_or_else(|| {
        debug!(value, "unsupported logger level, using INFO");
        LoggerLevel::Info
    })
}

fn parse_sample_rate(value: Option<&str>) -> u32 {
    let Some(value) = value else {
        return DEFAULT_STACK_MONITORING_SAMPLE_RATE;
    };
    match value.trim().parse::<u32>() {
        Ok(rate) if (1..=MAX_STACK_MONITORING_SAMPLE_RATE).contains(&rate) => rate,
        _ => {
            warn!(
                value,
                default = DEFAULT_STACK_MONITORING_SAMPLE_RATE,
                "invalid stack monitoring sample rate, using default"
            );
            DEFAULT_STACK_MONITORING_SAMPLE_RATE
        }
    }
}
