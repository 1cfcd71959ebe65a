//! Implementation of the `show` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{key_value_table, output, CommandOutput};
use crate::domain::models::{keys, AgentProperties};

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Also list keys the agent does not recognize
    #[arg(long)]
    pub raw: bool,
}

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub properties: AgentProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Vec<(String, String)>>,
}

impl ShowOutput {
    pub fn new(properties: &AgentProperties, include_raw: bool) -> Self {
        let raw = include_raw.then(|| {
            let mut entries: Vec<(String, String)> = properties
                .raw()
                .iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect();
            entries.sort();
            entries
        });
        Self {
            properties: properties.clone(),
            raw,
        }
    }
}

const fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let p = &self.properties;
        let mut table = key_value_table("key", "value");
        let filters = p.filter_method_names().join(",");
        let sample_rate = p.stack_monitoring_sample_rate().to_string();
        table
            .add_row([keys::FILTER_METHOD_NAMES, filters.as_str()])
            .add_row([
                keys::POWER_MONITOR_PATH,
                p.power_monitor_path().unwrap_or("-"),
            ])
            .add_row([keys::SAVE_RUNTIME_DATA, flag(p.save_runtime_data())])
            .add_row([keys::OVERWRITE_RUNTIME_DATA, flag(p.overwrite_runtime_data())])
            .add_row([keys::LOGGER_LEVEL, p.logger_level().as_str()])
            .add_row([keys::HIDE_AGENT_CONSUMPTION, flag(p.hide_agent_consumption())])
            .add_row([
                keys::TRACK_CONSUMPTION_EVOLUTION,
                flag(p.track_consumption_evolution()),
            ])
            .add_row([keys::EVOLUTION_DATA_PATH, p.evolution_data_path()])
            .add_row([
                keys::ENABLE_CALL_TREES_CONSUMPTION,
                flag(p.call_trees_consumption()),
            ])
            .add_row([
                keys::SAVE_CALL_TREES_RUNTIME_DATA,
                flag(p.save_call_trees_runtime_data()),
            ])
            .add_row([
                keys::OVERWRITE_CALL_TREES_RUNTIME_DATA,
                flag(p.overwrite_call_trees_runtime_data()),
            ])
            .add_row([
                keys::STACK_MONITORING_SAMPLE_RATE,
                sample_rate.as_str(),
            ])
            .add_row([keys::APPLICATION_SERVER, flag(p.application_server())]);

        let mut lines = vec![table.to_string()];
        if let Some(raw) = &self.raw {
            let mut raw_table = key_value_table("raw key", "raw value");
            for (key, value) in raw {
                raw_table.add_row([key, value]);
            }
            lines.push(String::new());
            lines.push(raw_table.to_string());
        }
        lines.join("\n")
    }
}

pub fn execute(properties: &AgentProperties, args: &ShowArgs, json_mode: bool) -> Result<()> {
    output(&ShowOutput::new(properties, args.raw), json_mode);
    Ok(())
}
