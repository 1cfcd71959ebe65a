//! Implementation of the `check` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::AgentProperties;

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub valid: bool,
    pub location: String,
    pub keys: usize,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        format!(
            "Configuration OK: {} ({} key{})",
            self.location,
            self.keys,
            if self.keys == 1 { "" } else { "s" }
        )
    }
}

pub fn execute(location: String, properties: &AgentProperties, json_mode: bool) -> Result<()> {
    let out = CheckOutput {
        valid: true,
        location,
        keys: properties.raw().len(),
    };
    output(&out, json_mode);
    Ok(())
}
