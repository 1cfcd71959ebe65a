//! Command-line interface
//!
//! Loads the agent configuration from disk, initializes logging at the
//! configured level and reports the effective settings. Any failure to load
//! the configuration file terminates the process with exit status 1.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::domain::errors::ConfigError;
use crate::domain::ports::ConfigSource;
use crate::infrastructure::config::{ConfigLoader, DEFAULT_CONFIG_FILE};
use crate::infrastructure::logging::{LogConfig, LoggerImpl};
use crate::infrastructure::sources::FileSystemSource;

use commands::show::ShowArgs;

/// Exit status for failures that are not configuration errors.
const GENERIC_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "joularjx-config")]
#[command(about = "Inspect and validate the JoularJX agent configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the configuration file
    #[arg(long, env = "JOULARJX_CONFIG_DIR", default_value = ".", global = true)]
    pub config_dir: PathBuf,

    /// Configuration file name, relative to the configuration directory
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub file: PathBuf,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective configuration with defaults applied
    Show(ShowArgs),

    /// Verify the configuration file exists and can be read
    Check,
}

/// Load the configuration, initialize logging and run the command.
pub fn run(cli: &Cli) -> Result<()> {
    let source = FileSystemSource::new(&cli.config_dir);
    let loader = ConfigLoader::new(&source).with_file_name(&cli.file);
    let properties = loader.load()?;

    let _logger = LoggerImpl::init(&LogConfig::load()?, properties.logger_level())?;
    tracing::info!(
        level = %properties.logger_level(),
        filters = properties.filter_method_names().len(),
        "agent configuration ready"
    );

    match &cli.command {
        Commands::Show(args) => commands::show::execute(&properties, args, cli.json),
        Commands::Check => {
            commands::check::execute(source.describe(loader.file_name()), &properties, cli.json)
        }
    }
}

/// Exit status for a failed run.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ConfigError>()
        .map_or(GENERIC_FAILURE, ConfigError::exit_code)
}

/// Render an error for stderr.
pub fn format_error(err: &anyhow::Error, json_mode: bool) -> String {
    if json_mode {
        serde_json::json!({
            "error": format!("{err:#}"),
            "exit_code": exit_code(err),
        })
        .to_string()
    } else {
        format!("Error: {err:#}")
    }
}

/// Report `err` on stderr and terminate the process.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    eprintln!("{}", format_error(err, json_mode));
    std::process::exit(exit_code(err))
}
