//! JoularJX configuration CLI entry point.

use clap::Parser;

use joularjx_config::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = joularjx_config::cli::run(&cli) {
        joularjx_config::cli::handle_error(&err, cli.json);
    }
}
