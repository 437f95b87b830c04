//! fieldlogic - Entry Point
//!
//! Loads configuration (`--config`, `fieldlogic.toml`, `FIELDLOGIC__*`
//! environment variables), initializes logging on stderr and runs the
//! requested command.

use clap::Parser;
use fieldlogic::cli::{Cli, execute};
use fieldlogic_infrastructure::ConfigLoader;
use fieldlogic_infrastructure::logging::init_logging;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let ok = execute(&cli.command, &config, &mut std::io::stdout().lock())?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
