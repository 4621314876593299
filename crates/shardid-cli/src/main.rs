#![doc = include_str!("../README.md")]

mod command;
mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, CliConfig};
use std::process::ExitCode;
use telemetry::init_telemetry;

fn main() -> anyhow::Result<ExitCode> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    init_telemetry()?;
    tracing::debug!(?config, "starting");

    let stdout = std::io::stdout();
    let ok = command::run(&config, &mut stdout.lock())?;
    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
