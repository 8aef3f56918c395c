#![allow(clippy::print_stdout)]

mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use ncraft::domain::config::{LoggingConfig, StudioConfig};
use ncraft::kernel::config::load_config;
use ncraft_logger::{LogFormat, Logger, parse_level};

#[ncraft_runtime::main(current_thread)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config: StudioConfig =
        load_config(cli.config.as_ref()).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&config.logging)?;

    if let Command::Generate(args) = &cli.command
        && args.offline
    {
        config.availability.live = false;
    }

    let platform = ncraft::init(config).await?;
    commands::run(&platform, cli.command, cli.json).await
}

fn init_logger(logging: &LoggingConfig) -> anyhow::Result<Logger> {
    let format = if logging.json { LogFormat::Json } else { LogFormat::Compact };
    let builder = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .level(parse_level(&logging.level)?)
        .format(format);

    let logger = match &logging.directory {
        Some(directory) => builder.path(directory).init()?,
        None => builder.init()?,
    };

    Ok(logger)
}
