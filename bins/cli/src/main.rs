//! Tally command-line entry point.

mod cli;
mod commands;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use tally_core::currency::registry;
use tally_core::{CurrencyRegistry, InMemoryRegistry, MoneyError};
use tally_shared::{AppConfig, AppError, telemetry};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("error: {err}");
            return exit_code(&err);
        }
    };
    telemetry::init(&config.logging, cli.verbose);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            match err.downcast_ref::<MoneyError>() {
                Some(money_err) => exit_code(&AppError::from(money_err.clone())),
                None => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let currencies = Arc::new(
        InMemoryRegistry::from_config(&config.currencies)
            .context("failed to build currency registry")?,
    );
    registry::install(Arc::clone(&currencies) as Arc<dyn CurrencyRegistry>);
    info!(
        currencies = currencies.currencies().len(),
        default = currencies.default_code().as_deref().unwrap_or("-"),
        "Currency registry installed"
    );

    for line in commands::execute(cli.command, &currencies)? {
        println!("{line}");
    }
    Ok(())
}

fn exit_code(err: &AppError) -> ExitCode {
    u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
}
