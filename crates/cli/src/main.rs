// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! dinner - dining philosophers CLI

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod commands;
mod completions;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{run, strategies};
use completions::CompletionsArgs;
use error::DinnerCliError;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "dinner",
    version,
    about = "Dining philosophers - four fork-acquisition strategies and a fairness monitor"
)]
struct Cli {
    /// Only log warnings and errors (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seat the philosophers and let them dine
    Run(run::RunArgs),
    /// List the acquisition strategies and what they guarantee
    Strategies(strategies::StrategiesArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.quiet);

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<DinnerCliError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run(args) => run::handle(args),
        Commands::Strategies(args) => strategies::handle(args),
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell);
            Ok(())
        }
    }
}

/// Logs go to stderr so that stdout carries only the report
fn setup_logging(quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
