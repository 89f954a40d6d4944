// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dinner run` - Seat the philosophers, let them dine, report fairness

use crate::error::DinnerCliError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use dinner_core::{
    ConfigError, DelayRange, Dinner, DinnerConfig, PhilosopherId, Report, StopSignal, Strategy,
    TableStatus, TracingSink,
};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Acquisition strategy (see `dinner strategies`)
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Number of philosophers, and forks, at the table
    #[arg(short = 'n', long)]
    pub philosophers: Option<usize>,

    /// How long to dine before asking everyone to stop (e.g. "30s")
    #[arg(short, long, value_parser = humantime::parse_duration)]
    pub duration: Option<Duration>,

    /// How long to wait for philosophers to leave after the stop
    #[arg(long, value_parser = humantime::parse_duration)]
    pub grace: Option<Duration>,

    /// Thinking time, as MIN..MAX or a single duration
    #[arg(long, value_parser = parse_delay_range)]
    pub think: Option<DelayRange>,

    /// Eating time, as MIN..MAX or a single duration
    #[arg(long, value_parser = parse_delay_range)]
    pub eat: Option<DelayRange>,

    /// Monitor only: how much hungrier than the queue head a philosopher
    /// must be to jump the queue
    #[arg(long)]
    pub aging_factor: Option<f64>,

    /// How often to print the table status
    #[arg(long, value_parser = humantime::parse_duration)]
    pub status_interval: Option<Duration>,

    /// TOML config file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl RunArgs {
    /// Merge the config file (or defaults) with flag overrides, then validate
    pub fn resolve(&self) -> Result<DinnerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DinnerConfig::load(path)?,
            None => DinnerConfig::default(),
        };
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(philosophers) = self.philosophers {
            config.philosophers = philosophers;
        }
        if let Some(duration) = self.duration {
            config.run_for = duration;
        }
        if let Some(grace) = self.grace {
            config.grace = grace;
        }
        if let Some(think) = self.think {
            config.think = think;
        }
        if let Some(eat) = self.eat {
            config.eat = eat;
        }
        if let Some(aging_factor) = self.aging_factor {
            config.aging_factor = aging_factor;
        }
        if let Some(interval) = self.status_interval {
            config.status_interval = interval;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Parse `MIN..MAX` or a single duration, e.g. `1s..3s` or `500ms`
pub fn parse_delay_range(s: &str) -> Result<DelayRange, String> {
    let parse = |part: &str| {
        humantime::parse_duration(part.trim())
            .map_err(|e| format!("invalid duration `{part}`: {e}"))
    };
    match s.split_once("..") {
        Some((min, max)) => {
            let range = DelayRange::new(parse(min)?, parse(max)?);
            if range.is_valid() {
                Ok(range)
            } else {
                Err(format!("min exceeds max in `{s}`"))
            }
        }
        None => Ok(DelayRange::fixed(parse(s)?)),
    }
}

/// What `dinner run` prints at the end
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub report: Report,
    pub finished: Vec<PhilosopherId>,
    pub stuck: Vec<PhilosopherId>,
    pub panicked: Vec<PhilosopherId>,
    pub table: TableStatus,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.report)?;
        writeln!(f)?;
        writeln!(f, "table:    {}", self.table)?;
        let seated = self.finished.len() + self.stuck.len() + self.panicked.len();
        write!(f, "left:     {}/{}", self.finished.len(), seated)?;
        if !self.stuck.is_empty() {
            let stuck: Vec<String> = self.stuck.iter().map(ToString::to_string).collect();
            write!(f, " (stuck: {})", stuck.join(", "))?;
        }
        Ok(())
    }
}

pub fn handle(args: RunArgs) -> Result<()> {
    let config = args.resolve().map_err(DinnerCliError::invalid_config)?;

    let interrupt = StopSignal::new();
    let handler = interrupt.clone();
    ctrlc::set_handler(move || {
        eprintln!("\nStopping dinner...");
        handler.raise();
    })?;

    if args.format == OutputFormat::Text {
        println!(
            "Seating {} philosophers ({}) for {}",
            config.philosophers,
            config.strategy,
            humantime::format_duration(config.run_for)
        );
        println!();
    }

    let mut dinner = Dinner::configure(
        config.clone(),
        Arc::new(config.delays()),
        Arc::new(TracingSink),
    )?;
    dinner.start()?;

    // A run too long to express as an Instant lasts until interrupted
    let deadline = Instant::now().checked_add(config.run_for);
    while let Some(left) = time_left(deadline) {
        if interrupt.sleep(config.status_interval.min(left)).is_err() {
            tracing::info!("dinner interrupted");
            break;
        }
        if time_left(deadline).is_some() {
            let elapsed = Duration::from_secs(dinner.elapsed().as_secs());
            output::progress(
                format!("[{}] {}", humantime::format_duration(elapsed), dinner.status()),
                args.format,
            );
        }
    }

    let shutdown = dinner.join(config.grace);
    let summary = RunSummary {
        report: Report::from_snapshot(&shutdown.snapshot),
        finished: shutdown.finished.clone(),
        stuck: shutdown.stuck.clone(),
        panicked: shutdown.panicked.clone(),
        table: shutdown.status.clone(),
    };
    output::print(&summary, args.format)?;

    if !shutdown.stuck.is_empty() {
        return Err(DinnerCliError::suspected_deadlock(&shutdown, config.grace).into());
    }
    if !shutdown.panicked.is_empty() {
        return Err(DinnerCliError::philosophers_panicked(&shutdown).into());
    }
    Ok(())
}

/// Time until `deadline`, or `None` once it has passed
fn time_left(deadline: Option<Instant>) -> Option<Duration> {
    match deadline {
        Some(deadline) => deadline
            .checked_duration_since(Instant::now())
            .filter(|left| !left.is_zero()),
        None => Some(Duration::MAX),
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
