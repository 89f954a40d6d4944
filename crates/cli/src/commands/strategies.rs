// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dinner strategies` - List acquisition strategies

use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use dinner_core::Strategy;
use serde::Serialize;
use std::fmt;

#[derive(Args, Debug)]
pub struct StrategiesArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct StrategyRow {
    name: &'static str,
    deadlock_free: bool,
    guarantees: &'static str,
}

impl From<Strategy> for StrategyRow {
    fn from(strategy: Strategy) -> Self {
        Self {
            name: strategy.name(),
            deadlock_free: strategy.is_deadlock_free(),
            guarantees: strategy.guarantees(),
        }
    }
}

impl fmt::Display for StrategyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12} {}", self.name, self.guarantees)
    }
}

pub fn handle(args: StrategiesArgs) -> Result<()> {
    let rows: Vec<StrategyRow> = Strategy::ALL.into_iter().map(StrategyRow::from).collect();
    output::print_list(&rows, args.format)
}
