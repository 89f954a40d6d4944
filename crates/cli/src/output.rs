// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands
//!
//! In JSON mode stdout carries exactly one document, so progress lines are
//! sent to stderr instead.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print a final result in the specified format
pub fn print<T: Serialize + Display>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// Print a list of items, one per line or as a JSON array
pub fn print_list<T: Serialize + Display>(items: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for item in items {
                println!("{}", item);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
    }
    Ok(())
}

/// Print an intermediate progress line
pub fn progress(line: impl Display, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", line),
        OutputFormat::Json => eprintln!("{}", line),
    }
}
