// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dinner configuration
//!
//! Read from TOML, with durations in humantime notation:
//!
//! ```toml
//! philosophers = 5
//! strategy = "monitor"
//! run_for = "30s"
//! grace = "2s"
//! aging_factor = 2.0
//! status_interval = "10s"
//!
//! [think]
//! min = "1s"
//! max = "3s"
//!
//! [eat]
//! min = "1s"
//! max = "3s"
//! ```

use crate::coordination::DEFAULT_AGING_FACTOR;
use crate::delay::{DelayRange, UniformDelay};
use crate::protocol::Strategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors from loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a table needs at least 2 philosophers, got {0}")]
    TooFewPhilosophers(usize),
    #[error("unknown strategy: {0} (expected unordered, asymmetric, admission or monitor)")]
    UnknownStrategy(String),
    #[error("invalid {phase} range: min {min:?} exceeds max {max:?}")]
    InvalidDelayRange {
        phase: &'static str,
        min: Duration,
        max: Duration,
    },
    #[error("aging factor must be a positive finite number, got {0}")]
    InvalidAgingFactor(f64),
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DinnerConfig {
    /// Philosophers, and forks, around the table
    pub philosophers: usize,
    pub strategy: Strategy,
    /// How long philosophers dine before being asked to stop
    #[serde(with = "humantime_serde")]
    pub run_for: Duration,
    /// How long to wait for every philosopher to leave after the stop
    #[serde(with = "humantime_serde")]
    pub grace: Duration,
    pub think: DelayRange,
    pub eat: DelayRange,
    /// Monitor only: hunger ratio over the queue head needed to jump the queue
    pub aging_factor: f64,
    /// How often the driver reports table status
    #[serde(with = "humantime_serde")]
    pub status_interval: Duration,
}

impl Default for DinnerConfig {
    fn default() -> Self {
        Self {
            philosophers: 5,
            strategy: Strategy::Monitor,
            run_for: Duration::from_secs(30),
            grace: Duration::from_secs(2),
            think: DelayRange::default(),
            eat: DelayRange::default(),
            aging_factor: DEFAULT_AGING_FACTOR,
            status_interval: Duration::from_secs(10),
        }
    }
}

impl DinnerConfig {
    pub fn new(philosophers: usize, strategy: Strategy) -> Self {
        Self {
            philosophers,
            strategy,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DinnerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn with_run_for(mut self, run_for: Duration) -> Self {
        self.run_for = run_for;
        self
    }

    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    pub fn with_delays(mut self, think: DelayRange, eat: DelayRange) -> Self {
        self.think = think;
        self.eat = eat;
        self
    }

    pub fn with_aging_factor(mut self, aging_factor: f64) -> Self {
        self.aging_factor = aging_factor;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.philosophers < 2 {
            return Err(ConfigError::TooFewPhilosophers(self.philosophers));
        }
        for (phase, range) in [("think", self.think), ("eat", self.eat)] {
            if !range.is_valid() {
                return Err(ConfigError::InvalidDelayRange {
                    phase,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if !self.aging_factor.is_finite() || self.aging_factor <= 0.0 {
            return Err(ConfigError::InvalidAgingFactor(self.aging_factor));
        }
        if self.status_interval.is_zero() {
            return Err(ConfigError::ZeroDuration("status_interval"));
        }
        Ok(())
    }

    /// Random think/eat delays drawn from the configured ranges
    pub fn delays(&self) -> UniformDelay {
        UniformDelay::new(self.think, self.eat)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
