// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Think and eat durations
//!
//! The philosopher loop asks a [`DelaySource`] how long to think and eat, so
//! tests can run the same coordination code with zero or fixed delays.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Supplies the duration of each thinking and eating phase
pub trait DelaySource: Send + Sync {
    fn think(&self) -> Duration;
    fn eat(&self) -> Duration;
}

/// Inclusive range of durations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    #[serde(with = "humantime_serde")]
    pub min: Duration,
    #[serde(with = "humantime_serde")]
    pub max: Duration,
}

impl DelayRange {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    /// Range with a single value
    pub fn fixed(value: Duration) -> Self {
        Self::new(value, value)
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    fn sample(&self, rng: &mut impl Rng) -> Duration {
        if self.min >= self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), Duration::from_secs(3))
    }
}

/// Uniformly random think and eat durations
#[derive(Clone, Debug)]
pub struct UniformDelay {
    think: DelayRange,
    eat: DelayRange,
}

impl UniformDelay {
    pub fn new(think: DelayRange, eat: DelayRange) -> Self {
        Self { think, eat }
    }
}

impl Default for UniformDelay {
    fn default() -> Self {
        Self::new(DelayRange::default(), DelayRange::default())
    }
}

impl DelaySource for UniformDelay {
    fn think(&self) -> Duration {
        self.think.sample(&mut rand::thread_rng())
    }

    fn eat(&self) -> Duration {
        self.eat.sample(&mut rand::thread_rng())
    }
}

/// Constant think and eat durations
#[derive(Clone, Copy, Debug)]
pub struct FixedDelay {
    pub think: Duration,
    pub eat: Duration,
}

impl FixedDelay {
    pub fn new(think: Duration, eat: Duration) -> Self {
        Self { think, eat }
    }

    /// No thinking, no eating: maximum contention
    pub fn zero() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

impl DelaySource for FixedDelay {
    fn think(&self) -> Duration {
        self.think
    }

    fn eat(&self) -> Duration {
        self.eat
    }
}

#[cfg(test)]
#[path = "delay_tests.rs"]
mod tests;
