// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fairness analysis of a finished (or running) dinner

use crate::metrics::{ForkSnapshot, MetricsSnapshot, PhilosopherSnapshot};
use crate::protocol::Strategy;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Qualitative reading of the meal-count coefficient of variation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fairness {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl Fairness {
    /// Grade a coefficient of variation given in percent
    pub fn from_cv(cv_percent: f64) -> Self {
        if cv_percent < 15.0 {
            Fairness::Excellent
        } else if cv_percent < 25.0 {
            Fairness::Good
        } else if cv_percent < 40.0 {
            Fairness::Moderate
        } else {
            Fairness::Poor
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Fairness::Excellent => "excellent",
            Fairness::Good => "good",
            Fairness::Moderate => "moderate",
            Fairness::Poor => "poor",
        }
    }
}

impl fmt::Display for Fairness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Summary statistics over the per-philosopher meal counts
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub strategy: Strategy,
    #[serde(with = "humantime_serde")]
    pub elapsed: Duration,
    pub total_meals: u64,
    pub mean_meals: f64,
    pub min_meals: u64,
    pub max_meals: u64,
    /// Population standard deviation
    pub std_dev: f64,
    pub cv_percent: f64,
    /// `max - min` as a share of the mean
    pub spread_percent: f64,
    pub average_wait_ms: f64,
    pub mean_utilization_percent: f64,
    pub fairness: Fairness,
    pub philosophers: Vec<PhilosopherSnapshot>,
    pub forks: Vec<ForkSnapshot>,
}

impl Report {
    pub fn from_snapshot(snapshot: &MetricsSnapshot) -> Self {
        let meals = snapshot.meal_counts();
        let total_meals: u64 = meals.iter().sum();
        let mean_meals = mean(meals.iter().map(|&m| m as f64));
        let variance = mean(meals.iter().map(|&m| (m as f64 - mean_meals).powi(2)));
        let std_dev = variance.sqrt();
        let min_meals = meals.iter().copied().min().unwrap_or(0);
        let max_meals = meals.iter().copied().max().unwrap_or(0);

        let (cv_percent, spread_percent) = if mean_meals > 0.0 {
            (
                std_dev / mean_meals * 100.0,
                (max_meals - min_meals) as f64 / mean_meals * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        // Nobody ate: nothing to call fair
        let fairness = if total_meals == 0 {
            Fairness::Poor
        } else {
            Fairness::from_cv(cv_percent)
        };

        Self {
            strategy: snapshot.strategy,
            elapsed: snapshot.elapsed,
            total_meals,
            mean_meals,
            min_meals,
            max_meals,
            std_dev,
            cv_percent,
            spread_percent,
            average_wait_ms: mean(snapshot.philosophers.iter().map(|p| p.average_wait_ms)),
            mean_utilization_percent: mean(snapshot.forks.iter().map(|f| f.utilization_percent)),
            fairness,
            philosophers: snapshot.philosophers.clone(),
            forks: snapshot.forks.clone(),
        }
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.sum::<f64>() / n as f64
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "strategy: {} ({})",
            self.strategy,
            self.strategy.guarantees()
        )?;
        writeln!(f, "elapsed:  {}", humantime::format_duration(self.elapsed))?;
        writeln!(f)?;
        writeln!(f, "{:<6} {:>8} {:>10} {:>14}", "", "meals", "attempts", "avg wait")?;
        for p in &self.philosophers {
            writeln!(
                f,
                "{:<6} {:>8} {:>10} {:>11.1} ms",
                p.id.to_string(),
                p.meals,
                p.attempts,
                p.average_wait_ms
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{:<6} {:>8} {:>14}", "", "uses", "utilization")?;
        for fork in &self.forks {
            writeln!(
                f,
                "{:<6} {:>8} {:>13.1}%",
                fork.id.to_string(),
                fork.uses,
                fork.utilization_percent
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "meals:    total {} | mean {:.2} | min {} | max {}",
            self.total_meals, self.mean_meals, self.min_meals, self.max_meals
        )?;
        writeln!(
            f,
            "spread:   std dev {:.2} | cv {:.1}% | max-min {:.1}% of mean",
            self.std_dev, self.cv_percent, self.spread_percent
        )?;
        writeln!(
            f,
            "waiting:  {:.1} ms average | forks busy {:.1}%",
            self.average_wait_ms, self.mean_utilization_percent
        )?;
        write!(f, "fairness: {}", self.fairness)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
