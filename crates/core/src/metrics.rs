// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-philosopher and per-fork counters
//!
//! Philosopher counters are relaxed atomics: they are diagnostic and never
//! feed back into acquisition decisions. Fork counters come from the ledgers
//! kept under the arbitrating lock.

use crate::coordination::ForkUsage;
use crate::protocol::Strategy;
use crate::seat::{ForkId, PhilosopherId};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Counters owned by one philosopher
#[derive(Debug, Default)]
pub struct PhilosopherStats {
    meals: AtomicU64,
    attempts: AtomicU64,
    grants: AtomicU64,
    wait_nanos: AtomicU64,
}

impl PhilosopherStats {
    pub fn record_attempt(&self) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_grant(&self, waited: Duration) {
        let nanos = u64::try_from(waited.as_nanos()).unwrap_or(u64::MAX);
        self.wait_nanos.fetch_add(nanos, Ordering::Relaxed);
        self.grants.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_meal(&self) {
        self.meals.fetch_add(1, Ordering::Relaxed);
    }

    pub fn meals(&self) -> u64 {
        self.meals.load(Ordering::Relaxed)
    }

    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    pub fn total_wait(&self) -> Duration {
        Duration::from_nanos(self.wait_nanos.load(Ordering::Relaxed))
    }

    /// Mean wait per granted acquisition
    pub fn average_wait(&self) -> Duration {
        match self.grants.load(Ordering::Relaxed) {
            0 => Duration::ZERO,
            grants => self.total_wait() / u32::try_from(grants).unwrap_or(u32::MAX),
        }
    }
}

/// Counters for a whole table
#[derive(Debug)]
pub struct Metrics {
    philosophers: Vec<PhilosopherStats>,
}

impl Metrics {
    pub fn new(seats: usize) -> Self {
        Self {
            philosophers: (0..seats).map(|_| PhilosopherStats::default()).collect(),
        }
    }

    pub fn philosopher(&self, id: PhilosopherId) -> &PhilosopherStats {
        &self.philosophers[id.0]
    }

    pub fn snapshot(
        &self,
        strategy: Strategy,
        usage: &[ForkUsage],
        elapsed: Duration,
    ) -> MetricsSnapshot {
        let philosophers = self
            .philosophers
            .iter()
            .enumerate()
            .map(|(i, stats)| PhilosopherSnapshot {
                id: PhilosopherId(i),
                meals: stats.meals(),
                attempts: stats.attempts(),
                average_wait_ms: stats.average_wait().as_secs_f64() * 1000.0,
            })
            .collect();
        let forks = usage
            .iter()
            .map(|u| ForkSnapshot {
                id: u.fork,
                uses: u.uses,
                utilization_percent: utilization_percent(u.in_use, elapsed),
            })
            .collect();
        MetricsSnapshot {
            strategy,
            elapsed,
            philosophers,
            forks,
        }
    }
}

fn utilization_percent(in_use: Duration, elapsed: Duration) -> f64 {
    if elapsed.is_zero() {
        return 0.0;
    }
    in_use.as_secs_f64() / elapsed.as_secs_f64() * 100.0
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PhilosopherSnapshot {
    pub id: PhilosopherId,
    pub meals: u64,
    pub attempts: u64,
    pub average_wait_ms: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForkSnapshot {
    pub id: ForkId,
    pub uses: u64,
    /// Share of the elapsed time the fork spent in someone's hand
    pub utilization_percent: f64,
}

/// Raw numbers handed to reporting
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub strategy: Strategy,
    #[serde(with = "humantime_serde")]
    pub elapsed: Duration,
    pub philosophers: Vec<PhilosopherSnapshot>,
    pub forks: Vec<ForkSnapshot>,
}

impl MetricsSnapshot {
    pub fn meal_counts(&self) -> Vec<u64> {
        self.philosophers.iter().map(|p| p.meals).collect()
    }

    pub fn total_meals(&self) -> u64 {
        self.philosophers.iter().map(|p| p.meals).sum()
    }

    pub fn total_fork_uses(&self) -> u64 {
        self.forks.iter().map(|f| f.uses).sum()
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
