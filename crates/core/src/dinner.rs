// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Driving a whole table: spawn, run, stop, and join with a grace period

use crate::clock::SystemClock;
use crate::config::DinnerConfig;
use crate::coordination::TableStatus;
use crate::delay::DelaySource;
use crate::error::DinnerError;
use crate::event::EventSink;
use crate::metrics::MetricsSnapshot;
use crate::philosopher::{Philosopher, Table};
use crate::protocol::{self, ForkProtocol};
use crate::seat::{PhilosopherId, Seat};
use crate::stop::StopSignal;
use serde::Serialize;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const JOIN_POLL: Duration = Duration::from_millis(5);

/// How the philosophers left the table
#[derive(Clone, Debug, Serialize)]
pub struct ShutdownReport {
    /// Exited cleanly after the stop signal
    pub finished: Vec<PhilosopherId>,
    /// Still running when the grace period ran out
    pub stuck: Vec<PhilosopherId>,
    /// Thread ended with a panic
    pub panicked: Vec<PhilosopherId>,
    pub status: TableStatus,
    pub snapshot: MetricsSnapshot,
}

impl ShutdownReport {
    pub fn is_clean(&self) -> bool {
        self.stuck.is_empty() && self.panicked.is_empty()
    }

    /// Stuck philosophers and a table frozen in a circular wait
    pub fn deadlocked(&self) -> bool {
        !self.stuck.is_empty() && self.status.circular_wait()
    }
}

pub struct Dinner {
    config: DinnerConfig,
    table: Table,
    stops: Vec<StopSignal>,
    handles: Vec<(PhilosopherId, JoinHandle<()>)>,
    started: Option<Instant>,
}

impl Dinner {
    /// Validate `config` and set the table with its configured strategy
    pub fn configure(
        config: DinnerConfig,
        delays: Arc<dyn DelaySource>,
        events: Arc<dyn EventSink>,
    ) -> Result<Self, DinnerError> {
        config.validate()?;
        let protocol = protocol::build(
            config.strategy,
            config.philosophers,
            config.aging_factor,
            SystemClock,
        );
        Self::with_protocol(config, protocol, delays, events)
    }

    /// Set the table with a caller-supplied protocol instance, e.g. one the
    /// caller keeps a handle to for instrumentation
    pub fn with_protocol(
        config: DinnerConfig,
        protocol: Arc<dyn ForkProtocol>,
        delays: Arc<dyn DelaySource>,
        events: Arc<dyn EventSink>,
    ) -> Result<Self, DinnerError> {
        config.validate()?;
        if protocol.seats() != config.philosophers {
            return Err(DinnerError::SeatMismatch {
                protocol: protocol.seats(),
                table: config.philosophers,
            });
        }
        let stops = (0..config.philosophers).map(|_| StopSignal::new()).collect();
        Ok(Self {
            table: Table::new(protocol, delays, events),
            config,
            stops,
            handles: Vec::new(),
            started: None,
        })
    }

    pub fn config(&self) -> &DinnerConfig {
        &self.config
    }

    pub fn protocol(&self) -> &Arc<dyn ForkProtocol> {
        &self.table.protocol
    }

    /// Spawn one thread per philosopher
    pub fn start(&mut self) -> Result<(), DinnerError> {
        if self.started.is_some() {
            return Err(DinnerError::AlreadyStarted);
        }
        self.started = Some(Instant::now());
        tracing::info!(
            philosophers = self.config.philosophers,
            strategy = %self.config.strategy,
            "dinner started"
        );

        for seat in Seat::table(self.config.philosophers) {
            let philosopher = Philosopher::new(
                seat,
                self.table.clone(),
                self.stops[seat.philosopher.0].clone(),
            );
            let handle = thread::Builder::new()
                .name(format!("philosopher-{}", seat.philosopher.0))
                .spawn(move || philosopher.run())
                .map_err(|source| DinnerError::Spawn {
                    philosopher: seat.philosopher,
                    source,
                })?;
            self.handles.push((seat.philosopher, handle));
        }
        Ok(())
    }

    /// Ask one philosopher to leave after its current cycle
    pub fn stop(&self, philosopher: PhilosopherId) -> bool {
        match self.stops.get(philosopher.0) {
            Some(stop) => {
                stop.raise();
                true
            }
            None => false,
        }
    }

    pub fn stop_all(&self) {
        for stop in &self.stops {
            stop.raise();
        }
    }

    pub fn status(&self) -> TableStatus {
        self.table.protocol.status()
    }

    /// Meals finished so far by one philosopher
    pub fn meals(&self, philosopher: PhilosopherId) -> u64 {
        self.table.metrics.philosopher(philosopher).meals()
    }

    pub fn elapsed(&self) -> Duration {
        self.started.map(|s| s.elapsed()).unwrap_or_default()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.table.metrics.snapshot(
            self.table.protocol.strategy(),
            &self.table.protocol.usage(),
            self.elapsed(),
        )
    }

    /// Stop everyone and wait up to `grace` for their threads to end.
    ///
    /// Threads still running at the deadline are reported as stuck and
    /// detached; a real deadlock cannot be resolved by waiting longer.
    pub fn join(mut self, grace: Duration) -> ShutdownReport {
        self.stop_all();
        // A grace too long to express as an Instant waits for everyone
        let deadline = Instant::now().checked_add(grace);
        while !self.handles.iter().all(|(_, h)| h.is_finished()) {
            let nap = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        break;
                    }
                    JOIN_POLL.min(deadline - now)
                }
                None => JOIN_POLL,
            };
            thread::sleep(nap);
        }

        let mut finished = Vec::new();
        let mut stuck = Vec::new();
        let mut panicked = Vec::new();
        for (id, handle) in std::mem::take(&mut self.handles) {
            if !handle.is_finished() {
                stuck.push(id);
            } else if handle.join().is_ok() {
                finished.push(id);
            } else {
                panicked.push(id);
            }
        }

        let status = self.status();
        if !stuck.is_empty() {
            tracing::warn!(
                stuck = ?stuck,
                %status,
                "philosophers did not leave within the grace period"
            );
        } else {
            tracing::info!(elapsed = ?self.elapsed(), "dinner finished");
        }

        ShutdownReport {
            finished,
            stuck,
            panicked,
            status,
            snapshot: self.snapshot(),
        }
    }

    /// Start, dine for the configured duration, then stop and join
    pub fn run(self) -> Result<ShutdownReport, DinnerError> {
        self.run_until(&StopSignal::new())
    }

    /// Like [`Dinner::run`], but ends early when `interrupt` is raised
    pub fn run_until(mut self, interrupt: &StopSignal) -> Result<ShutdownReport, DinnerError> {
        self.start()?;
        if interrupt.sleep(self.config.run_for).is_err() {
            tracing::info!("dinner interrupted");
        }
        let grace = self.config.grace;
        Ok(self.join(grace))
    }
}

#[cfg(test)]
#[path = "dinner_tests.rs"]
mod tests;
