// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The philosopher loop: think, acquire both forks, eat, release
//!
//! Written once against [`ForkProtocol`]. A philosopher owns no fork state;
//! between `acquire` and `release` it holds only a [`Grant`].

use crate::delay::DelaySource;
use crate::event::{EventKind, EventSink};
use crate::metrics::Metrics;
use crate::protocol::ForkProtocol;
use crate::seat::{Grant, PhilosopherId, Seat};
use crate::stop::{Cancelled, StopSignal};
use std::sync::Arc;
use std::thread;

/// Everything the philosophers of one table share
#[derive(Clone)]
pub struct Table {
    pub protocol: Arc<dyn ForkProtocol>,
    pub delays: Arc<dyn DelaySource>,
    pub events: Arc<dyn EventSink>,
    pub metrics: Arc<Metrics>,
}

impl Table {
    pub fn new(
        protocol: Arc<dyn ForkProtocol>,
        delays: Arc<dyn DelaySource>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        let metrics = Arc::new(Metrics::new(protocol.seats()));
        Self {
            protocol,
            delays,
            events,
            metrics,
        }
    }
}

pub struct Philosopher {
    seat: Seat,
    table: Table,
    stop: StopSignal,
}

impl Philosopher {
    pub fn new(seat: Seat, table: Table, stop: StopSignal) -> Self {
        Self { seat, table, stop }
    }

    pub fn id(&self) -> PhilosopherId {
        self.seat.philosopher
    }

    /// Dine until the stop signal is observed
    pub fn run(self) {
        while self.dine_once().is_ok() {}
        self.table.events.record(self.id(), EventKind::Stopped);
        tracing::debug!(philosopher = %self.id(), "left the table");
    }

    /// One full think → eat cycle.
    ///
    /// The stop signal is honoured before the cycle and while thinking.
    /// Once the forks are requested the cycle always completes, so a
    /// cancelled philosopher never leaves with a fork in hand.
    pub fn dine_once(&self) -> Result<(), Cancelled> {
        let id = self.id();
        let stats = self.table.metrics.philosopher(id);
        self.stop.check()?;

        self.table.events.record(id, EventKind::ThinkStart);
        self.stop.sleep(self.table.delays.think())?;

        stats.record_attempt();
        let grant = self.table.protocol.acquire(self.seat, &*self.table.events);
        stats.record_grant(grant.waited());

        self.eat(&grant);

        self.table.protocol.release(grant, &*self.table.events);
        stats.record_meal();
        Ok(())
    }

    fn eat(&self, grant: &Grant) {
        let id = grant.philosopher();
        self.table.events.record(id, EventKind::EatingStart);
        let duration = self.table.delays.eat();
        if !duration.is_zero() {
            thread::sleep(duration);
        }
        self.table.events.record(id, EventKind::EatingEnd);
    }
}

#[cfg(test)]
#[path = "philosopher_tests.rs"]
mod tests;
