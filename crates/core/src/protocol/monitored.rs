// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitor protocol: both forks granted at once by the table monitor

use super::{ForkProtocol, Strategy};
use crate::clock::{Clock, SystemClock};
use crate::coordination::{ForkUsage, TableMonitor, TableStatus};
use crate::event::{EventKind, EventSink};
use crate::seat::{Grant, Seat};

#[derive(Debug)]
pub struct MonitoredForks<C: Clock = SystemClock> {
    monitor: TableMonitor<C>,
}

impl MonitoredForks {
    pub fn new(seats: usize) -> Self {
        Self::with_clock(seats, SystemClock)
    }
}

impl<C: Clock> MonitoredForks<C> {
    pub fn with_clock(seats: usize, clock: C) -> Self {
        Self {
            monitor: TableMonitor::new(seats, clock),
        }
    }

    pub fn with_aging_factor(mut self, aging_factor: f64) -> Self {
        self.monitor = self.monitor.with_aging_factor(aging_factor);
        self
    }

    pub fn monitor(&self) -> &TableMonitor<C> {
        &self.monitor
    }
}

impl<C: Clock> ForkProtocol for MonitoredForks<C> {
    fn strategy(&self) -> Strategy {
        Strategy::Monitor
    }

    fn seats(&self) -> usize {
        self.monitor.seats()
    }

    fn acquire(&self, seat: Seat, events: &dyn EventSink) -> Grant {
        events.record(seat.philosopher, EventKind::RequestPair);
        let grant = self.monitor.request_forks(seat);
        events.record(seat.philosopher, EventKind::AcquiredPair);
        grant
    }

    fn release(&self, grant: Grant, events: &dyn EventSink) {
        let philosopher = grant.philosopher();
        self.monitor.release_forks(grant);
        events.record(philosopher, EventKind::Released);
    }

    fn usage(&self) -> Vec<ForkUsage> {
        self.monitor.usage()
    }

    fn status(&self) -> TableStatus {
        self.monitor.status()
    }
}
