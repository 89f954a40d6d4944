// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded admission: a gate of `seats - 1` permits in front of the forks
//!
//! With at most `seats - 1` philosophers holding or awaiting forks, at least
//! one of the `seats` forks is always unclaimed, so some admitted philosopher
//! can always complete its pair. Once admitted, forks are taken left then
//! right with plain blocking locks. The permit is returned only after both
//! forks are back on the table.

use super::{pick_up, put_down, ForkProtocol, Hand, Strategy};
use crate::clock::{Clock, SystemClock};
use crate::coordination::{AdmissionGate, ForkSet, ForkUsage, TableStatus};
use crate::event::{EventKind, EventSink};
use crate::seat::{Grant, Seat};

#[derive(Debug)]
pub struct AdmissionForks<C: Clock = SystemClock> {
    gate: AdmissionGate,
    forks: ForkSet<C>,
    clock: C,
}

impl AdmissionForks {
    pub fn new(seats: usize) -> Self {
        Self::with_clock(seats, SystemClock)
    }
}

impl<C: Clock> AdmissionForks<C> {
    pub fn with_clock(seats: usize, clock: C) -> Self {
        Self {
            gate: AdmissionGate::for_table(seats),
            forks: ForkSet::new(seats, clock.clone()),
            clock,
        }
    }

    pub fn gate(&self) -> &AdmissionGate {
        &self.gate
    }
}

impl<C: Clock> ForkProtocol for AdmissionForks<C> {
    fn strategy(&self) -> Strategy {
        Strategy::Admission
    }

    fn seats(&self) -> usize {
        self.forks.len()
    }

    fn acquire(&self, seat: Seat, events: &dyn EventSink) -> Grant {
        let requested = self.clock.now();
        events.record(seat.philosopher, EventKind::RequestSeat);
        self.gate.enter();
        events.record(seat.philosopher, EventKind::Seated);
        pick_up(&self.forks, seat, Hand::Left, events);
        pick_up(&self.forks, seat, Hand::Right, events);
        Grant::new(seat, self.clock.since(requested))
    }

    fn release(&self, grant: Grant, events: &dyn EventSink) {
        let seat = grant.seat();
        put_down(&self.forks, seat, Hand::Right);
        put_down(&self.forks, seat, Hand::Left);
        self.gate.leave();
        events.record(seat.philosopher, EventKind::Released);
    }

    fn usage(&self) -> Vec<ForkUsage> {
        self.forks.usage()
    }

    fn status(&self) -> TableStatus {
        let mut status = self.forks.status();
        status.waiting += self.gate.waiting();
        status
    }
}
