// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unordered acquisition: every philosopher takes left, then right
//!
//! Nothing breaks the cycle. If every philosopher picks up its left fork
//! before anyone reaches right, all of them block forever. This protocol
//! exists to demonstrate that failure.

use super::{pick_up, put_down, ForkProtocol, Hand, Strategy};
use crate::clock::{Clock, SystemClock};
use crate::coordination::{ForkSet, ForkUsage, TableStatus};
use crate::event::{EventKind, EventSink};
use crate::seat::{Grant, Seat};

#[derive(Debug)]
pub struct UnorderedForks<C: Clock = SystemClock> {
    forks: ForkSet<C>,
    clock: C,
}

impl UnorderedForks {
    pub fn new(seats: usize) -> Self {
        Self::with_clock(seats, SystemClock)
    }
}

impl<C: Clock> UnorderedForks<C> {
    pub fn with_clock(seats: usize, clock: C) -> Self {
        Self {
            forks: ForkSet::new(seats, clock.clone()),
            clock,
        }
    }

    pub fn forks(&self) -> &ForkSet<C> {
        &self.forks
    }
}

impl<C: Clock> ForkProtocol for UnorderedForks<C> {
    fn strategy(&self) -> Strategy {
        Strategy::Unordered
    }

    fn seats(&self) -> usize {
        self.forks.len()
    }

    fn acquire(&self, seat: Seat, events: &dyn EventSink) -> Grant {
        let requested = self.clock.now();
        pick_up(&self.forks, seat, Hand::Left, events);
        pick_up(&self.forks, seat, Hand::Right, events);
        Grant::new(seat, self.clock.since(requested))
    }

    fn release(&self, grant: Grant, events: &dyn EventSink) {
        let seat = grant.seat();
        put_down(&self.forks, seat, Hand::Right);
        put_down(&self.forks, seat, Hand::Left);
        events.record(seat.philosopher, EventKind::Released);
    }

    fn usage(&self) -> Vec<ForkUsage> {
        self.forks.usage()
    }

    fn status(&self) -> TableStatus {
        self.forks.status()
    }
}
