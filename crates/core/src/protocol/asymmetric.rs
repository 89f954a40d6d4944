// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Asymmetric ordering: the last philosopher takes right, then left
//!
//! A circular wait needs every philosopher to hold one fork and want the
//! next one around the table. The reversed philosopher contends for its
//! right fork first, so it can never hold its left while waiting on its
//! right, and that edge of the cycle never forms.
//!
//! This rules out deadlock but not starvation: a slow philosopher can keep
//! losing races to faster neighbours.

use super::{pick_up, put_down, ForkProtocol, Hand, Strategy};
use crate::clock::{Clock, SystemClock};
use crate::coordination::{ForkSet, ForkUsage, TableStatus};
use crate::event::{EventKind, EventSink};
use crate::seat::{Grant, PhilosopherId, Seat};

#[derive(Debug)]
pub struct AsymmetricForks<C: Clock = SystemClock> {
    forks: ForkSet<C>,
    reversed: PhilosopherId,
    clock: C,
}

impl AsymmetricForks {
    pub fn new(seats: usize) -> Self {
        Self::with_clock(seats, SystemClock)
    }
}

impl<C: Clock> AsymmetricForks<C> {
    pub fn with_clock(seats: usize, clock: C) -> Self {
        Self {
            forks: ForkSet::new(seats, clock.clone()),
            reversed: PhilosopherId(seats.saturating_sub(1)),
            clock,
        }
    }

    /// The philosopher that picks up right before left
    pub fn reversed(&self) -> PhilosopherId {
        self.reversed
    }

    /// Pick-up order for a seat; put-down runs in reverse
    fn order(&self, seat: Seat) -> [Hand; 2] {
        if seat.philosopher == self.reversed {
            [Hand::Right, Hand::Left]
        } else {
            [Hand::Left, Hand::Right]
        }
    }
}

impl<C: Clock> ForkProtocol for AsymmetricForks<C> {
    fn strategy(&self) -> Strategy {
        Strategy::Asymmetric
    }

    fn seats(&self) -> usize {
        self.forks.len()
    }

    fn acquire(&self, seat: Seat, events: &dyn EventSink) -> Grant {
        let requested = self.clock.now();
        for hand in self.order(seat) {
            pick_up(&self.forks, seat, hand, events);
        }
        Grant::new(seat, self.clock.since(requested))
    }

    fn release(&self, grant: Grant, events: &dyn EventSink) {
        let seat = grant.seat();
        for hand in self.order(seat).into_iter().rev() {
            put_down(&self.forks, seat, hand);
        }
        events.record(seat.philosopher, EventKind::Released);
    }

    fn usage(&self) -> Vec<ForkUsage> {
        self.forks.usage()
    }

    fn status(&self) -> TableStatus {
        self.forks.status()
    }
}
