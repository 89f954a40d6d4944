// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fork: an exclusive, blocking lock with a known holder
//!
//! Unlike a `std::sync::Mutex`, a fork is taken and put down by separate
//! calls, so a protocol can hold it across the eating phase without keeping
//! a borrow alive. Ownership and the usage ledger live under one mutex.

use super::ledger::{ForkLedger, ForkUsage};
use super::status::TableStatus;
use crate::clock::{Clock, SystemClock};
use crate::seat::{ForkId, PhilosopherId};
use std::sync::{Condvar, Mutex};

/// Fork ownership
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForkState {
    /// Fork is on the table
    Free,
    /// Fork is in someone's hand
    Held { holder: PhilosopherId },
}

#[derive(Debug)]
struct ForkSlot {
    state: ForkState,
    /// Philosophers blocked in `take`
    waiters: usize,
    ledger: ForkLedger,
}

/// A single fork on the table
#[derive(Debug)]
pub struct Fork<C: Clock = SystemClock> {
    id: ForkId,
    clock: C,
    slot: Mutex<ForkSlot>,
    freed: Condvar,
}

impl<C: Clock> Fork<C> {
    pub fn new(id: ForkId, clock: C) -> Self {
        Self {
            id,
            clock,
            slot: Mutex::new(ForkSlot {
                state: ForkState::Free,
                waiters: 0,
                ledger: ForkLedger::new(),
            }),
            freed: Condvar::new(),
        }
    }

    pub fn id(&self) -> ForkId {
        self.id
    }

    /// Block until the fork is free, then hold it
    pub(crate) fn take(&self, who: PhilosopherId) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if slot.state != ForkState::Free {
            slot.waiters += 1;
            while slot.state != ForkState::Free {
                slot = self.freed.wait(slot).unwrap_or_else(|e| e.into_inner());
            }
            slot.waiters -= 1;
        }
        slot.state = ForkState::Held { holder: who };
        slot.ledger.picked_up(self.clock.now());
    }

    /// Put the fork back on the table and wake one waiter
    pub(crate) fn put_down(&self, who: PhilosopherId) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        debug_assert_eq!(slot.state, ForkState::Held { holder: who });
        slot.state = ForkState::Free;
        slot.ledger.put_down(self.clock.now());
        drop(slot);
        // Only the two neighbours ever wait here and either may take it
        self.freed.notify_one();
    }

    pub fn state(&self) -> ForkState {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).state
    }

    pub fn holder(&self) -> Option<PhilosopherId> {
        match self.state() {
            ForkState::Free => None,
            ForkState::Held { holder } => Some(holder),
        }
    }

    /// Number of philosophers currently blocked on this fork
    pub fn waiters(&self) -> usize {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).waiters
    }

    pub fn usage(&self) -> ForkUsage {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        slot.ledger.usage(self.id, self.clock.now())
    }
}

/// All forks of a table, each behind its own lock
#[derive(Debug)]
pub struct ForkSet<C: Clock = SystemClock> {
    forks: Vec<Fork<C>>,
}

impl<C: Clock> ForkSet<C> {
    pub fn new(seats: usize, clock: C) -> Self {
        Self {
            forks: (0..seats)
                .map(|i| Fork::new(ForkId(i), clock.clone()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.forks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forks.is_empty()
    }

    pub fn fork(&self, id: ForkId) -> &Fork<C> {
        &self.forks[id.0]
    }

    pub fn usage(&self) -> Vec<ForkUsage> {
        self.forks.iter().map(Fork::usage).collect()
    }

    /// Holders and blocked waiters, read fork by fork
    pub fn status(&self) -> TableStatus {
        TableStatus {
            forks: self.forks.iter().map(Fork::holder).collect(),
            waiting: self.forks.iter().map(Fork::waiters).sum(),
        }
    }
}

#[cfg(test)]
#[path = "fork_tests.rs"]
mod tests;
