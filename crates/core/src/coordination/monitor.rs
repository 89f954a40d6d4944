// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Table monitor: central, all-or-nothing fork arbitration
//!
//! One mutex guards every fork's availability, the FIFO wait queue, and the
//! per-philosopher bookkeeping; one condition variable is shared by every
//! waiting philosopher.
//!
//! A philosopher is granted both forks at once or neither, so nobody ever
//! holds one fork while waiting for the other. The queue head is served
//! first; anyone else may jump the queue when both forks are free and it has
//! gone hungry for more than `aging_factor` times as long as the head.
//!
//! From the monitor's point of view each philosopher is in one of three
//! states:
//!
//! ```text
//! not waiting --request_forks--> queued --grant--> holding both
//!      ^                                                |
//!      +------------------release_forks-----------------+
//! ```

use super::ledger::{ForkLedger, ForkUsage};
use super::status::TableStatus;
use crate::clock::{Clock, SystemClock};
use crate::seat::{ForkId, Grant, PhilosopherId, Seat};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Hunger ratio over the queue head that lets a philosopher jump the queue
pub const DEFAULT_AGING_FACTOR: f64 = 2.0;

/// Everything the monitor guards
#[derive(Clone, Debug)]
pub(crate) struct MonitorState {
    holders: Vec<Option<PhilosopherId>>,
    queue: VecDeque<PhilosopherId>,
    last_meal: Vec<Instant>,
    meals: Vec<u64>,
    attempts: Vec<u64>,
    total_wait: Vec<Duration>,
    ledgers: Vec<ForkLedger>,
}

impl MonitorState {
    pub(crate) fn new(seats: usize, now: Instant) -> Self {
        Self {
            holders: vec![None; seats],
            queue: VecDeque::with_capacity(seats),
            last_meal: vec![now; seats],
            meals: vec![0; seats],
            attempts: vec![0; seats],
            total_wait: vec![Duration::ZERO; seats],
            ledgers: vec![ForkLedger::new(); seats],
        }
    }

    fn is_free(&self, fork: ForkId) -> bool {
        self.holders[fork.0].is_none()
    }

    pub(crate) fn enqueue(&mut self, philosopher: PhilosopherId) {
        debug_assert!(!self.queue.contains(&philosopher));
        self.queue.push_back(philosopher);
        self.attempts[philosopher.0] += 1;
    }

    /// Both forks are free and the philosopher is either first in line or
    /// has been hungry long enough to overtake whoever is.
    pub(crate) fn can_acquire(&self, seat: Seat, now: Instant, aging_factor: f64) -> bool {
        if !self.is_free(seat.left) || !self.is_free(seat.right) {
            return false;
        }
        let Some(&head) = self.queue.front() else {
            return false;
        };
        if head == seat.philosopher {
            return true;
        }
        self.overtakes(seat.philosopher, head, now, aging_factor)
    }

    fn overtakes(
        &self,
        philosopher: PhilosopherId,
        head: PhilosopherId,
        now: Instant,
        aging_factor: f64,
    ) -> bool {
        let hungry = now.saturating_duration_since(self.last_meal[philosopher.0]);
        let head_hungry = now.saturating_duration_since(self.last_meal[head.0]);
        let threshold = Duration::try_from_secs_f64(head_hungry.as_secs_f64() * aging_factor)
            .unwrap_or(Duration::MAX);
        hungry > threshold
    }

    /// Leave the queue and take both forks
    pub(crate) fn grant(&mut self, seat: Seat, now: Instant) {
        if let Some(pos) = self.queue.iter().position(|p| *p == seat.philosopher) {
            self.queue.remove(pos);
        }
        for fork in [seat.left, seat.right] {
            debug_assert!(self.is_free(fork));
            self.holders[fork.0] = Some(seat.philosopher);
            self.ledgers[fork.0].picked_up(now);
        }
    }

    /// Put both forks back and record the meal
    pub(crate) fn release(&mut self, seat: Seat, now: Instant) {
        for fork in [seat.left, seat.right] {
            debug_assert_eq!(self.holders[fork.0], Some(seat.philosopher));
            self.holders[fork.0] = None;
            self.ledgers[fork.0].put_down(now);
        }
        self.meals[seat.philosopher.0] += 1;
        self.last_meal[seat.philosopher.0] = now;
    }

    fn snapshot(&self) -> MonitorSnapshot {
        MonitorSnapshot {
            holders: self.holders.clone(),
            queue: self.queue.iter().copied().collect(),
            meals: self.meals.clone(),
            attempts: self.attempts.clone(),
            total_wait: self.total_wait.clone(),
        }
    }
}

/// Consistent copy of the monitor's state, taken under its lock
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonitorSnapshot {
    pub holders: Vec<Option<PhilosopherId>>,
    pub queue: Vec<PhilosopherId>,
    pub meals: Vec<u64>,
    pub attempts: Vec<u64>,
    pub total_wait: Vec<Duration>,
}

impl MonitorSnapshot {
    /// Philosophers holding exactly one of their two forks
    pub fn half_holders(&self) -> Vec<PhilosopherId> {
        let seats = self.holders.len();
        Seat::table(seats)
            .into_iter()
            .filter(|seat| {
                let left = self.holders[seat.left.0] == Some(seat.philosopher);
                let right = self.holders[seat.right.0] == Some(seat.philosopher);
                left != right
            })
            .map(|seat| seat.philosopher)
            .collect()
    }

    /// Whether any philosopher appears in the queue more than once
    pub fn has_duplicate_waiters(&self) -> bool {
        let mut seen = vec![false; self.holders.len()];
        self.queue.iter().any(|p| std::mem::replace(&mut seen[p.0], true))
    }
}

/// The table monitor
#[derive(Debug)]
pub struct TableMonitor<C: Clock = SystemClock> {
    seats: usize,
    aging_factor: f64,
    clock: C,
    state: Mutex<MonitorState>,
    changed: Condvar,
}

impl<C: Clock> TableMonitor<C> {
    pub fn new(seats: usize, clock: C) -> Self {
        let state = MonitorState::new(seats, clock.now());
        Self {
            seats,
            aging_factor: DEFAULT_AGING_FACTOR,
            clock,
            state: Mutex::new(state),
            changed: Condvar::new(),
        }
    }

    pub fn with_aging_factor(mut self, aging_factor: f64) -> Self {
        self.aging_factor = aging_factor;
        self
    }

    pub fn seats(&self) -> usize {
        self.seats
    }

    pub fn aging_factor(&self) -> f64 {
        self.aging_factor
    }

    /// Queue up and block until both forks of `seat` are granted together
    pub fn request_forks(&self, seat: Seat) -> Grant {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let requested = self.clock.now();
        state.enqueue(seat.philosopher);

        // Availability and queue order change between wake-ups, so the
        // predicate is evaluated afresh every time.
        while !state.can_acquire(seat, self.clock.now(), self.aging_factor) {
            state = self.changed.wait(state).unwrap_or_else(|e| e.into_inner());
        }

        let now = self.clock.now();
        let was_head = state.queue.front() == Some(&seat.philosopher);
        if !was_head {
            tracing::debug!(
                philosopher = %seat.philosopher,
                head = ?state.queue.front(),
                "hungry philosopher jumped the queue"
            );
        }
        state.grant(seat, now);
        let waited = now.saturating_duration_since(requested);
        state.total_wait[seat.philosopher.0] += waited;
        let new_head = was_head && !state.queue.is_empty();
        drop(state);

        // The next in line may already have both forks free
        if new_head {
            self.changed.notify_all();
        }
        Grant::new(seat, waited)
    }

    /// Return both forks and wake every waiter to re-check its predicate
    pub fn release_forks(&self, grant: Grant) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.release(grant.seat(), self.clock.now());
        drop(state);
        // A release can unblock two non-adjacent philosophers; waking only
        // one could leave the other asleep with its forks free.
        self.changed.notify_all();
    }

    pub fn snapshot(&self) -> MonitorSnapshot {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .snapshot()
    }

    pub fn meals(&self, philosopher: PhilosopherId) -> u64 {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).meals[philosopher.0]
    }

    pub fn usage(&self) -> Vec<ForkUsage> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let now = self.clock.now();
        state
            .ledgers
            .iter()
            .enumerate()
            .map(|(i, ledger)| ledger.usage(ForkId(i), now))
            .collect()
    }

    pub fn status(&self) -> TableStatus {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        TableStatus {
            forks: state.holders.clone(),
            waiting: state.queue.len(),
        }
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
