// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Admission gate: a counting semaphore that limits who may reach for forks
//!
//! Created with `seats - 1` permits, it guarantees that at least one fork is
//! always unclaimed while admitted philosophers compete for theirs.

use std::sync::{Condvar, Mutex};

#[derive(Debug, Default)]
struct GateState {
    admitted: usize,
    waiting: usize,
    /// Highest `admitted` ever observed
    peak: usize,
    admissions: u64,
}

/// Counting semaphore with admission instrumentation
#[derive(Debug)]
pub struct AdmissionGate {
    permits: usize,
    state: Mutex<GateState>,
    opened: Condvar,
}

impl AdmissionGate {
    pub fn new(permits: usize) -> Self {
        Self {
            permits,
            state: Mutex::new(GateState::default()),
            opened: Condvar::new(),
        }
    }

    /// Gate sized for a table: one permit fewer than seats
    pub fn for_table(seats: usize) -> Self {
        Self::new(seats.saturating_sub(1))
    }

    pub fn permits(&self) -> usize {
        self.permits
    }

    /// Block until a permit is free, then take it
    pub(crate) fn enter(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.admitted >= self.permits {
            state.waiting += 1;
            while state.admitted >= self.permits {
                state = self.opened.wait(state).unwrap_or_else(|e| e.into_inner());
            }
            state.waiting -= 1;
        }
        state.admitted += 1;
        state.admissions += 1;
        state.peak = state.peak.max(state.admitted);
    }

    /// Return a permit and wake one waiter
    pub(crate) fn leave(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        debug_assert!(state.admitted > 0);
        state.admitted = state.admitted.saturating_sub(1);
        drop(state);
        self.opened.notify_one();
    }

    /// Philosophers currently past the gate
    pub fn admitted(&self) -> usize {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).admitted
    }

    /// Free permits
    pub fn available(&self) -> usize {
        self.permits.saturating_sub(self.admitted())
    }

    /// Philosophers blocked at the gate
    pub fn waiting(&self) -> usize {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).waiting
    }

    /// Most philosophers ever admitted at once
    pub fn peak_admitted(&self) -> usize {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).peak
    }

    /// Total successful entries
    pub fn admissions(&self) -> u64 {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).admissions
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
