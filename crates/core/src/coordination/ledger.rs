// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Usage accounting for a single fork
//!
//! The ledger is plain data. Whoever arbitrates the fork (the fork's own
//! lock, or the table monitor) keeps it behind the same lock that guards
//! ownership, so counts and in-use time never drift from the holder state.

use crate::seat::ForkId;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Cumulative usage of one fork
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ForkUsage {
    pub fork: ForkId,
    /// Number of times the fork was picked up
    pub uses: u64,
    /// Total time spent held, including a hold still in progress
    pub in_use: Duration,
}

#[derive(Clone, Debug, Default)]
pub struct ForkLedger {
    uses: u64,
    in_use: Duration,
    held_since: Option<Instant>,
}

impl ForkLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn picked_up(&mut self, now: Instant) {
        self.uses += 1;
        self.held_since = Some(now);
    }

    pub fn put_down(&mut self, now: Instant) {
        if let Some(since) = self.held_since.take() {
            self.in_use += now.saturating_duration_since(since);
        }
    }

    pub fn is_held(&self) -> bool {
        self.held_since.is_some()
    }

    pub fn usage(&self, fork: ForkId, now: Instant) -> ForkUsage {
        let ongoing = self
            .held_since
            .map(|since| now.saturating_duration_since(since))
            .unwrap_or_default();
        ForkUsage {
            fork,
            uses: self.uses,
            in_use: self.in_use + ongoing,
        }
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
