// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point-in-time view of the table

use crate::seat::PhilosopherId;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Who holds which fork, and how many philosophers are blocked
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableStatus {
    /// Holder of each fork, indexed by fork id
    pub forks: Vec<Option<PhilosopherId>>,
    /// Philosophers blocked waiting for a fork, a seat, or the monitor
    pub waiting: usize,
}

impl TableStatus {
    pub fn free_forks(&self) -> usize {
        self.forks.iter().filter(|h| h.is_none()).count()
    }

    /// Every fork is held, each by a different philosopher, and every
    /// philosopher is blocked: nobody can ever put a fork down again.
    pub fn circular_wait(&self) -> bool {
        let seats = self.forks.len();
        if seats == 0 || self.waiting < seats {
            return false;
        }
        let holders: HashSet<PhilosopherId> = self.forks.iter().flatten().copied().collect();
        holders.len() == seats
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "forks:")?;
        for holder in &self.forks {
            match holder {
                None => write!(f, " ✓")?,
                Some(_) => write!(f, " ✗")?,
            }
        }
        write!(f, " | waiting: {}", self.waiting)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
