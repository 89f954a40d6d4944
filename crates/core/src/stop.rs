// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cooperative stop signal
//!
//! Philosophers check the signal at the top of each loop iteration and while
//! thinking. It is never consulted while a fork is held, so stopping cannot
//! strand a fork or interrupt an acquisition half way.

use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};
use thiserror::Error;

/// A sleep or loop iteration was cut short by a stop request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("stop requested")]
pub struct Cancelled;

#[derive(Debug, Default)]
struct Flag {
    raised: Mutex<bool>,
    changed: Condvar,
}

/// Shared, one-way stop flag
#[derive(Clone, Debug, Default)]
pub struct StopSignal {
    flag: Arc<Flag>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        let mut raised = self.flag.raised.lock().unwrap_or_else(|e| e.into_inner());
        *raised = true;
        drop(raised);
        self.flag.changed.notify_all();
    }

    pub fn is_raised(&self) -> bool {
        *self.flag.raised.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Fail fast if a stop was requested
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_raised() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// Sleep for `duration`, returning early with [`Cancelled`] on a stop.
    ///
    /// A duration too long to express as an [`Instant`] sleeps until raised.
    pub fn sleep(&self, duration: Duration) -> Result<(), Cancelled> {
        let deadline = Instant::now().checked_add(duration);
        let mut raised = self.flag.raised.lock().unwrap_or_else(|e| e.into_inner());
        loop {
            if *raised {
                return Err(Cancelled);
            }
            raised = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return Ok(());
                    }
                    self.flag
                        .changed
                        .wait_timeout(raised, deadline - now)
                        .unwrap_or_else(|e| e.into_inner())
                        .0
                }
                None => self.flag.changed.wait(raised).unwrap_or_else(|e| e.into_inner()),
            };
        }
    }
}

#[cfg(test)]
#[path = "stop_tests.rs"]
mod tests;
