// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fork acquisition protocols
//!
//! The philosopher loop is written once against [`ForkProtocol`]; the four
//! strategies differ only in how they hand out and take back forks:
//!
//! - **Unordered** - left then right, for everyone. Can deadlock.
//! - **Asymmetric** - the last philosopher takes right then left.
//! - **Admission** - at most `seats - 1` philosophers may contend at once.
//! - **Monitor** - both forks granted atomically by a central monitor, FIFO
//!   with an aging override against starvation.

pub mod admission;
pub mod asymmetric;
pub mod monitored;
pub mod unordered;

pub use admission::AdmissionForks;
pub use asymmetric::AsymmetricForks;
pub use monitored::MonitoredForks;
pub use unordered::UnorderedForks;

use crate::clock::Clock;
use crate::config::ConfigError;
use crate::coordination::{ForkSet, ForkUsage, TableStatus};
use crate::event::{EventKind, EventSink};
use crate::seat::{Grant, Seat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which acquisition protocol the table runs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Unordered,
    Asymmetric,
    Admission,
    Monitor,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Unordered,
        Strategy::Asymmetric,
        Strategy::Admission,
        Strategy::Monitor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Unordered => "unordered",
            Strategy::Asymmetric => "asymmetric",
            Strategy::Admission => "admission",
            Strategy::Monitor => "monitor",
        }
    }

    /// One-line summary of what the strategy does and does not promise
    pub fn guarantees(&self) -> &'static str {
        match self {
            Strategy::Unordered => "left then right for everyone; can deadlock",
            Strategy::Asymmetric => {
                "last philosopher reverses its order; deadlock-free, may starve"
            }
            Strategy::Admission => {
                "at most N-1 contenders admitted; deadlock-free by pigeonhole"
            }
            Strategy::Monitor => {
                "atomic pair grants, FIFO with aging override; deadlock- and starvation-free"
            }
        }
    }

    pub fn is_deadlock_free(&self) -> bool {
        !matches!(self, Strategy::Unordered)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}

/// How philosophers obtain and return their pair of forks
pub trait ForkProtocol: Send + Sync {
    fn strategy(&self) -> Strategy;

    fn seats(&self) -> usize;

    /// Block until the philosopher at `seat` holds both of its forks
    fn acquire(&self, seat: Seat, events: &dyn EventSink) -> Grant;

    /// Return both forks named by `grant`
    fn release(&self, grant: Grant, events: &dyn EventSink);

    /// Per-fork use counts and hold time, indexed by fork id
    fn usage(&self) -> Vec<ForkUsage>;

    fn status(&self) -> TableStatus;
}

/// Build the protocol for `strategy` at a table of `seats`
pub fn build<C: Clock>(
    strategy: Strategy,
    seats: usize,
    aging_factor: f64,
    clock: C,
) -> Arc<dyn ForkProtocol> {
    match strategy {
        Strategy::Unordered => Arc::new(UnorderedForks::with_clock(seats, clock)),
        Strategy::Asymmetric => Arc::new(AsymmetricForks::with_clock(seats, clock)),
        Strategy::Admission => Arc::new(AdmissionForks::with_clock(seats, clock)),
        Strategy::Monitor => {
            Arc::new(MonitoredForks::with_clock(seats, clock).with_aging_factor(aging_factor))
        }
    }
}

/// Which of its two forks a philosopher reaches for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Hand {
    Left,
    Right,
}

/// Announce, block on, and report one fork
pub(crate) fn pick_up<C: Clock>(
    forks: &ForkSet<C>,
    seat: Seat,
    hand: Hand,
    events: &dyn EventSink,
) {
    let (fork, requested, acquired) = match hand {
        Hand::Left => (
            seat.left,
            EventKind::RequestLeft(seat.left),
            EventKind::AcquiredLeft(seat.left),
        ),
        Hand::Right => (
            seat.right,
            EventKind::RequestRight(seat.right),
            EventKind::AcquiredRight(seat.right),
        ),
    };
    events.record(seat.philosopher, requested);
    forks.fork(fork).take(seat.philosopher);
    events.record(seat.philosopher, acquired);
}

pub(crate) fn put_down<C: Clock>(forks: &ForkSet<C>, seat: Seat, hand: Hand) {
    let fork = match hand {
        Hand::Left => seat.left,
        Hand::Right => seat.right,
    };
    forks.fork(fork).put_down(seat.philosopher);
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
