// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Seating: who sits where, which forks they need, and the claim they hold

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Identity of a philosopher, `0..seats`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhilosopherId(pub usize);

impl fmt::Display for PhilosopherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Identity of a fork, `0..seats`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ForkId(pub usize);

impl fmt::Display for ForkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

/// Fixed fork assignment of one philosopher at a table of `seats`.
///
/// The left fork shares the philosopher's index; the right fork is the next
/// one around the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seat {
    pub philosopher: PhilosopherId,
    pub left: ForkId,
    pub right: ForkId,
}

impl Seat {
    pub fn new(philosopher: usize, seats: usize) -> Self {
        Self {
            philosopher: PhilosopherId(philosopher),
            left: ForkId(philosopher),
            right: ForkId((philosopher + 1) % seats),
        }
    }

    /// All seats of a table, in philosopher order
    pub fn table(seats: usize) -> Vec<Seat> {
        (0..seats).map(|i| Seat::new(i, seats)).collect()
    }

    /// Whether this seat needs the given fork
    pub fn uses(&self, fork: ForkId) -> bool {
        self.left == fork || self.right == fork
    }
}

/// Proof that a philosopher currently holds both of its forks.
///
/// A grant can only be minted by a protocol's `acquire` and is consumed by
/// the same protocol's `release`, so releasing forks that were never taken,
/// or releasing them twice, does not type-check:
///
/// ```compile_fail
/// use dinner_core::{ForkProtocol, NullSink, Seat, UnorderedForks};
///
/// let forks = UnorderedForks::new(5);
/// let grant = forks.acquire(Seat::new(0, 5), &NullSink);
/// forks.release(grant, &NullSink);
/// forks.release(grant, &NullSink); // use of moved value
/// ```
///
/// ```compile_fail
/// use dinner_core::{Grant, Seat};
///
/// // no public constructor
/// let forged = Grant { seat: Seat::new(0, 5), waited: std::time::Duration::ZERO };
/// ```
#[must_use = "forks stay held until the grant is released"]
#[derive(Debug)]
pub struct Grant {
    seat: Seat,
    waited: Duration,
}

impl Grant {
    pub(crate) fn new(seat: Seat, waited: Duration) -> Self {
        Self { seat, waited }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn philosopher(&self) -> PhilosopherId {
        self.seat.philosopher
    }

    /// Time spent between the request and holding both forks
    pub fn waited(&self) -> Duration {
        self.waited
    }
}

#[cfg(test)]
#[path = "seat_tests.rs"]
mod tests;
