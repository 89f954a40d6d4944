// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured records of what each philosopher is doing
//!
//! Every step of the think → acquire → eat → release loop emits an
//! [`ActorEvent`]. Rendering them (text log, JSON, nothing) is up to the
//! [`EventSink`] the dinner was configured with.

use crate::seat::{ForkId, PhilosopherId};
use std::fmt;
use std::sync::Mutex;
use std::time::Instant;

/// One step of a philosopher's loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    ThinkStart,
    RequestLeft(ForkId),
    AcquiredLeft(ForkId),
    RequestRight(ForkId),
    AcquiredRight(ForkId),
    /// Waiting on the admission gate
    RequestSeat,
    /// Admitted through the gate
    Seated,
    /// Both forks requested from the monitor at once
    RequestPair,
    /// Both forks granted by the monitor at once
    AcquiredPair,
    EatingStart,
    EatingEnd,
    Released,
    Stopped,
}

impl EventKind {
    /// Stable machine-readable tag
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::ThinkStart => "think:start",
            EventKind::RequestLeft(_) => "fork:request:left",
            EventKind::AcquiredLeft(_) => "fork:acquired:left",
            EventKind::RequestRight(_) => "fork:request:right",
            EventKind::AcquiredRight(_) => "fork:acquired:right",
            EventKind::RequestSeat => "gate:request",
            EventKind::Seated => "gate:admitted",
            EventKind::RequestPair => "monitor:request",
            EventKind::AcquiredPair => "monitor:acquired",
            EventKind::EatingStart => "eat:start",
            EventKind::EatingEnd => "eat:end",
            EventKind::Released => "forks:released",
            EventKind::Stopped => "philosopher:stopped",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::ThinkStart => write!(f, "started thinking"),
            EventKind::RequestLeft(fork) => write!(f, "reaching for left fork {}", fork),
            EventKind::AcquiredLeft(fork) => write!(f, "picked up left fork {}", fork),
            EventKind::RequestRight(fork) => write!(f, "reaching for right fork {}", fork),
            EventKind::AcquiredRight(fork) => write!(f, "picked up right fork {}", fork),
            EventKind::RequestSeat => write!(f, "asking for a seat at the table"),
            EventKind::Seated => write!(f, "admitted to the table"),
            EventKind::RequestPair => write!(f, "asking the monitor for both forks"),
            EventKind::AcquiredPair => write!(f, "granted both forks by the monitor"),
            EventKind::EatingStart => write!(f, "started eating"),
            EventKind::EatingEnd => write!(f, "finished eating"),
            EventKind::Released => write!(f, "put both forks down"),
            EventKind::Stopped => write!(f, "left the table"),
        }
    }
}

/// A timestamped step taken by one philosopher
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActorEvent {
    pub philosopher: PhilosopherId,
    pub kind: EventKind,
    pub at: Instant,
}

/// Consumer of philosopher events
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ActorEvent);

    /// Emit `kind` for `philosopher`, stamped with the current instant
    fn record(&self, philosopher: PhilosopherId, kind: EventKind) {
        self.emit(ActorEvent {
            philosopher,
            kind,
            at: Instant::now(),
        });
    }
}

/// Discards every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: ActorEvent) {}
}

/// Writes every event as a structured `tracing` record
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: ActorEvent) {
        match event.kind {
            EventKind::RequestLeft(_)
            | EventKind::RequestRight(_)
            | EventKind::AcquiredLeft(_)
            | EventKind::AcquiredRight(_)
            | EventKind::RequestSeat
            | EventKind::Seated => {
                tracing::debug!(
                    philosopher = %event.philosopher,
                    event = event.kind.name(),
                    "{}",
                    event.kind
                )
            }
            _ => {
                tracing::info!(
                    philosopher = %event.philosopher,
                    event = event.kind.name(),
                    "{}",
                    event.kind
                )
            }
        }
    }
}

/// Keeps every event in memory, for tests and post-mortem inspection
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ActorEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far, in emission order
    pub fn events(&self) -> Vec<ActorEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Kinds emitted by one philosopher, in order
    pub fn kinds_for(&self, philosopher: PhilosopherId) -> Vec<EventKind> {
        self.events()
            .into_iter()
            .filter(|e| e.philosopher == philosopher)
            .map(|e| e.kind)
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: ActorEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
