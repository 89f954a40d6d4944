// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! dinner-core: concurrent dining philosophers
//!
//! This crate provides:
//! - Four fork-acquisition protocols behind one [`ForkProtocol`] trait
//! - A table monitor with FIFO ordering and an aging override
//! - A philosopher loop and a [`Dinner`] driver built on OS threads
//! - Per-philosopher metrics and a fairness [`Report`]

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod clock;
pub mod seat;

// Coordination primitives, then the protocols built on them
pub mod coordination;
pub mod protocol;

pub mod config;
pub mod delay;
pub mod dinner;
pub mod error;
pub mod event;
pub mod metrics;
pub mod philosopher;
pub mod report;
pub mod stop;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, DinnerConfig};
pub use coordination::{
    AdmissionGate, Fork, ForkSet, ForkState, ForkUsage, MonitorSnapshot, TableMonitor,
    TableStatus, DEFAULT_AGING_FACTOR,
};
pub use delay::{DelayRange, DelaySource, FixedDelay, UniformDelay};
pub use dinner::{Dinner, ShutdownReport};
pub use error::DinnerError;
pub use event::{ActorEvent, EventKind, EventSink, NullSink, RecordingSink, TracingSink};
pub use metrics::{ForkSnapshot, Metrics, MetricsSnapshot, PhilosopherSnapshot};
pub use philosopher::{Philosopher, Table};
pub use protocol::{
    AdmissionForks, AsymmetricForks, ForkProtocol, MonitoredForks, Strategy, UnorderedForks,
};
pub use report::{Fairness, Report};
pub use seat::{ForkId, Grant, PhilosopherId, Seat};
pub use stop::{Cancelled, StopSignal};
