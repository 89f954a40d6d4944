// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordination primitives for sharing forks between philosophers
//!
//! This module provides:
//! - **Fork** - Exclusive, blocking lock with a known holder and usage ledger
//! - **AdmissionGate** - Counting semaphore limiting concurrent contenders
//! - **TableMonitor** - Central all-or-nothing arbitration with FIFO and aging
//! - **TableStatus** - Point-in-time view of holders and waiters

pub mod fork;
pub mod gate;
pub mod ledger;
pub mod monitor;
pub mod status;

pub use fork::{Fork, ForkSet, ForkState};
pub use gate::AdmissionGate;
pub use ledger::{ForkLedger, ForkUsage};
pub use monitor::{MonitorSnapshot, TableMonitor, DEFAULT_AGING_FACTOR};
pub use status::TableStatus;
