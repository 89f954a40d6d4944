// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for setting up and running a dinner

use crate::config::ConfigError;
use crate::seat::PhilosopherId;
use thiserror::Error;

/// Errors from configuring or driving a dinner.
///
/// Contention is never an error: philosophers block until they get their
/// forks. A dinner that cannot shut down shows up as stuck philosophers in
/// the [`ShutdownReport`](crate::dinner::ShutdownReport), not as an error.
#[derive(Debug, Error)]
pub enum DinnerError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("protocol serves {protocol} seats but the table has {table}")]
    SeatMismatch { protocol: usize, table: usize },
    #[error("dinner already started")]
    AlreadyStarted,
    #[error("failed to spawn thread for {philosopher}: {source}")]
    Spawn {
        philosopher: PhilosopherId,
        #[source]
        source: std::io::Error,
    },
}
