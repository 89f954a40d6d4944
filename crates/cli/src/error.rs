// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Each error says what went wrong, why it might have happened, and how to
//! fix it.

use dinner_core::{ConfigError, ShutdownReport};
use std::fmt;
use std::time::Duration;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct DinnerCliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl DinnerCliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for DinnerCliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for DinnerCliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures a dinner can end in.
impl DinnerCliError {
    /// The configuration, from flags or a file, was rejected
    pub fn invalid_config(err: ConfigError) -> Self {
        let base = DinnerCliError::new(err.to_string());
        let base = match &err {
            ConfigError::TooFewPhilosophers(_) => base
                .with_context("Each philosopher shares a fork with both neighbours")
                .with_suggestion("Seat at least two: dinner run --philosophers 5"),
            ConfigError::UnknownStrategy(_) => {
                base.with_suggestion("List the strategies: dinner strategies")
            }
            ConfigError::InvalidDelayRange { .. } => {
                base.with_suggestion("Give ranges as MIN..MAX, e.g. --think 1s..3s")
            }
            ConfigError::Read { path, .. } => base
                .with_context(format!("Looked for {}", path.display()))
                .with_suggestion("Check the path passed to --config"),
            ConfigError::Parse(_) => {
                base.with_suggestion("Durations use humantime notation, e.g. \"30s\" or \"1m 30s\"")
            }
            ConfigError::InvalidAgingFactor(_) | ConfigError::ZeroDuration(_) => base,
        };
        base.with_source(err)
    }

    /// Philosophers were still blocked when the grace period ran out
    pub fn suspected_deadlock(report: &ShutdownReport, grace: Duration) -> Self {
        let stuck: Vec<String> = report.stuck.iter().map(ToString::to_string).collect();
        let mut err = DinnerCliError::new(format!(
            "{} philosopher(s) did not leave the table within {}",
            stuck.len(),
            humantime::format_duration(grace)
        ))
        .with_context(format!("Still seated: {}", stuck.join(", ")))
        .with_context(format!("Table at shutdown: {}", report.status));
        if report.status.circular_wait() {
            err = err.with_context(
                "Every fork is held and every philosopher waits for a neighbour: circular wait",
            );
        }
        err.with_suggestion("Pick a deadlock-free strategy: dinner run --strategy monitor")
            .with_suggestion("Compare guarantees: dinner strategies")
    }

    pub fn philosophers_panicked(report: &ShutdownReport) -> Self {
        let ids: Vec<String> = report.panicked.iter().map(ToString::to_string).collect();
        DinnerCliError::new(format!("philosopher thread(s) panicked: {}", ids.join(", ")))
            .with_suggestion("Re-run with RUST_LOG=debug to see the last events before the panic")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinner_core::{
        Dinner, DinnerConfig, FixedDelay, ForkProtocol, NullSink, PhilosopherId, Strategy,
        UnorderedForks,
    };
    use std::sync::Arc;

    #[test]
    fn error_display() {
        let err = DinnerCliError::new("Something went wrong")
            .with_context("First context")
            .with_suggestion("Try this")
            .with_suggestion("Or this");

        let output = format!("{}", err);
        assert!(output.contains("error: Something went wrong"));
        assert!(output.contains("-> First context"));
        assert!(output.contains("1. Try this"));
        assert!(output.contains("2. Or this"));
    }

    #[test]
    fn invalid_config_keeps_source_and_hint() {
        let err = DinnerCliError::invalid_config(ConfigError::TooFewPhilosophers(1));

        let output = format!("{}", err);
        assert!(output.contains("at least 2 philosophers"));
        assert!(output.contains("--philosophers 5"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn unknown_strategy_points_at_listing() {
        let err = DinnerCliError::invalid_config(ConfigError::UnknownStrategy("greedy".into()));

        assert!(format!("{}", err).contains("dinner strategies"));
    }

    #[test]
    fn stuck_shutdown_names_the_philosophers() {
        // P1 blocks on forks the test holds; P0 never sits down
        let protocol: Arc<dyn ForkProtocol> = Arc::new(UnorderedForks::new(2));
        let config = DinnerConfig::new(2, Strategy::Unordered);
        let mut dinner = Dinner::with_protocol(
            config,
            protocol.clone(),
            Arc::new(FixedDelay::zero()),
            Arc::new(NullSink),
        )
        .unwrap();
        let seats = dinner_core::Seat::table(2);
        let held = protocol.acquire(seats[0], &NullSink);
        dinner.stop(PhilosopherId(0));
        dinner.start().unwrap();

        let report = dinner.join(Duration::from_millis(50));
        let err = DinnerCliError::suspected_deadlock(&report, Duration::from_millis(50));
        protocol.release(held, &NullSink);

        let output = format!("{}", err);
        assert!(output.contains("did not leave the table within 50ms"));
        assert!(output.contains("P1"));
        assert!(output.contains("--strategy monitor"));
    }
}
