// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use clap::Parser;
use std::io::Write;
use yare::parameterized;

#[derive(Parser)]
struct Harness {
    #[command(flatten)]
    args: RunArgs,
}

fn parse(argv: &[&str]) -> RunArgs {
    let argv = std::iter::once("run").chain(argv.iter().copied());
    Harness::try_parse_from(argv).unwrap().args
}

#[parameterized(
    range = { "1s..3s", Duration::from_secs(1), Duration::from_secs(3) },
    spaced = { "50ms .. 150ms", Duration::from_millis(50), Duration::from_millis(150) },
    single = { "500ms", Duration::from_millis(500), Duration::from_millis(500) },
    equal = { "2s..2s", Duration::from_secs(2), Duration::from_secs(2) },
)]
fn delay_ranges(input: &str, min: Duration, max: Duration) {
    assert_eq!(parse_delay_range(input), Ok(DelayRange::new(min, max)));
}

#[parameterized(
    reversed = { "3s..1s" },
    garbage = { "soon" },
    half_open = { "1s.." },
)]
fn bad_delay_ranges(input: &str) {
    assert!(parse_delay_range(input).is_err());
}

#[test]
fn defaults_without_flags() {
    let config = parse(&[]).resolve().unwrap();

    assert_eq!(config, DinnerConfig::default());
}

#[test]
fn flags_override_defaults() {
    let config = parse(&[
        "--strategy",
        "Admission",
        "-n",
        "7",
        "--duration",
        "2s",
        "--think",
        "10ms..20ms",
        "--eat",
        "5ms",
        "--aging-factor",
        "3",
    ])
    .resolve()
    .unwrap();

    assert_eq!(config.strategy, Strategy::Admission);
    assert_eq!(config.philosophers, 7);
    assert_eq!(config.run_for, Duration::from_secs(2));
    assert_eq!(config.think, DelayRange::new(Duration::from_millis(10), Duration::from_millis(20)));
    assert_eq!(config.eat, DelayRange::fixed(Duration::from_millis(5)));
    assert_eq!(config.aging_factor, 3.0);
}

#[test]
fn flags_override_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "philosophers = 4\nstrategy = \"asymmetric\"\ngrace = \"5s\"").unwrap();
    let path = file.path().to_str().unwrap();

    let config = parse(&["--config", path, "--philosophers", "6"])
        .resolve()
        .unwrap();

    assert_eq!(config.philosophers, 6);
    assert_eq!(config.strategy, Strategy::Asymmetric);
    assert_eq!(config.grace, Duration::from_secs(5));
}

#[test]
fn unknown_strategy_is_a_parse_error() {
    let argv = ["run", "--strategy", "greedy"];

    assert!(Harness::try_parse_from(argv).is_err());
}

#[test]
fn too_few_philosophers_fails_validation() {
    let err = parse(&["-n", "1"]).resolve().unwrap_err();

    assert!(matches!(err, ConfigError::TooFewPhilosophers(1)));
}

#[test]
fn summary_text_lists_stuck_philosophers() {
    let snapshot = dinner_core::MetricsSnapshot {
        strategy: Strategy::Unordered,
        elapsed: Duration::from_secs(1),
        philosophers: Vec::new(),
        forks: Vec::new(),
    };
    let summary = RunSummary {
        report: Report::from_snapshot(&snapshot),
        finished: vec![PhilosopherId(0)],
        stuck: vec![PhilosopherId(1), PhilosopherId(2)],
        panicked: Vec::new(),
        table: TableStatus {
            forks: vec![None, Some(PhilosopherId(1)), Some(PhilosopherId(2))],
            waiting: 2,
        },
    };

    let text = summary.to_string();

    assert!(text.contains("left:     1/3 (stuck: P1, P2)"));
    assert!(text.contains("waiting: 2"));
}

#[test]
fn time_left_counts_down_to_none() {
    assert_eq!(time_left(None), Some(Duration::MAX));
    assert_eq!(time_left(Some(Instant::now())), None);

    let left = time_left(Instant::now().checked_add(Duration::from_secs(60))).unwrap();
    assert!(left > Duration::from_secs(59));
}

#[test]
fn huge_durations_are_accepted() {
    let config = parse(&["--duration", "500000000000years", "--grace", "500000000000years"])
        .resolve()
        .unwrap();

    assert!(Instant::now().checked_add(config.run_for).is_none());
    assert_eq!(time_left(Instant::now().checked_add(config.run_for)), Some(Duration::MAX));
}
