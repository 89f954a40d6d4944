// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

#[test]
fn default_range_is_one_to_three_seconds() {
    let range = DelayRange::default();
    assert_eq!(range.min, Duration::from_secs(1));
    assert_eq!(range.max, Duration::from_secs(3));
    assert!(range.is_valid());
}

#[test]
fn inverted_range_is_invalid() {
    let range = DelayRange::new(Duration::from_secs(3), Duration::from_secs(1));
    assert!(!range.is_valid());
}

#[test]
fn fixed_range_always_yields_its_value() {
    let delays = UniformDelay::new(
        DelayRange::fixed(Duration::from_millis(7)),
        DelayRange::fixed(Duration::from_millis(9)),
    );
    for _ in 0..20 {
        assert_eq!(delays.think(), Duration::from_millis(7));
        assert_eq!(delays.eat(), Duration::from_millis(9));
    }
}

#[test]
fn zero_delay_is_zero() {
    let delays = FixedDelay::zero();
    assert_eq!(delays.think(), Duration::ZERO);
    assert_eq!(delays.eat(), Duration::ZERO);
}

#[test]
fn delay_range_reads_humantime_from_toml() {
    let range: DelayRange = toml::from_str("min = \"250ms\"\nmax = \"1s\"\n").unwrap();
    assert_eq!(range.min, Duration::from_millis(250));
    assert_eq!(range.max, Duration::from_secs(1));
}

proptest! {
    #[test]
    fn uniform_samples_stay_within_bounds(min_ms in 0u64..500, span_ms in 0u64..500) {
        let range = DelayRange::new(
            Duration::from_millis(min_ms),
            Duration::from_millis(min_ms + span_ms),
        );
        let delays = UniformDelay::new(range, range);
        for _ in 0..10 {
            let think = delays.think();
            let eat = delays.eat();
            prop_assert!(think >= range.min && think <= range.max);
            prop_assert!(eat >= range.min && eat <= range.max);
        }
    }
}
