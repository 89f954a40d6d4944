// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::clock::FakeClock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(1));
    }
    false
}

#[test]
fn new_fork_is_free() {
    let fork = Fork::new(ForkId(2), FakeClock::new());
    assert_eq!(fork.id(), ForkId(2));
    assert_eq!(fork.state(), ForkState::Free);
    assert_eq!(fork.holder(), None);
    assert_eq!(fork.waiters(), 0);
}

#[test]
fn take_records_holder_and_put_down_frees() {
    let fork = Fork::new(ForkId(0), FakeClock::new());

    fork.take(PhilosopherId(4));
    assert_eq!(
        fork.state(),
        ForkState::Held {
            holder: PhilosopherId(4)
        }
    );

    fork.put_down(PhilosopherId(4));
    assert_eq!(fork.holder(), None);
}

#[test]
fn usage_tracks_hold_time_on_the_fork_clock() {
    let clock = FakeClock::new();
    let fork = Fork::new(ForkId(1), clock.clone());

    fork.take(PhilosopherId(1));
    clock.advance(Duration::from_secs(2));
    fork.put_down(PhilosopherId(1));

    fork.take(PhilosopherId(0));
    clock.advance(Duration::from_secs(1));
    fork.put_down(PhilosopherId(0));

    let usage = fork.usage();
    assert_eq!(usage.uses, 2);
    assert_eq!(usage.in_use, Duration::from_secs(3));
}

#[test]
fn second_taker_blocks_until_put_down() {
    let fork = Arc::new(Fork::new(ForkId(0), SystemClock));
    let taken = Arc::new(AtomicBool::new(false));

    fork.take(PhilosopherId(0));

    let handle = {
        let fork = Arc::clone(&fork);
        let taken = Arc::clone(&taken);
        thread::spawn(move || {
            fork.take(PhilosopherId(4));
            taken.store(true, Ordering::SeqCst);
        })
    };

    assert!(wait_until(|| fork.waiters() == 1));
    assert!(!taken.load(Ordering::SeqCst));

    fork.put_down(PhilosopherId(0));
    handle.join().unwrap();

    assert!(taken.load(Ordering::SeqCst));
    assert_eq!(fork.holder(), Some(PhilosopherId(4)));
    assert_eq!(fork.waiters(), 0);
}

#[test]
fn fork_set_status_reports_holders_and_waiters() {
    let forks = Arc::new(ForkSet::new(3, SystemClock));
    forks.fork(ForkId(1)).take(PhilosopherId(1));

    let handle = {
        let forks = Arc::clone(&forks);
        thread::spawn(move || forks.fork(ForkId(1)).take(PhilosopherId(0)))
    };

    assert!(wait_until(|| forks.status().waiting == 1));
    let status = forks.status();
    assert_eq!(status.forks, vec![None, Some(PhilosopherId(1)), None]);

    forks.fork(ForkId(1)).put_down(PhilosopherId(1));
    handle.join().unwrap();
    assert_eq!(forks.status().waiting, 0);
    assert_eq!(forks.len(), 3);
    assert_eq!(forks.usage().iter().map(|u| u.uses).sum::<u64>(), 2);
}
