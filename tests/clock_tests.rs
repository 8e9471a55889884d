use std::thread;
use std::time::Duration;

use sxs_toolbox::{Clock, Throttle, Timer};

#[test]
fn test_elapsed_is_monotonic() {
    let start = Clock::now();
    let mut prev = 0.0;
    for _ in 0..1000 {
        let current = Clock::elapsed(start);
        assert!(current >= prev, "Elapsed time should never decrease");
        prev = current;
    }
}

#[test]
fn test_reversed_points_give_zero() {
    let early = Clock::now();
    thread::sleep(Duration::from_millis(1));
    let late = Clock::now();
    assert!(Clock::secs_between(early, late) > 0.0);
    assert_eq!(Clock::secs_between(late, early), 0.0, "Reversed points should give zero");
}

#[test]
fn test_timer_reset() {
    let mut timer = Timer::new();
    thread::sleep(Duration::from_millis(20));
    let before = timer.elapsed();
    assert!(before >= 0.02, "Timer should measure the sleep");

    timer.reset();
    assert!(timer.elapsed() < before, "Reset should move the origin forward");
    assert!(timer.elapsed_duration() < Duration::from_millis(20));
}

#[test]
fn test_throttle_runs_again_after_interval() {
    let mut throttle = Throttle::new(0.01);
    let mut runs = 0;
    assert!(throttle.call(|| runs += 1), "First call should run");
    assert!(!throttle.call(|| runs += 1), "Immediate second call should be skipped");
    thread::sleep(Duration::from_millis(15));
    assert!(throttle.call(|| runs += 1), "Call after the interval should run");
    assert_eq!(runs, 2);
}
