use std::time::{Duration, Instant};

/// Monotonic time source used by every timer in this crate.
///
/// All time points come from [`Instant`], so adjusting the wall clock never
/// produces a negative elapsed time.
///
/// # Examples
///
/// ```
/// # use sxs_toolbox::clock::Clock;
/// let start = Clock::now();
/// let secs = Clock::elapsed(start);
/// assert!(secs >= 0.0);
/// ```
pub struct Clock;

impl Clock {
    /// Returns an opaque monotonic time point.
    #[inline(always)]
    pub fn now() -> Instant {
        Instant::now()
    }

    /// Seconds between `since` and now.
    #[inline(always)]
    pub fn elapsed(since: Instant) -> f64 {
        Self::secs_between(since, Instant::now())
    }

    /// Seconds between two time points, saturating at zero when `to` precedes `from`.
    #[inline(always)]
    pub fn secs_between(from: Instant, to: Instant) -> f64 {
        to.saturating_duration_since(from).as_secs_f64()
    }
}

/// A resettable stopwatch.
///
/// The timer starts on construction; [`Timer::reset`] moves the origin to now.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    begin: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self { begin: Clock::now() }
    }

    /// Moves the timer origin to the current time point.
    pub fn reset(&mut self) {
        self.begin = Clock::now();
    }

    /// Seconds elapsed since construction or the last reset.
    pub fn elapsed(&self) -> f64 {
        Clock::elapsed(self.begin)
    }

    pub fn elapsed_duration(&self) -> Duration {
        self.begin.elapsed()
    }

    /// The time point this timer measures from.
    pub fn origin(&self) -> Instant {
        self.begin
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rate limiter for side effects such as progress printing.
///
/// The first [`Throttle::call`] always runs the closure; later calls only run
/// it once at least `every` seconds have passed since the previous run.
///
/// ```
/// # use sxs_toolbox::clock::Throttle;
/// let mut throttle = Throttle::new(60.0);
/// let mut runs = 0;
/// for _ in 0..100 {
///     throttle.call(|| runs += 1);
/// }
/// assert_eq!(runs, 1);
/// ```
#[derive(Debug)]
pub struct Throttle {
    every: f64,
    timer: Option<Timer>,
}

impl Throttle {
    pub fn new(every_secs: f64) -> Self {
        Self {
            every: every_secs,
            timer: None,
        }
    }

    /// Runs `f` if the throttle window has passed. Returns whether `f` ran.
    pub fn call<F: FnOnce()>(&mut self, f: F) -> bool {
        match self.timer.as_mut() {
            None => {
                f();
                self.timer = Some(Timer::new());
                true
            }
            Some(timer) if timer.elapsed() >= self.every => {
                f();
                timer.reset();
                true
            }
            Some(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_secs_between_saturates() {
        let early = Clock::now();
        thread::sleep(Duration::from_millis(1));
        let late = Clock::now();
        assert_eq!(Clock::secs_between(late, early), 0.0);
        assert!(Clock::secs_between(early, late) > 0.0);
    }

    #[test]
    fn test_throttle_short_delay_runs_every_call() {
        let mut throttle = Throttle::new(0.0);
        let mut count = 0;
        for _ in 0..100 {
            throttle.call(|| count += 1);
        }
        assert_eq!(count, 100);
    }
}
