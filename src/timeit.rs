use std::fmt;
use std::hint::black_box;
use std::io;

use crate::clock::Clock;
use crate::format::format_time;
use crate::output::OutputSink;

const RULE: &str = "========================================";

/// Micro benchmarks keep growing through these loop counts while the total
/// time stays under [`MICRO_BUDGET_SECS`].
const MICRO_STEPS: [u64; 5] = [100, 1_000, 10_000, 100_000, 1_000_000];
const MICRO_BUDGET_SECS: f64 = 3.0;

/// How many runs to make after timing the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeitPlan {
    /// The first run was slow enough; report it alone.
    Stop,
    /// Run until this many runs in total.
    Runs(u64),
    /// Grow through [`MICRO_STEPS`] while under budget.
    Micro,
}

/// Picks the loop policy from the duration of the first run.
///
/// ```
/// # use sxs_toolbox::timeit::{timeit_plan, TimeitPlan};
/// assert_eq!(timeit_plan(61.0), TimeitPlan::Stop);
/// assert_eq!(timeit_plan(2.0), TimeitPlan::Runs(10));
/// assert_eq!(timeit_plan(1e-4), TimeitPlan::Micro);
/// ```
pub fn timeit_plan(first: f64) -> TimeitPlan {
    if first > 60.0 {
        TimeitPlan::Stop
    } else if first > 10.0 {
        TimeitPlan::Runs(5)
    } else if first > 1.0 {
        TimeitPlan::Runs(10)
    } else if first > 0.1 {
        TimeitPlan::Runs(20)
    } else if first > 0.01 {
        TimeitPlan::Runs(100)
    } else {
        TimeitPlan::Micro
    }
}

/// Timings gathered by [`timeit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeitSummary {
    pub loops: u64,
    pub total: f64,
    pub fastest: f64,
    pub slowest: f64,
}

impl TimeitSummary {
    pub fn average(&self) -> f64 {
        self.total / self.loops as f64
    }

    fn record(&mut self, secs: f64) {
        self.loops += 1;
        self.total += secs;
        self.fastest = self.fastest.min(secs);
        self.slowest = self.slowest.max(secs);
    }

    fn run_until<T, F: FnMut() -> T>(&mut self, loops: u64, f: &mut F) {
        while self.loops < loops {
            self.record(time_once(f));
        }
    }
}

impl fmt::Display for TimeitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loop: {} | Total time: {} | Avg: {} ({} ~ {})",
            self.loops,
            format_time(self.total, 3),
            format_time(self.average(), 3),
            format_time(self.fastest, 3),
            format_time(self.slowest, 3),
        )
    }
}

fn time_once<T, F: FnMut() -> T>(f: &mut F) -> f64 {
    let start = Clock::now();
    black_box(f());
    Clock::elapsed(start)
}

/// Benchmarks `f`, choosing the number of runs from how long the first
/// run takes, and prints a one-line summary framed by rules.
///
/// ```
/// # use sxs_toolbox::{timeit::timeit, output::OutputSink};
/// let sink = OutputSink::buffer();
/// let summary = timeit("sum", || (0..100u64).sum::<u64>(), &sink)?;
/// assert!(summary.loops >= 100);
/// assert!(sink.contents().contains("[sum]: Loop: "));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn timeit<T, F>(title: &str, mut f: F, sink: &OutputSink) -> io::Result<TimeitSummary>
where
    F: FnMut() -> T,
{
    let first = time_once(&mut f);
    let mut summary = TimeitSummary {
        loops: 1,
        total: first,
        fastest: first,
        slowest: first,
    };

    match timeit_plan(first) {
        TimeitPlan::Stop => {}
        TimeitPlan::Runs(loops) => summary.run_until(loops, &mut f),
        TimeitPlan::Micro => {
            for (i, &loops) in MICRO_STEPS.iter().enumerate() {
                if i > 0 && summary.total >= MICRO_BUDGET_SECS {
                    break;
                }
                summary.run_until(loops, &mut f);
            }
        }
    }

    sink.write_line(RULE)?;
    sink.write_line(&format!("[{}]: {}", title, summary))?;
    sink.write_line(RULE)?;
    Ok(summary)
}
