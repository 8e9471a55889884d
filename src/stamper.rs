use std::fmt;
use std::io;
use std::time::Instant;

use tracing::{debug, warn};

use crate::clock::{Clock, Timer};
use crate::collection::{compile, Observation, TimeStampCollection};
use crate::format::format_time;
use crate::label::Label;
use crate::output::OutputSink;
use crate::report::Report;

/// Options for a [`TimeStamper`].
#[derive(Debug, Clone)]
pub struct StamperConfig {
    /// Print `[name] (computing...)` on construction, erased by the final report.
    pub print_starter: bool,
    /// Print a report when the stamper finishes.
    pub auto_print: bool,
    /// Significant digits in printed numbers.
    pub precision: usize,
    pub output: OutputSink,
}

impl Default for StamperConfig {
    fn default() -> Self {
        Self {
            print_starter: false,
            auto_print: true,
            precision: 3,
            output: OutputSink::stdout(),
        }
    }
}

#[derive(Debug)]
enum Phase<L> {
    Fresh,
    Active { last_label: L, last_time: Instant },
    Finished,
}

/// Records the time spent between consecutive named checkpoints.
///
/// Each call to [`stamp`](TimeStamper::stamp) after the first appends one
/// observation `(previous label, this label, seconds in between)`. When the
/// stamper finishes, either explicitly or on drop, it prints the compiled
/// per-pair table, or a one-line elapsed summary if nothing was observed.
///
/// The label type decides the variant: [`DynamicStamper`] takes arbitrary
/// strings, while a token enumeration declared with
/// [`define_tokens!`](crate::define_tokens) only accepts its own tokens.
///
/// Stamping after [`finish`](TimeStamper::finish) is ignored: nothing is
/// recorded and `stamp` returns `false`.
///
/// # Thread Safety
///
/// A stamper tracks one timeline and takes `&mut self` to stamp; share it
/// across threads only behind your own lock.
///
/// # Examples
///
/// ```
/// # use sxs_toolbox::stamper::{DynamicStamper, StamperConfig};
/// # use sxs_toolbox::output::OutputSink;
/// let sink = OutputSink::buffer();
/// let config = StamperConfig { output: sink.clone(), ..Default::default() };
/// let mut stamper = DynamicStamper::with_config("demo", config);
/// stamper.stamp("load");
/// stamper.stamp("solve");
/// stamper.finish().unwrap();
/// assert!(sink.contents().contains("load -> solve"));
/// ```
pub struct TimeStamper<L: Label> {
    name: String,
    timer: Timer,
    observations: Vec<Observation<L>>,
    phase: Phase<L>,
    counts: u64,
    config: StamperConfig,
}

/// A stamper over free-form string labels.
pub type DynamicStamper = TimeStamper<String>;

impl<L: Label> TimeStamper<L> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, StamperConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: StamperConfig) -> Self {
        let stamper = Self {
            name: name.into(),
            timer: Timer::new(),
            observations: Vec::new(),
            phase: Phase::Fresh,
            counts: 0,
            config,
        };
        if stamper.config.print_starter {
            let starter = format!("[{}] (computing...)", stamper.name);
            if let Err(e) = stamper
                .config
                .output
                .write_str(&starter)
                .and_then(|_| stamper.config.output.flush())
            {
                warn!(name = %stamper.name, error = %e, "could not print starter line");
            }
        }
        stamper
    }

    /// Marks a checkpoint.
    ///
    /// The first stamp only sets the origin. Every later stamp records the
    /// time since the previous one under `(previous, label)`. Returns `false`
    /// if the stamper has already finished and the stamp was ignored.
    pub fn stamp(&mut self, label: impl Into<L>) -> bool {
        let now = Clock::now();
        let label = label.into();
        match std::mem::replace(&mut self.phase, Phase::Finished) {
            Phase::Fresh => {
                self.phase = Phase::Active {
                    last_label: label,
                    last_time: now,
                };
                true
            }
            Phase::Active {
                last_label,
                last_time,
            } => {
                let duration = Clock::secs_between(last_time, now);
                self.observations
                    .push(Observation::new(last_label, label.clone(), duration));
                self.phase = Phase::Active {
                    last_label: label,
                    last_time: now,
                };
                true
            }
            Phase::Finished => {
                warn!(name = %self.name, label = ?label, "stamp after finish ignored");
                false
            }
        }
    }

    /// Adds to the iteration counter used by the summary line's average.
    pub fn add_count(&mut self, counts: u64) {
        self.counts += counts;
    }

    pub fn set_autoprint(&mut self, auto_print: bool) {
        self.config.auto_print = auto_print;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> u64 {
        self.counts
    }

    /// Seconds since the stamper was created.
    pub fn elapsed(&self) -> f64 {
        self.timer.elapsed()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    pub fn observations(&self) -> &[Observation<L>] {
        &self.observations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation<L>> {
        self.observations.iter()
    }

    /// Per-pair statistics of everything observed so far.
    pub fn compile(&self) -> TimeStampCollection<L> {
        compile(&self.observations)
    }

    /// `[name] elapsed: <t>`, plus the per-iteration average when counted.
    pub fn summary(&self) -> String {
        let elapsed = self.elapsed();
        let precision = self.config.precision;
        let mut line = format!("[{}] elapsed: {}", self.name, format_time(elapsed, precision));
        if self.counts > 0 {
            line.push_str(&format!(
                " avg: {}/it [out of {}]",
                format_time(elapsed / self.counts as f64, precision),
                self.counts
            ));
        }
        line
    }

    /// Finishes the timeline and prints the report if auto-print is on.
    ///
    /// Idempotent; only the first call prints. Runs automatically on drop.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.is_finished() {
            return Ok(());
        }
        self.phase = Phase::Finished;
        debug!(name = %self.name, observations = self.observations.len(), "stamper finished");

        if !self.config.auto_print {
            return Ok(());
        }
        let output = &self.config.output;
        if self.config.print_starter {
            output.write_str("\r")?;
        }
        if self.observations.is_empty() {
            output.write_line(&self.summary())
        } else {
            let report = Report::new(&self.compile()).precision(self.config.precision);
            output.write_line(&report.to_string())
        }
    }
}

impl<'a, L: Label> IntoIterator for &'a TimeStamper<L> {
    type Item = &'a Observation<L>;
    type IntoIter = std::slice::Iter<'a, Observation<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L: Label> fmt::Display for TimeStamper<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl<L: Label> Drop for TimeStamper<L> {
    fn drop(&mut self) {
        if let Err(e) = self.finish() {
            warn!(name = %self.name, error = %e, "could not print stamper report");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> StamperConfig {
        StamperConfig {
            auto_print: false,
            output: OutputSink::buffer(),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_stamp_records_nothing() {
        let mut stamper = DynamicStamper::with_config("t", quiet());
        assert!(stamper.stamp("only"));
        assert!(stamper.observations().is_empty());
    }

    #[test]
    fn test_finish_is_idempotent() {
        let sink = OutputSink::buffer();
        let mut stamper = DynamicStamper::with_config(
            "t",
            StamperConfig {
                output: sink.clone(),
                ..Default::default()
            },
        );
        stamper.finish().unwrap();
        stamper.finish().unwrap();
        drop(stamper);
        assert_eq!(sink.contents().lines().count(), 1);
    }
}
