use std::collections::BTreeMap;
use std::fmt;
use std::ops::AddAssign;
use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::debug;

use crate::clock::Timer;
use crate::csv_writer::CsvInstantWriter;
use crate::error::{Result, ToolboxError};

/// A counter value. The set of numeric types is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    Long(i64),
    Int(i32),
    Double(f64),
    Float(f32),
}

impl StatValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            StatValue::Long(v) => v as f64,
            StatValue::Int(v) => v as f64,
            StatValue::Double(v) => v,
            StatValue::Float(v) => v as f64,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            StatValue::Long(_) => "i64",
            StatValue::Int(_) => "i32",
            StatValue::Double(_) => "f64",
            StatValue::Float(_) => "f32",
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Long(v) => write!(f, "{}", v),
            StatValue::Int(v) => write!(f, "{}", v),
            StatValue::Double(v) => write!(f, "{}", v),
            StatValue::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Numeric types a [`StatValue`] can hold.
pub trait StatNumeric: Copy + Default + AddAssign + 'static {
    const TYPE_NAME: &'static str;

    fn wrap(self) -> StatValue;

    fn slot(value: &mut StatValue) -> Option<&mut Self>;

    fn one() -> Self;
}

macro_rules! impl_stat_numeric {
    ($ty:ty, $variant:ident, $one:expr) => {
        impl StatNumeric for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn wrap(self) -> StatValue {
                StatValue::$variant(self)
            }

            fn slot(value: &mut StatValue) -> Option<&mut Self> {
                match value {
                    StatValue::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn one() -> Self {
                $one
            }
        }
    };
}

impl_stat_numeric!(i64, Long, 1);
impl_stat_numeric!(i32, Int, 1);
impl_stat_numeric!(f64, Double, 1.0);
impl_stat_numeric!(f32, Float, 1.0);

struct CsvOutput {
    writer: CsvInstantWriter,
    header_pending: bool,
}

#[derive(Default)]
struct CounterState {
    values: Vec<(String, StatValue)>,
    csv: Option<CsvOutput>,
}

impl CounterState {
    fn position(&self, key: &str) -> Option<usize> {
        self.values.iter().position(|(k, _)| k == key)
    }
}

/// Named numeric counters kept in insertion order.
///
/// Each key is bound to one numeric type on first use. Accessing it as a
/// different type is an error rather than a silent conversion.
///
/// # Examples
///
/// ```
/// # use sxs_toolbox::counters::Counters;
/// let counters = Counters::new();
/// counters.add("iterations", 3i64).unwrap();
/// counters.add("cost", 2.5f64).unwrap();
/// counters.increment("iterations").unwrap();
/// assert_eq!(counters.to_string(), "{iterations: 4, cost: 2.5}");
/// assert!(counters.add("iterations", 1.0f64).is_err());
/// ```
pub struct Counters {
    state: Mutex<CounterState>,
    timer: Timer,
}

impl Counters {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CounterState::default()),
            timer: Timer::new(),
        }
    }

    /// Runs `f` on the value under `key`, creating it as zero of type `T`.
    pub fn with<T, R, F>(&self, key: &str, f: F) -> Result<R>
    where
        T: StatNumeric,
        F: FnOnce(&mut T) -> R,
    {
        let mut state = self.state.lock();
        let index = match state.position(key) {
            Some(index) => index,
            None => {
                state.values.push((key.to_string(), T::default().wrap()));
                state.values.len() - 1
            }
        };
        let value = &mut state.values[index].1;
        let found = value.type_name();
        match T::slot(value) {
            Some(slot) => Ok(f(slot)),
            None => Err(ToolboxError::TypeMismatch {
                key: key.to_string(),
                expected: T::TYPE_NAME.to_string(),
                found: found.to_string(),
            }),
        }
    }

    pub fn set<T: StatNumeric>(&self, key: &str, value: T) -> Result<()> {
        self.with::<T, _, _>(key, |v| *v = value)
    }

    pub fn add<T: StatNumeric>(&self, key: &str, amount: T) -> Result<()> {
        self.with::<T, _, _>(key, |v| *v += amount)
    }

    /// Adds one to an `i64` counter.
    pub fn increment(&self, key: &str) -> Result<()> {
        self.add(key, i64::one())
    }

    pub fn get(&self, key: &str) -> Option<StatValue> {
        let state = self.state.lock();
        state.position(key).map(|i| state.values[i].1)
    }

    pub fn keys(&self) -> Vec<String> {
        self.state.lock().values.iter().map(|(k, _)| k.clone()).collect()
    }

    /// A copy of every key and value in insertion order.
    pub fn snapshot(&self) -> Vec<(String, StatValue)> {
        self.state.lock().values.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every counter. An attached CSV file stays attached.
    pub fn reset(&self) {
        self.state.lock().values.clear();
    }

    /// Seconds since these counters were created.
    pub fn elapsed(&self) -> f64 {
        self.timer.elapsed()
    }

    /// Sends future [`serialise_to_csv`](Counters::serialise_to_csv) rows to
    /// `path`, truncating it. With `write_header` the first row written is
    /// the column names.
    pub fn set_output_file(&self, path: impl Into<PathBuf>, write_header: bool) -> Result<()> {
        let writer = CsvInstantWriter::new(path, false, ",")?;
        debug!(path = %writer.path().display(), write_header, "counters csv attached");
        self.state.lock().csv = Some(CsvOutput {
            writer,
            header_pending: write_header,
        });
        Ok(())
    }

    /// Appends the current values as one CSV row, preceded by the header on
    /// the first call. With `include_timestamp` the first column is the
    /// elapsed time in seconds.
    pub fn serialise_to_csv(&self, include_timestamp: bool) -> Result<()> {
        let elapsed = self.timer.elapsed();
        let mut state = self.state.lock();
        let CounterState { values, csv } = &mut *state;
        let Some(output) = csv.as_mut() else {
            return Err(ToolboxError::io(
                "serialising counters",
                std::io::Error::new(std::io::ErrorKind::NotFound, "no output file set"),
            ));
        };

        if output.header_pending {
            let mut header: Vec<String> = Vec::with_capacity(values.len() + 1);
            if include_timestamp {
                header.push("timestamp".to_string());
            }
            header.extend(values.iter().map(|(k, _)| k.clone()));
            output.writer.add_row(header)?;
            output.header_pending = false;
        }

        let mut row: Vec<String> = Vec::with_capacity(values.len() + 1);
        if include_timestamp {
            row.push(elapsed.to_string());
        }
        row.extend(values.iter().map(|(_, v)| v.to_string()));
        output.writer.add_row(row)
    }
}

impl Default for Counters {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.write_str("{")?;
        for (i, (key, value)) in state.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counters{}", self)
    }
}

/// Column-wise history of many [`Counters`] snapshots.
#[derive(Debug, Clone, Default)]
pub struct CountersAggregate {
    columns: BTreeMap<String, Vec<f64>>,
}

impl CountersAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, counters: &Counters) {
        for (key, value) in counters.snapshot() {
            self.columns.entry(key).or_default().push(value.as_f64());
        }
    }

    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.columns.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }
}

impl fmt::Display for CountersAggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, values)) in self.columns.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {:?}", key, values)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_created_on_first_access() {
        let counters = Counters::new();
        let seen = counters.with::<f32, _, _>("x", |v| *v).unwrap();
        assert_eq!(seen, 0.0);
        assert_eq!(counters.get("x"), Some(StatValue::Float(0.0)));
    }

    #[test]
    fn test_mismatch_names_types() {
        let counters = Counters::new();
        counters.set("n", 1i32).unwrap();
        match counters.add("n", 1i64) {
            Err(ToolboxError::TypeMismatch { expected, found, .. }) => {
                assert_eq!(expected, "i64");
                assert_eq!(found, "i32");
            }
            other => panic!("expected a type mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_aggregate_columns() {
        let counters = Counters::new();
        let mut aggregate = CountersAggregate::new();
        counters.set("a", 1i64).unwrap();
        aggregate.append(&counters);
        counters.set("a", 3i64).unwrap();
        aggregate.append(&counters);
        assert_eq!(aggregate.get("a"), Some(&[1.0, 3.0][..]));
        assert_eq!(aggregate.to_string(), "{a: [1.0, 3.0]}");
    }
}
