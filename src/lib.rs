//! # sxs_toolbox
//!
//! Developer utilities centred on interval timing: stamp named checkpoints
//! through a program, then get per-transition statistics as an aligned table.
//!
//! * **Interval stamping**: [`TimeStamper`] records the time between
//!   consecutive checkpoints, with free-form string labels or a closed token
//!   enumeration declared by [`define_tokens!`]
//! * **Statistics**: observations compile into per-pair min/max/sum/count/mean/stdev,
//!   and collections from repeated trials merge into one
//! * **Reports**: column-aligned tables with automatic SI time units
//!
//! ## Main Components
//!
//! * `clock`: monotonic time source, stopwatch, throttle
//! * `stamper`: the checkpoint state machine
//! * `collection` / `report`: compilation, merging and rendering
//! * `storage` / `context`: type-checked key-value storage and per-process state
//! * `counters` / `dict`: small numeric stores for instrumentation
//! * `csv_writer`, `colour`, `sockets`, `strings`, `logging`: supporting utilities
//!
//! ## Quick Start
//!
//! ```
//! use sxs_toolbox::{DynamicStamper, StamperConfig, OutputSink};
//!
//! let sink = OutputSink::buffer();
//! let mut stamper = DynamicStamper::with_config(
//!     "main loop",
//!     StamperConfig { output: sink.clone(), ..Default::default() },
//! );
//! for _ in 0..3 {
//!     stamper.stamp("read");
//!     stamper.stamp("process");
//! }
//! stamper.finish().unwrap();
//!
//! let table = sink.contents();
//! assert!(table.contains("read    -> process"));
//! assert!(table.contains("process -> read"));
//! ```

pub mod clock;
pub mod collection;
pub mod colour;
pub mod context;
pub mod counters;
pub mod csv_writer;
pub mod dict;
pub mod error;
pub mod format;
pub mod label;
pub mod logging;
pub mod output;
pub mod report;
pub mod sockets;
pub mod stamper;
pub mod stats;
pub mod storage;
pub mod strings;
pub mod timeit;

pub use clock::{Clock, Throttle, Timer};
pub use collection::{compile, merge, Observation, TimeStampCollection};
pub use context::Context;
pub use counters::{Counters, CountersAggregate, StatValue};
pub use csv_writer::{CsvInstantWriter, CsvWriter};
pub use error::{Result, ToolboxError};
pub use label::Label;
pub use output::OutputSink;
pub use report::{print_aggregated_stamped_stats, print_stamped_stats, render, Report};
pub use stamper::{DynamicStamper, StamperConfig, TimeStamper};
pub use stats::Stats;
pub use storage::{Flags, GlobalStorage};
pub use timeit::{timeit, TimeitSummary};
