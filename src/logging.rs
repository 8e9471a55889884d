//! Process-wide diagnostic logging setup.
//!
//! The toolbox itself only emits `tracing` events. An application that wants
//! to see them calls [`init`] once, early in `main`, and keeps the returned
//! [`LogHandle`] alive until exit.

use std::path::PathBuf;

use tracing::level_filters::LevelFilter;
use tracing::span::EnteredSpan;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, ToolboxError};

/// How much to log, from silent to everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    #[default]
    Nothing,
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl Verbosity {
    /// `tracing` has no level above `ERROR`, so `Critical` and `Error` both
    /// map to it.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Nothing => LevelFilter::OFF,
            Verbosity::Critical | Verbosity::Error => LevelFilter::ERROR,
            Verbosity::Warning => LevelFilter::WARN,
            Verbosity::Info => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub verbosity: Verbosity,
    /// Tags every line logged from the initialising thread.
    pub prefix: Option<String>,
    /// Also write plain-text lines to this file.
    pub file: Option<PathBuf>,
    /// Colour the console output.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Warning,
            prefix: None,
            file: None,
            ansi: true,
        }
    }
}

/// Keeps logging alive. Dropping it flushes the log file and leaves the
/// prefix span.
///
/// The handle holds an entered span, so it stays on the thread that
/// called [`init`].
#[must_use = "dropping the handle stops file logging"]
pub struct LogHandle {
    _root: Option<EnteredSpan>,
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// The level comes from `config.verbosity` unless `RUST_LOG` is set, which
/// takes precedence. Fails if a global subscriber is already installed.
///
/// ```no_run
/// # use sxs_toolbox::logging::{self, LogConfig, Verbosity};
/// let _log = logging::init(LogConfig {
///     verbosity: Verbosity::Debug,
///     prefix: Some("solver".into()),
///     ..Default::default()
/// })?;
/// # Ok::<(), sxs_toolbox::ToolboxError>(())
/// ```
pub fn init(config: LogConfig) -> Result<LogHandle> {
    let filter = EnvFilter::builder()
        .with_default_directive(config.verbosity.level_filter().into())
        .from_env_lossy();

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .with_target(false);

    let (file_layer, file_guard) = match &config.file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| ToolboxError::Logging(format!("{} is not a file path", path.display())))?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_timer(fmt::time::UtcTime::rfc_3339());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| ToolboxError::Logging(e.to_string()))?;

    let root = config
        .prefix
        .map(|prefix| tracing::info_span!("sxs", prefix = %prefix).entered());

    Ok(LogHandle {
        _root: root,
        _file_guard: file_guard,
    })
}
