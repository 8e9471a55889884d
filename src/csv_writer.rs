//! Minimal CSV writing with quoting, auto row breaks and instant flushing.

use std::fmt::{self, Display};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ToolboxError};

/// Quotes a cell when needed.
///
/// An embedded `"` is doubled and the whole cell wrapped in quotes; a cell
/// containing the separator is wrapped in quotes. Anything else is untouched.
///
/// ```
/// # use sxs_toolbox::csv_writer::escape_cell;
/// assert_eq!(escape_cell("a,b", ","), "\"a,b\"");
/// assert_eq!(escape_cell("a\"b", ","), "\"a\"\"b\"");
/// assert_eq!(escape_cell("c", ","), "c");
/// ```
pub fn escape_cell(cell: &str, separator: &str) -> String {
    if cell.contains('"') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else if !separator.is_empty() && cell.contains(separator) {
        format!("\"{}\"", cell)
    } else {
        cell.to_string()
    }
}

fn append_to_file(path: &Path, append: bool, leading_newline: bool, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(|e| ToolboxError::io(format!("opening {}", path.display()), e))?;
    if append && leading_newline {
        file.write_all(b"\n")
            .map_err(|e| ToolboxError::io(format!("writing {}", path.display()), e))?;
    }
    file.write_all(content.as_bytes())
        .map_err(|e| ToolboxError::io(format!("writing {}", path.display()), e))
}

fn truncate_file(path: &Path) -> Result<()> {
    append_to_file(path, false, false, "")
}

/// Builds CSV text cell by cell.
///
/// [`new_row`](CsvWriter::new_row) breaks the line; called before anything
/// was added it does nothing, so it may open every row or close it. With a column count set, a row break is inserted
/// automatically once a row is full. With instant writing enabled, every
/// completed row is appended to a file and dropped from memory.
///
/// # Examples
///
/// ```
/// # use sxs_toolbox::csv_writer::CsvWriter;
/// let mut csv = CsvWriter::default();
/// csv.add("a,b").add("c");
/// csv.new_row().add(1).add(2.5);
/// assert_eq!(csv.as_str(), "\"a,b\",c\n1,2.5");
/// ```
#[derive(Debug, Clone)]
pub struct CsvWriter {
    separator: String,
    column_count: Option<usize>,
    value_count: usize,
    started: bool,
    instant_path: Option<PathBuf>,
    buffer: String,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new(",", None)
    }
}

impl CsvWriter {
    pub fn new(separator: impl Into<String>, column_count: Option<usize>) -> Self {
        Self {
            separator: separator.into(),
            column_count,
            value_count: 0,
            started: false,
            instant_path: None,
            buffer: String::new(),
        }
    }

    /// A comma separated writer that breaks rows every `columns` cells.
    pub fn with_columns(columns: usize) -> Self {
        Self::new(",", Some(columns))
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Appends one cell, quoting it as needed.
    pub fn add(&mut self, value: impl Display) -> &mut Self {
        let cell = escape_cell(&value.to_string(), &self.separator);
        self.add_raw(&cell)
    }

    fn add_raw(&mut self, cell: &str) -> &mut Self {
        if let Some(columns) = self.column_count {
            if self.value_count == columns {
                self.new_row();
            }
        }
        if self.value_count > 0 {
            self.buffer.push_str(&self.separator);
        }
        self.buffer.push_str(cell);
        self.value_count += 1;
        self.started = true;
        self
    }

    /// Starts a new row.
    ///
    /// In instant-write mode the buffered row is appended to the file. A
    /// write failure is logged and the row stays buffered; use
    /// [`try_new_row`](CsvWriter::try_new_row) to observe it.
    pub fn new_row(&mut self) -> &mut Self {
        if let Err(e) = self.try_new_row() {
            tracing::warn!(error = %e, "csv row could not be written");
        }
        self
    }

    pub fn try_new_row(&mut self) -> Result<()> {
        if self.started {
            self.buffer.push('\n');
        }
        self.value_count = 0;
        if let Some(path) = &self.instant_path {
            append_to_file(path, true, false, &self.buffer)?;
            self.buffer.clear();
        }
        Ok(())
    }

    /// Appends another writer's content on a new line.
    pub fn append(&mut self, other: &CsvWriter) {
        self.buffer.push('\n');
        self.buffer.push_str(&other.buffer);
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Writes the buffered text to `path`.
    ///
    /// Without `append` the file is truncated first. With `append` and
    /// `add_newline`, a newline is written before the content so it does not
    /// run on from a partial last line.
    pub fn write_to_file(&self, path: impl AsRef<Path>, append: bool, add_newline: bool) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), append, bytes = self.buffer.len(), "writing csv");
        append_to_file(path, append, add_newline, &self.buffer)
    }

    /// From now on, flush every completed row to `path`.
    ///
    /// Without `append` the file is truncated immediately.
    pub fn enable_write_immediately(&mut self, path: impl Into<PathBuf>, append: bool) -> Result<()> {
        let path = path.into();
        if !append {
            truncate_file(&path)?;
        }
        self.instant_path = Some(path);
        Ok(())
    }

    pub fn disable_write_immediately(&mut self) {
        self.instant_path = None;
    }

    pub fn enable_auto_new_row(&mut self, columns: usize) {
        self.column_count = Some(columns);
    }

    pub fn disable_auto_new_row(&mut self) {
        self.column_count = None;
    }
}

impl Display for CsvWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

/// Writes whole rows straight to a file, one append per row.
///
/// ```no_run
/// # use sxs_toolbox::csv_writer::CsvInstantWriter;
/// let mut writer = CsvInstantWriter::new("test.csv", false, ",")?;
/// writer.add_row(["HI", "how are", "you"])?;
/// writer.add_row(&[1.5, 2.0])?;
/// # Ok::<(), sxs_toolbox::ToolboxError>(())
/// ```
#[derive(Debug)]
pub struct CsvInstantWriter {
    path: PathBuf,
    separator: String,
    first_row: bool,
}

impl CsvInstantWriter {
    /// Opens `path`, truncating it unless `append` is set.
    pub fn new(path: impl Into<PathBuf>, append: bool, separator: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if !append {
            truncate_file(&path)?;
        }
        Ok(Self {
            path,
            separator: separator.into(),
            first_row: true,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one row. Rows after the first are preceded by a newline.
    pub fn add_row<I>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let row = cells
            .into_iter()
            .map(|cell| escape_cell(&cell.to_string(), &self.separator))
            .collect::<Vec<_>>()
            .join(&self.separator);
        let leading_newline = !self.first_row;
        append_to_file(&self.path, true, leading_newline, &row)?;
        self.first_row = false;
        Ok(())
    }
}
