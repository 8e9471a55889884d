use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Shared destination for human-facing reports.
///
/// Timers and stores print their tables here rather than straight to stdout.
/// Clones share one underlying writer, so a test can hand a
/// [`OutputSink::buffer`] to a stamper and read back what it printed.
#[derive(Clone)]
pub struct OutputSink {
    inner: Arc<Mutex<Target>>,
}

enum Target {
    Writer(Box<dyn Write + Send>),
    Buffer(Vec<u8>),
}

impl OutputSink {
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::from_writer(io::stderr())
    }

    /// An in-memory sink whose contents can be read with [`OutputSink::contents`].
    pub fn buffer() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Target::Buffer(Vec::new()))),
        }
    }

    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Target::Writer(Box::new(writer)))),
        }
    }

    pub fn write_str(&self, text: &str) -> io::Result<()> {
        let mut target = self.inner.lock();
        match &mut *target {
            Target::Writer(writer) => writer.write_all(text.as_bytes()),
            Target::Buffer(buffer) => {
                buffer.extend_from_slice(text.as_bytes());
                Ok(())
            }
        }
    }

    pub fn write_line(&self, text: &str) -> io::Result<()> {
        let mut target = self.inner.lock();
        match &mut *target {
            Target::Writer(writer) => {
                writer.write_all(text.as_bytes())?;
                writer.write_all(b"\n")?;
                writer.flush()
            }
            Target::Buffer(buffer) => {
                buffer.extend_from_slice(text.as_bytes());
                buffer.push(b'\n');
                Ok(())
            }
        }
    }

    pub fn flush(&self) -> io::Result<()> {
        match &mut *self.inner.lock() {
            Target::Writer(writer) => writer.flush(),
            Target::Buffer(_) => Ok(()),
        }
    }

    /// Everything written so far, for buffer sinks. Writer sinks return an
    /// empty string.
    pub fn contents(&self) -> String {
        match &*self.inner.lock() {
            Target::Buffer(buffer) => String::from_utf8_lossy(buffer).into_owned(),
            Target::Writer(_) => String::new(),
        }
    }

    /// Empties a buffer sink.
    pub fn clear(&self) {
        if let Target::Buffer(buffer) = &mut *self.inner.lock() {
            buffer.clear();
        }
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &*self.inner.lock() {
            Target::Writer(_) => "writer",
            Target::Buffer(_) => "buffer",
        };
        f.debug_struct("OutputSink").field("kind", &kind).finish()
    }
}
