use std::io;

use thiserror::Error;

/// Errors surfaced by the toolbox.
///
/// Every fallible operation in the crate returns this type, whether the
/// failure comes from acquiring a resource (files, sockets) or from a lookup
/// in one of the keyed stores.
#[derive(Debug, Error)]
pub enum ToolboxError {
    /// A file could not be opened or written.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// A key was requested from a store that does not hold it.
    #[error("given key '{key}' does not exist")]
    KeyNotFound { key: String },

    /// A key exists but holds a value of another type.
    #[error("key '{key}' holds a value of type `{found}`, not `{expected}`")]
    TypeMismatch {
        key: String,
        expected: String,
        found: String,
    },

    /// A socket syscall failed.
    #[error("socket {operation} failed: {source}")]
    Socket {
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    /// The global log subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl ToolboxError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        ToolboxError::Io {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn socket(operation: &'static str, source: io::Error) -> Self {
        ToolboxError::Socket { operation, source }
    }
}

impl From<io::Error> for ToolboxError {
    fn from(source: io::Error) -> Self {
        ToolboxError::io("writing output", source)
    }
}

pub type Result<T> = std::result::Result<T, ToolboxError>;
