//! Error types for source extraction and output.

use std::fmt;
use std::io;

/// Boxed error type through which collaborator traits report failures.
///
/// Any driver or accessor error that is `std::error::Error + Send + Sync`
/// plugs in unmodified and stays reachable via [`Error::source`].
///
/// [`Error::source`]: std::error::Error::source
pub type AccessError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while extracting a table or writing its rendering.
///
/// No variant is recovered locally: a failed extraction produces no partial
/// output, and cursors are not retried (they are not resumable).
#[derive(Debug)]
pub enum Error {
    /// Cursor metadata retrieval or row navigation failed.
    DataAccess(AccessError),
    /// A declared field accessor failed on a record.
    ///
    /// Indicates a caller contract violation: every record in a list must
    /// be readable through the schema it was paired with.
    FieldAccess {
        /// Name of the field whose accessor failed.
        field: String,
        /// The accessor's own error.
        source: AccessError,
    },
    /// Writing rendered output to a sink failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataAccess(source) => write!(f, "reading the result cursor failed: {source}"),
            Self::FieldAccess { field, source } => {
                write!(f, "reading field '{field}' failed: {source}")
            }
            Self::Io(source) => write!(f, "writing table output failed: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DataAccess(source) | Self::FieldAccess { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            Self::Io(source) => Some(source),
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
