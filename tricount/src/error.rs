//! Fatal error conditions. Anything in here aborts a run before the
//! counting phase starts; recoverable input problems (a single bad line
//! in an edge list) are reported as diagnostics instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// An input or output path could not be opened or created.
    #[error("cannot open {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read or write failed after the file was opened.
    #[error("i/o error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A CSR dump whose header, counts, or arrays are unusable.
    #[error("malformed CSR input: {0}")]
    MalformedCsr(String),

    /// More distinct vertices than a [`crate::Vertex`] can number.
    #[error("{0} vertices exceed the limit of {max}", max = crate::graph::MAX_VERTICES)]
    TooManyVertices(usize),

    /// An engine configuration whose axes cannot be combined.
    #[error("incompatible configuration: {0}")]
    IncompatibleConfig(String),

    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileOpen {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
