//! Error types for mdout-fs

use std::path::PathBuf;

/// Result type for mdout-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mdout-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Sink is closed")]
    Closed,

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
