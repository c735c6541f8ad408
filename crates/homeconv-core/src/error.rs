//! # Error Module
//!
//! Fatal conversion errors. Per-row parse problems are not errors; they are
//! reported through [`crate::RowSink`] and the row is skipped.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion run.
#[derive(Debug, Error)]
pub enum Error {
    /// The source file or database could not be opened at all.
    #[error("cannot open source {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A write was attempted against a read-only format.
    #[error("{format} does not support exporting")]
    UnsupportedOperation { format: &'static str },

    /// A format identifier outside the registry was requested.
    #[error("unknown format '{name}', available formats: {available}")]
    UnknownFormat { name: String, available: String },

    /// I/O failure after the file was opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// SQLite query failure.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
