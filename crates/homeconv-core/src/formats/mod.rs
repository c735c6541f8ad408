//! # Formats Module
//!
//! One adapter per supported location format.
//!
//! | id        | encoding                         | read | write |
//! |-----------|----------------------------------|------|-------|
//! | `cmdbook` | quoted CSV, 8 columns            | yes  | yes   |
//! | `myhomes` | SQLite table `homeTable`         | yes  | no    |
//! | `warpz0r` | colon-delimited text, 6/7 fields | yes  | yes   |
//!
//! The set is closed: [`Adapter`] is an enum over the known variants and
//! dispatches statically.

mod cmdbook;
mod myhomes;
mod warpz0r;

pub use cmdbook::CommandBook;
pub use myhomes::MyHomes;
pub use warpz0r::Warpz0r;

use crate::{Error, Record, Result, RowSink};
use std::fs::{File, OpenOptions};
use std::path::Path;

// =============================================================================
// LOCATIONFORMAT TRAIT
// =============================================================================

/// Read/write capability shared by every format adapter.
pub trait LocationFormat {
    /// Registry identifier of the format.
    fn id(&self) -> &'static str;

    /// Whether [`LocationFormat::write`] is supported.
    fn writable(&self) -> bool {
        true
    }

    /// Read every record from `path`, in source order.
    ///
    /// Rows with too few fields are reported to `sink` and skipped.
    /// Fails with [`Error::SourceUnavailable`] if the source cannot be opened.
    fn read(&self, path: &Path, sink: &mut dyn RowSink) -> Result<Vec<Record>>;

    /// Append `records` to `path`, creating it if absent. Never truncates.
    fn write(&self, records: &[Record], path: &Path) -> Result<()>;
}

// =============================================================================
// ADAPTER
// =============================================================================

/// Closed set of format adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adapter {
    CommandBook(CommandBook),
    MyHomes(MyHomes),
    Warpz0r(Warpz0r),
}

impl Adapter {
    fn inner(&self) -> &dyn LocationFormat {
        match self {
            Self::CommandBook(a) => a,
            Self::MyHomes(a) => a,
            Self::Warpz0r(a) => a,
        }
    }
}

impl LocationFormat for Adapter {
    fn id(&self) -> &'static str {
        self.inner().id()
    }

    fn writable(&self) -> bool {
        self.inner().writable()
    }

    fn read(&self, path: &Path, sink: &mut dyn RowSink) -> Result<Vec<Record>> {
        self.inner().read(path, sink)
    }

    fn write(&self, records: &[Record], path: &Path) -> Result<()> {
        self.inner().write(records, path)
    }
}

// =============================================================================
// FILE HELPERS
// =============================================================================

/// Open a source file for reading.
fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

/// Open a destination file for appending, creating it if absent.
fn open_append(path: &Path) -> Result<File> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Strip one trailing `\n` or `\r\n` from a raw line.
fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
