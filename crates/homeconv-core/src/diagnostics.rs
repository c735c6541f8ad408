//! # Diagnostics Module
//!
//! Non-fatal channel for rows a reader had to skip.
//!
//! Readers never fail on a malformed row. They hand a [`MalformedRow`] to
//! the caller's [`RowSink`] and keep going. The binary logs these; tests
//! collect them into a `Vec`.

use std::fmt;

/// A source row that did not have enough fields to form a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRow {
    /// Format identifier of the reader that skipped the row.
    pub format: &'static str,
    /// What a position counts in this format ("row" or "line").
    pub unit: &'static str,
    /// 1-based position in the source.
    pub position: usize,
    /// Number of fields found.
    pub found: usize,
    /// Minimum number of fields the format needs.
    pub required: usize,
    /// The raw row content as read.
    pub raw: String,
}

impl fmt::Display for MalformedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} has {} fields, {} required: {}",
            self.unit, self.position, self.found, self.required, self.raw
        )
    }
}

/// Receiver for skipped-row diagnostics.
pub trait RowSink {
    /// Called once per skipped row, in source order.
    fn skipped(&mut self, row: MalformedRow);
}

impl RowSink for Vec<MalformedRow> {
    fn skipped(&mut self, row: MalformedRow) {
        self.push(row);
    }
}
