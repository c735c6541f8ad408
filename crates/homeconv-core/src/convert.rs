//! # Convert Module
//!
//! The conversion driver: read everything, then write everything.
//!
//! The whole source is materialized before the destination is touched, so
//! a failed read never leaves a partially written destination. Errors from
//! either step are returned unchanged.

use crate::{LocationFormat, Result, RowSink};
use std::path::Path;

/// Convert the records at `source_path` into `destination_path`.
///
/// Returns the number of records written. Skipped source rows go to `sink`.
pub fn convert<S, D>(
    source: &S,
    source_path: &Path,
    destination: &D,
    destination_path: &Path,
    sink: &mut dyn RowSink,
) -> Result<usize>
where
    S: LocationFormat + ?Sized,
    D: LocationFormat + ?Sized,
{
    let records = source.read(source_path, sink)?;
    destination.write(&records, destination_path)?;
    Ok(records.len())
}

// =============================================================================
// TESTS
// =============================================================================
