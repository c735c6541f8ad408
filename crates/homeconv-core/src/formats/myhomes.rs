//! MyHomes locations: a SQLite database with a `homeTable` table.
//!
//! The table has no owner column; a home is owned by the player it is
//! named after. The format is read-only.

use super::LocationFormat;
use crate::{Error, Record, Result, RowSink, DEFAULT_PITCH};
use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, Row};
use std::path::Path;

/// Row order is whatever SQLite returns; there is no ordering key.
const SELECT_HOMES: &str =
    "SELECT `name`, `world`, `x`, `y`, `z`, `pitch`, `yaw` FROM `homeTable`";

/// SQLite-table adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MyHomes;

impl MyHomes {
    pub const ID: &'static str = "myhomes";
}

impl LocationFormat for MyHomes {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn writable(&self) -> bool {
        false
    }

    fn read(&self, path: &Path, _sink: &mut dyn RowSink) -> Result<Vec<Record>> {
        // Read-only so a missing file fails instead of creating an empty database.
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| Error::SourceUnavailable {
                path: path.to_path_buf(),
                source: e.into(),
            })?;

        let mut stmt = conn.prepare(SELECT_HOMES)?;
        let rows = stmt.query_map([], home_from_row)?;

        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }
        Ok(records)
    }

    fn write(&self, _records: &[Record], _path: &Path) -> Result<()> {
        Err(Error::UnsupportedOperation { format: Self::ID })
    }
}

fn home_from_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    let name = text(row.get(0)?);
    let pitch = match text(row.get(5)?) {
        p if p.is_empty() => DEFAULT_PITCH.to_string(),
        p => p,
    };
    Ok(Record::new(
        name.clone(),
        name,
        text(row.get(1)?),
        text(row.get(2)?),
        text(row.get(3)?),
        text(row.get(4)?),
        pitch,
        text(row.get(6)?),
    ))
}

/// Render a column value as text, whatever its storage class.
fn text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => real_text(f),
        Value::Text(s) => s,
        Value::Blob(b) => String::from_utf8_lossy(&b).into_owned(),
    }
}

/// Shortest round-trip form of a real, exponent written as `e+20` / `e-07`.
fn real_text(f: f64) -> String {
    let shortest = format!("{f:?}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

// =============================================================================
// TESTS
// =============================================================================
