//! CommandBook locations: quoted CSV, one location per row.
//!
//! Column order is `name, world, owner, x, y, z, pitch, yaw`.

use super::{open_append, open_source, trim_line_end, LocationFormat};
use crate::{MalformedRow, Record, Result, RowSink};
use csv::{ByteRecord, QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use std::io::Read;
use std::path::Path;

/// Number of columns a row needs to form a record.
const COLUMNS: usize = 8;

/// CSV-tabular adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandBook;

impl CommandBook {
    pub const ID: &'static str = "cmdbook";
}

impl LocationFormat for CommandBook {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn read(&self, path: &Path, sink: &mut dyn RowSink) -> Result<Vec<Record>> {
        let mut bytes = Vec::new();
        open_source(path)?.read_to_end(&mut bytes)?;

        let mut records = Vec::new();
        for (index, line) in split_rows(&bytes).into_iter().enumerate() {
            let line = trim_line_end(line);
            let row = decode_row(line)?;
            if row.len() < COLUMNS {
                sink.skipped(MalformedRow {
                    format: Self::ID,
                    unit: "row",
                    position: index + 1,
                    found: row.len(),
                    required: COLUMNS,
                    raw: String::from_utf8_lossy(line).into_owned(),
                });
                continue;
            }
            records.push(Record::new(
                &row[0], &row[2], &row[1], &row[3], &row[4], &row[5], &row[6], &row[7],
            ));
        }
        Ok(records)
    }

    fn write(&self, records: &[Record], path: &Path) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::CRLF)
            .from_writer(open_append(path)?);

        for record in records {
            writer.write_record([
                record.name(),
                record.world(),
                record.owner(),
                record.x(),
                record.y(),
                record.z(),
                record.pitch(),
                record.yaw(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Split raw CSV into rows, one per unquoted newline.
///
/// Blank lines are kept as rows of their own; the csv reader would drop them.
fn split_rows(bytes: &[u8]) -> Vec<&[u8]> {
    let mut rows = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    let mut field_start = true;
    let mut after_quote = false;

    for (i, &b) in bytes.iter().enumerate() {
        if quoted {
            if b == b'"' {
                quoted = false;
                after_quote = true;
            }
            continue;
        }
        match b {
            // `""` inside a quoted field reopens it
            b'"' if field_start || after_quote => quoted = true,
            b'\n' => {
                rows.push(&bytes[start..=i]);
                start = i + 1;
            }
            _ => {}
        }
        field_start = matches!(b, b',' | b'\n');
        after_quote = false;
    }
    if start < bytes.len() {
        rows.push(&bytes[start..]);
    }
    rows
}

/// Decode one row into fields. Invalid UTF-8 is replaced, not rejected.
fn decode_row(line: &[u8]) -> Result<Vec<String>> {
    if line.is_empty() {
        return Ok(Vec::new());
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line);
    let mut row = ByteRecord::new();
    reader.read_byte_record(&mut row)?;
    Ok(row
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect())
}

// =============================================================================
// TESTS
// =============================================================================
