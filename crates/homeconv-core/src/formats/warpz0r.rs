//! Warpz0r locations: plain text, one warp per line.
//!
//! Lines read as `name:x:y:z:yaw:world` and are written with a trailing
//! `:-1` the plugin expects. There is no owner and no pitch.

use super::{open_append, open_source, trim_line_end, LocationFormat};
use crate::{MalformedRow, Record, Result, RowSink, DEFAULT_PITCH};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const SEPARATOR: char = ':';

/// Number of fields a line needs to form a record.
const FIELDS: usize = 6;

/// Trailing field required on every written line.
const SENTINEL: &str = "-1";

/// Delimited-text adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Warpz0r;

impl Warpz0r {
    pub const ID: &'static str = "warpz0r";
}

impl LocationFormat for Warpz0r {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn read(&self, path: &Path, sink: &mut dyn RowSink) -> Result<Vec<Record>> {
        let mut reader = BufReader::new(open_source(path)?);
        let mut buf = Vec::new();
        let mut position = 0;

        let mut records = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            position += 1;

            // Old plugin files are often Latin-1; decode lossily instead of failing.
            let line = String::from_utf8_lossy(trim_line_end(&buf));
            let fields: Vec<&str> = line.split(SEPARATOR).collect();
            if fields.len() < FIELDS {
                sink.skipped(MalformedRow {
                    format: Self::ID,
                    unit: "line",
                    position,
                    found: fields.len(),
                    required: FIELDS,
                    raw: line.to_string(),
                });
                continue;
            }
            records.push(Record::new(
                fields[0],
                fields[0],
                fields[5],
                fields[1],
                fields[2],
                fields[3],
                DEFAULT_PITCH,
                fields[4],
            ));
        }
        Ok(records)
    }

    fn write(&self, records: &[Record], path: &Path) -> Result<()> {
        let mut out = BufWriter::new(open_append(path)?);
        for record in records {
            writeln!(
                out,
                "{name}{s}{x}{s}{y}{s}{z}{s}{yaw}{s}{world}{s}{SENTINEL}",
                name = record.name(),
                x = record.x(),
                y = record.y(),
                z = record.z(),
                yaw = record.yaw(),
                world = record.world(),
                s = SEPARATOR,
            )?;
        }
        out.flush()?;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
