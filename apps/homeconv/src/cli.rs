//! # CLI Commands
//!
//! Command implementations behind the `homeconv` binary.
//!
//! Each `cmd_*` function resolves formats and paths, calls into
//! `homeconv_core`, and prints its result to stdout. Diagnostics go to
//! the tracing subscriber installed by `main`.

use homeconv_core::registry::{self, FORMATS};
use homeconv_core::{LocationFormat, MalformedRow, RowSink};
use serde_json::json;
use std::path::{Path, PathBuf};

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

// =============================================================================
// DIAGNOSTICS
// =============================================================================

/// Logs every skipped source row as a warning.
#[derive(Debug, Default)]
pub struct TracingSink {
    /// Number of rows logged so far.
    pub skipped: usize,
}

impl RowSink for TracingSink {
    fn skipped(&mut self, row: MalformedRow) {
        self.skipped += 1;
        tracing::warn!(format = row.format, position = row.position, "{row}");
    }
}

// =============================================================================
// PATHS
// =============================================================================

/// Expand a leading `~` from `$HOME` and make the path absolute.
pub fn resolve_path(raw: &Path) -> CliResult<PathBuf> {
    let expanded = match (raw.strip_prefix("~"), std::env::var_os("HOME")) {
        (Ok(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => raw.to_path_buf(),
    };
    Ok(std::path::absolute(expanded)?)
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Convert `source` in format `from` into `destination` in format `to`.
///
/// Both formats are resolved before anything is read. The destination's
/// parent directory is created if missing. Returns the converted count.
pub fn cmd_convert(
    from: &str,
    source: &Path,
    to: &str,
    destination: &Path,
    json: bool,
) -> CliResult<usize> {
    let reader = registry::lookup(from)?;
    let writer = registry::lookup(to)?;

    let source = resolve_path(source)?;
    let destination = resolve_path(destination)?;
    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        "resolved paths"
    );

    if let Some(parent) = source.parent().filter(|p| !p.is_dir()) {
        tracing::error!("Source directory {} does not exist", parent.display());
    }
    if let Some(parent) = destination.parent().filter(|p| !p.is_dir()) {
        tracing::info!("Creating {}", parent.display());
        std::fs::create_dir_all(parent)?;
    }

    let mut sink = TracingSink::default();
    let count = homeconv_core::convert(&reader, &source, &writer, &destination, &mut sink)?;
    tracing::info!(
        count,
        skipped = sink.skipped,
        from = reader.id(),
        to = writer.id(),
        "conversion finished"
    );

    if json {
        let summary = json!({
            "converted": count,
            "skipped": sink.skipped,
            "from": reader.id(),
            "to": writer.id(),
            "destination": destination.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{count} homes successfully converted!");
    }

    Ok(count)
}

/// List the supported formats.
pub fn cmd_formats(json: bool) -> CliResult<()> {
    if json {
        let formats: Vec<_> = FORMATS
            .iter()
            .map(|f| {
                json!({
                    "id": f.id,
                    "description": f.description,
                    "writable": f.writable,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&formats)?);
        return Ok(());
    }

    println!("Available formats:");
    for format in &FORMATS {
        let mode = if format.writable { "read/write" } else { "read-only" };
        println!("  {:<10} {:<11} {}", format.id, mode, format.description);
    }
    Ok(())
}

/// Read `source` in `format` and print its records as JSON.
///
/// Returns the number of records printed.
pub fn cmd_inspect(format: &str, source: &Path) -> CliResult<usize> {
    let reader = registry::lookup(format)?;
    let source = resolve_path(source)?;

    let mut sink = TracingSink::default();
    let records = reader.read(&source, &mut sink)?;

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(records.len())
}
