//! Integration tests for homeconv CLI commands.
//!
//! Uses tempfile for testing file-based operations.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use homeconv::cli::{cmd_convert, cmd_formats, cmd_inspect, resolve_path};
use homeconv_core::formats::CommandBook;
use homeconv_core::{Error, LocationFormat, Record};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a temporary directory for tests.
fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Create a MyHomes database with two homes.
fn create_myhomes_db(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("homes.db");
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE homeTable (name TEXT, world TEXT, x TEXT, y TEXT, z TEXT, pitch TEXT, yaw TEXT);
         INSERT INTO homeTable VALUES ('alice', 'world', '10.5', '64', '-3', '12', '90');
         INSERT INTO homeTable VALUES ('bob', 'world_nether', '-100', '32', '7', '0', '-45');",
    )
    .unwrap();
    path
}

/// Create a Warpz0r file with one malformed line.
fn create_warpz0r_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("warps.txt");
    std::fs::write(&path, "spawn:0:64:0:180:world\nbroken:1:2\nmine:-20:12:40:90:world\n").unwrap();
    path
}

fn read_csv(path: &Path) -> Vec<Record> {
    CommandBook.read(path, &mut Vec::new()).unwrap()
}

/// Downcast a CLI error to the core error type.
fn core_error<'a>(err: &'a (dyn std::error::Error + 'static)) -> &'a Error {
    err.downcast_ref::<Error>().expect("not a core error")
}

// =============================================================================
// CONVERT COMMAND TESTS
// =============================================================================

#[test]
fn test_convert_myhomes_to_cmdbook() {
    let temp = create_temp_dir();
    let source = create_myhomes_db(&temp);
    let dest = temp.path().join("homes.csv");

    let count = cmd_convert("myhomes", &source, "cmdbook", &dest, false).unwrap();
    assert_eq!(count, 2);

    let mut records = read_csv(&dest);
    records.sort_by(|a, b| a.name().cmp(b.name()));
    assert_eq!(
        records,
        vec![
            Record::new("alice", "alice", "world", "10.5", "64", "-3", "12", "90"),
            Record::new("bob", "bob", "world_nether", "-100", "32", "7", "0", "-45"),
        ]
    );
}

#[test]
fn test_convert_warpz0r_to_cmdbook_skips_malformed() {
    let temp = create_temp_dir();
    let source = create_warpz0r_file(&temp);
    let dest = temp.path().join("warps.csv");

    let count = cmd_convert("warpz0r", &source, "cmdbook", &dest, true).unwrap();
    assert_eq!(count, 2);

    let names: Vec<String> = read_csv(&dest).iter().map(|r| r.name().to_string()).collect();
    assert_eq!(names, vec!["spawn", "mine"]);
}

#[test]
fn test_convert_creates_destination_directory() {
    let temp = create_temp_dir();
    let source = create_warpz0r_file(&temp);
    let dest = temp.path().join("plugins").join("CommandBook").join("homes.csv");

    cmd_convert("warpz0r", &source, "cmdbook", &dest, false).unwrap();
    assert!(dest.exists());
}

#[test]
fn test_convert_appends_on_second_run() {
    let temp = create_temp_dir();
    let source = create_warpz0r_file(&temp);
    let dest = temp.path().join("warps.csv");

    cmd_convert("warpz0r", &source, "cmdbook", &dest, false).unwrap();
    cmd_convert("warpz0r", &source, "cmdbook", &dest, false).unwrap();

    let names: Vec<String> = read_csv(&dest).iter().map(|r| r.name().to_string()).collect();
    assert_eq!(names, vec!["spawn", "mine", "spawn", "mine"]);
}

#[test]
fn test_convert_unknown_format() {
    let temp = create_temp_dir();
    let source = create_warpz0r_file(&temp);
    let dest = temp.path().join("out.csv");

    let err = cmd_convert("essentials", &source, "cmdbook", &dest, false).unwrap_err();
    assert!(matches!(core_error(err.as_ref()), Error::UnknownFormat { .. }));

    let err = cmd_convert("warpz0r", &source, "Cmdbook", &dest, false).unwrap_err();
    assert!(matches!(core_error(err.as_ref()), Error::UnknownFormat { .. }));
    assert!(!dest.exists());
}

#[test]
fn test_convert_to_myhomes_is_unsupported() {
    let temp = create_temp_dir();
    let source = create_warpz0r_file(&temp);
    let dest = temp.path().join("out.db");

    let err = cmd_convert("warpz0r", &source, "myhomes", &dest, false).unwrap_err();
    assert!(matches!(
        core_error(err.as_ref()),
        Error::UnsupportedOperation { format: "myhomes" }
    ));
    assert_eq!(err.to_string(), "myhomes does not support exporting");
    assert!(!dest.exists());
}

#[test]
fn test_convert_missing_source() {
    let temp = create_temp_dir();
    let source = temp.path().join("nowhere").join("warps.txt");
    let dest = temp.path().join("out.csv");

    let err = cmd_convert("warpz0r", &source, "cmdbook", &dest, false).unwrap_err();
    assert!(matches!(
        core_error(err.as_ref()),
        Error::SourceUnavailable { .. }
    ));
    assert!(!dest.exists());
}

// =============================================================================
// FORMATS / INSPECT COMMAND TESTS
// =============================================================================

#[test]
fn test_formats_text_and_json() {
    assert!(cmd_formats(false).is_ok());
    assert!(cmd_formats(true).is_ok());
}

#[test]
fn test_inspect_counts_records() {
    let temp = create_temp_dir();
    let source = create_warpz0r_file(&temp);

    assert_eq!(cmd_inspect("warpz0r", &source).unwrap(), 2);
}

// =============================================================================
// PATH TESTS
// =============================================================================

#[test]
fn test_resolve_path_makes_absolute() {
    let resolved = resolve_path(Path::new("homes.csv")).unwrap();
    assert!(resolved.is_absolute());
    assert!(resolved.ends_with("homes.csv"));
}

#[test]
fn test_resolve_path_expands_home() {
    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    let resolved = resolve_path(Path::new("~/homes.csv")).unwrap();
    assert_eq!(resolved, std::path::absolute(PathBuf::from(home).join("homes.csv")).unwrap());
}
