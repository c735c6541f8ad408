//! # Registry Module
//!
//! Fixed mapping from format identifier to adapter factory.
//!
//! The table is a `static` built at compile time and never mutated.

use crate::formats::{Adapter, CommandBook, MyHomes, Warpz0r};
use crate::{Error, Result};

/// One registered format.
#[derive(Debug, Clone, Copy)]
pub struct FormatEntry {
    /// Identifier used on the command line.
    pub id: &'static str,
    /// Short human-readable description.
    pub description: &'static str,
    /// Whether the format can be written.
    pub writable: bool,
    factory: fn() -> Adapter,
}

impl FormatEntry {
    /// Construct this entry's adapter.
    pub fn adapter(&self) -> Adapter {
        (self.factory)()
    }
}

/// Every supported format, in display order.
pub static FORMATS: [FormatEntry; 3] = [
    FormatEntry {
        id: MyHomes::ID,
        description: "MyHomes SQLite database (homeTable)",
        writable: false,
        factory: myhomes,
    },
    FormatEntry {
        id: Warpz0r::ID,
        description: "Warpz0r colon-delimited text",
        writable: true,
        factory: warpz0r,
    },
    FormatEntry {
        id: CommandBook::ID,
        description: "CommandBook CSV",
        writable: true,
        factory: cmdbook,
    },
];

fn myhomes() -> Adapter {
    Adapter::MyHomes(MyHomes)
}

fn warpz0r() -> Adapter {
    Adapter::Warpz0r(Warpz0r)
}

fn cmdbook() -> Adapter {
    Adapter::CommandBook(CommandBook)
}

/// Find the registry entry for `id`.
pub fn entry(id: &str) -> Option<&'static FormatEntry> {
    FORMATS.iter().find(|e| e.id == id)
}

/// Resolve `id` to its adapter.
///
/// Fails with [`Error::UnknownFormat`] listing the known identifiers.
pub fn lookup(id: &str) -> Result<Adapter> {
    entry(id)
        .map(FormatEntry::adapter)
        .ok_or_else(|| Error::UnknownFormat {
            name: id.to_string(),
            available: available(),
        })
}

/// Comma-separated list of known identifiers.
pub fn available() -> String {
    FORMATS.iter().map(|e| e.id).collect::<Vec<_>>().join(", ")
}
