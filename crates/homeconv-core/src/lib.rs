//! # Homeconv Core
//!
//! Conversion of named locations ("homes" and "warps") between the
//! persistence formats used by different game-server plugins.
//!
//! ## Pipeline
//!
//! ```text
//! source file ──► Adapter::read ──► Vec<Record> ──► Adapter::write ──► destination
//!                     │
//!                     └──► RowSink (skipped rows)
//! ```
//!
//! - [`Record`] is the common shape every format is normalized into.
//! - [`formats`] holds one adapter per supported format.
//! - [`registry`] resolves a format identifier to its adapter.
//! - [`convert`] runs one read pass followed by one write pass.
//!
//! File-system glue (path expansion, directory creation, logging) lives in
//! the `homeconv` binary, not here.

pub mod convert;
pub mod diagnostics;
mod error;
pub mod formats;
pub mod registry;

pub use convert::convert;
pub use diagnostics::{MalformedRow, RowSink};
pub use error::{Error, Result};
pub use formats::{Adapter, LocationFormat};
pub use registry::{FormatEntry, FORMATS};

use serde::Serialize;

// =============================================================================
// RECORD
// =============================================================================

/// One named, owned, located point in a game world.
///
/// All eight fields are always present. Adapters substitute defaults for
/// fields their format lacks, so every adapter can write every record.
/// Coordinates and angles are carried as text to keep the source formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: String,
    owner: String,
    world: String,
    x: String,
    y: String,
    z: String,
    pitch: String,
    yaw: String,
}

impl Record {
    /// Create a record. No validation is performed.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        world: impl Into<String>,
        x: impl Into<String>,
        y: impl Into<String>,
        z: impl Into<String>,
        pitch: impl Into<String>,
        yaw: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            world: world.into(),
            x: x.into(),
            y: y.into(),
            z: z.into(),
            pitch: pitch.into(),
            yaw: yaw.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Account that owns the location. Formats without an owner use `name`.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn world(&self) -> &str {
        &self.world
    }

    pub fn x(&self) -> &str {
        &self.x
    }

    pub fn y(&self) -> &str {
        &self.y
    }

    pub fn z(&self) -> &str {
        &self.z
    }

    pub fn pitch(&self) -> &str {
        &self.pitch
    }

    pub fn yaw(&self) -> &str {
        &self.yaw
    }
}

/// Pitch substituted by formats that do not store one.
pub const DEFAULT_PITCH: &str = "0";
