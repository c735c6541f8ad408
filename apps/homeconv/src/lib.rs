//! # Homeconv Library
//!
//! This library exposes the homeconv CLI commands for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export homeconv_core for convenience
pub use homeconv_core;
