//! # homeconv
//!
//! Convert player homes and warps between game-server plugin formats.
//!
//! ```text
//! homeconv convert myhomes ~/plugins/MyHomes/homes.db cmdbook ~/plugins/CommandBook/homes.csv
//! homeconv formats
//! homeconv inspect warpz0r warps.txt
//! ```

use clap::{Parser, Subcommand};
use homeconv::cli::{cmd_convert, cmd_formats, cmd_inspect};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "homeconv", version, about = "Convert homes and warps between plugin formats")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a source file into a destination file (appends)
    Convert {
        /// Source format
        from: String,
        /// Source file
        source: PathBuf,
        /// Destination format
        to: String,
        /// Destination file
        destination: PathBuf,
        /// Print a JSON summary instead of a message
        #[arg(long)]
        json: bool,
    },
    /// List supported formats
    Formats {
        #[arg(long)]
        json: bool,
    },
    /// Print the records of a source file as JSON
    Inspect {
        /// Source format
        format: String,
        /// Source file
        source: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Convert {
            from,
            source,
            to,
            destination,
            json,
        } => cmd_convert(&from, &source, &to, &destination, json).map(|_| ()),
        Command::Formats { json } => cmd_formats(json),
        Command::Inspect { format, source } => cmd_inspect(&format, &source).map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
