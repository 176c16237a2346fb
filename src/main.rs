//! # Docbuild CLI
//!
//! This is the binary entry point for the `docbuild` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Translating top-level errors into diagnostic output and the process
//!   exit code — a failed external command exits with the child's own
//!   exit code.
//!
//! The core application logic is defined in the `lib.rs` library crate,
//! ensuring that the binary is a thin wrapper around the reusable library
//! functionality.

mod cli;
mod commands;

use clap::Parser;
use docbuild::error::Error;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = cli.execute() {
        eprintln!("{err:#}");
        let code = err
            .downcast_ref::<Error>()
            .map(Error::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
