//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Docbuild - Build the documentation site from the site and source repos
#[derive(Parser, Debug)]
#[command(name = "docbuild")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone the repositories and build all docs
    BuildAll(commands::build_all::BuildAllArgs),

    /// Clone the repositories and build a subset of docs
    BuildJust(commands::build_just::BuildJustArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(&self.log_level),
        )
        .try_init()
        .ok();

        match self.command {
            Commands::BuildAll(args) => commands::build_all::execute(args),
            Commands::BuildJust(args) => commands::build_just::execute(args),
        }
    }
}
