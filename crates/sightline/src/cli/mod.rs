//! Command-line interface for sightline.
//!
//! This module provides the CLI structure for the `sightline` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, DataCommand, GeocodeCommand, SearchCommand};

/// sightline - Simulated worldwide person-search demo
///
/// Runs a demonstration search session in the terminal: a simulated progress
/// curve, coverage statistics, an activity log, and randomly discovered
/// sightings on a stylized world map. No real search is performed.
#[derive(Debug, Parser)]
#[command(name = "sightline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a simulated search session
    Search(SearchCommand),

    /// Look up a place name via the geocoding service
    Geocode(GeocodeCommand),

    /// Inspect the bundled reference datasets
    #[command(subcommand)]
    Data(DataCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
