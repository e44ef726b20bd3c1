//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Seed for the session's random source (reproducible runs)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stage reference photo files before searching
    #[arg(short, long, value_name = "FILE")]
    pub photo: Vec<PathBuf>,

    /// Write the final sighting map as SVG to this file
    #[arg(long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Print the final summary as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Geocode command arguments.
#[derive(Debug, Args)]
pub struct GeocodeCommand {
    /// The place name to look up
    pub place: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Reference dataset commands.
#[derive(Debug, Subcommand)]
pub enum DataCommand {
    /// List sample missing-person records
    Persons {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List sample transit stops and routes
    Transit {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_command_debug() {
        let cmd = SearchCommand {
            seed: Some(7),
            photo: vec![PathBuf::from("a.jpg")],
            map: None,
            json: false,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("seed"));
        assert!(debug_str.contains("a.jpg"));
    }

    #[test]
    fn test_geocode_command_debug() {
        let cmd = GeocodeCommand {
            place: "Paris".to_string(),
            json: true,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Paris"));
    }

    #[test]
    fn test_data_command_debug() {
        let cmd = DataCommand::Persons { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Persons"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
