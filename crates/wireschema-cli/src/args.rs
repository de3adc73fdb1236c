//! Command-line argument definitions for the wireschema CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand selects the action; the global flags select
//! the configuration file, the round-trip check, and logging verbosity.

use clap::{Parser, Subcommand};

use wireschema::schema::RoundTripMode;

/// Command-line arguments for the wireschema tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Round-trip check after import (off, exact, normalized); overrides the configuration
    #[arg(long, global = true)]
    pub round_trip: Option<RoundTripMode>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import a layout file and report every issue
    Check {
        /// Path to the input wire-schema file
        input: String,
    },
    /// Import a layout file and write its canonical form
    Fmt {
        /// Path to the input wire-schema file
        input: String,

        /// Output file; standard output when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}
