//! Command-line argument definitions for the shot map CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the match data inputs, the output path,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the shot map renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the StatsBomb events JSON file
    #[arg(help = "Path to the events file")]
    pub events: String,

    /// Path to the matching StatsBomb lineups JSON file, used for nicknames
    #[arg(short, long)]
    pub lineups: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "shotmap.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Draw markers only, without player labels
    #[arg(long)]
    pub no_labels: bool,

    /// Second events file for the same match; both sets are drawn on one
    /// pitch, the second mirrored onto the other end
    #[arg(long, value_name = "EVENTS")]
    pub compare: Option<String>,

    /// Lineups file for the second events file
    #[arg(long, value_name = "LINEUPS", requires = "compare")]
    pub compare_lineups: Option<String>,

    /// Provider name captioned on the second data set's half
    #[arg(long, value_name = "NAME", requires = "compare")]
    pub compare_provider: Option<String>,
}
