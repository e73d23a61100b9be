//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strata content loader CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Content root directory to scan
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: strata.yaml), relative to the root
    #[arg(short = 'C', long, default_value = "strata.yaml")]
    pub config: PathBuf,

    /// Fail when the config file is missing instead of falling back to defaults
    #[arg(short, long)]
    pub strict: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Discover items under the root and print a per-section summary
    Scan,

    /// Discover items and write the whole collection as JSON to stdout
    Dump,

    /// Print the merged configuration as YAML
    Config,
}
