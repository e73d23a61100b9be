//! Strata - content discovery and classification for static sites.

mod cli;
mod config;
mod content;
mod dump;
mod scan;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let root = cli.root.as_deref().unwrap_or(Path::new("./"));

    // Loaded up front for every command: strict mode must fail fast even
    // when the command itself never reads the configuration.
    let config = Config::load(&root.join(&cli.config), cli.strict)?;

    match cli.command {
        Commands::Scan => scan::scan_tree(root),
        Commands::Dump => dump::dump_tree(root),
        Commands::Config => {
            print!("{}", serde_yaml::to_string(&config)?);
            Ok(())
        }
    }
}
