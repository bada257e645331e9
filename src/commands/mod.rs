//! Command handlers for the groovegen CLI
//!
//! Each handler runs one generation end to end and returns the message to
//! print on success.

pub mod generate;

use crate::cli::Commands;
use anyhow::Result;

/// Dispatch a parsed subcommand
pub fn run(command: &Commands) -> Result<String> {
    match command {
        Commands::Drums { grid, out } => generate::cmd_drums(grid, out),
        Commands::Melody { grid, density, out } => generate::cmd_melody(grid, *density, out),
    }
}
