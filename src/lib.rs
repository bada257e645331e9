//! # Groovegen
//!
//! Command-line front end for `groovegen-core`. It generates a random drum
//! groove or melody on a step grid and saves it as a Standard MIDI File.
//!
//! ## Modules
//!
//! - `cli`: clap definitions for the `drums` and `melody` subcommands.
//! - `commands`: handlers that run a generation, write the file and build
//!   the console summary.

pub mod cli;
pub mod commands;

pub use crate::cli::{Cli, Commands, GridArgs};
