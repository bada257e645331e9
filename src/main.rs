//! groovegen - random drum and melody MIDI generator

use anyhow::Result;
use clap::Parser;
use groovegen::{commands, Cli};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let message = commands::run(&cli.command)?;
    println!("{}", message);
    Ok(())
}
