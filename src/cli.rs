//! CLI definitions using clap

use clap::{Args, Parser, Subcommand};
use groovegen_core::types::GeneratorConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "groovegen")]
#[command(about = "Generate random drum grooves and melodies as MIDI files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a back-beat drum pattern on the GM percussion channel
    Drums {
        #[command(flatten)]
        grid: GridArgs,

        /// Output MIDI file
        #[arg(short, long, default_value = "drum_pattern.mid")]
        out: PathBuf,
    },

    /// Generate a single-voice piano melody in C major
    Melody {
        #[command(flatten)]
        grid: GridArgs,

        /// Chance that each step plays a note (0.0 - 1.0)
        #[arg(long, default_value_t = 0.5)]
        density: f64,

        /// Output MIDI file
        #[arg(short, long, default_value = "random_pattern.mid")]
        out: PathBuf,
    },
}

/// Grid, tempo and seed options shared by every generator
#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Number of bars
    #[arg(long, default_value_t = GeneratorConfig::DEFAULT_BARS)]
    pub bars: u32,

    /// Beats per bar
    #[arg(long, default_value_t = GeneratorConfig::DEFAULT_BEATS_PER_BAR)]
    pub beats: u32,

    /// Subdivisions per beat (4 = sixteenth notes)
    #[arg(long, default_value_t = GeneratorConfig::DEFAULT_SUBDIVISIONS)]
    pub subdiv: u32,

    /// Tempo in BPM
    #[arg(long, default_value_t = GeneratorConfig::DEFAULT_TEMPO_BPM)]
    pub tempo: f64,

    /// File resolution in ticks per quarter note
    #[arg(long, default_value_t = GeneratorConfig::DEFAULT_TICKS_PER_BEAT)]
    pub ticks_per_beat: u16,

    /// Random seed; a fresh one is picked and printed when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print every generated note
    #[arg(short, long)]
    pub verbose: bool,
}

impl GridArgs {
    /// Generator config for this run, with the seed resolved
    pub fn to_config(&self, seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            bars: self.bars,
            beats_per_bar: self.beats,
            subdivisions_per_beat: self.subdiv,
            tempo_bpm: self.tempo,
            ticks_per_beat: self.ticks_per_beat,
            seed: Some(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["groovegen", "drums"]).unwrap();
        let Commands::Drums { grid, out } = cli.command else {
            panic!("expected drums");
        };
        assert_eq!(out, PathBuf::from("drum_pattern.mid"));
        assert_eq!(grid.seed, None);

        let config = grid.to_config(9);
        assert_eq!(
            config,
            GeneratorConfig::default().with_seed(9),
            "CLI defaults should match the generator defaults"
        );
    }

    #[test]
    fn test_melody_flags() {
        let cli = Cli::try_parse_from([
            "groovegen",
            "melody",
            "--bars",
            "2",
            "--beats",
            "3",
            "--subdiv",
            "2",
            "--tempo",
            "90",
            "--seed",
            "17",
            "--density",
            "0.25",
            "-o",
            "tune.mid",
        ])
        .unwrap();
        let Commands::Melody { grid, density, out } = cli.command else {
            panic!("expected melody");
        };
        assert_eq!(out, PathBuf::from("tune.mid"));
        assert_eq!(density, 0.25);
        assert_eq!(grid.seed, Some(17));

        let config = grid.to_config(17);
        assert_eq!(config.bars, 2);
        assert_eq!(config.beats_per_bar, 3);
        assert_eq!(config.subdivisions_per_beat, 2);
        assert_eq!(config.tempo_bpm, 90.0);
    }

    #[test]
    fn test_melody_default_output() {
        let cli = Cli::try_parse_from(["groovegen", "melody"]).unwrap();
        let Commands::Melody { out, density, .. } = cli.command else {
            panic!("expected melody");
        };
        assert_eq!(out, PathBuf::from("random_pattern.mid"));
        assert_eq!(density, 0.5);
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(Cli::try_parse_from(["groovegen", "drums", "--bars", "four"]).is_err());
    }
}
