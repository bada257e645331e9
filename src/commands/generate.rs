//! `drums` and `melody` commands

use crate::cli::GridArgs;
use anyhow::{Context, Result};
use colored::*;
use groovegen_core::generator::{generate_seeded, DrumRules, MelodyRules, StepRules};
use groovegen_core::smf;
use groovegen_core::types::time::format_beats;
use groovegen_core::types::{DrumSound, Pattern, DRUM_CHANNEL};
use std::path::{Path, PathBuf};
use tracing::info;

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Result of a successful run
#[derive(Debug)]
pub struct Generated {
    pub path: PathBuf,
    pub seed: u64,
    pub pattern: Pattern,
}

/// Handle `drums`
pub fn cmd_drums(grid: &GridArgs, out: &Path) -> Result<String> {
    let generated = generate_to_file(grid, &DrumRules::default(), out)?;
    Ok(format_summary(&generated, grid.verbose))
}

/// Handle `melody`
pub fn cmd_melody(grid: &GridArgs, density: f64, out: &Path) -> Result<String> {
    let rules = MelodyRules::default().with_note_probability(density);
    let generated = generate_to_file(grid, &rules, out)?;
    Ok(format_summary(&generated, grid.verbose))
}

/// Generate with `rules`, then write the file. Nothing touches the disk
/// unless generation and encoding both succeed.
pub fn generate_to_file(grid: &GridArgs, rules: &dyn StepRules, out: &Path) -> Result<Generated> {
    let seed = grid.seed.unwrap_or_else(rand::random::<u64>);
    info!(seed, rules = rules.label(), "generating pattern");

    let config = grid.to_config(seed);
    let pattern = generate_seeded(&config, rules)
        .context("Invalid pattern configuration")?;

    smf::save(&pattern, out)
        .with_context(|| format!("Failed to write MIDI file '{}'", out.display()))?;
    info!(path = %out.display(), notes = pattern.note_count(), "file written");

    Ok(Generated {
        path: out.to_path_buf(),
        seed,
        pattern,
    })
}

/// Scientific pitch name, e.g. 60 -> C4
pub fn note_name(key: u8) -> String {
    let octave = i16::from(key / 12) - 1;
    format!("{}{}", NOTE_NAMES[usize::from(key % 12)], octave)
}

fn sound_name(channel: u8, key: u8) -> String {
    if channel == DRUM_CHANNEL {
        if let Some(drum) = DrumSound::from_midi_note(key) {
            return drum.to_string();
        }
    }
    note_name(key)
}

/// Console message for a finished run
pub fn format_summary(generated: &Generated, verbose: bool) -> String {
    let mut output = format!(
        "✅ MIDI file generated: {}\n   {} notes, seed {}",
        generated.path.display().to_string().green().bold(),
        generated.pattern.note_count(),
        generated.seed.to_string().cyan()
    );

    if verbose {
        for span in generated.pattern.note_spans() {
            let position = format!("beat {:<6}", format_beats(span.start_beat));
            let sound = format!("{:<6}", sound_name(span.channel, span.key));
            output.push_str(&format!(
                "\n   {} {} vel {:>3}  {} ticks",
                position.dimmed(),
                sound.cyan(),
                span.velocity,
                span.duration_ticks
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(seed: u64) -> GridArgs {
        GridArgs {
            bars: 1,
            beats: 4,
            subdiv: 4,
            tempo: 120.0,
            ticks_per_beat: 480,
            seed: Some(seed),
            verbose: false,
        }
    }

    #[test]
    fn test_note_names() {
        assert_eq!(note_name(60), "C4");
        assert_eq!(note_name(69), "A4");
        assert_eq!(note_name(72), "C5");
        assert_eq!(note_name(0), "C-1");
    }

    #[test]
    fn test_drum_names_only_on_drum_channel() {
        assert_eq!(sound_name(DRUM_CHANNEL, 36), "kick");
        assert_eq!(sound_name(0, 36), "C2");
    }

    #[test]
    fn test_drums_written_with_seed() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("drums.mid");

        let generated = generate_to_file(&grid(42), &DrumRules::default(), &out).unwrap();
        assert_eq!(generated.seed, 42);
        assert_eq!(
            std::fs::read(&out).unwrap(),
            smf::encode(&generated.pattern).unwrap()
        );

        let expected = groovegen_core::generate(
            &grid(42).to_config(42),
            &DrumRules::default(),
            &mut groovegen_core::SeededRandom::new(42),
        )
        .unwrap();
        assert_eq!(generated.pattern, expected);

        let summary = cmd_drums(&grid(42), &out).unwrap();
        assert!(summary.contains("drums.mid"));
        assert!(summary.contains("42"));
    }

    #[test]
    fn test_invalid_grid_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("never.mid");
        let args = GridArgs {
            bars: 0,
            ..grid(1)
        };

        let err = cmd_melody(&args, 0.5, &out).unwrap_err();
        assert!(format!("{:#}", err).contains("bars must be at least 1"));
        assert!(!out.exists());
    }

    #[test]
    fn test_verbose_lists_every_note() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("melody.mid");
        let rules = MelodyRules::default().with_note_probability(1.0);
        let generated = generate_to_file(&grid(3), &rules, &out).unwrap();

        let summary = format_summary(&generated, true);
        // header line, stats line, one line per note
        assert_eq!(summary.lines().count(), 2 + 16);
    }
}
