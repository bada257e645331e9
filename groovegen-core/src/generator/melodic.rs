//! Single-voice melody rule: at most one note per step, drawn from a fixed scale.

use super::random::RandomSource;
use super::StepRules;
use crate::types::{ConfigError, MessageKind, SoundEvent, StepInfo, MELODY_CHANNEL};

/// C major, C4 to C5
pub const C_MAJOR: [u8; 8] = [60, 62, 64, 65, 67, 69, 71, 72];

/// General MIDI program 0
pub const ACOUSTIC_GRAND_PIANO: u8 = 0;

/// Melodic variant of the generator
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MelodyRules {
    pub scale: Vec<u8>,
    /// Chance that a step plays a note
    pub note_probability: f64,
    pub velocity_min: u8,
    pub velocity_max: u8,
    /// Instrument selected once at the start of the track
    pub program: u8,
}

impl MelodyRules {
    pub fn with_note_probability(self, note_probability: f64) -> Self {
        Self {
            note_probability,
            ..self
        }
    }
}

impl Default for MelodyRules {
    fn default() -> Self {
        Self {
            scale: C_MAJOR.to_vec(),
            note_probability: 0.5,
            velocity_min: 40,
            velocity_max: 100,
            program: ACOUSTIC_GRAND_PIANO,
        }
    }
}

impl StepRules for MelodyRules {
    fn label(&self) -> &'static str {
        "melody"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.note_probability) {
            return Err(ConfigError::InvalidProbability {
                name: "note",
                value: self.note_probability,
            });
        }
        if self.scale.is_empty() {
            return Err(ConfigError::EmptyScale);
        }
        if let Some(&key) = self.scale.iter().find(|&&k| k > 127) {
            return Err(ConfigError::DataOutOfRange {
                name: "scale key",
                value: key,
            });
        }
        // Velocity 0 would read as a note-off
        if self.velocity_min == 0
            || self.velocity_min > self.velocity_max
            || self.velocity_max > 127
        {
            return Err(ConfigError::InvalidVelocityRange {
                min: self.velocity_min,
                max: self.velocity_max,
            });
        }
        if self.program > 127 {
            return Err(ConfigError::DataOutOfRange {
                name: "program",
                value: self.program,
            });
        }
        Ok(())
    }

    fn preamble(&self) -> Vec<MessageKind> {
        vec![MessageKind::ProgramChange {
            channel: MELODY_CHANNEL,
            program: self.program,
        }]
    }

    fn triggers(&self, _step: &StepInfo, rng: &mut dyn RandomSource, out: &mut Vec<SoundEvent>) {
        if rng.next_f64() >= self.note_probability {
            return;
        }
        let index = rng.uniform_int(0, self.scale.len() as u32 - 1) as usize;
        let velocity = rng.uniform_int(
            u32::from(self.velocity_min),
            u32::from(self.velocity_max),
        ) as u8;
        out.push(SoundEvent {
            key: self.scale[index],
            velocity,
            duration_steps: 1,
            channel: MELODY_CHANNEL,
        });
    }
}
