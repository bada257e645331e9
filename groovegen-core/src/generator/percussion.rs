//! Back-beat drum rules: kick-heavy beats 1 and 3, snare on 2 and 4,
//! hi-hats on every subdivision and an occasional crash on the bar line.

use super::random::RandomSource;
use super::StepRules;
use crate::types::{ConfigError, DrumSound, SoundEvent, StepInfo, DRUM_CHANNEL};

const KICK_VELOCITY: u8 = 100;
const SNARE_VELOCITY: u8 = 100;
const CRASH_VELOCITY: u8 = 120;
const HIHAT_VELOCITY_MIN: u32 = 70;
const HIHAT_VELOCITY_MAX: u32 = 110;
const CRASH_STEPS: u32 = 2;

/// Fire probability of each role
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrumProbabilities {
    /// Kick on beats 1 and 3
    pub kick_strong: f64,
    /// Kick on every other beat
    pub kick_weak: f64,
    pub snare: f64,
    pub hihat: f64,
    pub crash: f64,
}

impl DrumProbabilities {
    /// Every role at the same probability
    pub fn uniform(p: f64) -> Self {
        Self {
            kick_strong: p,
            kick_weak: p,
            snare: p,
            hihat: p,
            crash: p,
        }
    }
}

impl Default for DrumProbabilities {
    fn default() -> Self {
        Self {
            kick_strong: 0.9,
            kick_weak: 0.3,
            snare: 0.8,
            hihat: 0.7,
            crash: 0.3,
        }
    }
}

/// Percussion variant of the generator, on the GM drum channel
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrumRules {
    pub probabilities: DrumProbabilities,
}

impl DrumRules {
    pub fn with_probabilities(probabilities: DrumProbabilities) -> Self {
        Self { probabilities }
    }

    fn hit(drum: DrumSound, velocity: u8, duration_steps: u32) -> SoundEvent {
        SoundEvent {
            key: drum.midi_note(),
            velocity,
            duration_steps,
            channel: DRUM_CHANNEL,
        }
    }
}

impl StepRules for DrumRules {
    fn label(&self) -> &'static str {
        "drums"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.probabilities;
        for (name, value) in [
            ("kick_strong", p.kick_strong),
            ("kick_weak", p.kick_weak),
            ("snare", p.snare),
            ("hihat", p.hihat),
            ("crash", p.crash),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }

    // Draw order matters for reproducibility: a role only draws once its
    // structural condition holds, and the hi-hat velocity is drawn after
    // its fire test.
    fn triggers(&self, step: &StepInfo, rng: &mut dyn RandomSource, out: &mut Vec<SoundEvent>) {
        let p = &self.probabilities;
        let strong_beat = matches!(step.beat_in_bar, 0 | 2);
        let back_beat = matches!(step.beat_in_bar, 1 | 3);

        if step.is_beat_start {
            let chance = if strong_beat { p.kick_strong } else { p.kick_weak };
            if rng.next_f64() < chance {
                out.push(Self::hit(DrumSound::Kick, KICK_VELOCITY, 1));
            }
        }

        if step.is_beat_start && back_beat && rng.next_f64() < p.snare {
            out.push(Self::hit(DrumSound::Snare, SNARE_VELOCITY, 1));
        }

        if rng.next_f64() < p.hihat {
            let velocity = rng.uniform_int(HIHAT_VELOCITY_MIN, HIHAT_VELOCITY_MAX) as u8;
            out.push(Self::hit(DrumSound::HiHat, velocity, 1));
        }

        if step.is_bar_start && rng.next_f64() < p.crash {
            out.push(Self::hit(DrumSound::Crash, CRASH_VELOCITY, CRASH_STEPS));
        }
    }
}
