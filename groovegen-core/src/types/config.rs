//! Generator configuration
//!
//! An explicit, immutable set of options handed to the generator. Nothing
//! here is global; two generations with equal configs and equal seeds
//! produce equal patterns.

use std::fmt;

/// Largest resolution an SMF header can declare (15 bits)
pub const MAX_TICKS_PER_BEAT: u16 = 0x7FFF;

/// Largest microseconds-per-beat value a tempo meta event can carry (24 bits)
pub const MAX_MICROS_PER_BEAT: u32 = 0xFF_FFFF;

/// Largest delta time a track event can carry (28 bits)
pub const MAX_DELTA_TICKS: u32 = 0x0FFF_FFFF;

/// Options shared by every generator variant
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    pub bars: u32,
    pub beats_per_bar: u32,
    pub subdivisions_per_beat: u32,
    pub tempo_bpm: f64,
    pub ticks_per_beat: u16,
    /// Seed for the random source; `None` lets the caller pick one
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub const DEFAULT_BARS: u32 = 4;
    pub const DEFAULT_BEATS_PER_BAR: u32 = 4;
    pub const DEFAULT_SUBDIVISIONS: u32 = 4;
    pub const DEFAULT_TEMPO_BPM: f64 = 120.0;
    pub const DEFAULT_TICKS_PER_BEAT: u16 = 480;

    pub fn with_bars(self, bars: u32) -> Self {
        Self { bars, ..self }
    }

    pub fn with_beats_per_bar(self, beats_per_bar: u32) -> Self {
        Self {
            beats_per_bar,
            ..self
        }
    }

    pub fn with_subdivisions(self, subdivisions_per_beat: u32) -> Self {
        Self {
            subdivisions_per_beat,
            ..self
        }
    }

    pub fn with_tempo(self, tempo_bpm: f64) -> Self {
        Self { tempo_bpm, ..self }
    }

    pub fn with_ticks_per_beat(self, ticks_per_beat: u16) -> Self {
        Self {
            ticks_per_beat,
            ..self
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Tempo as microseconds per quarter note, rounded to the nearest integer
    pub fn micros_per_beat(&self) -> u32 {
        (60_000_000.0 / self.tempo_bpm).round() as u32
    }

    /// Check every precondition of generation.
    ///
    /// Runs before any step is evaluated so that a bad config never
    /// produces a partial pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("bars", self.bars),
            ("beats_per_bar", self.beats_per_bar),
            ("subdivisions_per_beat", self.subdivisions_per_beat),
            ("ticks_per_beat", u32::from(self.ticks_per_beat)),
        ] {
            if value == 0 {
                return Err(ConfigError::NotPositive { field });
            }
        }

        if self.ticks_per_beat > MAX_TICKS_PER_BEAT {
            return Err(ConfigError::ResolutionTooHigh(self.ticks_per_beat));
        }

        if self.subdivisions_per_beat > u32::from(self.ticks_per_beat) {
            return Err(ConfigError::StepShorterThanTick {
                subdivisions_per_beat: self.subdivisions_per_beat,
                ticks_per_beat: self.ticks_per_beat,
            });
        }

        let steps = u64::from(self.bars)
            .checked_mul(u64::from(self.beats_per_bar))
            .and_then(|n| n.checked_mul(u64::from(self.subdivisions_per_beat)));
        let steps = match steps {
            Some(n) if n <= u64::from(u32::MAX) => n,
            _ => return Err(ConfigError::TooManySteps),
        };

        // An all-silent run puts every step plus the 1-tick trailer on the
        // end-of-track delta.
        let ticks_per_step = u64::from(u32::from(self.ticks_per_beat) / self.subdivisions_per_beat);
        let longest_delta = steps * ticks_per_step + 1;
        if longest_delta > u64::from(MAX_DELTA_TICKS) {
            return Err(ConfigError::TooLong {
                ticks: longest_delta,
            });
        }

        if !self.tempo_bpm.is_finite() || self.tempo_bpm <= 0.0 {
            return Err(ConfigError::InvalidTempo(self.tempo_bpm));
        }

        let micros = 60_000_000.0 / self.tempo_bpm;
        if micros.round() < 1.0 || micros.round() > f64::from(MAX_MICROS_PER_BEAT) {
            return Err(ConfigError::TempoOutOfRange(self.tempo_bpm));
        }

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            bars: Self::DEFAULT_BARS,
            beats_per_bar: Self::DEFAULT_BEATS_PER_BAR,
            subdivisions_per_beat: Self::DEFAULT_SUBDIVISIONS,
            tempo_bpm: Self::DEFAULT_TEMPO_BPM,
            ticks_per_beat: Self::DEFAULT_TICKS_PER_BEAT,
            seed: None,
        }
    }
}

/// A configuration that cannot produce a valid pattern
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A count that must be at least 1 was 0
    NotPositive { field: &'static str },
    /// Resolution does not fit the 15-bit SMF header field
    ResolutionTooHigh(u16),
    /// Truncating division would give zero ticks per step
    StepShorterThanTick {
        subdivisions_per_beat: u32,
        ticks_per_beat: u16,
    },
    /// bars × beats × subdivisions overflows the step counter
    TooManySteps,
    /// Silent run whose idle time would not fit a 28-bit delta
    TooLong { ticks: u64 },
    /// Seeded generation asked for with no seed in the config
    MissingSeed,
    /// BPM is zero, negative, NaN or infinite
    InvalidTempo(f64),
    /// BPM whose microseconds per beat do not fit 24 bits
    TempoOutOfRange(f64),
    /// A trigger probability outside [0, 1]
    InvalidProbability { name: &'static str, value: f64 },
    /// Melodic scale with no notes
    EmptyScale,
    /// Velocity range with min > max or max above 127
    InvalidVelocityRange { min: u8, max: u8 },
    /// A 7-bit MIDI data value (key, program) above 127
    DataOutOfRange { name: &'static str, value: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPositive { field } => write!(f, "{} must be at least 1", field),
            ConfigError::ResolutionTooHigh(tpb) => write!(
                f,
                "ticks per beat {} exceeds the MIDI limit of {}",
                tpb, MAX_TICKS_PER_BEAT
            ),
            ConfigError::StepShorterThanTick {
                subdivisions_per_beat,
                ticks_per_beat,
            } => write!(
                f,
                "{} subdivisions per beat is finer than the resolution of {} ticks per beat",
                subdivisions_per_beat, ticks_per_beat
            ),
            ConfigError::TooManySteps => write!(f, "bars x beats x subdivisions is too large"),
            ConfigError::TooLong { ticks } => write!(
                f,
                "pattern spans {} ticks, more than a MIDI delta time can hold ({})",
                ticks, MAX_DELTA_TICKS
            ),
            ConfigError::MissingSeed => write!(f, "no seed set in the generator config"),
            ConfigError::InvalidTempo(bpm) => {
                write!(f, "tempo must be a positive number of BPM, got {}", bpm)
            }
            ConfigError::TempoOutOfRange(bpm) => {
                write!(f, "tempo {} BPM cannot be encoded in a MIDI tempo event", bpm)
            }
            ConfigError::InvalidProbability { name, value } => write!(
                f,
                "{} probability must be between 0 and 1, got {}",
                name, value
            ),
            ConfigError::EmptyScale => write!(f, "melodic scale has no notes"),
            ConfigError::InvalidVelocityRange { min, max } => write!(
                f,
                "velocity range {}..={} is not within 1..=127 or is inverted",
                min, max
            ),
            ConfigError::DataOutOfRange { name, value } => {
                write!(f, "{} {} is above the MIDI maximum of 127", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
