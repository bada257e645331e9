//! The step-sequencer loop.
//!
//! [`generate`] walks every step of the grid, asks a [`StepRules`]
//! implementation which sounds fire, and turns the answers into a single
//! track of note-on/note-off pairs with relative deltas.

mod melodic;
mod percussion;
mod random;


use crate::types::{
    ConfigError, GeneratorConfig, MessageKind, Pattern, SoundEvent, StepGrid, StepInfo,
    TimedMessage,
};
use tracing::{debug, warn};

pub use melodic::{MelodyRules, ACOUSTIC_GRAND_PIANO, C_MAJOR};
pub use percussion::{DrumProbabilities, DrumRules};
pub use random::{RandomSource, SeededRandom};

/// Delta of the end-of-track marker past the last idle tick
pub const END_OF_TRACK_DELTA: u32 = 1;

/// Per-step trigger policy for one generator variant
pub trait StepRules {
    /// Short name used in logs
    fn label(&self) -> &'static str;

    /// Reject rule settings that cannot produce valid MIDI
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Messages placed right after the tempo event, all at delta 0
    fn preamble(&self) -> Vec<MessageKind> {
        Vec::new()
    }

    /// Push the sounds that fire on `step`, in emission order
    fn triggers(&self, step: &StepInfo, rng: &mut dyn RandomSource, out: &mut Vec<SoundEvent>);
}

/// Accumulates messages and the idle time since the last note-on
struct TrackBuilder {
    messages: Vec<TimedMessage>,
    time_acc: u32,
}

impl TrackBuilder {
    fn new(micros_per_beat: u32) -> Self {
        Self {
            messages: vec![TimedMessage::new(0, MessageKind::Tempo { micros_per_beat })],
            time_acc: 0,
        }
    }

    fn push_now(&mut self, kind: MessageKind) {
        self.messages.push(TimedMessage::new(0, kind));
    }

    /// A step with nothing fired: carry its length forward.
    /// `GeneratorConfig::validate` bounds the total to 28 bits.
    fn rest(&mut self, ticks: u32) {
        self.time_acc += ticks;
    }

    /// Emit a note-on/note-off pair. The note-on consumes the idle time,
    /// so only the first note of a step carries it.
    fn note(&mut self, event: &SoundEvent, ticks_per_step: u32) {
        let delta = std::mem::take(&mut self.time_acc);
        self.messages.push(TimedMessage::new(
            delta,
            MessageKind::NoteOn {
                channel: event.channel,
                key: event.key,
                velocity: event.velocity,
            },
        ));
        // Durations come from the rules; the writer rejects any past 28 bits.
        self.messages.push(TimedMessage::new(
            event.duration_steps.saturating_mul(ticks_per_step),
            MessageKind::NoteOff {
                channel: event.channel,
                key: event.key,
            },
        ));
    }

    fn finish(mut self) -> Vec<TimedMessage> {
        let delta = self.time_acc + END_OF_TRACK_DELTA;
        self.messages.push(TimedMessage::new(delta, MessageKind::EndOfTrack));
        self.messages
    }
}

/// Generate one pattern.
///
/// The config and the rules are validated before the first random draw.
pub fn generate<S: StepRules + ?Sized>(
    config: &GeneratorConfig,
    rules: &S,
    rng: &mut dyn RandomSource,
) -> Result<Pattern, ConfigError> {
    let grid = StepGrid::new(config)?;
    rules.validate()?;

    let ticks_per_step = grid.ticks_per_step();
    if !grid.is_exact() {
        warn!(
            ticks_per_beat = grid.ticks_per_beat(),
            subdivisions = config.subdivisions_per_beat,
            ticks_per_step,
            "subdivision does not divide the resolution; step length truncated"
        );
    }

    let mut track = TrackBuilder::new(config.micros_per_beat());
    for kind in rules.preamble() {
        track.push_now(kind);
    }

    let mut fired = Vec::with_capacity(4);
    for step in grid.steps() {
        fired.clear();
        rules.triggers(&step, rng, &mut fired);

        if fired.is_empty() {
            track.rest(ticks_per_step);
            continue;
        }
        for event in &fired {
            track.note(event, ticks_per_step);
        }
    }

    let pattern = Pattern::new(grid.ticks_per_beat(), config.tempo_bpm, track.finish());
    debug!(
        rules = rules.label(),
        steps = grid.total_steps(),
        ticks_per_step,
        notes = pattern.note_count(),
        "pattern generated"
    );
    Ok(pattern)
}

/// Generate one pattern from the seed stored in the config.
///
/// Same output as [`generate`] with `SeededRandom::new(seed)`.
pub fn generate_seeded<S: StepRules + ?Sized>(
    config: &GeneratorConfig,
    rules: &S,
) -> Result<Pattern, ConfigError> {
    let seed = config.seed.ok_or(ConfigError::MissingSeed)?;
    generate(config, rules, &mut SeededRandom::new(seed))
}
