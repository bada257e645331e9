//! A generated pattern: one track of timed messages plus its timing header.

use super::message::{MessageKind, TimedMessage};
use super::time::{ticks_to_beats, Time};

/// A single sounding note recovered from the message stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteSpan {
    pub channel: u8,
    pub key: u8,
    pub velocity: u8,
    /// Absolute start in ticks
    pub start_tick: u64,
    /// Length in ticks
    pub duration_ticks: u64,
    /// Absolute start in beats
    pub start_beat: Time,
}

/// One finished track, ready for the writer
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    ticks_per_beat: u16,
    tempo_bpm: f64,
    messages: Vec<TimedMessage>,
}

impl Pattern {
    pub(crate) fn new(ticks_per_beat: u16, tempo_bpm: f64, messages: Vec<TimedMessage>) -> Self {
        Self {
            ticks_per_beat,
            tempo_bpm,
            messages,
        }
    }

    pub fn ticks_per_beat(&self) -> u16 {
        self.ticks_per_beat
    }

    pub fn tempo_bpm(&self) -> f64 {
        self.tempo_bpm
    }

    /// Messages in track order
    pub fn messages(&self) -> &[TimedMessage] {
        &self.messages
    }

    /// Number of note-on messages
    pub fn note_count(&self) -> usize {
        self.messages.iter().filter(|m| m.kind.is_note_on()).count()
    }

    /// Sum of every delta, end-of-track included
    pub fn total_ticks(&self) -> u64 {
        self.messages.iter().map(|m| u64::from(m.delta)).sum()
    }

    /// Pair every note-on with the first later note-off that closes it.
    ///
    /// A note-on with no closing note-off is left out.
    pub fn note_spans(&self) -> Vec<NoteSpan> {
        let mut spans = Vec::with_capacity(self.note_count());
        let mut now = 0u64;

        for (i, msg) in self.messages.iter().enumerate() {
            now += u64::from(msg.delta);
            let MessageKind::NoteOn {
                channel,
                key,
                velocity,
            } = msg.kind
            else {
                continue;
            };

            let mut elapsed = 0u64;
            for later in &self.messages[i + 1..] {
                elapsed += u64::from(later.delta);
                if later.kind.closes(&msg.kind) {
                    spans.push(NoteSpan {
                        channel,
                        key,
                        velocity,
                        start_tick: now,
                        duration_ticks: elapsed,
                        start_beat: ticks_to_beats(now, self.ticks_per_beat),
                    });
                    break;
                }
            }
        }

        spans
    }
}
