//! Standard MIDI File writer
//!
//! Encodes a [`Pattern`] as a format 0 file with one track, using `midly`
//! for the byte layout. Every field is range-checked before encoding so an
//! oversized value is an error rather than a silently masked byte.

use crate::types::{MessageKind, Pattern};
use midly::num::{u15, u24, u28, u4, u7};
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};
use std::fmt;
use std::io;
use std::path::Path;

/// Failure to turn a pattern into file bytes
#[derive(Debug)]
pub enum WriteError {
    /// A value does not fit its MIDI field
    OutOfRange { field: &'static str, value: u32 },
    Io(io::Error),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::OutOfRange { field, value } => {
                write!(f, "{} {} does not fit in a MIDI file", field, value)
            }
            WriteError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Io(e) => Some(e),
            WriteError::OutOfRange { .. } => None,
        }
    }
}

impl From<io::Error> for WriteError {
    fn from(e: io::Error) -> Self {
        WriteError::Io(e)
    }
}

fn channel(value: u8) -> Result<u4, WriteError> {
    u4::try_from(value).ok_or(WriteError::OutOfRange {
        field: "channel",
        value: value.into(),
    })
}

fn data(field: &'static str, value: u8) -> Result<u7, WriteError> {
    u7::try_from(value).ok_or(WriteError::OutOfRange {
        field,
        value: value.into(),
    })
}

fn track_event(delta: u32, kind: &MessageKind) -> Result<TrackEvent<'static>, WriteError> {
    let delta = u28::try_from(delta).ok_or(WriteError::OutOfRange {
        field: "delta time",
        value: delta,
    })?;

    let kind = match *kind {
        MessageKind::NoteOn {
            channel: ch,
            key,
            velocity,
        } => TrackEventKind::Midi {
            channel: channel(ch)?,
            message: MidiMessage::NoteOn {
                key: data("key", key)?,
                vel: data("velocity", velocity)?,
            },
        },
        MessageKind::NoteOff { channel: ch, key } => TrackEventKind::Midi {
            channel: channel(ch)?,
            message: MidiMessage::NoteOff {
                key: data("key", key)?,
                vel: u7::from(0),
            },
        },
        MessageKind::ProgramChange {
            channel: ch,
            program,
        } => TrackEventKind::Midi {
            channel: channel(ch)?,
            message: MidiMessage::ProgramChange {
                program: data("program", program)?,
            },
        },
        MessageKind::Tempo { micros_per_beat } => {
            let tempo = u24::try_from(micros_per_beat).ok_or(WriteError::OutOfRange {
                field: "tempo",
                value: micros_per_beat,
            })?;
            TrackEventKind::Meta(MetaMessage::Tempo(tempo))
        }
        MessageKind::EndOfTrack => TrackEventKind::Meta(MetaMessage::EndOfTrack),
    };

    Ok(TrackEvent { delta, kind })
}

/// Build the in-memory SMF for a pattern
pub fn to_smf(pattern: &Pattern) -> Result<Smf<'static>, WriteError> {
    let resolution = u15::try_from(pattern.ticks_per_beat()).ok_or(WriteError::OutOfRange {
        field: "ticks per beat",
        value: pattern.ticks_per_beat().into(),
    })?;

    let track = pattern
        .messages()
        .iter()
        .map(|m| track_event(m.delta, &m.kind))
        .collect::<Result<Vec<_>, _>>()?;

    let mut smf = Smf::new(Header::new(Format::SingleTrack, Timing::Metrical(resolution)));
    smf.tracks.push(track);
    Ok(smf)
}

/// Encode a pattern to SMF bytes
pub fn encode(pattern: &Pattern) -> Result<Vec<u8>, WriteError> {
    let smf = to_smf(pattern)?;
    let mut bytes = Vec::new();
    smf.write_std(&mut bytes)?;
    Ok(bytes)
}

/// Encode a pattern fully in memory, then write it to `path` in one go
pub fn save(pattern: &Pattern, path: impl AsRef<Path>) -> Result<(), WriteError> {
    let bytes = encode(pattern)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
