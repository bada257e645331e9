//! Timed track messages and the sound events they are built from.

/// Percussion channel (channel 10 in 1-indexed MIDI terms)
pub const DRUM_CHANNEL: u8 = 9;

/// Channel used by the melodic generator
pub const MELODY_CHANNEL: u8 = 0;

/// A sound triggered at a step, before it is turned into messages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundEvent {
    /// MIDI key (0-127)
    pub key: u8,
    /// MIDI velocity (1-127)
    pub velocity: u8,
    /// Length in grid steps
    pub duration_steps: u32,
    /// MIDI channel (0-15)
    pub channel: u8,
}

/// What a track message does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8 },
    /// Tempo meta event, in microseconds per quarter note
    Tempo { micros_per_beat: u32 },
    ProgramChange { channel: u8, program: u8 },
    EndOfTrack,
}

impl MessageKind {
    pub fn is_note_on(&self) -> bool {
        matches!(self, MessageKind::NoteOn { .. })
    }

    /// True if `self` is the note-off that closes the note-on `on`
    pub fn closes(&self, on: &MessageKind) -> bool {
        match (on, self) {
            (
                MessageKind::NoteOn { channel, key, .. },
                MessageKind::NoteOff {
                    channel: off_channel,
                    key: off_key,
                },
            ) => channel == off_channel && key == off_key,
            _ => false,
        }
    }
}

/// A message with its delta time in ticks since the previous message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedMessage {
    pub delta: u32,
    pub kind: MessageKind,
}

impl TimedMessage {
    pub fn new(delta: u32, kind: MessageKind) -> Self {
        Self { delta, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_off_matching() {
        let on = MessageKind::NoteOn {
            channel: DRUM_CHANNEL,
            key: 36,
            velocity: 100,
        };
        assert!(MessageKind::NoteOff {
            channel: DRUM_CHANNEL,
            key: 36
        }
        .closes(&on));
        assert!(!MessageKind::NoteOff {
            channel: DRUM_CHANNEL,
            key: 38
        }
        .closes(&on));
        assert!(!MessageKind::NoteOff {
            channel: MELODY_CHANNEL,
            key: 36
        }
        .closes(&on));
        assert!(!MessageKind::EndOfTrack.closes(&on));
    }
}
