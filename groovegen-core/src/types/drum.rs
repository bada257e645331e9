//! Drum sound types and General MIDI mappings
//!
//! The percussion generator draws from a fixed kit of four roles, each
//! mapped to its General MIDI percussion key on channel 10.

use std::fmt;

/// Percussion role with its General MIDI mapping
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrumSound {
    /// Bass drum / Kick (GM 36)
    Kick,
    /// Acoustic snare (GM 38)
    Snare,
    /// Closed hi-hat (GM 42)
    HiHat,
    /// Crash cymbal (GM 49)
    Crash,
}

impl DrumSound {
    /// Roles in the order they are evaluated at each step
    pub const ALL: [DrumSound; 4] = [
        DrumSound::Kick,
        DrumSound::Snare,
        DrumSound::HiHat,
        DrumSound::Crash,
    ];

    /// Get the General MIDI percussion note number
    pub fn midi_note(&self) -> u8 {
        match self {
            DrumSound::Kick => 36,  // Acoustic Bass Drum
            DrumSound::Snare => 38, // Acoustic Snare
            DrumSound::HiHat => 42, // Closed Hi-Hat
            DrumSound::Crash => 49, // Crash Cymbal 1
        }
    }

    /// Reverse lookup from a GM percussion key
    pub fn from_midi_note(note: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.midi_note() == note)
    }

    /// Get short display name for the drum
    pub fn short_name(&self) -> &'static str {
        match self {
            DrumSound::Kick => "kick",
            DrumSound::Snare => "snare",
            DrumSound::HiHat => "hh",
            DrumSound::Crash => "crash",
        }
    }
}

impl fmt::Display for DrumSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midi_notes() {
        assert_eq!(DrumSound::Kick.midi_note(), 36);
        assert_eq!(DrumSound::Snare.midi_note(), 38);
        assert_eq!(DrumSound::HiHat.midi_note(), 42);
        assert_eq!(DrumSound::Crash.midi_note(), 49);
    }

    #[test]
    fn test_from_midi_note() {
        assert_eq!(DrumSound::from_midi_note(36), Some(DrumSound::Kick));
        assert_eq!(DrumSound::from_midi_note(49), Some(DrumSound::Crash));
        assert_eq!(DrumSound::from_midi_note(60), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DrumSound::Kick), "kick");
        assert_eq!(format!("{}", DrumSound::HiHat), "hh");
    }
}
