// groovegen-core/src/types/mod.rs

pub mod config;
pub mod drum;
pub mod grid;
pub mod message;
pub mod pattern;
pub mod time;

pub use config::{ConfigError, GeneratorConfig};
pub use drum::DrumSound;
pub use grid::{StepGrid, StepInfo};
pub use message::{MessageKind, SoundEvent, TimedMessage, DRUM_CHANNEL, MELODY_CHANNEL};
pub use pattern::{NoteSpan, Pattern};
pub use time::Time;
