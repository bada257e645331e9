//! # Groovegen Core
//!
//! Step-sequencer pattern generation and Standard MIDI File encoding.
//! This crate does no I/O of its own apart from [`smf::save`]; the
//! `groovegen` binary wraps it with argument parsing and console output.
//!
//! ## Features
//!
//! - **serde**: derive `Serialize`/`Deserialize` on configuration and message types
//!
//! ## Example
//!
//! ```
//! use groovegen_core::generator::{generate_seeded, DrumRules};
//! use groovegen_core::types::GeneratorConfig;
//!
//! let config = GeneratorConfig::default().with_seed(7);
//! let pattern = generate_seeded(&config, &DrumRules::default()).unwrap();
//! let bytes = groovegen_core::smf::encode(&pattern).unwrap();
//! assert_eq!(&bytes[..4], b"MThd");
//! ```

pub mod generator;
pub mod smf;
pub mod types;

// Re-export commonly used types
pub use generator::{
    generate, generate_seeded, DrumRules, MelodyRules, RandomSource, SeededRandom,
    StepRules,
};
pub use types::{ConfigError, GeneratorConfig, MessageKind, Pattern, StepGrid, TimedMessage};
