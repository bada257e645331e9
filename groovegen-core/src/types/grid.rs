//! The discrete time lattice a pattern is generated on.
//!
//! A grid is `bars × beats_per_bar × subdivisions_per_beat` equal steps.
//! Each step knows where it sits in its bar, which is all the trigger rules
//! need to apply meter-relative accents.

use super::config::{ConfigError, GeneratorConfig};
use super::time::{time, Time};

/// Metadata for a single step of the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepInfo {
    /// Flat step index from the start of the pattern
    pub index: u32,
    /// Zero-based bar number
    pub bar: u32,
    /// Step offset inside the current bar
    pub bar_position: u32,
    /// Zero-based beat within the bar
    pub beat_in_bar: u32,
    /// First subdivision of a beat
    pub is_beat_start: bool,
    /// First step of a bar
    pub is_bar_start: bool,
    /// Exact start position in beats
    pub start_beat: Time,
}

/// Step lattice derived from a validated [`GeneratorConfig`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepGrid {
    bars: u32,
    beats_per_bar: u32,
    subdivisions_per_beat: u32,
    ticks_per_beat: u16,
}

impl StepGrid {
    /// Build the grid, validating the config first
    pub fn new(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            bars: config.bars,
            beats_per_bar: config.beats_per_bar,
            subdivisions_per_beat: config.subdivisions_per_beat,
            ticks_per_beat: config.ticks_per_beat,
        })
    }

    /// Steps in one bar
    pub fn steps_per_bar(&self) -> u32 {
        self.beats_per_bar * self.subdivisions_per_beat
    }

    /// Steps in the whole pattern
    pub fn total_steps(&self) -> u32 {
        self.bars * self.steps_per_bar()
    }

    /// Duration of one step in ticks.
    ///
    /// Truncating division: when the subdivision does not divide the
    /// resolution, every step is short by the remainder / subdivisions.
    pub fn ticks_per_step(&self) -> u32 {
        u32::from(self.ticks_per_beat) / self.subdivisions_per_beat
    }

    /// True when steps tile each beat with no rounding loss
    pub fn is_exact(&self) -> bool {
        u32::from(self.ticks_per_beat) % self.subdivisions_per_beat == 0
    }

    pub fn ticks_per_beat(&self) -> u16 {
        self.ticks_per_beat
    }

    /// Metadata for step `index`
    pub fn step(&self, index: u32) -> StepInfo {
        let steps_per_bar = self.steps_per_bar();
        let bar_position = index % steps_per_bar;
        StepInfo {
            index,
            bar: index / steps_per_bar,
            bar_position,
            beat_in_bar: bar_position / self.subdivisions_per_beat,
            is_beat_start: bar_position % self.subdivisions_per_beat == 0,
            is_bar_start: bar_position == 0,
            start_beat: time(i64::from(index), i64::from(self.subdivisions_per_beat)),
        }
    }

    /// Iterate over every step in order
    pub fn steps(&self) -> impl Iterator<Item = StepInfo> + '_ {
        (0..self.total_steps()).map(move |i| self.step(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::time::beats;

    fn grid(bars: u32, beats_per_bar: u32, subdiv: u32, tpb: u16) -> StepGrid {
        let config = GeneratorConfig::default()
            .with_bars(bars)
            .with_beats_per_bar(beats_per_bar)
            .with_subdivisions(subdiv)
            .with_ticks_per_beat(tpb);
        StepGrid::new(&config).unwrap()
    }

    #[test]
    fn test_step_counts() {
        let g = grid(4, 4, 4, 480);
        assert_eq!(g.steps_per_bar(), 16);
        assert_eq!(g.total_steps(), 64);
        assert_eq!(g.ticks_per_step(), 120);
        assert!(g.is_exact());
        assert_eq!(g.steps().count(), 64);
    }

    #[test]
    fn test_step_metadata() {
        let g = grid(2, 4, 4, 480);

        let s0 = g.step(0);
        assert!(s0.is_bar_start && s0.is_beat_start);
        assert_eq!(s0.beat_in_bar, 0);

        let s5 = g.step(5);
        assert!(!s5.is_beat_start);
        assert_eq!(s5.beat_in_bar, 1);
        assert_eq!(s5.bar_position, 5);

        let s12 = g.step(12);
        assert!(s12.is_beat_start && !s12.is_bar_start);
        assert_eq!(s12.beat_in_bar, 3);

        let s16 = g.step(16);
        assert_eq!(s16.bar, 1);
        assert_eq!(s16.bar_position, 0);
        assert!(s16.is_bar_start);
        assert_eq!(s16.start_beat, beats(4));
    }

    #[test]
    fn test_odd_meter() {
        // 3/4 in triplets
        let g = grid(1, 3, 3, 480);
        let beat_starts: Vec<u32> = g
            .steps()
            .filter(|s| s.is_beat_start)
            .map(|s| s.index)
            .collect();
        assert_eq!(beat_starts, vec![0, 3, 6]);
        assert_eq!(g.step(8).beat_in_bar, 2);
        assert_eq!(g.step(4).start_beat, time(4, 3));
    }

    #[test]
    fn test_truncated_step_duration() {
        // 480 / 7 = 68.57..., truncated to 68
        let g = grid(1, 4, 7, 480);
        assert_eq!(g.ticks_per_step(), 68);
        assert!(!g.is_exact());
        // Positions on the beat grid stay exact
        assert_eq!(g.step(7).start_beat, beats(1));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneratorConfig::default().with_bars(0);
        assert!(StepGrid::new(&config).is_err());
    }
}
