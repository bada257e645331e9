//! Rational timing types for exact beat positions
//!
//! Tick counts in the output file are integers, but a step's place on the
//! beat grid is kept as an exact fraction so that grids whose step length
//! does not divide the tick resolution still report true musical positions.

use num_rational::Ratio;

/// Exact time point in beats from the start of the pattern
pub type Time = Ratio<i64>;

/// Helper to create Time from a ratio n/d
#[inline]
pub fn time(n: i64, d: i64) -> Time {
    Ratio::new(n, d)
}

/// Create Time from an integer (whole beats)
#[inline]
pub fn beats(n: i64) -> Time {
    Ratio::from_integer(n)
}

/// Convert an absolute tick count into beats at the given resolution
#[inline]
pub fn ticks_to_beats(ticks: u64, ticks_per_beat: u16) -> Time {
    Ratio::new(ticks as i64, i64::from(ticks_per_beat))
}

/// Format a beat position as a mixed number, e.g. `5 1/4`
pub fn format_beats(t: Time) -> String {
    let whole = t.trunc();
    let frac = t.fract();
    if frac == beats(0) {
        format!("{}", whole.numer())
    } else if whole == beats(0) {
        format!("{}/{}", frac.numer(), frac.denom())
    } else {
        format!("{} {}/{}", whole.numer(), frac.numer(), frac.denom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_creation() {
        let t = time(1, 4);
        assert_eq!(*t.numer(), 1);
        assert_eq!(*t.denom(), 4);
    }

    #[test]
    fn test_ticks_to_beats() {
        assert_eq!(ticks_to_beats(480, 480), beats(1));
        assert_eq!(ticks_to_beats(120, 480), time(1, 4));
        assert_eq!(ticks_to_beats(0, 480), beats(0));
    }

    #[test]
    fn test_format_beats() {
        assert_eq!(format_beats(beats(3)), "3");
        assert_eq!(format_beats(time(1, 4)), "1/4");
        assert_eq!(format_beats(time(21, 4)), "5 1/4");
    }
}
