//! Percentage math and labels

use std::fmt;

/// Round a percentage to two decimals, halves away from zero.
///
/// Non-finite input stays non-finite.
pub fn format_percentage(percentage: f64) -> f64 {
    ((percentage + f64::EPSILON) * 100.0).round() / 100.0
}

/// `100 * numerator / denominator`, rounded. A zero denominator gives NaN or
/// infinity.
pub fn percentage(numerator: u64, denominator: u64) -> f64 {
    format_percentage(100.0 * (numerator as f64 / denominator as f64))
}

/// Percentage label, `—` when there is no meaningful value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent(pub f64);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() {
            write!(f, "{}%", self.0)
        } else {
            write!(f, "—")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(33.33333), 33.33);
        assert_eq!(format_percentage(50.0), 50.0);
        assert_eq!(format_percentage(0.0), 0.0);
        assert_eq!(format_percentage(66.666666), 66.67);
    }

    #[test]
    fn test_halves_round_away_from_zero() {
        assert_eq!(format_percentage(10.125), 10.13);
        assert_eq!(format_percentage(0.125), 0.13);
        assert_eq!(format_percentage(0.375), 0.38);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(18, 20), 90.0);
        assert_eq!(percentage(0, 20), 0.0);
    }

    #[test]
    fn test_zero_denominator() {
        assert!(percentage(0, 0).is_nan());
        assert_eq!(percentage(5, 0), f64::INFINITY);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Percent(50.0).to_string(), "50%");
        assert_eq!(Percent(33.33).to_string(), "33.33%");
        assert_eq!(Percent(f64::NAN).to_string(), "—");
        assert_eq!(Percent(f64::INFINITY).to_string(), "—");
    }
}
