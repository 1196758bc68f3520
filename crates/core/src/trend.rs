//! Comparison of two severity scores taken at different times.
//!
//! Stateless: the caller keeps the previous score and hands it back in.

use crate::constants::DEFAULT_TREND_THRESHOLD;
use crate::{AcuityError, AcuityResult};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Worsening,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Stable => "stable",
            Trend::Worsening => "worsening",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trend using [`DEFAULT_TREND_THRESHOLD`].
pub fn severity_trend(previous: f64, current: f64) -> Trend {
    severity_trend_with_threshold(previous, current, DEFAULT_TREND_THRESHOLD)
}

/// A rise of more than `threshold` is worsening, a fall of more than `threshold` is improving,
/// anything in between is stable. Higher scores are worse.
pub fn severity_trend_with_threshold(previous: f64, current: f64, threshold: f64) -> Trend {
    let diff = current - previous;
    if diff > threshold {
        Trend::Worsening
    } else if diff < -threshold {
        Trend::Improving
    } else {
        Trend::Stable
    }
}

/// Check a caller-supplied threshold before it reaches [`severity_trend_with_threshold`].
pub fn validate_trend_threshold(threshold: f64) -> AcuityResult<f64> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(threshold)
    } else {
        Err(AcuityError::InvalidThreshold(threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falling_score_is_improving() {
        assert_eq!(severity_trend(8.0, 5.0), Trend::Improving);
    }

    #[test]
    fn small_change_is_stable() {
        assert_eq!(severity_trend(5.0, 5.3), Trend::Stable);
        assert_eq!(severity_trend(5.0, 5.5), Trend::Stable);
        assert_eq!(severity_trend(5.0, 4.5), Trend::Stable);
    }

    #[test]
    fn rising_score_is_worsening() {
        assert_eq!(severity_trend(5.0, 6.0), Trend::Worsening);
    }

    #[test]
    fn custom_threshold_widens_the_stable_band() {
        assert_eq!(severity_trend_with_threshold(3.0, 5.0, 2.0), Trend::Stable);
        assert_eq!(severity_trend_with_threshold(3.0, 5.5, 2.0), Trend::Worsening);
        assert_eq!(severity_trend_with_threshold(3.0, 3.1, 0.0), Trend::Worsening);
    }

    #[test]
    fn threshold_validation() {
        assert_eq!(validate_trend_threshold(0.0).unwrap(), 0.0);
        assert!(matches!(
            validate_trend_threshold(-0.1),
            Err(AcuityError::InvalidThreshold(_))
        ));
        assert!(validate_trend_threshold(f64::INFINITY).is_err());
        assert!(validate_trend_threshold(f64::NAN).is_err());
    }
}
