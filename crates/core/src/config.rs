//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the transports.
//! Nothing in the engine reads process-wide environment variables while handling a request.

use crate::constants::DEFAULT_TREND_THRESHOLD;
use crate::trend::validate_trend_threshold;
use crate::{AcuityError, AcuityResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct CoreConfig {
    trend_threshold: f64,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `AcuityError::InvalidThreshold` if `trend_threshold` is negative, NaN or infinite.
    pub fn new(trend_threshold: f64) -> AcuityResult<Self> {
        let trend_threshold = validate_trend_threshold(trend_threshold)?;
        Ok(Self { trend_threshold })
    }

    /// Threshold used when a trend request does not carry its own.
    pub fn trend_threshold(&self) -> f64 {
        self.trend_threshold
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            trend_threshold: DEFAULT_TREND_THRESHOLD,
        }
    }
}

/// Parse the default trend threshold from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_TREND_THRESHOLD`].
///
/// # Errors
///
/// Returns `AcuityError::InvalidInput` if the value is not a number, or
/// `AcuityError::InvalidThreshold` if it parses but is not usable as a threshold.
pub fn trend_threshold_from_env_value(value: Option<String>) -> AcuityResult<f64> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(raw) = value else {
        return Ok(DEFAULT_TREND_THRESHOLD);
    };

    let parsed = raw
        .parse::<f64>()
        .map_err(|e| AcuityError::InvalidInput(format!("trend threshold {raw:?}: {e}")))?;

    validate_trend_threshold(parsed)
}

/// Split a comma-separated origin list, dropping blanks.
///
/// An empty result means "no restriction configured".
pub fn cors_origins_from_env_value(value: Option<String>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_blank_threshold_falls_back_to_default() {
        assert_eq!(trend_threshold_from_env_value(None).unwrap(), 0.5);
        assert_eq!(
            trend_threshold_from_env_value(Some("   ".into())).unwrap(),
            0.5
        );
    }

    #[test]
    fn threshold_is_parsed_and_trimmed() {
        assert_eq!(
            trend_threshold_from_env_value(Some(" 1.25 ".into())).unwrap(),
            1.25
        );
    }

    #[test]
    fn non_numeric_threshold_is_rejected() {
        let err = trend_threshold_from_env_value(Some("half".into())).expect_err("should fail");
        assert!(matches!(err, AcuityError::InvalidInput(msg) if msg.contains("half")));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let err = trend_threshold_from_env_value(Some("-1".into())).expect_err("should fail");
        assert!(matches!(err, AcuityError::InvalidThreshold(v) if v == -1.0));
        assert!(CoreConfig::new(f64::NAN).is_err());
    }

    #[test]
    fn default_config_uses_default_threshold() {
        assert_eq!(CoreConfig::default().trend_threshold(), DEFAULT_TREND_THRESHOLD);
        assert_eq!(CoreConfig::new(2.0).unwrap().trend_threshold(), 2.0);
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let origins = cors_origins_from_env_value(Some(
            "http://localhost:5173, http://localhost:5174,,".into(),
        ));
        assert_eq!(origins, vec!["http://localhost:5173", "http://localhost:5174"]);
        assert!(cors_origins_from_env_value(None).is_empty());
    }
}
