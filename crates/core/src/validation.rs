//! Plausibility checks for raw vital-sign input.
//!
//! Advisory only. Validation never changes a score; callers decide whether an invalid set of
//! readings should block a submission.

use crate::vitals::{VitalKind, VitalSigns};
use serde::Serialize;

/// Reported when systolic pressure is below diastolic.
pub const BP_ORDER_ERROR: &str = "Systolic BP should be greater than or equal to diastolic BP";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check every supplied value against its instrument-plausibility bounds, then check that
/// systolic is not below diastolic.
///
/// Unlike scoring, this looks at raw values: a negative or zero reading is still checked.
/// NaN never satisfies a range and is reported.
pub fn validate_vital_signs(vitals: &VitalSigns) -> ValidationResult {
    let mut errors: Vec<String> = vitals
        .present()
        .filter(|&(kind, value)| {
            let (min, max) = kind.plausible_bounds();
            !(min..=max).contains(&value)
        })
        .map(|(kind, _)| kind.range_error().to_string())
        .collect();

    if let (Some(systolic), Some(diastolic)) = (
        vitals.raw(VitalKind::BpSystolic),
        vitals.raw(VitalKind::BpDiastolic),
    ) {
        if systolic < diastolic {
            errors.push(BP_ORDER_ERROR.to_string());
        }
    }

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "vital signs failed validation");
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_valid() {
        let result = validate_vital_signs(&VitalSigns::default());
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn implausible_heart_rate_is_reported() {
        let vitals = VitalSigns::default().with(VitalKind::HeartRate, 400.0);
        let result = validate_vital_signs(&vitals);
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Heart rate must be between 0 and 300 bpm"]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let vitals = VitalSigns {
            heart_rate: Some(300.0),
            spo2: Some(100.0),
            resp_rate: Some(0.0),
            temperature: Some(25.0),
            bp_systolic: Some(300.0),
            bp_diastolic: Some(200.0),
        };
        assert!(validate_vital_signs(&vitals).valid);
    }

    #[test]
    fn errors_follow_canonical_order() {
        let vitals = VitalSigns {
            bp_diastolic: Some(250.0),
            temperature: Some(20.0),
            spo2: Some(101.0),
            ..VitalSigns::default()
        };
        let result = validate_vital_signs(&vitals);
        assert_eq!(
            result.errors,
            vec![
                "SpO2 must be between 0 and 100%",
                "Temperature must be between 25 and 45 C",
                "Diastolic BP must be between 0 and 200 mmHg",
            ]
        );
    }

    #[test]
    fn negative_values_are_out_of_range() {
        let vitals = VitalSigns::default().with(VitalKind::RespRate, -1.0);
        let result = validate_vital_signs(&vitals);
        assert_eq!(
            result.errors,
            vec!["Respiratory rate must be between 0 and 60 breaths/min"]
        );
    }

    #[test]
    fn nan_is_reported() {
        let vitals = VitalSigns::default().with(VitalKind::Spo2, f64::NAN);
        assert!(!validate_vital_signs(&vitals).valid);
    }

    #[test]
    fn systolic_below_diastolic_is_a_cross_field_error() {
        let vitals = VitalSigns {
            bp_systolic: Some(80.0),
            bp_diastolic: Some(95.0),
            ..VitalSigns::default()
        };
        let result = validate_vital_signs(&vitals);
        assert!(!result.valid);
        assert_eq!(result.errors, vec![BP_ORDER_ERROR]);

        let equal = VitalSigns {
            bp_systolic: Some(90.0),
            bp_diastolic: Some(90.0),
            ..VitalSigns::default()
        };
        assert!(validate_vital_signs(&equal).valid);
    }
}
