//! Patient vitals report.
//!
//! Bundles everything a report screen shows for one set of vitals: the severity result, the
//! validation outcome, display hints and one row per supplied reading.

use crate::presentation::DisplayHints;
use crate::ranges::{normal_range_label, vital_deviation, Deviation};
use crate::scoring::{calculate_severity_score, SeverityResult};
use crate::validation::{validate_vital_signs, ValidationResult};
use crate::vitals::{VitalKind, VitalSigns};
use serde::Serialize;

/// One supplied reading alongside its reference range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalReading {
    pub vital: VitalKind,
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub normal_range: String,
    pub deviation: Deviation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsReport {
    pub severity: SeverityResult,
    pub validation: ValidationResult,
    pub display: DisplayHints,
    pub readings: Vec<VitalReading>,
}

pub fn vitals_report(vitals: &VitalSigns) -> VitalsReport {
    let severity = calculate_severity_score(vitals);
    let validation = validate_vital_signs(vitals);
    let display = severity.display_hints();

    let readings = vitals
        .present()
        .map(|(kind, value)| {
            let range = kind.normal_range();
            VitalReading {
                vital: kind,
                label: range.label,
                value,
                unit: range.unit,
                normal_range: normal_range_label(kind),
                deviation: vital_deviation(kind, value),
            }
        })
        .collect();

    VitalsReport {
        severity,
        validation,
        display,
        readings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::Condition;

    #[test]
    fn report_lists_only_supplied_readings() {
        let vitals = VitalSigns {
            spo2: Some(88.0),
            temperature: Some(37.0),
            ..VitalSigns::default()
        };
        let report = vitals_report(&vitals);

        assert_eq!(report.readings.len(), 2);
        assert_eq!(report.readings[0].vital, VitalKind::Spo2);
        assert_eq!(report.readings[0].deviation, Deviation::Low);
        assert_eq!(report.readings[0].normal_range, "95-100 %");
        assert_eq!(report.readings[1].label, "Temperature");
        assert_eq!(report.readings[1].deviation, Deviation::Normal);
    }

    #[test]
    fn report_carries_score_and_validation_independently() {
        let vitals = VitalSigns::default().with(VitalKind::HeartRate, 400.0);
        let report = vitals_report(&vitals);

        assert_eq!(report.severity.score, 3);
        assert_eq!(report.severity.condition, Condition::Stable);
        assert!(!report.validation.valid);
        assert_eq!(report.display.condition_color, "yellow");
        assert_eq!(report.readings[0].deviation, Deviation::High);
    }

    #[test]
    fn serialised_report_uses_wire_keys() {
        let vitals = VitalSigns::default().with(VitalKind::BpSystolic, 120.0);
        let json = serde_json::to_value(vitals_report(&vitals)).expect("serialise");
        assert_eq!(json["readings"][0]["vital"], "bpSystolic");
        assert_eq!(json["readings"][0]["normalRange"], "90-140 mmHg");
        assert_eq!(json["display"]["urgencyBadge"], "badge-recovering");
    }
}
