//! Clinical reference ranges.
//!
//! Informational only. The scorer uses its own band tables and never consults these.

use crate::vitals::VitalKind;
use serde::Serialize;
use std::fmt;

/// Normal range for one vital sign, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
    pub label: &'static str,
}

impl NormalRange {
    pub const fn new(min: f64, max: f64, unit: &'static str, label: &'static str) -> Self {
        Self {
            min,
            max,
            unit,
            label,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl fmt::Display for NormalRange {
    /// Renders as `60-100 bpm`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {}", self.min, self.max, self.unit)
    }
}

/// Every reference range, in canonical vital order.
pub const NORMAL_RANGES: [(VitalKind, NormalRange); 6] = [
    (VitalKind::HeartRate, VitalKind::HeartRate.normal_range()),
    (VitalKind::Spo2, VitalKind::Spo2.normal_range()),
    (VitalKind::RespRate, VitalKind::RespRate.normal_range()),
    (VitalKind::Temperature, VitalKind::Temperature.normal_range()),
    (VitalKind::BpSystolic, VitalKind::BpSystolic.normal_range()),
    (VitalKind::BpDiastolic, VitalKind::BpDiastolic.normal_range()),
];

/// Where a value sits relative to its normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Deviation {
    Low,
    Normal,
    High,
}

impl Deviation {
    pub fn as_str(self) -> &'static str {
        match self {
            Deviation::Low => "low",
            Deviation::Normal => "normal",
            Deviation::High => "high",
        }
    }
}

impl fmt::Display for Deviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable normal range, e.g. `"36.5-37.5 °C"`.
pub fn normal_range_label(kind: VitalKind) -> String {
    kind.normal_range().to_string()
}

pub fn is_vital_normal(kind: VitalKind, value: f64) -> bool {
    kind.normal_range().contains(value)
}

pub fn vital_deviation(kind: VitalKind, value: f64) -> Deviation {
    let range = kind.normal_range();
    if value < range.min {
        Deviation::Low
    } else if value > range.max {
        Deviation::High
    } else {
        Deviation::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_drop_trailing_zero_fractions() {
        assert_eq!(normal_range_label(VitalKind::HeartRate), "60-100 bpm");
        assert_eq!(normal_range_label(VitalKind::Temperature), "36.5-37.5 °C");
        assert_eq!(normal_range_label(VitalKind::RespRate), "12-20 breaths/min");
    }

    #[test]
    fn table_is_in_canonical_order() {
        let kinds: Vec<_> = NORMAL_RANGES.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, VitalKind::ALL.to_vec());
        assert_eq!(NORMAL_RANGES[4].1.label, "Systolic BP");
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(is_vital_normal(VitalKind::HeartRate, 60.0));
        assert!(is_vital_normal(VitalKind::HeartRate, 100.0));
        assert!(!is_vital_normal(VitalKind::HeartRate, 100.5));
    }

    #[test]
    fn deviation_reports_side_of_range() {
        assert_eq!(vital_deviation(VitalKind::Spo2, 91.0), Deviation::Low);
        assert_eq!(vital_deviation(VitalKind::Spo2, 97.0), Deviation::Normal);
        assert_eq!(vital_deviation(VitalKind::BpDiastolic, 95.0), Deviation::High);
    }
}
