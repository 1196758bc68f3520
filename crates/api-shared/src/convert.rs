//! Translation between `acuity-core` domain values and protobuf wire types.

use crate::pb;
use acuity_core::{
    NormalRange, SeverityResult, SubScore, Trend, ValidationResult, VitalKind, VitalReading,
    VitalSigns, VitalsReport, NORMAL_RANGES,
};

impl From<pb::VitalSignsReq> for VitalSigns {
    fn from(req: pb::VitalSignsReq) -> Self {
        Self {
            heart_rate: req.heart_rate,
            spo2: req.spo2,
            resp_rate: req.resp_rate,
            temperature: req.temperature,
            bp_systolic: req.bp_systolic,
            bp_diastolic: req.bp_diastolic,
        }
    }
}

impl From<&SubScore> for pb::SubScore {
    fn from(sub: &SubScore) -> Self {
        Self {
            vital: sub.vital.to_string(),
            score: sub.score.into(),
            max_score: sub.max_score.into(),
            factor: sub.factor.clone(),
        }
    }
}

impl From<&SeverityResult> for pb::SeverityRes {
    fn from(result: &SeverityResult) -> Self {
        Self {
            score: result.score.into(),
            condition: result.condition.to_string(),
            ward_recommendation: result.ward_recommendation.to_string(),
            risk_factors: result.risk_factors.clone(),
            summary: result.summary.to_string(),
            breakdown: result.breakdown.iter().map(pb::SubScore::from).collect(),
            percentage: result.percentage.into(),
            urgency: result.urgency.to_string(),
        }
    }
}

impl From<ValidationResult> for pb::ValidationRes {
    fn from(result: ValidationResult) -> Self {
        Self {
            valid: result.valid,
            errors: result.errors,
        }
    }
}

impl From<Trend> for pb::SeverityTrendRes {
    fn from(trend: Trend) -> Self {
        Self {
            trend: trend.to_string(),
            icon: trend.icon().to_string(),
            color: trend.color().to_string(),
        }
    }
}

impl From<&VitalReading> for pb::VitalReading {
    fn from(reading: &VitalReading) -> Self {
        Self {
            vital: reading.vital.key().to_string(),
            label: reading.label.to_string(),
            value: reading.value,
            unit: reading.unit.to_string(),
            normal_range: reading.normal_range.clone(),
            deviation: reading.deviation.to_string(),
        }
    }
}

impl From<&VitalsReport> for pb::VitalsReportRes {
    fn from(report: &VitalsReport) -> Self {
        Self {
            severity: Some(pb::SeverityRes::from(&report.severity)),
            validation: Some(pb::ValidationRes::from(report.validation.clone())),
            display: Some(pb::DisplayHints {
                condition_color: report.display.condition_color.to_string(),
                urgency_badge: report.display.urgency_badge.to_string(),
                score_color: report.display.score_color.to_string(),
            }),
            readings: report.readings.iter().map(pb::VitalReading::from).collect(),
        }
    }
}

fn normal_range_res(kind: VitalKind, range: &NormalRange) -> pb::NormalRangeRes {
    pb::NormalRangeRes {
        vital: kind.key().to_string(),
        min: range.min,
        max: range.max,
        unit: range.unit.to_string(),
        label: range.label.to_string(),
    }
}

/// The full reference table in wire form, canonical order.
pub fn normal_ranges_res() -> pb::NormalRangesRes {
    pb::NormalRangesRes {
        ranges: NORMAL_RANGES
            .iter()
            .map(|(kind, range)| normal_range_res(*kind, range))
            .collect(),
    }
}
