//! Severity scoring.
//!
//! Five independent calculators each turn one vital category into a sub-score between 0 and
//! [`MAX_SUB_SCORE`]. The aggregator sums them, caps the total at [`MAX_SEVERITY_SCORE`] and
//! collects the risk factors; the classifier then labels the result.
//!
//! Heart rate, SpO2, respiratory rate and temperature select exactly one tier from a ladder of
//! bands. Blood pressure is different: systolic and diastolic are evaluated separately, their
//! contributions are added, and only then capped at [`MAX_SUB_SCORE`].
//!
//! The band tables below drive ward placement and must not be "tidied". In particular the
//! respiratory ladder has no 2-point tier below the normal range and temperature keeps 39-40 C
//! at 2 points.

use crate::classification::{classify, Condition, Urgency, Ward};
use crate::constants::{MAX_SEVERITY_SCORE, MAX_SUB_SCORE};
use crate::vitals::{Reading, VitalKind, VitalSigns};
use serde::Serialize;

pub const HEART_RATE_LABEL: &str = "Heart Rate";
pub const SPO2_LABEL: &str = "SpO2";
pub const RESP_RATE_LABEL: &str = "Respiratory Rate";
pub const TEMPERATURE_LABEL: &str = "Temperature";
pub const BLOOD_PRESSURE_LABEL: &str = "Blood Pressure";

/// How a band edge compares against a reading.
#[derive(Debug, Clone, Copy)]
enum Edge {
    /// `value < edge`
    Below(f64),
    /// `value <= edge`
    AtMost(f64),
    /// `value > edge`
    Above(f64),
}

impl Edge {
    fn admits(self, value: f64) -> bool {
        match self {
            Edge::Below(edge) => value < edge,
            Edge::AtMost(edge) => value <= edge,
            Edge::Above(edge) => value > edge,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Tier {
    score: u8,
    factor: Option<&'static str>,
}

impl Tier {
    const NORMAL: Tier = Tier {
        score: 0,
        factor: None,
    };

    const fn risk(score: u8, factor: &'static str) -> Self {
        Self {
            score,
            factor: Some(factor),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Band {
    edge: Edge,
    tier: Tier,
}

const fn band(edge: Edge, tier: Tier) -> Band {
    Band { edge, tier }
}

/// Bands checked in order; the first one that admits the value wins.
#[derive(Debug)]
struct Ladder {
    bands: &'static [Band],
    otherwise: Tier,
}

impl Ladder {
    fn tier(&self, value: f64) -> Tier {
        self.bands
            .iter()
            .find(|b| b.edge.admits(value))
            .map_or(self.otherwise, |b| b.tier)
    }
}

const HEART_RATE: Ladder = Ladder {
    bands: &[
        band(Edge::Below(40.0), Tier::risk(3, "Severe bradycardia (HR < 40)")),
        band(Edge::Below(50.0), Tier::risk(2, "Bradycardia (HR 40-50)")),
        band(Edge::Below(60.0), Tier::risk(1, "Mild bradycardia (HR 50-60)")),
        band(Edge::AtMost(100.0), Tier::NORMAL),
        band(Edge::AtMost(110.0), Tier::risk(1, "Mild tachycardia (HR 100-110)")),
        band(Edge::AtMost(130.0), Tier::risk(2, "Tachycardia (HR 110-130)")),
    ],
    otherwise: Tier::risk(3, "Severe tachycardia (HR > 130)"),
};

// Only desaturation is penalised.
const SPO2: Ladder = Ladder {
    bands: &[
        band(Edge::Below(85.0), Tier::risk(3, "Critical hypoxemia (SpO2 < 85%)")),
        band(Edge::Below(90.0), Tier::risk(2, "Severe hypoxemia (SpO2 85-90%)")),
        band(Edge::Below(94.0), Tier::risk(1, "Mild hypoxemia (SpO2 90-94%)")),
    ],
    otherwise: Tier::NORMAL,
};

const RESP_RATE: Ladder = Ladder {
    bands: &[
        band(Edge::Below(8.0), Tier::risk(3, "Severe bradypnea (RR < 8)")),
        band(Edge::Below(12.0), Tier::risk(1, "Bradypnea (RR 8-12)")),
        band(Edge::AtMost(20.0), Tier::NORMAL),
        band(Edge::AtMost(24.0), Tier::risk(1, "Mild tachypnea (RR 20-24)")),
        band(Edge::AtMost(30.0), Tier::risk(2, "Tachypnea (RR 24-30)")),
    ],
    otherwise: Tier::risk(3, "Severe tachypnea (RR > 30)"),
};

const TEMPERATURE: Ladder = Ladder {
    bands: &[
        band(Edge::Below(35.0), Tier::risk(3, "Severe hypothermia (T < 35 C)")),
        band(Edge::Below(36.0), Tier::risk(2, "Hypothermia (T 35-36 C)")),
        band(Edge::Below(36.5), Tier::risk(1, "Mild hypothermia (T 36-36.5 C)")),
        band(Edge::AtMost(37.5), Tier::NORMAL),
        band(Edge::AtMost(38.0), Tier::risk(1, "Low-grade fever (T 37.5-38 C)")),
        band(Edge::AtMost(39.0), Tier::risk(2, "Fever (T 38-39 C)")),
        band(Edge::AtMost(40.0), Tier::risk(2, "High fever (T 39-40 C)")),
    ],
    otherwise: Tier::risk(3, "Critical hyperthermia (T > 40 C)"),
};

// 100-140 inclusive is normal.
const SYSTOLIC: Ladder = Ladder {
    bands: &[
        band(Edge::Below(70.0), Tier::risk(3, "Critical hypotension (SBP < 70)")),
        band(Edge::Below(90.0), Tier::risk(2, "Hypotension (SBP 70-90)")),
        band(Edge::Below(100.0), Tier::risk(1, "Mild hypotension (SBP 90-100)")),
        band(Edge::Above(180.0), Tier::risk(3, "Hypertensive crisis (SBP > 180)")),
        band(Edge::Above(160.0), Tier::risk(2, "Severe hypertension (SBP 160-180)")),
        band(Edge::Above(140.0), Tier::risk(1, "Hypertension (SBP 140-160)")),
    ],
    otherwise: Tier::NORMAL,
};

const DIASTOLIC: Ladder = Ladder {
    bands: &[
        band(Edge::Below(40.0), Tier::risk(2, "Critical low DBP (< 40)")),
        band(Edge::Below(60.0), Tier::risk(1, "Low DBP (40-60)")),
        band(Edge::Above(110.0), Tier::risk(2, "Critical high DBP (> 110)")),
        band(Edge::Above(90.0), Tier::risk(1, "High DBP (90-110)")),
    ],
    otherwise: Tier::NORMAL,
};

/// Contribution of one vital category to the total score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScore {
    pub vital: &'static str,
    pub score: u8,
    pub max_score: u8,
    /// Why the score is above zero. `None` whenever `score == 0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<String>,
}

impl SubScore {
    fn unscored(vital: &'static str) -> Self {
        Self {
            vital,
            score: 0,
            max_score: MAX_SUB_SCORE,
            factor: None,
        }
    }

    fn from_tier(vital: &'static str, tier: Tier) -> Self {
        Self {
            vital,
            score: tier.score,
            max_score: MAX_SUB_SCORE,
            factor: tier.factor.map(str::to_string),
        }
    }
}

fn ladder_score(vital: &'static str, ladder: &Ladder, reading: Option<Reading>) -> SubScore {
    match reading {
        Some(reading) => SubScore::from_tier(vital, ladder.tier(reading.value())),
        None => SubScore::unscored(vital),
    }
}

pub fn heart_rate_score(reading: Option<Reading>) -> SubScore {
    ladder_score(HEART_RATE_LABEL, &HEART_RATE, reading)
}

pub fn spo2_score(reading: Option<Reading>) -> SubScore {
    ladder_score(SPO2_LABEL, &SPO2, reading)
}

pub fn resp_rate_score(reading: Option<Reading>) -> SubScore {
    ladder_score(RESP_RATE_LABEL, &RESP_RATE, reading)
}

pub fn temperature_score(reading: Option<Reading>) -> SubScore {
    ladder_score(TEMPERATURE_LABEL, &TEMPERATURE, reading)
}

/// Blood pressure sub-score.
///
/// Systolic and diastolic contributions are summed and the sum is capped at
/// [`MAX_SUB_SCORE`]. Without a systolic reading the category scores zero, whatever the
/// diastolic value.
pub fn blood_pressure_score(systolic: Option<Reading>, diastolic: Option<Reading>) -> SubScore {
    let Some(systolic) = systolic else {
        return SubScore::unscored(BLOOD_PRESSURE_LABEL);
    };

    let tiers = std::iter::once(SYSTOLIC.tier(systolic.value()))
        .chain(diastolic.map(|d| DIASTOLIC.tier(d.value())));

    let mut total = 0u8;
    let mut factors = Vec::new();
    for tier in tiers {
        total += tier.score;
        factors.extend(tier.factor);
    }

    SubScore {
        vital: BLOOD_PRESSURE_LABEL,
        score: total.min(MAX_SUB_SCORE),
        max_score: MAX_SUB_SCORE,
        factor: (!factors.is_empty()).then(|| factors.join(", ")),
    }
}

/// Run the five calculators. Order is fixed: HR, SpO2, RR, temperature, BP.
pub fn breakdown(vitals: &VitalSigns) -> [SubScore; 5] {
    [
        heart_rate_score(vitals.reading(VitalKind::HeartRate)),
        spo2_score(vitals.reading(VitalKind::Spo2)),
        resp_rate_score(vitals.reading(VitalKind::RespRate)),
        temperature_score(vitals.reading(VitalKind::Temperature)),
        blood_pressure_score(
            vitals.reading(VitalKind::BpSystolic),
            vitals.reading(VitalKind::BpDiastolic),
        ),
    ]
}

/// Summed sub-scores before and after capping, plus the collected risk factors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub raw_total: u32,
    pub score: u8,
    pub risk_factors: Vec<String>,
}

/// Sum any number of sub-scores. The total is accumulated wide and only the capped score is
/// narrowed back to `u8`.
pub fn aggregate(breakdown: &[SubScore]) -> Aggregate {
    let raw_total: u32 = breakdown.iter().map(|s| u32::from(s.score)).sum();
    let risk_factors = breakdown
        .iter()
        .filter_map(|s| s.factor.clone())
        .collect();

    Aggregate {
        raw_total,
        score: raw_total.min(u32::from(MAX_SEVERITY_SCORE)) as u8,
        risk_factors,
    }
}

/// Outcome of scoring one set of vitals.
///
/// Classification fields depend on `score` alone, and `percentage` is always `score * 10`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityResult {
    pub score: u8,
    pub condition: Condition,
    pub ward_recommendation: Ward,
    pub risk_factors: Vec<String>,
    pub summary: &'static str,
    pub breakdown: [SubScore; 5],
    pub percentage: u8,
    pub urgency: Urgency,
}

/// Score a set of vitals.
///
/// Never fails: missing, zero, negative or non-finite readings contribute nothing.
pub fn calculate_severity_score(vitals: &VitalSigns) -> SeverityResult {
    let breakdown = breakdown(vitals);
    for sub in &breakdown {
        tracing::trace!(vital = sub.vital, score = sub.score, "sub-score");
    }

    let Aggregate {
        raw_total,
        score,
        risk_factors,
    } = aggregate(&breakdown);
    let classification = classify(score);

    tracing::debug!(
        raw_total,
        score,
        condition = %classification.condition,
        "severity calculated"
    );

    SeverityResult {
        score,
        condition: classification.condition,
        ward_recommendation: classification.ward_recommendation,
        risk_factors,
        summary: classification.summary,
        breakdown,
        percentage: score * 10,
        urgency: classification.urgency,
    }
}
