//! Vital-sign input model.
//!
//! [`VitalSigns`] carries the raw, optional readings exactly as a caller supplied them. The
//! scorer never looks at raw values directly: it asks for a [`Reading`], which only exists for
//! finite, strictly positive numbers. Anything else is "not measured". The validator, on the
//! other hand, inspects the raw values so that implausible input is still reported.

use crate::ranges::NormalRange;
use crate::{AcuityError, AcuityResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A measured value that can take part in scoring.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Reading(f64);

impl Reading {
    /// Returns `None` for zero, negative, NaN or infinite values.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// The six vital signs understood by the engine, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VitalKind {
    HeartRate,
    Spo2,
    RespRate,
    Temperature,
    BpSystolic,
    BpDiastolic,
}

impl VitalKind {
    pub const ALL: [VitalKind; 6] = [
        VitalKind::HeartRate,
        VitalKind::Spo2,
        VitalKind::RespRate,
        VitalKind::Temperature,
        VitalKind::BpSystolic,
        VitalKind::BpDiastolic,
    ];

    /// Wire key used by the front-ends (`heartRate`, `spo2`, ...).
    pub const fn key(self) -> &'static str {
        match self {
            VitalKind::HeartRate => "heartRate",
            VitalKind::Spo2 => "spo2",
            VitalKind::RespRate => "respRate",
            VitalKind::Temperature => "temperature",
            VitalKind::BpSystolic => "bpSystolic",
            VitalKind::BpDiastolic => "bpDiastolic",
        }
    }

    /// Clinical reference range for display and deviation checks.
    pub const fn normal_range(self) -> NormalRange {
        match self {
            VitalKind::HeartRate => NormalRange::new(60.0, 100.0, "bpm", "Heart Rate"),
            VitalKind::Spo2 => NormalRange::new(95.0, 100.0, "%", "SpO2"),
            VitalKind::RespRate => NormalRange::new(12.0, 20.0, "breaths/min", "Respiratory Rate"),
            VitalKind::Temperature => NormalRange::new(36.5, 37.5, "°C", "Temperature"),
            VitalKind::BpSystolic => NormalRange::new(90.0, 140.0, "mmHg", "Systolic BP"),
            VitalKind::BpDiastolic => NormalRange::new(60.0, 90.0, "mmHg", "Diastolic BP"),
        }
    }

    /// Instrument-plausibility bounds, inclusive. Wider than the normal range.
    pub const fn plausible_bounds(self) -> (f64, f64) {
        match self {
            VitalKind::HeartRate => (0.0, 300.0),
            VitalKind::Spo2 => (0.0, 100.0),
            VitalKind::RespRate => (0.0, 60.0),
            VitalKind::Temperature => (25.0, 45.0),
            VitalKind::BpSystolic => (0.0, 300.0),
            VitalKind::BpDiastolic => (0.0, 200.0),
        }
    }

    /// Message reported when a raw value falls outside [`Self::plausible_bounds`].
    pub const fn range_error(self) -> &'static str {
        match self {
            VitalKind::HeartRate => "Heart rate must be between 0 and 300 bpm",
            VitalKind::Spo2 => "SpO2 must be between 0 and 100%",
            VitalKind::RespRate => "Respiratory rate must be between 0 and 60 breaths/min",
            VitalKind::Temperature => "Temperature must be between 25 and 45 C",
            VitalKind::BpSystolic => "Systolic BP must be between 0 and 300 mmHg",
            VitalKind::BpDiastolic => "Diastolic BP must be between 0 and 200 mmHg",
        }
    }
}

impl fmt::Display for VitalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

impl FromStr for VitalKind {
    type Err = AcuityError;

    /// Accepts the camelCase wire keys and their snake_case spellings.
    fn from_str(s: &str) -> AcuityResult<Self> {
        let trimmed = s.trim();
        VitalKind::ALL
            .into_iter()
            .find(|kind| {
                let key = kind.key();
                trimmed == key || trimmed.replace('_', "").eq_ignore_ascii_case(key)
            })
            .ok_or_else(|| AcuityError::UnknownVital(trimmed.to_string()))
    }
}

/// A set of vital-sign readings. Every field is optional; absence means "not measured".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSigns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spo2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resp_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bp_systolic: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bp_diastolic: Option<f64>,
}

impl VitalSigns {
    /// The value exactly as supplied, including implausible ones.
    pub fn raw(&self, kind: VitalKind) -> Option<f64> {
        match kind {
            VitalKind::HeartRate => self.heart_rate,
            VitalKind::Spo2 => self.spo2,
            VitalKind::RespRate => self.resp_rate,
            VitalKind::Temperature => self.temperature,
            VitalKind::BpSystolic => self.bp_systolic,
            VitalKind::BpDiastolic => self.bp_diastolic,
        }
    }

    /// The value if it counts as a measurement for scoring purposes.
    pub fn reading(&self, kind: VitalKind) -> Option<Reading> {
        self.raw(kind).and_then(Reading::new)
    }

    pub fn set(&mut self, kind: VitalKind, value: Option<f64>) {
        let slot = match kind {
            VitalKind::HeartRate => &mut self.heart_rate,
            VitalKind::Spo2 => &mut self.spo2,
            VitalKind::RespRate => &mut self.resp_rate,
            VitalKind::Temperature => &mut self.temperature,
            VitalKind::BpSystolic => &mut self.bp_systolic,
            VitalKind::BpDiastolic => &mut self.bp_diastolic,
        };
        *slot = value;
    }

    /// Builder-style setter.
    pub fn with(mut self, kind: VitalKind, value: f64) -> Self {
        self.set(kind, Some(value));
        self
    }

    /// Kinds that carry a raw value, in canonical order.
    pub fn present(&self) -> impl Iterator<Item = (VitalKind, f64)> + '_ {
        VitalKind::ALL
            .into_iter()
            .filter_map(|kind| self.raw(kind).map(|value| (kind, value)))
    }
}
