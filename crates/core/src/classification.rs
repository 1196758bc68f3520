//! Score classification.
//!
//! Maps a final severity score onto the condition, ward, urgency and summary shown to staff.
//! Bands are inclusive at their lower bound and checked from the highest down:
//!
//! | score | condition  | ward    | urgency   |
//! |-------|------------|---------|-----------|
//! | 8-10  | Critical   | ICU     | immediate |
//! | 5-7   | Serious    | HDU     | urgent    |
//! | 3-4   | Stable     | General | routine   |
//! | 0-2   | Recovering | General | low       |

use serde::Serialize;
use std::fmt;

const CRITICAL_FROM: u8 = 8;
const SERIOUS_FROM: u8 = 5;
const STABLE_FROM: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Condition {
    Critical,
    Serious,
    Stable,
    Recovering,
}

impl Condition {
    pub fn from_score(score: u8) -> Self {
        if score >= CRITICAL_FROM {
            Condition::Critical
        } else if score >= SERIOUS_FROM {
            Condition::Serious
        } else if score >= STABLE_FROM {
            Condition::Stable
        } else {
            Condition::Recovering
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Critical => "Critical",
            Condition::Serious => "Serious",
            Condition::Stable => "Stable",
            Condition::Recovering => "Recovering",
        }
    }

    pub fn ward(self) -> Ward {
        match self {
            Condition::Critical => Ward::Icu,
            Condition::Serious => Ward::Hdu,
            Condition::Stable | Condition::Recovering => Ward::General,
        }
    }

    pub fn urgency(self) -> Urgency {
        match self {
            Condition::Critical => Urgency::Immediate,
            Condition::Serious => Urgency::Urgent,
            Condition::Stable => Urgency::Routine,
            Condition::Recovering => Urgency::Low,
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Condition::Critical => {
                "Patient requires immediate intensive care with continuous monitoring"
            }
            Condition::Serious => "Patient needs high-dependency care with frequent monitoring",
            Condition::Stable => "Patient is stable and can be admitted to general ward",
            Condition::Recovering => "Patient shows good vital signs and is recovering well",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Care unit tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ward {
    #[serde(rename = "ICU")]
    Icu,
    #[serde(rename = "HDU")]
    Hdu,
    General,
}

impl Ward {
    pub fn as_str(self) -> &'static str {
        match self {
            Ward::Icu => "ICU",
            Ward::Hdu => "HDU",
            Ward::General => "General",
        }
    }
}

impl fmt::Display for Ward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Immediate,
    Urgent,
    Routine,
    Low,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Immediate => "immediate",
            Urgency::Urgent => "urgent",
            Urgency::Routine => "routine",
            Urgency::Low => "low",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the classifier derives from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub condition: Condition,
    pub ward_recommendation: Ward,
    pub urgency: Urgency,
    pub summary: &'static str,
}

/// Classify a final (already capped) severity score.
pub fn classify(score: u8) -> Classification {
    let condition = Condition::from_score(score);
    Classification {
        condition,
        ward_recommendation: condition.ward(),
        urgency: condition.urgency(),
        summary: condition.summary(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_resolve_to_the_higher_band() {
        assert_eq!(classify(8).condition, Condition::Critical);
        assert_eq!(classify(7).condition, Condition::Serious);
        assert_eq!(classify(5).condition, Condition::Serious);
        assert_eq!(classify(4).condition, Condition::Stable);
        assert_eq!(classify(3).condition, Condition::Stable);
        assert_eq!(classify(2).condition, Condition::Recovering);
        assert_eq!(classify(0).condition, Condition::Recovering);
    }

    #[test]
    fn critical_goes_to_icu_immediately() {
        let c = classify(10);
        assert_eq!(c.ward_recommendation, Ward::Icu);
        assert_eq!(c.urgency, Urgency::Immediate);
        assert_eq!(
            c.summary,
            "Patient requires immediate intensive care with continuous monitoring"
        );
    }

    #[test]
    fn stable_and_recovering_share_the_general_ward() {
        assert_eq!(classify(3).ward_recommendation, Ward::General);
        assert_eq!(classify(1).ward_recommendation, Ward::General);
        assert_eq!(classify(3).urgency, Urgency::Routine);
        assert_eq!(classify(1).urgency, Urgency::Low);
    }

    #[test]
    fn serialises_with_front_end_labels() {
        assert_eq!(serde_json::to_string(&Ward::Hdu).unwrap(), "\"HDU\"");
        assert_eq!(serde_json::to_string(&Urgency::Immediate).unwrap(), "\"immediate\"");
        assert_eq!(serde_json::to_string(&Condition::Serious).unwrap(), "\"Serious\"");
    }
}
