//! Display metadata for front-ends.
//!
//! No clinical logic lives here: everything is a lookup on values the classifier or the trend
//! comparator already produced.

use crate::classification::{Condition, Urgency};
use crate::scoring::SeverityResult;
use crate::trend::Trend;
use serde::Serialize;

impl Condition {
    pub fn color(self) -> &'static str {
        match self {
            Condition::Critical => "red",
            Condition::Serious => "orange",
            Condition::Stable => "yellow",
            Condition::Recovering => "green",
        }
    }
}

impl Urgency {
    pub fn badge(self) -> &'static str {
        match self {
            Urgency::Immediate => "badge-critical",
            Urgency::Urgent => "badge-serious",
            Urgency::Routine => "badge-stable",
            Urgency::Low => "badge-recovering",
        }
    }
}

impl Trend {
    pub fn icon(self) -> &'static str {
        match self {
            Trend::Improving => "arrow-down",
            Trend::Stable => "arrow-right",
            Trend::Worsening => "arrow-up",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Trend::Improving => "green",
            Trend::Stable => "gray",
            Trend::Worsening => "red",
        }
    }
}

/// Colour for a raw score, banded like the classifier.
pub fn score_color(score: u8) -> &'static str {
    Condition::from_score(score).color()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayHints {
    pub condition_color: &'static str,
    pub urgency_badge: &'static str,
    pub score_color: &'static str,
}

impl SeverityResult {
    pub fn display_hints(&self) -> DisplayHints {
        DisplayHints {
            condition_color: self.condition.color(),
            urgency_badge: self.urgency.badge(),
            score_color: score_color(self.score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::calculate_severity_score;
    use crate::vitals::VitalSigns;

    #[test]
    fn score_colour_follows_classification_bands() {
        assert_eq!(score_color(9), "red");
        assert_eq!(score_color(5), "orange");
        assert_eq!(score_color(4), "yellow");
        assert_eq!(score_color(0), "green");
    }

    #[test]
    fn trend_icons() {
        assert_eq!(Trend::Worsening.icon(), "arrow-up");
        assert_eq!(Trend::Improving.color(), "green");
    }

    #[test]
    fn hints_for_recovering_patient() {
        let hints = calculate_severity_score(&VitalSigns::default()).display_hints();
        assert_eq!(
            hints,
            DisplayHints {
                condition_color: "green",
                urgency_badge: "badge-recovering",
                score_color: "green",
            }
        );
    }
}
