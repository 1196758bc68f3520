//! # Acuity Core
//!
//! Clinical severity scoring for the acuity services.
//!
//! This crate turns a set of vital signs into a 0-10 severity score with a condition label,
//! ward recommendation and urgency tier, and provides the advisory helpers that sit next to it:
//! - plausibility validation of raw readings
//! - trend comparison between two scores
//! - reference ranges and display hints for report screens
//!
//! Everything here is pure and synchronous. The same input always produces the same output,
//! so a client-side fallback and the server agree on every score.
//!
//! **No API concerns**: HTTP/gRPC servers, authentication and wire types belong in `api-grpc`,
//! `api-rest` or `api-shared`.

pub mod classification;
pub mod config;
pub mod constants;
pub mod error;
pub mod presentation;
pub mod ranges;
pub mod report;
pub mod scoring;
pub mod trend;
pub mod validation;
pub mod vitals;

pub use classification::{classify, Classification, Condition, Urgency, Ward};
pub use config::CoreConfig;
pub use error::{AcuityError, AcuityResult};
pub use presentation::{score_color, DisplayHints};
pub use ranges::{
    is_vital_normal, normal_range_label, vital_deviation, Deviation, NormalRange, NORMAL_RANGES,
};
pub use report::{vitals_report, VitalReading, VitalsReport};
pub use scoring::{calculate_severity_score, SeverityResult, SubScore};
pub use trend::{
    severity_trend, severity_trend_with_threshold, validate_trend_threshold, Trend,
};
pub use validation::{validate_vital_signs, ValidationResult};
pub use vitals::{Reading, VitalKind, VitalSigns};

pub use constants::DEFAULT_TREND_THRESHOLD;
