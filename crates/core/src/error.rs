/// Errors returned by `acuity-core`.
///
/// The scoring engine itself is total and never produces these. They come from the edges:
/// configuration parsing, vital-key parsing and caller-supplied trend thresholds.
#[derive(Debug, thiserror::Error)]
pub enum AcuityError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown vital sign: {0}")]
    UnknownVital(String),
    #[error("trend threshold must be a finite, non-negative number (got {0})")]
    InvalidThreshold(f64),
}

pub type AcuityResult<T> = std::result::Result<T, AcuityError>;
