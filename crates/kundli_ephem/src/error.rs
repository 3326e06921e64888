//! Error types for ephemeris evaluation.

use thiserror::Error;

/// Errors from the ephemeris provider.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Requested moment lies outside the model's validity window.
    #[error("JD {jd} outside supported ephemeris range [{min_jd}, {max_jd}]")]
    OutOfRange { jd: f64, min_jd: f64, max_jd: f64 },
    /// A supported range was constructed with inverted or non-finite bounds.
    #[error("invalid ephemeris range [{min_jd}, {max_jd}]")]
    InvalidRange { min_jd: f64, max_jd: f64 },
}
