//! Chart construction errors.
//!
//! Every failure carries the pipeline stage it came from and one
//! [`ErrorKind`], so callers can branch on the kind without parsing
//! messages.

use std::fmt;

use kundli_ephem::EphemerisError;
use kundli_time::TimeError;
use kundli_vedic_base::VedicError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure categories shared by every layer above the math crates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or impossible civil date-time.
    InvalidDate,
    /// Inconsistent frame, house or location setup.
    Configuration,
    /// Moment outside the ephemeris validity window.
    EphemerisRange,
    /// House system undefined for this latitude and moment.
    HouseComputation,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidDate => "invalid_date",
            Self::Configuration => "configuration",
            Self::EphemerisRange => "ephemeris_range",
            Self::HouseComputation => "house_computation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline step in which a build failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStage {
    Time,
    Ephemeris,
    Transform,
    Houses,
    Consistency,
}

impl fmt::Display for ChartStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Time => "time",
            Self::Ephemeris => "ephemeris",
            Self::Transform => "transform",
            Self::Houses => "houses",
            Self::Consistency => "consistency",
        })
    }
}

/// Underlying error from a lower crate.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartCause {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Vedic(#[from] VedicError),
}

impl ChartCause {
    /// Category of the underlying failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Time(_) => ErrorKind::InvalidDate,
            Self::Ephemeris(EphemerisError::OutOfRange { .. }) => ErrorKind::EphemerisRange,
            Self::Ephemeris(_) => ErrorKind::Configuration,
            Self::Vedic(VedicError::HouseComputation { .. }) => ErrorKind::HouseComputation,
            Self::Vedic(VedicError::NonFinite { .. }) => ErrorKind::EphemerisRange,
            Self::Vedic(_) => ErrorKind::Configuration,
        }
    }
}

/// A failed chart build.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("chart {stage} stage failed [{kind}]: {source}")]
pub struct ChartError {
    pub stage: ChartStage,
    pub kind: ErrorKind,
    #[source]
    pub source: ChartCause,
}

impl ChartError {
    pub fn new(stage: ChartStage, cause: impl Into<ChartCause>) -> Self {
        let source = cause.into();
        Self {
            stage,
            kind: source.kind(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn stage(&self) -> ChartStage {
        self.stage
    }
}
