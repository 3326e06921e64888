use kundli_chart::{ChartError, ErrorKind};
use kundli_config::ConfigError;
use kundli_time::TimeError;
use kundli_vedic_base::VedicError;
use thiserror::Error;

/// Any failure surfaced by the facade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KundliError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Location(#[from] VedicError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("kundli_rs already initialized; use reload to change the configuration")]
    AlreadyInitialized,
}

impl KundliError {
    /// Category for status mapping.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Time(_) => ErrorKind::InvalidDate,
            Self::Location(VedicError::HouseComputation { .. }) => ErrorKind::HouseComputation,
            Self::Location(_) => ErrorKind::Configuration,
            Self::Chart(e) => e.kind(),
            Self::Config(e) => e.kind(),
            Self::AlreadyInitialized => ErrorKind::Configuration,
        }
    }
}
