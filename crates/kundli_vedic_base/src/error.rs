//! Error types for zodiac and house calculations.

use thiserror::Error;

use crate::bhava::HouseSystemKind;
use crate::zodiac::ZodiacFrame;

/// Errors from frame transformation and house division.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// A value in one frame was combined with a value in another.
    #[error("frame mismatch: expected {expected}, found {found}")]
    FrameMismatch {
        expected: ZodiacFrame,
        found: ZodiacFrame,
    },
    /// Latitude or longitude outside the geographic range.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// The house system is geometrically undefined for this sky.
    #[error("{system} houses undefined at latitude {latitude_deg}°: {reason}")]
    HouseComputation {
        system: HouseSystemKind,
        latitude_deg: f64,
        reason: &'static str,
    },
    /// A transformed coordinate came out NaN or infinite.
    #[error("non-finite {quantity} for {body}")]
    NonFinite {
        body: &'static str,
        quantity: &'static str,
    },
    /// Unrecognised system name in configuration or CLI input.
    #[error("unknown {what}: {name:?}")]
    UnknownName { what: &'static str, name: String },
}
