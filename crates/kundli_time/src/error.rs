//! Error types for civil time conversion.

use thiserror::Error;

/// Errors raised while validating or converting a civil date-time.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar fields do not name a real day.
    #[error("invalid date {year:04}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        reason: &'static str,
    },
    /// Clock fields are outside their natural range.
    #[error("invalid time of day {hour:02}:{minute:02}:{second}: {reason}")]
    InvalidTime {
        hour: u32,
        minute: u32,
        second: f64,
        reason: &'static str,
    },
    /// UTC offset beyond +/-18 hours.
    #[error("UTC offset of {0} minutes is outside +/-18h")]
    InvalidOffset(i32),
    /// Lexical date or time string could not be parsed.
    #[error("cannot parse {field} from {input:?}")]
    Parse { field: &'static str, input: String },
}
