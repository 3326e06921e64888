//! Lexical birth date and time.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use kundli_time::{CivilDateTime, TimeError};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Parse `YYYY-MM-DD` and `HH:MM:SS` into a UTC civil date-time.
pub fn parse_birth(date: &str, time: &str) -> Result<CivilDateTime, TimeError> {
    let d = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| TimeError::Parse {
        field: "date",
        input: date.to_string(),
    })?;
    let t = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT).map_err(|_| TimeError::Parse {
        field: "time",
        input: time.to_string(),
    })?;
    // chrono folds a leap second into nanoseconds >= 1e9; validation rejects it.
    let second = f64::from(t.second()) + f64::from(t.nanosecond()) / 1e9;
    let civil = CivilDateTime::new(d.year(), d.month(), d.day(), t.hour(), t.minute(), second);
    civil.validate()?;
    Ok(civil)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_fields() {
        let c = parse_birth("1990-01-01", "12:34:56").unwrap();
        assert_eq!(c, CivilDateTime::new(1990, 1, 1, 12, 34, 56.0));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert!(parse_birth(" 2000-02-29 ", "00:00:00\n").is_ok());
    }

    #[test]
    fn rejects_impossible_fields() {
        for (d, t) in [
            ("1990-01-01", "25:00:00"),
            ("1990-13-01", "12:00:00"),
            ("1900-02-29", "12:00:00"),
            ("1990/01/01", "12:00:00"),
            ("1990-01-01", "12:00"),
            ("", "12:00:00"),
        ] {
            let err = parse_birth(d, t).unwrap_err();
            assert!(matches!(err, TimeError::Parse { .. }), "{d} {t}: {err}");
        }
    }
}
