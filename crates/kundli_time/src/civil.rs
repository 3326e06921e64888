//! Civil (calendar) date-time input and its conversion to a [`JulianMoment`].

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, days_in_month, julian_day_number};
use crate::moment::JulianMoment;

/// Largest accepted UTC offset magnitude, in minutes.
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// A calendar instant in the proleptic Gregorian calendar.
///
/// The value is naive of timezone rules: `utc_offset_minutes` is a fixed
/// offset that the caller has already resolved (0 means the fields are UTC).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Minutes east of UTC. IST is +330.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl CivilDateTime {
    /// A UTC civil date-time. Fields are checked by [`Self::validate`].
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_minutes: 0,
        }
    }

    /// Same instant fields, read as local time at a fixed UTC offset.
    pub fn with_utc_offset_minutes(self, minutes: i32) -> Self {
        Self {
            utc_offset_minutes: minutes,
            ..self
        }
    }

    /// Check every field against its natural range.
    pub fn validate(&self) -> Result<(), TimeError> {
        let date_err = |reason| TimeError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
            reason,
        };
        let time_err = |reason| TimeError::InvalidTime {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            reason,
        };

        if !(1..=12).contains(&self.month) {
            return Err(date_err("month must be 1-12"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(date_err("day does not exist in this month"));
        }
        if self.hour > 23 {
            return Err(time_err("hour must be 0-23"));
        }
        if self.minute > 59 {
            return Err(time_err("minute must be 0-59"));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(time_err("second must be in [0, 60)"));
        }
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::InvalidOffset(self.utc_offset_minutes));
        }
        Ok(())
    }

    /// Seconds elapsed since local midnight, in [0, 86400).
    pub fn seconds_of_day(&self) -> f64 {
        f64::from(self.hour) * 3600.0 + f64::from(self.minute) * 60.0 + self.second
    }

    /// Validate and convert to a Julian moment in UT.
    pub fn to_julian_moment(&self) -> Result<JulianMoment, TimeError> {
        self.validate()?;
        let jdn = julian_day_number(self.year, self.month, self.day);
        let utc_seconds = self.seconds_of_day() - f64::from(self.utc_offset_minutes) * 60.0;
        // The civil day starts at JDN - 0.5.
        let jd = (jdn as f64 - 0.5) + utc_seconds / SECONDS_PER_DAY;
        Ok(JulianMoment::from_jd_ut(jd))
    }
}

/// Free-function form of [`CivilDateTime::to_julian_moment`].
pub fn to_julian_moment(civil: &CivilDateTime) -> Result<JulianMoment, TimeError> {
    civil.to_julian_moment()
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second.trunc() as u32;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, whole
        )?;
        match self.utc_offset_minutes {
            0 => write!(f, "Z"),
            off => {
                let sign = if off < 0 { '-' } else { '+' };
                write!(f, "{sign}{:02}:{:02}", off.abs() / 60, off.abs() % 60)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn j2000_noon_utc() {
        let m = CivilDateTime::new(2000, 1, 1, 12, 0, 0.0)
            .to_julian_moment()
            .unwrap();
        assert_eq!(m.jd_ut(), J2000_JD);
    }

    #[test]
    fn offset_shifts_back_to_utc() {
        let ist = CivilDateTime::new(2000, 1, 1, 17, 30, 0.0).with_utc_offset_minutes(330);
        let m = ist.to_julian_moment().unwrap();
        assert!((m.jd_ut() - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn hour_25_rejected() {
        let err = CivilDateTime::new(1990, 1, 1, 25, 0, 0.0)
            .to_julian_moment()
            .unwrap_err();
        assert!(matches!(err, TimeError::InvalidTime { hour: 25, .. }), "{err}");
    }

    #[test]
    fn feb_29_non_leap_rejected() {
        let err = CivilDateTime::new(2023, 2, 29, 0, 0, 0.0).validate().unwrap_err();
        assert!(matches!(err, TimeError::InvalidDate { .. }));
        assert!(CivilDateTime::new(2024, 2, 29, 0, 0, 0.0).validate().is_ok());
        assert!(CivilDateTime::new(1900, 2, 29, 0, 0, 0.0).validate().is_err());
    }

    #[test]
    fn month_and_day_bounds() {
        assert!(CivilDateTime::new(2020, 0, 1, 0, 0, 0.0).validate().is_err());
        assert!(CivilDateTime::new(2020, 13, 1, 0, 0, 0.0).validate().is_err());
        assert!(CivilDateTime::new(2020, 4, 31, 0, 0, 0.0).validate().is_err());
        assert!(CivilDateTime::new(2020, 4, 0, 0, 0, 0.0).validate().is_err());
    }

    #[test]
    fn minute_and_second_bounds() {
        assert!(CivilDateTime::new(2020, 1, 1, 0, 60, 0.0).validate().is_err());
        assert!(CivilDateTime::new(2020, 1, 1, 0, 0, 60.0).validate().is_err());
        assert!(CivilDateTime::new(2020, 1, 1, 0, 0, -0.5).validate().is_err());
        assert!(CivilDateTime::new(2020, 1, 1, 0, 0, f64::NAN).validate().is_err());
        assert!(CivilDateTime::new(2020, 1, 1, 23, 59, 59.999).validate().is_ok());
    }

    #[test]
    fn offset_bounds() {
        let bad = CivilDateTime::new(2020, 1, 1, 0, 0, 0.0).with_utc_offset_minutes(19 * 60);
        assert_eq!(bad.validate(), Err(TimeError::InvalidOffset(19 * 60)));
    }

    #[test]
    fn display_utc_and_offset() {
        let t = CivilDateTime::new(1990, 1, 1, 12, 0, 0.0);
        assert_eq!(t.to_string(), "1990-01-01T12:00:00Z");
        let ist = t.with_utc_offset_minutes(330);
        assert_eq!(ist.to_string(), "1990-01-01T12:00:00+05:30");
        let west = t.with_utc_offset_minutes(-210);
        assert_eq!(west.to_string(), "1990-01-01T12:00:00-03:30");
    }
}
