//! The continuous astronomical time scalar used by every downstream stage.

use serde::{Deserialize, Serialize};

use crate::delta_t::{decimal_year, delta_t_seconds};
use crate::julian::{DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY};

/// A Julian Day in Universal Time.
///
/// Ordered, copyable, and serialised as a bare number. Dynamical time (TT)
/// is derived on demand through ΔT.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianMoment {
    jd_ut: f64,
}

impl JulianMoment {
    /// Wrap a Julian Day in UT.
    pub const fn from_jd_ut(jd_ut: f64) -> Self {
        Self { jd_ut }
    }

    /// Julian Day in UT.
    pub const fn jd_ut(self) -> f64 {
        self.jd_ut
    }

    /// ΔT at this moment in seconds.
    pub fn delta_t_seconds(self) -> f64 {
        delta_t_seconds(decimal_year(self.jd_ut))
    }

    /// Julian Day in Terrestrial Time.
    pub fn jd_tt(self) -> f64 {
        self.jd_ut + self.delta_t_seconds() / SECONDS_PER_DAY
    }

    /// Julian centuries of UT since J2000.0. Used for sidereal time.
    pub fn centuries_ut(self) -> f64 {
        (self.jd_ut - J2000_JD) / DAYS_PER_CENTURY
    }

    /// Julian centuries of TT since J2000.0. Used for ephemerides and frames.
    pub fn centuries_tt(self) -> f64 {
        (self.jd_tt() - J2000_JD) / DAYS_PER_CENTURY
    }

    /// The moment shifted by a number of days.
    pub fn offset_days(self, days: f64) -> Self {
        Self::from_jd_ut(self.jd_ut + days)
    }
}

impl std::fmt::Display for JulianMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {:.6} UT", self.jd_ut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tt_ahead_of_ut_in_2000() {
        let m = JulianMoment::from_jd_ut(J2000_JD);
        let dt_days = m.jd_tt() - m.jd_ut();
        assert!((dt_days * SECONDS_PER_DAY - 63.86).abs() < 0.5);
    }

    #[test]
    fn centuries_at_j2000() {
        let m = JulianMoment::from_jd_ut(J2000_JD);
        assert_eq!(m.centuries_ut(), 0.0);
        assert!(m.centuries_tt() > 0.0);
    }

    #[test]
    fn ordering_follows_jd() {
        let a = JulianMoment::from_jd_ut(2_451_545.0);
        let b = a.offset_days(1.0 / SECONDS_PER_DAY);
        assert!(a < b);
    }

    #[test]
    fn serialises_as_number() {
        let m = JulianMoment::from_jd_ut(2_451_545.25);
        assert_eq!(serde_json::to_string(&m).unwrap(), "2451545.25");
    }
}
