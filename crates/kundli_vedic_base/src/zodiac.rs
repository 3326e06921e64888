//! Tropical and sidereal zodiac frames.
//!
//! [`ZodiacTransformer`] takes raw ephemeris output (J2000.0 ecliptic for
//! the Sun and planets, ecliptic of date for the Moon) to the ecliptic of
//! date, optionally adds nutation in longitude, and for sidereal charts
//! subtracts the ayanamsha referred to the same equinox.

use std::fmt;

use kundli_ephem::{RawFrame, RawPosition};
use kundli_frames::{nutation, normalize_360, precess_ecliptic_from_j2000};
use kundli_time::{DAYS_PER_CENTURY, JulianMoment};
use serde::{Deserialize, Serialize};

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_mean_deg};
use crate::error::VedicError;
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::rashi::{RashiInfo, rashi_from_longitude};

/// IAU 2006 general precession rate near J2000.0, degrees per day.
const PRECESSION_DEG_PER_DAY: f64 = 5_028.796_195 / 3600.0 / DAYS_PER_CENTURY;

/// Which zodiac longitudes are measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameMode {
    /// Measured from the equinox of date.
    Tropical,
    /// Measured from a star-anchored origin.
    Sidereal(AyanamshaSystem),
}

impl Default for FrameMode {
    fn default() -> Self {
        Self::Sidereal(AyanamshaSystem::Lahiri)
    }
}

impl FrameMode {
    pub const fn ayanamsha(self) -> Option<AyanamshaSystem> {
        match self {
            Self::Tropical => None,
            Self::Sidereal(system) => Some(system),
        }
    }

    pub const fn is_sidereal(self) -> bool {
        matches!(self, Self::Sidereal(_))
    }
}

impl fmt::Display for FrameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tropical => f.write_str("tropical"),
            Self::Sidereal(system) => write!(f, "sidereal ({system})"),
        }
    }
}

/// Frame tag carried by every transformed value.
///
/// Two values may be combined only when their tags are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZodiacFrame {
    pub mode: FrameMode,
    /// Whether nutation in longitude is included (apparent equinox).
    pub nutation: bool,
}

impl ZodiacFrame {
    /// Error unless `other` is the same frame.
    pub fn ensure_matches(self, other: ZodiacFrame) -> Result<(), VedicError> {
        if self == other {
            Ok(())
        } else {
            Err(VedicError::FrameMismatch {
                expected: self,
                found: other,
            })
        }
    }
}

impl fmt::Display for ZodiacFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let equinox = if self.nutation { "true" } else { "mean" };
        write!(f, "{}, {equinox} equinox", self.mode)
    }
}

/// A body's zodiacal coordinates in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    /// Geocentric distance in AU; `None` for mathematical points such as nodes.
    pub distance_au: Option<f64>,
    /// Longitude rate, degrees/day.
    pub speed_deg_per_day: f64,
    pub frame: ZodiacFrame,
}

impl Position {
    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day < 0.0
    }

    /// Sign containing this longitude.
    pub fn rashi(&self) -> RashiInfo {
        rashi_from_longitude(self.longitude_deg)
    }

    /// Lunar mansion containing this longitude.
    pub fn nakshatra(&self) -> NakshatraInfo {
        nakshatra_from_longitude(self.longitude_deg)
    }
}

/// Converts raw ephemeris output into one zodiac frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacTransformer {
    frame_mode: FrameMode,
    nutation: bool,
}

impl ZodiacTransformer {
    pub const fn new(frame_mode: FrameMode, nutation: bool) -> Self {
        Self {
            frame_mode,
            nutation,
        }
    }

    pub const fn frame_mode(&self) -> FrameMode {
        self.frame_mode
    }

    pub const fn nutation(&self) -> bool {
        self.nutation
    }

    /// Tag attached to everything this transformer produces.
    pub const fn frame(&self) -> ZodiacFrame {
        ZodiacFrame {
            mode: self.frame_mode,
            nutation: self.nutation,
        }
    }

    /// Nutation in longitude applied at `moment`, degrees. Zero when disabled.
    pub fn delta_psi_deg(&self, moment: JulianMoment) -> f64 {
        if self.nutation {
            nutation(moment.centuries_tt()).delta_psi_deg()
        } else {
            0.0
        }
    }

    /// Ayanamsha at `moment` referred to this transformer's equinox.
    ///
    /// `None` for tropical frames.
    pub fn ayanamsha_deg(&self, moment: JulianMoment) -> Option<f64> {
        self.frame_mode.ayanamsha().map(|system| {
            ayanamsha_mean_deg(system, moment.centuries_tt()) + self.delta_psi_deg(moment)
        })
    }

    /// Map a tropical longitude of date (already including nutation when
    /// enabled) into this frame.
    pub fn tropical_to_frame_deg(&self, tropical_lon_deg: f64, moment: JulianMoment) -> f64 {
        normalize_360(tropical_lon_deg - self.ayanamsha_deg(moment).unwrap_or(0.0))
    }

    /// Transform one raw ephemeris position.
    pub fn to_zodiacal(
        &self,
        raw: &RawPosition,
        moment: JulianMoment,
    ) -> Result<Position, VedicError> {
        let t = moment.centuries_tt();
        let (lon_of_date, lat, speed) = match raw.frame {
            RawFrame::EclipticJ2000 => {
                let (lon, lat) = precess_ecliptic_from_j2000(raw.longitude_deg, raw.latitude_deg, t);
                (lon, lat, raw.speed_deg_per_day + PRECESSION_DEG_PER_DAY)
            }
            RawFrame::EclipticOfDate => (raw.longitude_deg, raw.latitude_deg, raw.speed_deg_per_day),
        };
        let apparent = lon_of_date + self.delta_psi_deg(moment);

        let (longitude_deg, speed_deg_per_day) = match self.frame_mode {
            FrameMode::Tropical => (normalize_360(apparent), speed),
            FrameMode::Sidereal(_) => (
                self.tropical_to_frame_deg(apparent, moment),
                speed - PRECESSION_DEG_PER_DAY,
            ),
        };

        let body = raw.body.name();
        if !longitude_deg.is_finite() {
            return Err(VedicError::NonFinite {
                body,
                quantity: "longitude",
            });
        }
        if !lat.is_finite() || !speed_deg_per_day.is_finite() {
            return Err(VedicError::NonFinite {
                body,
                quantity: "latitude or speed",
            });
        }

        Ok(Position {
            longitude_deg,
            latitude_deg: lat,
            distance_au: Some(raw.distance_au),
            speed_deg_per_day,
            frame: self.frame(),
        })
    }
}

impl Default for ZodiacTransformer {
    fn default() -> Self {
        Self::new(FrameMode::default(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundli_ephem::CelestialBody;

    fn raw(lon: f64, frame: RawFrame) -> RawPosition {
        RawPosition {
            body: CelestialBody::Mars,
            longitude_deg: lon,
            latitude_deg: 1.0,
            distance_au: 1.5,
            speed_deg_per_day: 0.5,
            frame,
        }
    }

    #[test]
    fn tropical_at_j2000_is_identity_without_nutation() {
        let tr = ZodiacTransformer::new(FrameMode::Tropical, false);
        let m = JulianMoment::from_jd_ut(2_451_545.0);
        let p = tr.to_zodiacal(&raw(123.4, RawFrame::EclipticOfDate), m).unwrap();
        assert!((p.longitude_deg - 123.4).abs() < 1e-12);
        assert_eq!(p.frame.mode, FrameMode::Tropical);
    }

    #[test]
    fn sidereal_subtracts_ayanamsha() {
        let m = JulianMoment::from_jd_ut(2_451_545.0);
        let trop = ZodiacTransformer::new(FrameMode::Tropical, true);
        let sid = ZodiacTransformer::new(FrameMode::Sidereal(AyanamshaSystem::Lahiri), true);
        let r = raw(10.0, RawFrame::EclipticOfDate);
        let a = trop.to_zodiacal(&r, m).unwrap().longitude_deg;
        let b = sid.to_zodiacal(&r, m).unwrap().longitude_deg;
        let aya = sid.ayanamsha_deg(m).unwrap();
        assert!((normalize_360(a - b) - aya).abs() < 1e-9);
        assert!(b > 340.0, "wraps below zero: {b}");
    }

    #[test]
    fn nutation_cancels_in_sidereal() {
        let m = JulianMoment::from_jd_ut(2_460_000.5);
        let r = raw(200.0, RawFrame::EclipticJ2000);
        let mode = FrameMode::Sidereal(AyanamshaSystem::Raman);
        let with = ZodiacTransformer::new(mode, true).to_zodiacal(&r, m).unwrap();
        let without = ZodiacTransformer::new(mode, false).to_zodiacal(&r, m).unwrap();
        assert!((with.longitude_deg - without.longitude_deg).abs() < 1e-9);
        assert_ne!(with.frame, without.frame);
    }

    #[test]
    fn j2000_input_is_precessed() {
        // Fifty years of precession is about 0.7°.
        let m = JulianMoment::from_jd_ut(2_451_545.0 + 50.0 * 365.25);
        let tr = ZodiacTransformer::new(FrameMode::Tropical, false);
        let p = tr.to_zodiacal(&raw(0.0, RawFrame::EclipticJ2000), m).unwrap();
        assert!((p.longitude_deg - 0.698).abs() < 0.01, "{}", p.longitude_deg);
    }

    #[test]
    fn non_finite_rejected() {
        let tr = ZodiacTransformer::default();
        let m = JulianMoment::from_jd_ut(2_451_545.0);
        let err = tr
            .to_zodiacal(&raw(f64::NAN, RawFrame::EclipticOfDate), m)
            .unwrap_err();
        assert!(matches!(err, VedicError::NonFinite { .. }));
    }

    #[test]
    fn frame_mismatch_detected() {
        let a = ZodiacTransformer::new(FrameMode::Tropical, true).frame();
        let b = ZodiacTransformer::default().frame();
        assert!(a.ensure_matches(a).is_ok());
        assert!(matches!(
            a.ensure_matches(b),
            Err(VedicError::FrameMismatch { .. })
        ));
    }
}
