//! The ephemeris provider seam and its analytic implementation.

use serde::{Deserialize, Serialize};

use kundli_frames::{cartesian_to_spherical, general_precession_longitude_deg, normalize_180};
use kundli_time::{DAYS_PER_CENTURY, JulianMoment};

use crate::body::{ALL_BODIES, CelestialBody};
use crate::elements::Orbiter;
use crate::error::EphemerisError;
use crate::moon::{KM_PER_AU, lunar_position};

/// JD of 1800-01-01 00:00 UT.
pub const DEFAULT_MIN_JD: f64 = 2_378_496.5;
/// JD of 2400-12-31 24:00 UT.
pub const DEFAULT_MAX_JD: f64 = 2_598_007.5;

/// Light travel time for 1 AU, in days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Moon/(Earth+Moon) mass fraction: the Earth sits this fraction of the
/// geocentric Moon vector away from the barycentre (mass ratio 1/81.3006).
const EARTH_BARYCENTRE_FRACTION: f64 = 1.0 / 82.300_6;

/// Half-width of the central difference used for longitude speed, days.
const SPEED_STEP_DAYS: f64 = 0.5;

/// Reference frame of a raw ephemeris longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawFrame {
    /// Mean ecliptic and equinox of J2000.0.
    EclipticJ2000,
    /// Mean ecliptic and equinox of the evaluation date.
    EclipticOfDate,
}

/// Geocentric ecliptic coordinates straight out of the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPosition {
    pub body: CelestialBody,
    /// Ecliptic longitude in degrees, [0, 360), in `frame`.
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Geocentric distance in AU.
    pub distance_au: f64,
    /// Longitude rate in degrees/day. Negative while retrograde.
    pub speed_deg_per_day: f64,
    pub frame: RawFrame,
}

/// Validity window of an ephemeris, inclusive, as Julian Days in UT.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportedRange {
    pub min_jd: f64,
    pub max_jd: f64,
}

impl SupportedRange {
    /// A range with checked bounds.
    pub fn new(min_jd: f64, max_jd: f64) -> Result<Self, EphemerisError> {
        if !min_jd.is_finite() || !max_jd.is_finite() || min_jd >= max_jd {
            return Err(EphemerisError::InvalidRange { min_jd, max_jd });
        }
        Ok(Self { min_jd, max_jd })
    }

    /// Fail with `OutOfRange` unless `moment` lies inside the window.
    pub fn check(&self, moment: JulianMoment) -> Result<(), EphemerisError> {
        let jd = moment.jd_ut();
        if jd.is_finite() && jd >= self.min_jd && jd <= self.max_jd {
            Ok(())
        } else {
            Err(EphemerisError::OutOfRange {
                jd,
                min_jd: self.min_jd,
                max_jd: self.max_jd,
            })
        }
    }

    /// Whether `other` fits entirely inside this range.
    pub fn contains_range(&self, other: &SupportedRange) -> bool {
        other.min_jd >= self.min_jd && other.max_jd <= self.max_jd
    }
}

impl Default for SupportedRange {
    fn default() -> Self {
        Self {
            min_jd: DEFAULT_MIN_JD,
            max_jd: DEFAULT_MAX_JD,
        }
    }
}

/// Source of geocentric body positions.
///
/// Implementations must be deterministic: the same moment yields the same
/// position bit for bit.
pub trait EphemerisProvider: Send + Sync {
    /// Moments this provider accepts.
    fn supported_range(&self) -> SupportedRange;

    /// Position of one body.
    fn position_at(
        &self,
        moment: JulianMoment,
        body: CelestialBody,
    ) -> Result<RawPosition, EphemerisError>;

    /// Positions of all ten bodies, in [`ALL_BODIES`] order.
    fn positions_at(&self, moment: JulianMoment) -> Result<[RawPosition; 10], EphemerisError> {
        let first = self.position_at(moment, ALL_BODIES[0])?;
        let mut out = [first; 10];
        for (slot, &body) in out.iter_mut().zip(ALL_BODIES.iter()).skip(1) {
            *slot = self.position_at(moment, body)?;
        }
        Ok(out)
    }
}

/// Mean-element planets plus the truncated lunar series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticEphemeris {
    range: SupportedRange,
}

impl AnalyticEphemeris {
    /// Provider restricted to `range`. The range must lie within 1800–2400.
    pub fn new(range: SupportedRange) -> Result<Self, EphemerisError> {
        let model = SupportedRange::default();
        if !model.contains_range(&range) {
            return Err(EphemerisError::InvalidRange {
                min_jd: range.min_jd,
                max_jd: range.max_jd,
            });
        }
        Ok(Self { range })
    }

    /// Heliocentric Earth vector (AU, J2000 ecliptic) at TT centuries `t`.
    fn earth_heliocentric(t: f64) -> [f64; 3] {
        let emb = Orbiter::EarthMoonBarycenter.elements().heliocentric_position(t);
        let moon = moon_vector_j2000_au(t);
        [
            emb[0] - EARTH_BARYCENTRE_FRACTION * moon[0],
            emb[1] - EARTH_BARYCENTRE_FRACTION * moon[1],
            emb[2] - EARTH_BARYCENTRE_FRACTION * moon[2],
        ]
    }

    /// Geocentric spherical coordinates of `body` at TT centuries `t`.
    ///
    /// Returns `(lon, lat, distance_au, frame)`.
    fn geocentric(body: CelestialBody, t: f64) -> (f64, f64, f64, RawFrame) {
        match Orbiter::for_body(body) {
            None if body == CelestialBody::Moon => {
                let m = lunar_position(t);
                (
                    m.lon_deg,
                    m.lat_deg,
                    m.distance_km / KM_PER_AU,
                    RawFrame::EclipticOfDate,
                )
            }
            None => {
                // Sun: reverse of the Earth vector, corrected for light time.
                let earth = Self::earth_heliocentric(t);
                let r = norm(earth);
                let earth_then = Self::earth_heliocentric(t - light_time_centuries(r));
                let s = cartesian_to_spherical(&[-earth_then[0], -earth_then[1], -earth_then[2]]);
                (s.lon_deg, s.lat_deg, s.distance, RawFrame::EclipticJ2000)
            }
            Some(orbiter) => {
                let earth = Self::earth_heliocentric(t);
                let el = orbiter.elements();
                // One light-time iteration: the planet as it was when the light left it.
                let geometric = sub(el.heliocentric_position(t), earth);
                let tau = light_time_centuries(norm(geometric));
                let apparent = sub(el.heliocentric_position(t - tau), earth);
                let s = cartesian_to_spherical(&apparent);
                (s.lon_deg, s.lat_deg, s.distance, RawFrame::EclipticJ2000)
            }
        }
    }

    fn evaluate(body: CelestialBody, moment: JulianMoment) -> RawPosition {
        let t = moment.centuries_tt();
        let (lon, lat, dist, frame) = Self::geocentric(body, t);

        let h = SPEED_STEP_DAYS / DAYS_PER_CENTURY;
        let (lon_before, ..) = Self::geocentric(body, t - h);
        let (lon_after, ..) = Self::geocentric(body, t + h);
        let speed = normalize_180(lon_after - lon_before) / (2.0 * SPEED_STEP_DAYS);

        RawPosition {
            body,
            longitude_deg: lon,
            latitude_deg: lat,
            distance_au: dist,
            speed_deg_per_day: speed,
            frame,
        }
    }
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self {
            range: SupportedRange::default(),
        }
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn supported_range(&self) -> SupportedRange {
        self.range
    }

    fn position_at(
        &self,
        moment: JulianMoment,
        body: CelestialBody,
    ) -> Result<RawPosition, EphemerisError> {
        self.range.check(moment)?;
        Ok(Self::evaluate(body, moment))
    }
}

/// Geocentric Moon as a J2000-ecliptic vector in AU.
///
/// Rotating by p_A alone is enough here: the vector only shifts the Earth
/// from the barycentre by ~4700 km.
fn moon_vector_j2000_au(t: f64) -> [f64; 3] {
    let m = lunar_position(t);
    let lon = (m.lon_deg - general_precession_longitude_deg(t)).to_radians();
    let lat = m.lat_deg.to_radians();
    let r = m.distance_km / KM_PER_AU;
    [r * lat.cos() * lon.cos(), r * lat.cos() * lon.sin(), r * lat.sin()]
}

fn light_time_centuries(distance_au: f64) -> f64 {
    distance_au * LIGHT_TIME_DAYS_PER_AU / DAYS_PER_CENTURY
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundli_time::J2000_JD;

    #[test]
    fn range_rejects_outside() {
        let eph = AnalyticEphemeris::default();
        let early = JulianMoment::from_jd_ut(DEFAULT_MIN_JD - 1.0);
        let late = JulianMoment::from_jd_ut(DEFAULT_MAX_JD + 1.0);
        assert!(matches!(
            eph.position_at(early, CelestialBody::Sun),
            Err(EphemerisError::OutOfRange { .. })
        ));
        assert!(matches!(
            eph.positions_at(late),
            Err(EphemerisError::OutOfRange { .. })
        ));
        let nan = JulianMoment::from_jd_ut(f64::NAN);
        assert!(eph.position_at(nan, CelestialBody::Moon).is_err());
    }

    #[test]
    fn range_edges_are_inclusive() {
        let eph = AnalyticEphemeris::default();
        assert!(eph.positions_at(JulianMoment::from_jd_ut(DEFAULT_MIN_JD)).is_ok());
        assert!(eph.positions_at(JulianMoment::from_jd_ut(DEFAULT_MAX_JD)).is_ok());
    }

    #[test]
    fn narrower_range_accepted_wider_rejected() {
        let narrow = SupportedRange::new(2_415_020.5, 2_488_069.5).unwrap();
        assert!(AnalyticEphemeris::new(narrow).is_ok());
        let wide = SupportedRange::new(2_000_000.5, 2_488_069.5).unwrap();
        assert!(AnalyticEphemeris::new(wide).is_err());
        assert!(SupportedRange::new(10.0, 5.0).is_err());
    }

    #[test]
    fn batch_matches_single() {
        let eph = AnalyticEphemeris::default();
        let m = JulianMoment::from_jd_ut(2_447_893.0);
        let all = eph.positions_at(m).unwrap();
        for (i, body) in ALL_BODIES.iter().enumerate() {
            assert_eq!(all[i], eph.position_at(m, *body).unwrap());
        }
    }

    #[test]
    fn sun_near_280_at_j2000() {
        let eph = AnalyticEphemeris::default();
        let sun = eph
            .position_at(JulianMoment::from_jd_ut(J2000_JD), CelestialBody::Sun)
            .unwrap();
        // Geometric J2000 longitude 280.37°, light time −20″.
        assert!((sun.longitude_deg - 280.37).abs() < 0.05, "Sun = {}", sun.longitude_deg);
        assert!((sun.distance_au - 0.9833).abs() < 0.001, "R = {}", sun.distance_au);
        assert!((sun.speed_deg_per_day - 1.019).abs() < 0.01);
    }

    #[test]
    fn frames_tagged() {
        let eph = AnalyticEphemeris::default();
        let all = eph.positions_at(JulianMoment::from_jd_ut(J2000_JD)).unwrap();
        for p in all {
            let expected = if p.body == CelestialBody::Moon {
                RawFrame::EclipticOfDate
            } else {
                RawFrame::EclipticJ2000
            };
            assert_eq!(p.frame, expected, "{}", p.body);
        }
    }
}
