//! Local sidereal time, ascendant and midheaven.
//!
//! All angles here are tropical, referred to the equinox of date; the
//! house module maps them into the chart frame.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 12 and 13.

use kundli_frames::{mean_obliquity_deg, normalize_360, nutation};
use kundli_time::{JulianMoment, gast_deg, gmst_deg, local_sidereal_time_deg};
use serde::{Deserialize, Serialize};

use crate::location::GeoCoordinate;

/// The sky's orientation at one place and moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    /// Right ascension of the meridian (local sidereal time), degrees.
    pub ramc_deg: f64,
    /// Obliquity of the ecliptic, degrees (true when nutation is applied).
    pub obliquity_deg: f64,
    pub ascendant_deg: f64,
    pub mc_deg: f64,
}

/// Ecliptic longitude rising on the eastern horizon.
pub fn ascendant_deg(ramc_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    let (sin_t, cos_t) = ramc_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();
    let tan_phi = latitude_deg.to_radians().tan();
    normalize_360(
        cos_t
            .atan2(-(sin_t * cos_e + tan_phi * sin_e))
            .to_degrees(),
    )
}

/// Ecliptic longitude culminating on the upper meridian.
pub fn mc_deg(ramc_deg: f64, obliquity_deg: f64) -> f64 {
    let (sin_t, cos_t) = ramc_deg.to_radians().sin_cos();
    normalize_360(sin_t.atan2(cos_t * obliquity_deg.to_radians().cos()).to_degrees())
}

/// Sidereal time, obliquity, ascendant and MC at a location.
///
/// With `apparent` set, uses apparent sidereal time and true obliquity;
/// otherwise mean values.
pub fn angles(moment: JulianMoment, location: &GeoCoordinate, apparent: bool) -> Angles {
    let t = moment.centuries_tt();
    let eps0 = mean_obliquity_deg(t);
    let (greenwich, eps) = if apparent {
        let nut = nutation(t);
        let eps = eps0 + nut.delta_epsilon_deg();
        (gast_deg(moment.jd_ut(), nut.delta_psi_deg(), eps), eps)
    } else {
        (gmst_deg(moment.jd_ut()), eps0)
    };
    let ramc = local_sidereal_time_deg(greenwich, location.longitude_deg);
    Angles {
        ramc_deg: ramc,
        obliquity_deg: eps,
        ascendant_deg: ascendant_deg(ramc, eps, location.latitude_deg),
        mc_deg: mc_deg(ramc, eps),
    }
}
