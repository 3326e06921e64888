//! Obliquity of the ecliptic.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 22.2 (IAU 1980
//! polynomial, adequate over ±2000 years around J2000).

use crate::nutation::nutation;

/// Mean obliquity at J2000.0: 23°26′21.448″.
pub const OBLIQUITY_J2000_DEG: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;

/// Mean obliquity of date in degrees.
///
/// ε₀ = 23°26′21.448″ − 46.8150″T − 0.00059″T² + 0.001813″T³,
/// `t` in Julian centuries of TT since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = -46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    OBLIQUITY_J2000_DEG + arcsec / 3600.0
}

/// True obliquity of date (mean + nutation in obliquity) in degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation(t).delta_epsilon_deg()
}
