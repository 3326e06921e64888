//! Greenwich and local sidereal time.
//!
//! All functions take a Julian Day in UT and return degrees in [0, 360).
//! The house calculator feeds the apparent local sidereal time in as RAMC.
//!
//! Sources:
//! - GMST: IAU 1982 expression, Meeus "Astronomical Algorithms" Eq. 12.4.
//! - Equation of the equinoxes: Meeus Chapter 12, p. 88.

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Greenwich Mean Sidereal Time in degrees.
///
/// θ₀ = 280.46061837 + 360.98564736629 (JD − 2451545.0)
///      + 0.000387933 T² − T³ / 38710000
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Equation of the equinoxes in degrees: Δψ cos ε.
///
/// `delta_psi_deg` is nutation in longitude, `true_obliquity_deg` is ε.
pub fn equation_of_equinoxes_deg(delta_psi_deg: f64, true_obliquity_deg: f64) -> f64 {
    delta_psi_deg * true_obliquity_deg.to_radians().cos()
}

/// Greenwich Apparent Sidereal Time in degrees.
pub fn gast_deg(jd_ut: f64, delta_psi_deg: f64, true_obliquity_deg: f64) -> f64 {
    (gmst_deg(jd_ut) + equation_of_equinoxes_deg(delta_psi_deg, true_obliquity_deg))
        .rem_euclid(360.0)
}

/// Local sidereal time from a Greenwich sidereal time and east longitude.
pub fn local_sidereal_time_deg(greenwich_deg: f64, longitude_east_deg: f64) -> f64 {
    (greenwich_deg + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_12a() {
        // 1987 April 10, 0h UT: GMST = 13h10m46.3668s = 197.693195°
        let g = gmst_deg(2_446_895.5);
        assert!((g - 197.693_195).abs() < 1e-5, "GMST = {g}");
    }

    #[test]
    fn meeus_example_12b() {
        // 1987 April 10, 19h21m00s UT: GMST = 128.7378734°
        let g = gmst_deg(2_446_896.306_25);
        assert!((g - 128.737_873_4).abs() < 1e-5, "GMST = {g}");
    }

    #[test]
    fn gast_meeus_example_12a() {
        // Δψ = −3.788″, ε = 23°26′36.85″ → GAST = 13h10m46.1351s
        let gast = gast_deg(2_446_895.5, -3.788 / 3600.0, 23.443_569);
        let expected = (13.0 + 10.0 / 60.0 + 46.1351 / 3600.0) * 15.0;
        assert!((gast - expected).abs() < 1e-5, "GAST = {gast}");
    }

    #[test]
    fn advances_one_sidereal_day() {
        let g1 = gmst_deg(2_451_545.0);
        let g2 = gmst_deg(2_451_546.0);
        let step = (g2 - g1).rem_euclid(360.0);
        assert!((step - 0.985_647).abs() < 1e-4, "daily step = {step}");
    }

    #[test]
    fn lst_east_positive() {
        assert!((local_sidereal_time_deg(350.0, 20.0) - 10.0).abs() < 1e-12);
        assert!((local_sidereal_time_deg(10.0, -20.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn range() {
        for &jd in &[2_378_496.5, 2_451_544.5, 2_460_000.5, 2_598_007.5] {
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g), "GMST out of range: {g}");
        }
    }
}
