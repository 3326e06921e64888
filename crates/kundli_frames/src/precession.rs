//! Precession in ecliptic coordinates.
//!
//! Two quantities live here:
//! - p_A, the IAU 2006 general precession in longitude. It drives every
//!   ayanamsha (a J2000 reference value plus accumulated precession).
//! - The rigorous rotation of ecliptic coordinates from the J2000.0 ecliptic
//!   and equinox to those of date, used to move ephemeris output into the
//!   frame of the chart moment.
//!
//! Sources: Capitaine, Wallace & Chapront 2003, A&A 412, 567 (Table 1);
//! Meeus, "Astronomical Algorithms" (2nd ed), Eq. 21.5–21.7 with T = 0.

/// IAU 2006 general precession in ecliptic longitude, in arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0. The dominant linear term is
/// ~5028.80″/century ≈ 1.3969°/century.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// [`general_precession_longitude_arcsec`] in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// Move ecliptic longitude/latitude (degrees) from the J2000.0 ecliptic and
/// mean equinox to the ecliptic and mean equinox of date `t`.
///
/// Returns `(longitude_deg, latitude_deg)` with longitude in [0, 360).
pub fn precess_ecliptic_from_j2000(lon_deg: f64, lat_deg: f64, t: f64) -> (f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;

    // Inclination of the ecliptic of date on the J2000 ecliptic.
    let eta = ((47.0029 * t - 0.03302 * t2 + 0.000060 * t3) / 3600.0).to_radians();
    // Longitude of its ascending node, measured in the J2000 frame.
    let big_pi = (174.876_384 + (-869.8089 * t + 0.03536 * t2) / 3600.0).to_radians();
    // Accumulated precession in longitude.
    let p = ((5029.0966 * t + 1.11113 * t2 - 0.000006 * t3) / 3600.0).to_radians();

    let lon0 = lon_deg.to_radians();
    let lat0 = lat_deg.to_radians();

    let a = eta.cos() * lat0.cos() * (big_pi - lon0).sin() - eta.sin() * lat0.sin();
    let b = lat0.cos() * (big_pi - lon0).cos();
    let c = eta.cos() * lat0.sin() + eta.sin() * lat0.cos() * (big_pi - lon0).sin();

    let lon = p + big_pi - a.atan2(b);
    let lat = c.clamp(-1.0, 1.0).asin();

    (crate::angle::normalize_360(lon.to_degrees()), lat.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn rate_per_year() {
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p_A(0.01) = {p}");
    }

    #[test]
    fn identity_at_j2000() {
        let (lon, lat) = precess_ecliptic_from_j2000(123.456, -4.5, 0.0);
        approx::assert_abs_diff_eq!(lon, 123.456, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(lat, -4.5, epsilon = 1e-9);
    }

    #[test]
    fn ecliptic_point_shifts_by_general_precession() {
        // For β = 0 the longitude shift stays within a few arcsec of p_A.
        for &lon0 in &[0.0, 90.0, 180.0, 270.0] {
            let (lon, lat) = precess_ecliptic_from_j2000(lon0, 0.0, 1.0);
            let shift = crate::angle::normalize_180(lon - lon0);
            let p_a = general_precession_longitude_deg(1.0);
            assert!((shift - p_a).abs() < 0.02, "lon0={lon0}: shift {shift} vs {p_a}");
            assert!(lat.abs() < 0.02, "lon0={lon0}: lat {lat}");
        }
    }

    #[test]
    fn backward_in_time_reverses_sign() {
        let (lon, _) = precess_ecliptic_from_j2000(100.0, 0.0, -1.0);
        assert!(lon < 100.0, "lon = {lon}");
    }
}
