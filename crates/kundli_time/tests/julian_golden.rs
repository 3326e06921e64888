//! Golden and property tests for civil → Julian Day conversion.
//!
//! Reference values: Meeus, "Astronomical Algorithms", Chapter 7 examples,
//! and the USNO Julian Date converter.

use approx::assert_abs_diff_eq;
use kundli_time::{CivilDateTime, J2000_JD, SECONDS_PER_DAY, TimeError};

fn jd(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: f64) -> f64 {
    CivilDateTime::new(y, mo, d, h, mi, s)
        .to_julian_moment()
        .unwrap()
        .jd_ut()
}

#[test]
fn reference_dates() {
    assert_eq!(jd(2000, 1, 1, 12, 0, 0.0), J2000_JD);
    assert_abs_diff_eq!(jd(1999, 1, 1, 0, 0, 0.0), 2_451_179.5, epsilon = 1e-9);
    assert_abs_diff_eq!(jd(1987, 6, 19, 12, 0, 0.0), 2_446_966.0, epsilon = 1e-9);
    assert_abs_diff_eq!(jd(1900, 1, 1, 0, 0, 0.0), 2_415_020.5, epsilon = 1e-9);
    assert_abs_diff_eq!(jd(1800, 1, 1, 0, 0, 0.0), 2_378_496.5, epsilon = 1e-9);
}

#[test]
fn one_second_step() {
    let cases = [
        (1990, 1, 1, 11, 59, 58.0),
        (1800, 3, 1, 0, 0, 0.0),
        (2400, 12, 31, 23, 59, 58.0),
        (2024, 2, 29, 6, 30, 15.0),
    ];
    for (y, mo, d, h, mi, s) in cases {
        let a = jd(y, mo, d, h, mi, s);
        let b = jd(y, mo, d, h, mi, s + 1.0);
        assert_abs_diff_eq!(b - a, 1.0 / SECONDS_PER_DAY, epsilon = 1e-9);
    }
}

#[test]
fn monotonic_across_boundaries() {
    let ordered = [
        CivilDateTime::new(1899, 12, 31, 23, 59, 59.5),
        CivilDateTime::new(1900, 1, 1, 0, 0, 0.0),
        CivilDateTime::new(1900, 2, 28, 23, 59, 59.0),
        CivilDateTime::new(1900, 3, 1, 0, 0, 0.0),
        CivilDateTime::new(2000, 2, 29, 12, 0, 0.0),
        CivilDateTime::new(2000, 3, 1, 0, 0, 0.0),
        CivilDateTime::new(2000, 12, 31, 23, 59, 59.0),
        CivilDateTime::new(2001, 1, 1, 0, 0, 0.0),
    ];
    let jds: Vec<f64> = ordered
        .iter()
        .map(|c| c.to_julian_moment().unwrap().jd_ut())
        .collect();
    for pair in jds.windows(2) {
        assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
    }
}

#[test]
fn monotonic_hourly_sweep() {
    let mut prev = f64::NEG_INFINITY;
    for month in 1..=12 {
        for day in [1, 15, 28] {
            for hour in 0..24 {
                let j = jd(1990, month, day, hour, 0, 0.0);
                assert!(j > prev, "{month}-{day} {hour}h");
                prev = j;
            }
        }
    }
}

#[test]
fn invalid_hour_scenario() {
    let err = CivilDateTime::new(1990, 1, 1, 25, 0, 0.0)
        .to_julian_moment()
        .unwrap_err();
    assert!(matches!(err, TimeError::InvalidTime { .. }));
}
