//! Kepler's equation solver.
//!
//! Source: Standish & Williams, "Keplerian Elements for Approximate
//! Positions of the Major Planets" (JPL), Section 8.1.

/// Convergence tolerance on the eccentric anomaly, degrees.
const TOLERANCE_DEG: f64 = 1e-9;

/// Iteration cap. Planetary eccentricities converge in fewer than 6 steps.
const MAX_ITERATIONS: usize = 30;

/// Solve M = E − e·sin E for the eccentric anomaly E.
///
/// `mean_anomaly_deg` may be any angle; it is reduced to [-180, 180].
/// Returns E in degrees. Requires 0 ≤ e < 1.
pub fn eccentric_anomaly_deg(mean_anomaly_deg: f64, e: f64) -> f64 {
    let m = kundli_frames::normalize_180(mean_anomaly_deg);
    let e_star = e.to_degrees();

    let mut ea = m + e_star * m.to_radians().sin();
    for _ in 0..MAX_ITERATIONS {
        let delta_m = m - (ea - e_star * ea.to_radians().sin());
        let delta_e = delta_m / (1.0 - e * ea.to_radians().cos());
        ea += delta_e;
        if delta_e.abs() <= TOLERANCE_DEG {
            break;
        }
    }
    ea
}
