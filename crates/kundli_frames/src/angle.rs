//! Angle normalisation shared by every crate that works in degrees.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, 180] degrees.
pub fn normalize_180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Arc walked counter-clockwise (increasing longitude) from `from` to `to`, in [0, 360).
pub fn forward_arc_deg(from: f64, to: f64) -> f64 {
    normalize_360(to - from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_into_range() {
        assert_eq!(normalize_360(0.0), 0.0);
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn tiny_negative_never_yields_360() {
        let r = normalize_360(-1e-17);
        assert!((0.0..360.0).contains(&r), "{r}");
    }

    #[test]
    fn signed_range() {
        assert!((normalize_180(190.0) + 170.0).abs() < 1e-12);
        assert!((normalize_180(180.0) - 180.0).abs() < 1e-12);
        assert!((normalize_180(-190.0) - 170.0).abs() < 1e-12);
    }

    #[test]
    fn forward_arc_across_zero() {
        assert!((forward_arc_deg(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((forward_arc_deg(10.0, 350.0) - 340.0).abs() < 1e-12);
    }
}
