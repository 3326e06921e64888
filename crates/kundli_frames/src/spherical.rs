//! Cartesian ↔ spherical coordinate conversion.

use crate::angle::normalize_360;

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360), measured from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from origin, in the unit of the input vector (AU for ephemerides).
    pub distance: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
///
/// The zero vector maps to all-zero coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }
    SphericalCoords {
        lon_deg: normalize_360(y.atan2(x).to_degrees()),
        lat_deg: (z / r).clamp(-1.0, 1.0).asin().to_degrees(),
        distance: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let lon = s.lon_deg.to_radians();
    let lat = s.lat_deg.to_radians();
    let rc = s.distance * lat.cos();
    [rc * lon.cos(), rc * lon.sin(), s.distance * lat.sin()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes() {
        let s = cartesian_to_spherical(&[0.0, 2.0, 0.0]);
        assert!((s.lon_deg - 90.0).abs() < 1e-12);
        assert!(s.lat_deg.abs() < 1e-12);
        assert!((s.distance - 2.0).abs() < 1e-12);

        let s = cartesian_to_spherical(&[0.0, -1.0, 0.0]);
        assert!((s.lon_deg - 270.0).abs() < 1e-12);

        let s = cartesian_to_spherical(&[0.0, 0.0, -3.0]);
        assert!((s.lat_deg + 90.0).abs() < 1e-12);
    }

    #[test]
    fn zero_vector() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 0.0]);
        assert_eq!(s.distance, 0.0);
    }

    #[test]
    fn back_and_forth() {
        let v = [0.3, -1.2, 0.05];
        let s = cartesian_to_spherical(&v);
        let w = spherical_to_cartesian(&s);
        for i in 0..3 {
            assert!((v[i] - w[i]).abs() < 1e-12, "component {i}: {} vs {}", v[i], w[i]);
        }
    }
}
