//! Frame conversion helpers for chart computations.
//!
//! Provides the mean/true obliquity of the ecliptic, a truncated nutation
//! series, ecliptic precession from J2000.0 to the equinox of date, and
//! Cartesian ↔ spherical conversion.

pub mod angle;
pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod spherical;

pub use angle::{forward_arc_deg, normalize_180, normalize_360};
pub use nutation::{Nutation, fundamental_arguments_deg, nutation};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg, true_obliquity_deg};
pub use precession::{
    general_precession_longitude_arcsec, general_precession_longitude_deg,
    precess_ecliptic_from_j2000,
};
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};
