//! Navamsa (D9): each sign split into nine parts of 3°20′.
//!
//! Counting continues unbroken through the zodiac, so fire signs start
//! from Mesha, earth signs from Makara, air signs from Tula and water
//! signs from Karka.

use kundli_frames::normalize_360;

use crate::rashi::{Rashi, division_index};

/// One navamsa, degrees.
pub const NAVAMSA_SPAN_DEG: f64 = 30.0 / 9.0;

/// Navamsa sign of a sidereal longitude.
pub fn navamsa_rashi(sidereal_lon_deg: f64) -> Rashi {
    let lon = normalize_360(sidereal_lon_deg);
    let part = division_index(lon, NAVAMSA_SPAN_DEG, 108);
    Rashi::from_index(part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_starting_signs() {
        assert_eq!(navamsa_rashi(0.5), Rashi::Mesha);
        assert_eq!(navamsa_rashi(30.5), Rashi::Makara);
        assert_eq!(navamsa_rashi(60.5), Rashi::Tula);
        assert_eq!(navamsa_rashi(90.5), Rashi::Karka);
    }

    #[test]
    fn vargottama_middle_of_movable_sign() {
        // 13°20′–16°40′ Mesha is Mesha's fifth navamsa: Simha.
        assert_eq!(navamsa_rashi(15.0), Rashi::Simha);
        // Last navamsa of Meena is Meena.
        assert_eq!(navamsa_rashi(359.9), Rashi::Meena);
    }

    #[test]
    fn each_part_opens_at_its_boundary() {
        for k in 0..108 {
            assert_eq!(navamsa_rashi(k as f64 * NAVAMSA_SPAN_DEG).index(), k % 12, "part {k}");
        }
    }
}
