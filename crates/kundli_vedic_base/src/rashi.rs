//! Rashi: the twelve 30° signs counted from Mesha at 0°.

use std::fmt;

use kundli_frames::normalize_360;
use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Span of one sign, degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// Signs in zodiacal order. Index matches [`Rashi::index`].
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0 for Mesha through 11 for Meena.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index` counted cyclically from Mesha.
    pub const fn from_index(index: usize) -> Self {
        ALL_RASHIS[index % 12]
    }

    /// The sign `n` places onward (n = 0 is this sign).
    pub const fn offset(self, n: usize) -> Self {
        Self::from_index(self.index() + n)
    }

    /// Inclusive count from `self` to `other`, 1..=12.
    ///
    /// A sign counts 1 to itself and 2 to the next sign.
    pub const fn count_to(self, other: Rashi) -> usize {
        (other.index() + 12 - self.index()) % 12 + 1
    }

    /// Ruling graha (classical, no outer planets).
    pub const fn lord(self) -> Graha {
        match self {
            Self::Mesha | Self::Vrischika => Graha::Mangal,
            Self::Vrishabha | Self::Tula => Graha::Shukra,
            Self::Mithuna | Self::Kanya => Graha::Buddh,
            Self::Karka => Graha::Chandra,
            Self::Simha => Graha::Surya,
            Self::Dhanu | Self::Meena => Graha::Guru,
            Self::Makara | Self::Kumbha => Graha::Shani,
        }
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl fmt::Display for Rashi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign of a longitude and the offset into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Degrees into the sign, [0, 30).
    pub degrees_in_rashi: f64,
}

/// Tolerance for landing on a division boundary, degrees.
///
/// `k * span / span` can come out one ulp under `k`; a longitude that
/// sits on a boundary belongs to the division it opens.
pub(crate) const BOUNDARY_EPS: f64 = 1e-9;

/// Index of the `span`-wide division holding `lon` (already in [0, 360)),
/// clamped to `0..count`.
pub(crate) fn division_index(lon: f64, span: f64, count: usize) -> usize {
    ((lon / span) + BOUNDARY_EPS).floor().clamp(0.0, (count - 1) as f64) as usize
}

/// Sign containing `longitude_deg` (any value; reduced mod 360).
pub fn rashi_from_longitude(longitude_deg: f64) -> RashiInfo {
    let lon = normalize_360(longitude_deg);
    let idx = division_index(lon, RASHI_SPAN_DEG, 12);
    RashiInfo {
        rashi: ALL_RASHIS[idx],
        degrees_in_rashi: (lon - idx as f64 * RASHI_SPAN_DEG).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sign_opens_at_its_cusp() {
        for k in 0..12 {
            let info = rashi_from_longitude(k as f64 * RASHI_SPAN_DEG);
            assert_eq!(info.rashi.index(), k, "cusp {k}");
            assert!(info.degrees_in_rashi < 1e-9, "cusp {k}: {}", info.degrees_in_rashi);
        }
    }

    #[test]
    fn boundaries() {
        assert_eq!(rashi_from_longitude(0.0).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(29.999_999).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(30.0).rashi, Rashi::Vrishabha);
        assert_eq!(rashi_from_longitude(359.999).rashi, Rashi::Meena);
        assert_eq!(rashi_from_longitude(-1.0).rashi, Rashi::Meena);
        assert_eq!(rashi_from_longitude(725.0).rashi, Rashi::Mesha);
    }

    #[test]
    fn degrees_within_sign() {
        let info = rashi_from_longitude(100.5);
        assert_eq!(info.rashi, Rashi::Karka);
        assert!((info.degrees_in_rashi - 10.5).abs() < 1e-12);
    }

    #[test]
    fn index_round_trips() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index(), i);
            assert_eq!(Rashi::from_index(i), *r);
        }
    }

    #[test]
    fn counting() {
        assert_eq!(Rashi::Mesha.count_to(Rashi::Mesha), 1);
        assert_eq!(Rashi::Mesha.count_to(Rashi::Vrishabha), 2);
        assert_eq!(Rashi::Vrishabha.count_to(Rashi::Mesha), 12);
        assert_eq!(Rashi::Simha.count_to(Rashi::Dhanu), 5);
        assert_eq!(Rashi::Meena.offset(2), Rashi::Vrishabha);
    }

    #[test]
    fn lords() {
        assert_eq!(Rashi::Simha.lord(), Graha::Surya);
        assert_eq!(Rashi::Kumbha.lord(), Graha::Shani);
        assert_eq!(Rashi::Vrischika.lord(), Graha::Mangal);
    }
}
