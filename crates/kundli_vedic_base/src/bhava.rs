//! House (bhava) division.
//!
//! Every system fixes cusp 1 at the ascendant. Quadrant systems also fix
//! cusp 10 at the MC; Equal ignores the MC entirely. Intermediate cusps are
//! found on the tropical ecliptic of date and mapped into the chart frame
//! afterwards, so sidereal houses are the tropical ones shifted by the
//! ayanamsha.
//!
//! Sources: Meeus ch. 13 for the ascendant; Placidus and Koch semi-arc
//! formulations as in Holden, "The Elements of House Division" (1977).

use std::fmt;
use std::str::FromStr;

use kundli_frames::{forward_arc_deg, normalize_360};
use kundli_time::JulianMoment;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::lagna::{Angles, angles};
use crate::location::GeoCoordinate;
use crate::zodiac::{ZodiacFrame, ZodiacTransformer};

/// Beyond this |latitude| the horizon is too close to the equator for any
/// system to be meaningful.
pub const POLAR_LIMIT_DEG: f64 = 89.9;

const SEMI_ARC_TOLERANCE_DEG: f64 = 1e-10;
const SEMI_ARC_MAX_ITERATIONS: usize = 100;

/// Supported house systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystemKind {
    /// Time trisection of each point's own semi-arc.
    #[default]
    Placidus,
    /// Time trisection of the MC degree's semi-arc.
    Koch,
    /// Space trisection of each quadrant (Sripati).
    #[serde(alias = "sripati")]
    Porphyry,
    /// 30° from the ascendant.
    Equal,
    /// 30° steps along the celestial equator.
    Regiomontanus,
    /// 30° steps along the prime vertical.
    Campanus,
}

pub const ALL_HOUSE_SYSTEMS: [HouseSystemKind; 6] = [
    HouseSystemKind::Placidus,
    HouseSystemKind::Koch,
    HouseSystemKind::Porphyry,
    HouseSystemKind::Equal,
    HouseSystemKind::Regiomontanus,
    HouseSystemKind::Campanus,
];

impl HouseSystemKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "Placidus",
            Self::Koch => "Koch",
            Self::Porphyry => "Porphyry",
            Self::Equal => "Equal",
            Self::Regiomontanus => "Regiomontanus",
            Self::Campanus => "Campanus",
        }
    }

    /// Systems that need every ecliptic degree to rise and set.
    pub const fn uses_semi_arcs(self) -> bool {
        matches!(self, Self::Placidus | Self::Koch)
    }

    pub const fn all() -> &'static [HouseSystemKind] {
        &ALL_HOUSE_SYSTEMS
    }
}

impl fmt::Display for HouseSystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystemKind {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placidus" => Ok(Self::Placidus),
            "koch" => Ok(Self::Koch),
            "porphyry" | "sripati" => Ok(Self::Porphyry),
            "equal" => Ok(Self::Equal),
            "regiomontanus" => Ok(Self::Regiomontanus),
            "campanus" => Ok(Self::Campanus),
            _ => Err(VedicError::UnknownName {
                what: "house system",
                name: s.to_string(),
            }),
        }
    }
}

/// Twelve cusps plus the angles, all in one zodiac frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Houses {
    pub system: HouseSystemKind,
    pub frame: ZodiacFrame,
    pub ascendant_deg: f64,
    pub mc_deg: f64,
    /// `cusps[0]` is house 1.
    pub cusps: [f64; 12],
}

impl Houses {
    /// Cusp of house `n` (1..=12, taken cyclically).
    pub fn cusp(&self, n: usize) -> f64 {
        self.cusps[(n + 11) % 12]
    }

    /// House number (1..=12) containing `longitude_deg`.
    ///
    /// A longitude exactly on a cusp belongs to the house that cusp opens.
    pub fn house_of(&self, longitude_deg: f64) -> u8 {
        let lon = normalize_360(longitude_deg);
        for i in 0..12 {
            let start = self.cusps[i];
            let end = self.cusps[(i + 1) % 12];
            if forward_arc_deg(start, lon) < forward_arc_deg(start, end) {
                return i as u8 + 1;
            }
        }
        // Only reachable when rounding leaves a hairline gap at a cusp.
        12
    }

    /// Ascendant on cusp 1, all values finite, cusps strictly increasing
    /// once around the circle.
    pub fn check(&self, latitude_deg: f64) -> Result<(), VedicError> {
        let fail = |reason| VedicError::HouseComputation {
            system: self.system,
            latitude_deg,
            reason,
        };
        if !self.ascendant_deg.is_finite()
            || !self.mc_deg.is_finite()
            || self.cusps.iter().any(|c| !c.is_finite())
        {
            return Err(fail("non-finite cusp"));
        }
        if self.cusps[0] != self.ascendant_deg {
            return Err(fail("ascendant is not cusp 1"));
        }
        let mut total = 0.0;
        for i in 0..12 {
            let arc = forward_arc_deg(self.cusps[i], self.cusps[(i + 1) % 12]);
            if arc <= 0.0 {
                return Err(fail("cusps not strictly increasing"));
            }
            total += arc;
        }
        if (total - 360.0).abs() > 1e-6 {
            return Err(fail("cusps wrap more than once"));
        }
        Ok(())
    }
}

/// Cusps and angles for `kind` at a place and moment, in the transformer's
/// frame.
pub fn compute_houses(
    moment: JulianMoment,
    location: &GeoCoordinate,
    kind: HouseSystemKind,
    transformer: &ZodiacTransformer,
) -> Result<Houses, VedicError> {
    let lat = location.latitude_deg;
    let fail = |reason| VedicError::HouseComputation {
        system: kind,
        latitude_deg: lat,
        reason,
    };

    if lat.abs() >= POLAR_LIMIT_DEG {
        return Err(fail("horizon degenerate near the pole"));
    }

    let sky = angles(moment, location, transformer.nutation());
    if kind.uses_semi_arcs() && lat.abs() >= 90.0 - sky.obliquity_deg {
        return Err(fail("ecliptic degrees are circumpolar"));
    }

    let tropical = match kind {
        HouseSystemKind::Equal => equal_cusps(sky.ascendant_deg),
        HouseSystemKind::Porphyry => porphyry_cusps(&sky),
        HouseSystemKind::Regiomontanus => regiomontanus_cusps(&sky, lat),
        HouseSystemKind::Campanus => campanus_cusps(&sky, lat),
        HouseSystemKind::Koch => koch_cusps(&sky, lat),
        HouseSystemKind::Placidus => {
            placidus_cusps(&sky, lat).ok_or_else(|| fail("semi-arc iteration did not converge"))?
        }
    };

    let shift = |lon: f64| transformer.tropical_to_frame_deg(lon, moment);
    let ascendant_deg = shift(sky.ascendant_deg);
    let mut cusps = tropical.map(shift);
    // Same input through the same arithmetic, but pin it exactly.
    cusps[0] = ascendant_deg;

    let houses = Houses {
        system: kind,
        frame: transformer.frame(),
        ascendant_deg,
        mc_deg: shift(sky.mc_deg),
        cusps,
    };
    houses.check(lat)?;
    Ok(houses)
}

/// Ecliptic point whose oblique ascension under pole `pole_deg` is `h_deg`.
///
/// With `pole = latitude` and `h = RAMC + 90°` this is the ascendant; with
/// `pole = 0` and `h = RAMC` it is the MC.
fn ecliptic_on_circle(h_deg: f64, pole_deg: f64, obliquity_deg: f64) -> f64 {
    let (sin_h, cos_h) = h_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();
    let tan_p = pole_deg.to_radians().tan();
    normalize_360(sin_h.atan2(cos_h * cos_e - tan_p * sin_e).to_degrees())
}

/// Ecliptic longitude with right ascension `ra_deg`.
fn ecliptic_from_ra(ra_deg: f64, obliquity_deg: f64) -> f64 {
    let (sin_a, cos_a) = ra_deg.to_radians().sin_cos();
    normalize_360(sin_a.atan2(cos_a * obliquity_deg.to_radians().cos()).to_degrees())
}

/// Ascensional difference of the ecliptic point at right ascension `ra_deg`.
fn ascensional_difference_deg(ra_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    let tan_dec = obliquity_deg.to_radians().tan() * ra_deg.to_radians().sin();
    (latitude_deg.to_radians().tan() * tan_dec).asin().to_degrees()
}

/// Fill cusps 4–9 as opposites of 10–3.
fn with_opposites(asc: f64, mc: f64, c11: f64, c12: f64, c2: f64, c3: f64) -> [f64; 12] {
    let opp = |x: f64| normalize_360(x + 180.0);
    [
        asc,
        c2,
        c3,
        opp(mc),
        opp(c11),
        opp(c12),
        opp(asc),
        opp(c2),
        opp(c3),
        mc,
        c11,
        c12,
    ]
}

fn equal_cusps(asc: f64) -> [f64; 12] {
    std::array::from_fn(|i| normalize_360(asc + 30.0 * i as f64))
}

fn porphyry_cusps(sky: &Angles) -> [f64; 12] {
    let asc = sky.ascendant_deg;
    let mc = sky.mc_deg;
    let lower = forward_arc_deg(asc, normalize_360(mc + 180.0)) / 3.0;
    let upper = forward_arc_deg(mc, asc) / 3.0;
    with_opposites(
        asc,
        mc,
        normalize_360(mc + upper),
        normalize_360(mc + 2.0 * upper),
        normalize_360(asc + lower),
        normalize_360(asc + 2.0 * lower),
    )
}

fn regiomontanus_cusps(sky: &Angles, lat: f64) -> [f64; 12] {
    let tan_phi = lat.to_radians().tan();
    let cusp = |offset: f64| {
        let pole = (tan_phi * offset.to_radians().sin()).atan().to_degrees();
        ecliptic_on_circle(sky.ramc_deg + offset, pole, sky.obliquity_deg)
    };
    with_opposites(
        sky.ascendant_deg,
        sky.mc_deg,
        cusp(30.0),
        cusp(60.0),
        cusp(120.0),
        cusp(150.0),
    )
}

fn campanus_cusps(sky: &Angles, lat: f64) -> [f64; 12] {
    let (sin_phi, cos_phi) = lat.to_radians().sin_cos();
    // `zenith_deg` is the distance from the zenith along the prime vertical.
    let cusp = |zenith_deg: f64| {
        let (sin_a, cos_a) = zenith_deg.to_radians().sin_cos();
        let h = sky.ramc_deg + (cos_phi * sin_a).atan2(cos_a).to_degrees();
        let pole = (sin_a * sin_phi).asin().to_degrees();
        ecliptic_on_circle(h, pole, sky.obliquity_deg)
    };
    with_opposites(
        sky.ascendant_deg,
        sky.mc_deg,
        cusp(30.0),
        cusp(60.0),
        cusp(120.0),
        cusp(150.0),
    )
}

fn koch_cusps(sky: &Angles, lat: f64) -> [f64; 12] {
    let mc_ra = sky.ramc_deg;
    let third = ascensional_difference_deg(mc_ra, sky.obliquity_deg, lat) / 3.0;
    let cusp = |h: f64| ecliptic_on_circle(sky.ramc_deg + h, lat, sky.obliquity_deg);
    with_opposites(
        sky.ascendant_deg,
        sky.mc_deg,
        cusp(30.0 - 2.0 * third),
        cusp(60.0 - third),
        cusp(120.0 + third),
        cusp(150.0 + 2.0 * third),
    )
}

/// Solve for the right ascension where a point sits at `fraction` of its
/// diurnal (above horizon) or nocturnal semi-arc, east of the meridian.
fn placidus_ra(sky: &Angles, lat: f64, fraction: f64, diurnal: bool) -> Option<f64> {
    let ra_for = |ad: f64| {
        if diurnal {
            sky.ramc_deg + fraction * (90.0 + ad)
        } else {
            sky.ramc_deg + 180.0 - fraction * (90.0 - ad)
        }
    };
    let mut ra = ra_for(0.0);
    for _ in 0..SEMI_ARC_MAX_ITERATIONS {
        let ad = ascensional_difference_deg(ra, sky.obliquity_deg, lat);
        if !ad.is_finite() {
            return None;
        }
        let next = ra_for(ad);
        if (next - ra).abs() < SEMI_ARC_TOLERANCE_DEG {
            return Some(next);
        }
        ra = next;
    }
    None
}

fn placidus_cusps(sky: &Angles, lat: f64) -> Option<[f64; 12]> {
    let eps = sky.obliquity_deg;
    let c11 = ecliptic_from_ra(placidus_ra(sky, lat, 1.0 / 3.0, true)?, eps);
    let c12 = ecliptic_from_ra(placidus_ra(sky, lat, 2.0 / 3.0, true)?, eps);
    let c2 = ecliptic_from_ra(placidus_ra(sky, lat, 2.0 / 3.0, false)?, eps);
    let c3 = ecliptic_from_ra(placidus_ra(sky, lat, 1.0 / 3.0, false)?, eps);
    Some(with_opposites(sky.ascendant_deg, sky.mc_deg, c11, c12, c2, c3))
}
