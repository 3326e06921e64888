//! Mean orbital elements with secular rates and periodic corrections.
//!
//! Heliocentric positions in the J2000.0 ecliptic frame from the JPL
//! approximate-position elements (valid 3000 BC – 3000 AD). The outer
//! planets carry the additional `b, c, s, f` terms that absorb the
//! Jupiter–Saturn great inequality and similar long-period perturbations.
//!
//! Source: E.M. Standish & J.G. Williams, "Keplerian Elements for
//! Approximate Positions of the Major Planets", Tables 2a and 2b.

use crate::body::CelestialBody;
use crate::kepler::eccentric_anomaly_deg;

/// One row of mean elements at J2000.0 plus rates per Julian century.
///
/// Angles in degrees, `a` in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    pub a: f64,
    pub e: f64,
    pub inclination: f64,
    pub mean_longitude: f64,
    pub perihelion_longitude: f64,
    pub node_longitude: f64,
    pub a_rate: f64,
    pub e_rate: f64,
    pub inclination_rate: f64,
    pub mean_longitude_rate: f64,
    pub perihelion_longitude_rate: f64,
    pub node_longitude_rate: f64,
    /// Additional mean anomaly terms: `b·T² + c·cos(f·T) + s·sin(f·T)`.
    pub b: f64,
    pub c: f64,
    pub s: f64,
    pub f: f64,
}

/// Bodies carried by the element table, in row order of [`ELEMENT_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orbiter {
    Mercury,
    Venus,
    EarthMoonBarycenter,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Orbiter {
    /// The orbiter tracked for a planet. `None` for the Sun and Moon.
    pub const fn for_body(body: CelestialBody) -> Option<Self> {
        match body {
            CelestialBody::Mercury => Some(Self::Mercury),
            CelestialBody::Venus => Some(Self::Venus),
            CelestialBody::Mars => Some(Self::Mars),
            CelestialBody::Jupiter => Some(Self::Jupiter),
            CelestialBody::Saturn => Some(Self::Saturn),
            CelestialBody::Uranus => Some(Self::Uranus),
            CelestialBody::Neptune => Some(Self::Neptune),
            CelestialBody::Pluto => Some(Self::Pluto),
            CelestialBody::Sun | CelestialBody::Moon => None,
        }
    }

    const fn row(self) -> usize {
        match self {
            Self::Mercury => 0,
            Self::Venus => 1,
            Self::EarthMoonBarycenter => 2,
            Self::Mars => 3,
            Self::Jupiter => 4,
            Self::Saturn => 5,
            Self::Uranus => 6,
            Self::Neptune => 7,
            Self::Pluto => 8,
        }
    }

    /// Mean elements for this orbiter.
    pub fn elements(self) -> &'static MeanElements {
        &ELEMENT_TABLE[self.row()]
    }
}

const fn elements_row(
    base: [f64; 6],
    rates: [f64; 6],
    extra: [f64; 4],
) -> MeanElements {
    MeanElements {
        a: base[0],
        e: base[1],
        inclination: base[2],
        mean_longitude: base[3],
        perihelion_longitude: base[4],
        node_longitude: base[5],
        a_rate: rates[0],
        e_rate: rates[1],
        inclination_rate: rates[2],
        mean_longitude_rate: rates[3],
        perihelion_longitude_rate: rates[4],
        node_longitude_rate: rates[5],
        b: extra[0],
        c: extra[1],
        s: extra[2],
        f: extra[3],
    }
}

/// Table 2a (elements and rates) merged with Table 2b (b, c, s, f).
#[rustfmt::skip]
pub static ELEMENT_TABLE: [MeanElements; 9] = [
    //        a            e            I             L               ϖ              Ω
    elements_row([ 0.38709843, 0.20563661,  7.00559432, 252.25166724,  77.45771895,  48.33961819],
        [ 0.00000000, 0.00002123, -0.00590158, 149472.67486623, 0.15940013, -0.12214182],
        [0.0, 0.0, 0.0, 0.0]),
    elements_row([ 0.72332102, 0.00676399,  3.39777545, 181.97970850, 131.76755713,  76.67261496],
        [-0.00000026,-0.00005107,  0.00043494, 58517.81560260, 0.05679648, -0.27274174],
        [0.0, 0.0, 0.0, 0.0]),
    elements_row([ 1.00000018, 0.01673163, -0.00054346, 100.46691572, 102.93005885,  -5.11260389],
        [-0.00000003,-0.00003661, -0.01337178, 35999.37306329, 0.31795260, -0.24123856],
        [0.0, 0.0, 0.0, 0.0]),
    elements_row([ 1.52371243, 0.09336511,  1.85181869,  -4.56813164, -23.91744784,  49.71320984],
        [ 0.00000097, 0.00009149, -0.00724757, 19140.29934243, 0.45223625, -0.26852431],
        [0.0, 0.0, 0.0, 0.0]),
    elements_row([ 5.20248019, 0.04853590,  1.29861416,  34.33479152,  14.27495244, 100.29282654],
        [-0.00002864, 0.00018026, -0.00322699, 3034.90371757, 0.18199196,  0.13024619],
        [-0.00012452,  0.06064060, -0.35635438, 38.35125000]),
    elements_row([ 9.54149883, 0.05550825,  2.49424102,  50.07571329,  92.86136063, 113.63998702],
        [-0.00003065,-0.00032044,  0.00451969, 1222.11494724, 0.54179478, -0.25015002],
        [ 0.00025899, -0.13434469,  0.87320147, 38.35125000]),
    elements_row([19.18797948, 0.04685740,  0.77298127, 314.20276625, 172.43404441,  73.96250215],
        [-0.00020455,-0.00001550, -0.00180155,  428.49512595, 0.09266985,  0.05739699],
        [ 0.00058331, -0.97731848,  0.17689245,  7.67025000]),
    elements_row([30.06952752, 0.00895439,  1.77005520, 304.22289287,  46.68158724, 131.78635853],
        [ 0.00006447, 0.00000818,  0.00022400,  218.46515314, 0.01009938, -0.00606302],
        [-0.00041348,  0.68346318, -0.10162547,  7.67025000]),
    elements_row([39.48686035, 0.24885238, 17.14104260, 238.96535011, 224.09702598, 110.30167986],
        [ 0.00449751, 0.00006016,  0.00000501,  145.18042903, -0.00968827, -0.00809981],
        [-0.01262724,  0.0,         0.0,         0.0]),
];

impl MeanElements {
    /// Heliocentric position `[x, y, z]` in AU, J2000.0 ecliptic and equinox.
    ///
    /// `t` = Julian centuries of TT since J2000.0.
    pub fn heliocentric_position(&self, t: f64) -> [f64; 3] {
        let a = self.a + self.a_rate * t;
        let e = self.e + self.e_rate * t;
        let inc = (self.inclination + self.inclination_rate * t).to_radians();
        let l = self.mean_longitude + self.mean_longitude_rate * t;
        let peri = self.perihelion_longitude + self.perihelion_longitude_rate * t;
        let node = self.node_longitude + self.node_longitude_rate * t;

        let arg_peri = (peri - node).to_radians();
        let node = node.to_radians();

        let ft = (self.f * t).to_radians();
        let mean_anomaly = l - peri + self.b * t * t + self.c * ft.cos() + self.s * ft.sin();
        let ea = eccentric_anomaly_deg(mean_anomaly, e).to_radians();

        // Position in the orbital plane, x' toward perihelion.
        let xp = a * (ea.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ea.sin();

        let (sw, cw) = arg_peri.sin_cos();
        let (so, co) = node.sin_cos();
        let (si, ci) = inc.sin_cos();

        let x = (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp;
        let y = (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp;
        let z = (sw * si) * xp + (cw * si) * yp;
        [x, y, z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radius(v: [f64; 3]) -> f64 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn radii_stay_between_perihelion_and_aphelion() {
        for orbiter in [
            Orbiter::Mercury,
            Orbiter::Venus,
            Orbiter::EarthMoonBarycenter,
            Orbiter::Mars,
            Orbiter::Jupiter,
            Orbiter::Saturn,
            Orbiter::Uranus,
            Orbiter::Neptune,
            Orbiter::Pluto,
        ] {
            let el = orbiter.elements();
            for i in 0..20 {
                let t = -2.0 + i as f64 * 0.3;
                let r = radius(el.heliocentric_position(t));
                let a = el.a + el.a_rate * t;
                let e = el.e + el.e_rate * t;
                assert!(
                    r >= a * (1.0 - e) - 1e-9 && r <= a * (1.0 + e) + 1e-9,
                    "{orbiter:?} t={t}: r={r}"
                );
            }
        }
    }

    #[test]
    fn earth_in_winter_solstice_direction_at_j2000() {
        // At 2000-01-01 the Sun is near 280°, so the Earth is near 100° heliocentric.
        let v = Orbiter::EarthMoonBarycenter.elements().heliocentric_position(0.0);
        let lon = kundli_frames::normalize_360(v[1].atan2(v[0]).to_degrees());
        assert!((lon - 100.4).abs() < 0.5, "EMB lon = {lon}");
    }

    #[test]
    fn body_mapping() {
        assert_eq!(Orbiter::for_body(CelestialBody::Sun), None);
        assert_eq!(Orbiter::for_body(CelestialBody::Moon), None);
        assert_eq!(Orbiter::for_body(CelestialBody::Pluto), Some(Orbiter::Pluto));
    }

    #[test]
    fn orbiters_stay_near_ecliptic() {
        let v = Orbiter::Jupiter.elements().heliocentric_position(0.25);
        let lat = (v[2] / radius(v)).asin().to_degrees();
        assert!(lat.abs() < 1.4, "Jupiter lat = {lat}");
    }
}
