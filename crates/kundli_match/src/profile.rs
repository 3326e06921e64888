//! The Moon placement that every koota is read from.

use kundli_chart::Chart;
use kundli_ephem::CelestialBody;
use kundli_frames::normalize_360;
use kundli_vedic_base::{
    AyanamshaSystem, FrameMode, Nakshatra, Rashi, ayanamsha_deg, nakshatra_from_longitude,
    rashi_from_longitude,
};
use serde::{Deserialize, Serialize};

/// Sidereal Moon sign and mansion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonProfile {
    /// Sidereal longitude, degrees.
    pub longitude_deg: f64,
    pub rashi: Rashi,
    /// Degrees into `rashi`; splits Dhanu and Makara for vashya.
    pub degrees_in_rashi: f64,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

impl MoonProfile {
    pub fn from_sidereal_longitude(longitude_deg: f64) -> Self {
        let lon = normalize_360(longitude_deg);
        let r = rashi_from_longitude(lon);
        let n = nakshatra_from_longitude(lon);
        Self {
            longitude_deg: lon,
            rashi: r.rashi,
            degrees_in_rashi: r.degrees_in_rashi,
            nakshatra: n.nakshatra,
            pada: n.pada,
        }
    }

    /// Moon of a chart. Tropical charts are mapped with Lahiri.
    pub fn from_chart(chart: &Chart) -> Self {
        let moon = chart.position(CelestialBody::Moon).longitude_deg;
        let frame = chart.frame();
        let sidereal = match frame.mode {
            FrameMode::Sidereal(_) => moon,
            FrameMode::Tropical => {
                let t = chart.moment().centuries_tt();
                moon - ayanamsha_deg(AyanamshaSystem::Lahiri, t, frame.nutation)
            }
        };
        Self::from_sidereal_longitude(sidereal)
    }
}
