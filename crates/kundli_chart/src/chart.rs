//! The immutable chart value.

use std::ops::Index;

use kundli_ephem::{ALL_BODIES, CelestialBody};
use kundli_time::{CivilDateTime, JulianMoment};
use kundli_vedic_base::{
    GeoCoordinate, Graha, Houses, LunarNodes, Position, Rashi, ZodiacFrame, navamsa_rashi,
    rashi_from_longitude,
};
use serde::{Deserialize, Serialize};

/// One position per [`CelestialBody`], stored in [`ALL_BODIES`] order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyPositions([Position; 10]);

impl BodyPositions {
    pub(crate) fn new(positions: [Position; 10]) -> Self {
        Self(positions)
    }

    pub fn get(&self, body: CelestialBody) -> &Position {
        &self.0[body.index()]
    }

    /// `(body, position)` pairs in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (CelestialBody, &Position)> {
        ALL_BODIES.iter().copied().zip(self.0.iter())
    }
}

impl Index<CelestialBody> for BodyPositions {
    type Output = Position;

    fn index(&self, body: CelestialBody) -> &Position {
        self.get(body)
    }
}

/// A birth chart: everything derived from one moment and one place.
///
/// Produced only by [`crate::ChartBuilder`]; all parts share [`Chart::frame`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    birth: CivilDateTime,
    location: GeoCoordinate,
    moment: JulianMoment,
    frame: ZodiacFrame,
    positions: BodyPositions,
    houses: Houses,
    lunar_nodes: LunarNodes,
    ayanamsha_deg: Option<f64>,
}

impl Chart {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        birth: CivilDateTime,
        location: GeoCoordinate,
        moment: JulianMoment,
        frame: ZodiacFrame,
        positions: BodyPositions,
        houses: Houses,
        lunar_nodes: LunarNodes,
        ayanamsha_deg: Option<f64>,
    ) -> Self {
        Self {
            birth,
            location,
            moment,
            frame,
            positions,
            houses,
            lunar_nodes,
            ayanamsha_deg,
        }
    }

    pub fn birth(&self) -> &CivilDateTime {
        &self.birth
    }

    pub fn location(&self) -> &GeoCoordinate {
        &self.location
    }

    pub fn moment(&self) -> JulianMoment {
        self.moment
    }

    pub fn frame(&self) -> ZodiacFrame {
        self.frame
    }

    pub fn positions(&self) -> &BodyPositions {
        &self.positions
    }

    pub fn position(&self, body: CelestialBody) -> &Position {
        self.positions.get(body)
    }

    pub fn houses(&self) -> &Houses {
        &self.houses
    }

    pub fn lunar_nodes(&self) -> &LunarNodes {
        &self.lunar_nodes
    }

    /// Ayanamsha used for this chart; `None` when tropical.
    pub fn ayanamsha_deg(&self) -> Option<f64> {
        self.ayanamsha_deg
    }

    /// Position of a graha, the nodes included.
    pub fn graha(&self, graha: Graha) -> &Position {
        match graha.body() {
            Some(body) => self.positions.get(body),
            None if graha == Graha::Ketu => &self.lunar_nodes.ketu,
            None => &self.lunar_nodes.rahu,
        }
    }

    /// House (1..=12) occupied by a body.
    pub fn house_of(&self, body: CelestialBody) -> u8 {
        self.houses.house_of(self.position(body).longitude_deg)
    }

    /// House (1..=12) occupied by a graha.
    pub fn house_of_graha(&self, graha: Graha) -> u8 {
        self.houses.house_of(self.graha(graha).longitude_deg)
    }

    /// Sign rising at birth.
    pub fn lagna_rashi(&self) -> Rashi {
        rashi_from_longitude(self.houses.ascendant_deg).rashi
    }

    /// Navamsa sign of a body. Meaningful for sidereal charts.
    pub fn navamsa(&self, body: CelestialBody) -> Rashi {
        navamsa_rashi(self.position(body).longitude_deg)
    }
}
