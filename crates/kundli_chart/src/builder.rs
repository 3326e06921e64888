//! Chart assembly.
//!
//! Stages run in a fixed order: civil time to Julian moment, all ten raw
//! positions, zodiac transform, houses, lunar nodes, then a frame
//! consistency check. The first failure aborts the build; nothing partial
//! is returned.

use std::sync::Arc;

use kundli_ephem::EphemerisProvider;
use kundli_time::CivilDateTime;
use kundli_vedic_base::{
    FrameMode, GeoCoordinate, HouseSystemKind, NodeMode, Position, ZodiacTransformer,
    compute_houses, lunar_nodes,
};

use crate::chart::{BodyPositions, Chart};
use crate::error::{ChartError, ChartStage};

/// Configures and runs chart construction.
///
/// Cheap to clone; the provider is shared.
#[derive(Clone)]
pub struct ChartBuilder {
    provider: Arc<dyn EphemerisProvider>,
    frame_mode: FrameMode,
    house_system: HouseSystemKind,
    nutation: bool,
    node_mode: NodeMode,
}

impl std::fmt::Debug for ChartBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartBuilder")
            .field("supported_range", &self.provider.supported_range())
            .field("frame_mode", &self.frame_mode)
            .field("house_system", &self.house_system)
            .field("nutation", &self.nutation)
            .field("node_mode", &self.node_mode)
            .finish()
    }
}

impl ChartBuilder {
    /// Sidereal Lahiri, Placidus, nutation on, mean nodes.
    pub fn new(provider: Arc<dyn EphemerisProvider>) -> Self {
        Self {
            provider,
            frame_mode: FrameMode::default(),
            house_system: HouseSystemKind::default(),
            nutation: true,
            node_mode: NodeMode::default(),
        }
    }

    pub fn frame_mode(mut self, frame_mode: FrameMode) -> Self {
        self.frame_mode = frame_mode;
        self
    }

    pub fn house_system(mut self, house_system: HouseSystemKind) -> Self {
        self.house_system = house_system;
        self
    }

    pub fn nutation(mut self, nutation: bool) -> Self {
        self.nutation = nutation;
        self
    }

    pub fn node_mode(mut self, node_mode: NodeMode) -> Self {
        self.node_mode = node_mode;
        self
    }

    pub fn transformer(&self) -> ZodiacTransformer {
        ZodiacTransformer::new(self.frame_mode, self.nutation)
    }

    pub fn provider(&self) -> &Arc<dyn EphemerisProvider> {
        &self.provider
    }

    /// Build a chart for a birth moment and place.
    pub fn build(
        &self,
        birth: &CivilDateTime,
        location: &GeoCoordinate,
    ) -> Result<Chart, ChartError> {
        let span = tracing::debug_span!(
            "build_chart",
            birth = %birth,
            lat = location.latitude_deg,
            lon = location.longitude_deg,
            frame = %self.frame_mode,
            houses = %self.house_system,
        );
        let _guard = span.enter();

        self.run(birth, location).inspect_err(|e| {
            tracing::warn!(stage = %e.stage, kind = %e.kind, "chart build failed: {e}");
        })
    }

    fn run(&self, birth: &CivilDateTime, location: &GeoCoordinate) -> Result<Chart, ChartError> {
        let moment = birth
            .to_julian_moment()
            .map_err(|e| ChartError::new(ChartStage::Time, e))?;
        tracing::debug!(jd_ut = moment.jd_ut(), "resolved birth moment");

        let raw = self
            .provider
            .positions_at(moment)
            .map_err(|e| ChartError::new(ChartStage::Ephemeris, e))?;
        tracing::debug!(bodies = raw.len(), "ephemeris evaluated");

        let transformer = self.transformer();
        let mut positions = [Position {
            longitude_deg: 0.0,
            latitude_deg: 0.0,
            distance_au: None,
            speed_deg_per_day: 0.0,
            frame: transformer.frame(),
        }; 10];
        for (slot, r) in positions.iter_mut().zip(raw.iter()) {
            *slot = transformer
                .to_zodiacal(r, moment)
                .map_err(|e| ChartError::new(ChartStage::Transform, e))?;
        }
        let ayanamsha_deg = transformer.ayanamsha_deg(moment);
        tracing::debug!(?ayanamsha_deg, "positions transformed");

        let houses = compute_houses(moment, location, self.house_system, &transformer)
            .map_err(|e| ChartError::new(ChartStage::Houses, e))?;
        tracing::debug!(ascendant = houses.ascendant_deg, mc = houses.mc_deg, "houses computed");

        let nodes = lunar_nodes(moment, self.node_mode, &transformer);
        tracing::debug!(rahu = nodes.rahu.longitude_deg, "lunar nodes computed");

        let frame = transformer.frame();
        let consistent = positions
            .iter()
            .map(|p| p.frame)
            .chain([houses.frame, nodes.rahu.frame, nodes.ketu.frame])
            .try_for_each(|f| frame.ensure_matches(f));
        consistent.map_err(|e| ChartError::new(ChartStage::Consistency, e))?;

        Ok(Chart::new(
            *birth,
            *location,
            moment,
            frame,
            BodyPositions::new(positions),
            houses,
            nodes,
            ayanamsha_deg,
        ))
    }
}

/// One-shot build without keeping a builder around.
pub fn build(
    birth: &CivilDateTime,
    location: &GeoCoordinate,
    frame_mode: FrameMode,
    system_kind: HouseSystemKind,
    provider: Arc<dyn EphemerisProvider>,
) -> Result<Chart, ChartError> {
    ChartBuilder::new(provider)
        .frame_mode(frame_mode)
        .house_system(system_kind)
        .build(birth, location)
}
