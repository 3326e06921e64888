//! Mangal and Kaal Sarp dosha checks on a single chart.

use kundli_chart::Chart;
use kundli_frames::forward_arc_deg;
use kundli_vedic_base::{Graha, SAPTA_GRAHAS};
use serde::{Deserialize, Serialize};

/// Houses, counted from the lagna, in which Mangal gives the dosha.
pub const MANGAL_DOSHA_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

/// True when Mangal occupies one of [`MANGAL_DOSHA_HOUSES`].
pub fn has_mangal_dosha(chart: &Chart) -> bool {
    MANGAL_DOSHA_HOUSES.contains(&chart.house_of_graha(Graha::Mangal))
}

/// True when all seven sapta grahas fall on one side of the Rahu-Ketu axis.
pub fn has_kaal_sarp_dosha(chart: &Chart) -> bool {
    let rahu = chart.lunar_nodes().rahu.longitude_deg;
    let arcs = SAPTA_GRAHAS.map(|g| forward_arc_deg(rahu, chart.graha(g).longitude_deg));
    arcs.iter().all(|&a| a < 180.0) || arcs.iter().all(|&a| a > 180.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaReport {
    pub groom_mangal: bool,
    pub bride_mangal: bool,
    /// Both partners carry Mangal dosha, which neutralises it.
    pub mangal_cancelled: bool,
    pub groom_kaal_sarp: bool,
    pub bride_kaal_sarp: bool,
}

impl DoshaReport {
    pub fn new(groom: &Chart, bride: &Chart) -> Self {
        let groom_mangal = has_mangal_dosha(groom);
        let bride_mangal = has_mangal_dosha(bride);
        Self {
            groom_mangal,
            bride_mangal,
            mangal_cancelled: groom_mangal && bride_mangal,
            groom_kaal_sarp: has_kaal_sarp_dosha(groom),
            bride_kaal_sarp: has_kaal_sarp_dosha(bride),
        }
    }

    /// Exactly one partner has an uncancelled Mangal dosha.
    pub fn mangal_mismatch(&self) -> bool {
        self.groom_mangal != self.bride_mangal
    }
}
