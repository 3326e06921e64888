//! Rahu and Ketu: the Moon's ascending and descending nodes.
//!
//! Mean node from the Meeus polynomial; the true node adds the five largest
//! periodic terms. Longitudes come out in the mean ecliptic of date and are
//! then mapped into the chart's zodiac frame. Ketu is always Rahu + 180°.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47, p. 343–344.

use kundli_frames::{fundamental_arguments_deg, normalize_180, normalize_360};
use kundli_time::JulianMoment;
use serde::{Deserialize, Serialize};

use crate::zodiac::{Position, ZodiacTransformer};

/// Mean or true node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMode {
    #[default]
    Mean,
    True,
}

/// Both nodes in one zodiac frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarNodes {
    pub mode: NodeMode,
    pub rahu: Position,
    pub ketu: Position,
}

/// Mean ascending node, mean ecliptic of date, degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    normalize_360(
        125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0
            - t4 / 60_616_000.0,
    )
}

/// True ascending node, mean ecliptic of date, degrees.
pub fn true_rahu_deg(t: f64) -> f64 {
    let [d, m, mp, f, _] = fundamental_arguments_deg(t);
    let s = |deg: f64| deg.to_radians().sin();
    normalize_360(
        mean_rahu_deg(t) - 1.4979 * s(2.0 * (d - f)) - 0.1500 * s(m) + 0.1226 * s(2.0 * d)
            + 0.1176 * s(2.0 * f)
            - 0.0801 * s(2.0 * (mp - f)),
    )
}

/// Rahu longitude for `mode`, mean ecliptic of date.
pub fn rahu_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_rahu_deg(t),
        NodeMode::True => true_rahu_deg(t),
    }
}

fn rahu_in_frame(moment: JulianMoment, mode: NodeMode, tr: &ZodiacTransformer) -> f64 {
    let tropical = rahu_deg(moment.centuries_tt(), mode) + tr.delta_psi_deg(moment);
    tr.tropical_to_frame_deg(tropical, moment)
}

/// Rahu and Ketu at `moment` in the transformer's frame.
///
/// Speed is a central difference over one day.
pub fn lunar_nodes(moment: JulianMoment, mode: NodeMode, tr: &ZodiacTransformer) -> LunarNodes {
    let rahu_lon = rahu_in_frame(moment, mode, tr);
    let before = rahu_in_frame(moment.offset_days(-0.5), mode, tr);
    let after = rahu_in_frame(moment.offset_days(0.5), mode, tr);
    let speed = normalize_180(after - before);

    let node = |lon: f64| Position {
        longitude_deg: lon,
        latitude_deg: 0.0,
        distance_au: None,
        speed_deg_per_day: speed,
        frame: tr.frame(),
    };
    LunarNodes {
        mode,
        rahu: node(rahu_lon),
        ketu: node(normalize_360(rahu_lon + 180.0)),
    }
}
