//! Sidereal astrology primitives for chart construction.
//!
//! This crate provides:
//! - Ayanamsha for common sidereal systems
//! - `ZodiacTransformer`: raw ephemeris output to tropical or sidereal
//!   longitudes, each tagged with its `ZodiacFrame`
//! - Rashi, nakshatra/pada and navamsa lookup
//! - Graha lordship and natural friendship
//! - Lunar nodes (mean and true)
//! - Ascendant/MC and six house systems
//!
//! All longitudes are in degrees [0, 360).

pub mod ayanamsha;
pub mod bhava;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod location;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod navamsa;
pub mod rashi;
pub mod zodiac;

pub use ayanamsha::{
    ALL_AYANAMSHAS, AyanamshaSystem, ayanamsha_deg, ayanamsha_mean_deg, ayanamsha_true_deg,
};
pub use bhava::{ALL_HOUSE_SYSTEMS, HouseSystemKind, Houses, POLAR_LIMIT_DEG, compute_houses};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, Relation, SAPTA_GRAHAS, naisargika_relation};
pub use lagna::{Angles, angles, ascendant_deg, mc_deg};
pub use location::GeoCoordinate;
pub use lunar_nodes::{LunarNodes, NodeMode, lunar_nodes, mean_rahu_deg, rahu_deg, true_rahu_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, Nakshatra, NakshatraInfo, PADA_SPAN_DEG,
    nakshatra_from_longitude,
};
pub use navamsa::navamsa_rashi;
pub use rashi::{ALL_RASHIS, RASHI_SPAN_DEG, Rashi, RashiInfo, rashi_from_longitude};
pub use zodiac::{FrameMode, Position, ZodiacFrame, ZodiacTransformer};
