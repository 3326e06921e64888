//! Convenience wrapper for the kundli chart engine.
//!
//! Accepts lexical UTC dates and plain coordinates, holds a process-wide
//! configuration, and re-exports the types callers need, so a single
//! `use kundli_rs::*` is enough.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use kundli_rs::*;
//!
//! let a = generate_chart("1990-01-01", "12:00:00", 28.6139, 77.2090)?;
//! let b = generate_chart("1992-08-17", "04:45:00", 19.0760, 72.8777)?;
//! let result = match_charts(&a, &b);
//! println!("{} / {} ({})", result.score, result.max_score, result.verdict);
//! # Ok::<(), KundliError>(())
//! ```

pub mod convenience;
pub mod date;
pub mod error;
pub mod global;

pub use convenience::{
    chart_at, generate_chart, generate_chart_with, houses, julian_moment, match_charts,
};
pub use date::parse_birth;
pub use error::KundliError;
pub use global::{config, init, is_initialized, reload};

pub use kundli_chart::{BodyPositions, Chart, ChartBuilder, ChartError, ChartStage, ErrorKind};
pub use kundli_config::{ConfigError, KundliConfig, Zodiac};
pub use kundli_ephem::{ALL_BODIES, CelestialBody};
pub use kundli_match::{CompatibilityResult, DoshaReport, FactorScore, Koota, Verdict};
pub use kundli_time::{CivilDateTime, JulianMoment, TimeError};
pub use kundli_vedic_base::{
    AyanamshaSystem, FrameMode, GeoCoordinate, Graha, HouseSystemKind, Houses, Nakshatra,
    NodeMode, Position, Rashi,
};
