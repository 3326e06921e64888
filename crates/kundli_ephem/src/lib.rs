//! Analytic ephemeris for chart computation.
//!
//! This crate provides:
//! - `CelestialBody`, the closed set of ten chart bodies
//! - Mean orbital elements with a Kepler solver for Mercury–Pluto
//! - A truncated ELP-2000/82 lunar series
//! - The `EphemerisProvider` trait and its `AnalyticEphemeris` implementation,
//!   restricted to 1800–2400
//!
//! Planet and Sun longitudes come out in the J2000.0 ecliptic frame; the
//! Moon comes out in the ecliptic of date. Every `RawPosition` carries its
//! frame so the transformer can treat each correctly.

pub mod body;
pub mod elements;
pub mod error;
pub mod kepler;
pub mod moon;
pub mod provider;

pub use body::{ALL_BODIES, CelestialBody};
pub use error::EphemerisError;
pub use provider::{
    AnalyticEphemeris, DEFAULT_MAX_JD, DEFAULT_MIN_JD, EphemerisProvider, RawFrame, RawPosition,
    SupportedRange,
};
