//! Configuration for chart construction.
//!
//! [`KundliConfig`] is read from TOML and validated against the
//! ephemeris model window. [`SharedConfig`] holds the process-wide value
//! behind an atomically swappable `Arc`.

pub mod config;
pub mod error;
pub mod shared;

pub use config::{EphemerisWindow, KundliConfig, MODEL_MAX_YEAR, MODEL_MIN_YEAR, Zodiac};
pub use error::ConfigError;
pub use shared::{SharedConfig, global};
