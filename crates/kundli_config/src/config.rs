//! Engine settings and their TOML form.
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```toml
//! frame_mode = "sidereal"
//! ayanamsha = "lahiri"
//! house_system = "placidus"
//! nutation = true
//! node_mode = "mean"
//!
//! [ephemeris]
//! min_year = 1800
//! max_year = 2400
//! ```

use std::path::Path;
use std::sync::Arc;

use kundli_chart::ChartBuilder;
use kundli_ephem::{AnalyticEphemeris, SupportedRange};
use kundli_time::calendar_to_jd;
use kundli_vedic_base::{AyanamshaSystem, FrameMode, HouseSystemKind, NodeMode};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// First year the analytic ephemeris covers.
pub const MODEL_MIN_YEAR: i32 = 1800;
/// Last year the analytic ephemeris covers.
pub const MODEL_MAX_YEAR: i32 = 2400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zodiac {
    Tropical,
    #[default]
    Sidereal,
}

/// Years served by the ephemeris, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisWindow {
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for EphemerisWindow {
    fn default() -> Self {
        Self {
            min_year: MODEL_MIN_YEAR,
            max_year: MODEL_MAX_YEAR,
        }
    }
}

impl EphemerisWindow {
    /// 1 January of `min_year` 0h UT to the end of 31 December of `max_year`.
    pub fn supported_range(&self) -> Result<SupportedRange, ConfigError> {
        let min_jd = calendar_to_jd(self.min_year, 1, 1.0);
        let max_jd = calendar_to_jd(self.max_year + 1, 1, 1.0);
        SupportedRange::new(min_jd, max_jd).map_err(|e| ConfigError::Invalid {
            field: "ephemeris",
            reason: e.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KundliConfig {
    pub frame_mode: Zodiac,
    /// Ignored for tropical charts.
    pub ayanamsha: AyanamshaSystem,
    pub house_system: HouseSystemKind,
    pub nutation: bool,
    pub node_mode: NodeMode,
    pub ephemeris: EphemerisWindow,
}

/// Sidereal Lahiri, Placidus, nutation on, mean nodes, 1800 to 2400.
impl Default for KundliConfig {
    fn default() -> Self {
        Self {
            frame_mode: Zodiac::Sidereal,
            ayanamsha: AyanamshaSystem::default(),
            house_system: HouseSystemKind::default(),
            nutation: true,
            node_mode: NodeMode::default(),
            ephemeris: EphemerisWindow::default(),
        }
    }
}

impl KundliConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?cfg, "config loaded");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.ephemeris;
        if w.min_year > w.max_year {
            return Err(ConfigError::Invalid {
                field: "ephemeris",
                reason: format!("min_year {} is after max_year {}", w.min_year, w.max_year),
            });
        }
        if w.min_year < MODEL_MIN_YEAR || w.max_year > MODEL_MAX_YEAR {
            return Err(ConfigError::Invalid {
                field: "ephemeris",
                reason: format!(
                    "{}..={} exceeds the model window {MODEL_MIN_YEAR}..={MODEL_MAX_YEAR}",
                    w.min_year, w.max_year
                ),
            });
        }
        Ok(())
    }

    pub fn frame(&self) -> FrameMode {
        match self.frame_mode {
            Zodiac::Tropical => FrameMode::Tropical,
            Zodiac::Sidereal => FrameMode::Sidereal(self.ayanamsha),
        }
    }

    /// A chart builder over an analytic ephemeris limited to this window.
    pub fn chart_builder(&self) -> Result<ChartBuilder, ConfigError> {
        self.validate()?;
        let range = self.ephemeris.supported_range()?;
        let ephemeris = AnalyticEphemeris::new(range).map_err(|e| ConfigError::Invalid {
            field: "ephemeris",
            reason: e.to_string(),
        })?;
        Ok(ChartBuilder::new(Arc::new(ephemeris))
            .frame_mode(self.frame())
            .house_system(self.house_system)
            .nutation(self.nutation)
            .node_mode(self.node_mode))
    }
}
