use std::path::PathBuf;

use kundli_chart::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config field {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    /// Every configuration failure maps to [`ErrorKind::Configuration`].
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Configuration
    }
}
