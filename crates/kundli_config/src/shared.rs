//! Process-wide configuration handle.
//!
//! Readers take an `Arc` snapshot and never block a computation in
//! progress. A reload swaps the whole `Arc`; charts already being built keep
//! the snapshot they started with.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::config::KundliConfig;
use crate::error::ConfigError;

#[derive(Debug)]
pub struct SharedConfig {
    inner: RwLock<Arc<KundliConfig>>,
}

impl SharedConfig {
    pub fn new(config: KundliConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            inner: RwLock::new(Arc::new(config)),
        })
    }

    /// Snapshot of the current configuration.
    pub fn current(&self) -> Arc<KundliConfig> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Validate and install `config`, returning the one it replaced.
    pub fn replace(&self, config: KundliConfig) -> Result<Arc<KundliConfig>, ConfigError> {
        config.validate()?;
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, Arc::new(config));
        tracing::debug!(?config, "configuration replaced");
        Ok(previous)
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Arc::new(KundliConfig::default())),
        }
    }
}

static GLOBAL: OnceLock<SharedConfig> = OnceLock::new();

/// The process-wide handle, holding defaults until first replaced.
pub fn global() -> &'static SharedConfig {
    GLOBAL.get_or_init(SharedConfig::default)
}
