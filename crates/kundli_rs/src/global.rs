//! Process-wide configuration used by the convenience functions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use kundli_config::KundliConfig;

use crate::error::KundliError;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Install the configuration once per process.
///
/// Fails with [`KundliError::AlreadyInitialized`] on a second call; use
/// [`reload`] to change settings afterwards.
pub fn init(config: KundliConfig) -> Result<(), KundliError> {
    config.validate()?;
    if INITIALIZED.swap(true, Ordering::AcqRel) {
        return Err(KundliError::AlreadyInitialized);
    }
    kundli_config::global().replace(config)?;
    tracing::debug!(?config, "kundli_rs initialized");
    Ok(())
}

pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::Acquire)
}

/// Swap in a new configuration and return the previous one.
///
/// Charts already being built keep the snapshot they started with.
pub fn reload(config: KundliConfig) -> Result<Arc<KundliConfig>, KundliError> {
    let previous = kundli_config::global().replace(config)?;
    INITIALIZED.store(true, Ordering::Release);
    Ok(previous)
}

/// Snapshot of the active configuration; defaults until [`init`] or [`reload`].
pub fn config() -> Arc<KundliConfig> {
    kundli_config::global().current()
}
