//! Single-slot config handoff between a control surface and the
//! pipeline task.

use std::sync::Mutex;

use crate::framing::{ConfigError, TrackingConfig};

/// Single-slot pending-configuration handoff.
///
/// A control surface (UI, RPC, ...) calls [`submit`](ConfigSlot::submit)
/// at any time; the pipeline task calls [`take`](ConfigSlot::take) at
/// the tick boundary and applies the newest config wholesale. Per-tick
/// code therefore never reads a half-updated configuration. A newer
/// submission overwrites an unconsumed older one.
#[derive(Debug, Default)]
pub struct ConfigSlot {
    pending: Mutex<Option<TrackingConfig>>,
}

impl ConfigSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and stage a config for the next tick boundary.
    pub fn submit(&self, config: TrackingConfig) -> Result<(), ConfigError> {
        config.validate()?;
        // A poisoned lock only means a panicked writer; the slot value
        // itself is always a whole, validated config.
        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *pending = Some(config);
        Ok(())
    }

    /// Take the staged config, if any. Called by the pipeline between
    /// ticks.
    pub fn take(&self) -> Option<TrackingConfig> {
        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        pending.take()
    }
}
