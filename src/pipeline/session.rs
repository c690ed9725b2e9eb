//! FramingPipeline for combining face detection with the controller.

use std::sync::Arc;

use tracing::warn;

use crate::framing::{ConfigError, FramingController, Rect, TrackingConfig};
use crate::pipeline::handoff::ConfigSlot;
use crate::pipeline::locator::{FaceLocator, FaceObservation};

/// Observations below this confidence are ignored unless overridden.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

/// End-to-end per-frame pipeline: a [`FaceLocator`] feeding a
/// [`FramingController`], with a shared [`ConfigSlot`] applied at each
/// tick boundary.
///
/// Owned and driven by exactly one task; the config slot handle from
/// [`config_slot`](FramingPipeline::config_slot) is the only part
/// meant to be shared with other threads.
pub struct FramingPipeline<L: FaceLocator> {
    locator: L,
    controller: FramingController,
    config_slot: Arc<ConfigSlot>,
    min_confidence: f32,
}

impl<L: FaceLocator> FramingPipeline<L> {
    /// Create a pipeline with the given locator, config and crop
    /// aspect ratio.
    pub fn new(locator: L, config: TrackingConfig, crop_aspect: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            locator,
            controller: FramingController::new(config, crop_aspect)?,
            config_slot: Arc::new(ConfigSlot::new()),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        })
    }

    /// Create a pipeline with the default configuration and a crop
    /// that keeps the source aspect.
    pub fn with_default_config(locator: L) -> Self {
        Self {
            locator,
            controller: FramingController::with_defaults(),
            config_slot: Arc::new(ConfigSlot::new()),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    /// Set the confidence threshold below which observations are
    /// treated as no detection.
    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Process one frame and return the crop rectangle to apply.
    ///
    /// Applies any pending config, runs detection, keeps the
    /// highest-confidence observation above the threshold, and ticks
    /// the controller. Only the detector itself can fail.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Rect, L::Error> {
        if let Some(config) = self.config_slot.take() {
            // Submissions are validated in the slot, so this only
            // fires if a caller bypassed it with a raw config.
            if let Err(error) = self.controller.set_config(config) {
                warn!(%error, "pending config rejected, keeping previous");
            }
        }

        let observations = self.locator.locate(input, width, height)?;
        let face = select_face(&observations, self.min_confidence);
        Ok(self.controller.tick(face))
    }

    /// Handle for control surfaces to stage config changes.
    pub fn config_slot(&self) -> Arc<ConfigSlot> {
        Arc::clone(&self.config_slot)
    }

    /// Get a reference to the underlying locator.
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Get a mutable reference to the underlying locator.
    pub fn locator_mut(&mut self) -> &mut L {
        &mut self.locator
    }

    /// Get a reference to the underlying controller.
    pub fn controller(&self) -> &FramingController {
        &self.controller
    }

    /// Get a mutable reference to the underlying controller.
    pub fn controller_mut(&mut self) -> &mut FramingController {
        &mut self.controller
    }
}

/// Pick the highest-confidence observation at or above the threshold.
fn select_face(observations: &[FaceObservation], min_confidence: f32) -> Option<Rect> {
    observations
        .iter()
        .filter(|obs| obs.confidence >= min_confidence)
        .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
        .map(|obs| obs.rect)
}
