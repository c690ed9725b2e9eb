//! Tracking configuration: speed and zoom presets plus validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest face-size override accepted.
pub const MIN_FACE_SIZE: f32 = 0.30;
/// Largest face-size override accepted.
pub const MAX_FACE_SIZE: f32 = 0.50;

/// Maximum zoom factor; the crop never gets smaller than `1 / MAX_ZOOM`
/// of the frame in either dimension.
pub const MAX_ZOOM: f32 = 3.0;

/// Lost ticks after which the controller freezes the crop in place.
/// 60 ticks is two seconds at a 30 Hz frame rate.
pub const HOLD_TIMEOUT_TICKS: u32 = 60;

/// Errors produced when validating a [`TrackingConfig`].
///
/// Validation happens at config-load time only; per-tick code never
/// returns errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("face size override {0} outside [{MIN_FACE_SIZE}, {MAX_FACE_SIZE}]")]
    FaceSizeOutOfRange(f32),
    #[error("face size override is not a finite number")]
    FaceSizeNotFinite,
    #[error("crop aspect ratio {0} must be finite and positive")]
    InvalidCropAspect(f32),
}

/// Named responsiveness preset for the motion smoother.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingSpeed {
    /// Heavier smoothing, slower response.
    #[default]
    Slow,
    /// Lighter smoothing, quicker response.
    Fast,
}

/// Concrete smoothing constants for one tick.
///
/// These are tunable parameters, not derived quantities. `Slow` keeps
/// the original defaults (alpha 0.15, 50 px/frame at 1280 px width
/// normalized to 0.04); `Fast` roughly doubles both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmootherParams {
    /// Exponential smoothing factor in (0, 1]. Higher responds faster.
    pub alpha: f32,
    /// Per-component displacement cap per tick, in normalized units.
    pub max_velocity: f32,
}

impl TrackingSpeed {
    /// Smoothing constants for this preset.
    pub fn params(&self) -> SmootherParams {
        match self {
            TrackingSpeed::Slow => SmootherParams {
                alpha: 0.15,
                max_velocity: 0.04,
            },
            TrackingSpeed::Fast => SmootherParams {
                alpha: 0.40,
                max_velocity: 0.10,
            },
        }
    }
}

/// Named preset for how much of the crop the face should fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomLevel {
    /// Face fills 50% of the crop's shorter dimension.
    Close,
    /// Face fills 40% of the crop's shorter dimension.
    #[default]
    Medium,
    /// Face fills 30% of the crop's shorter dimension.
    Wide,
}

impl ZoomLevel {
    /// Target face-occupancy fraction for this preset.
    pub fn face_size(&self) -> f32 {
        match self {
            ZoomLevel::Close => 0.50,
            ZoomLevel::Medium => 0.40,
            ZoomLevel::Wide => 0.30,
        }
    }
}

/// Per-session tracking configuration.
///
/// Immutable once handed to a controller; settings changes replace the
/// whole value (see [`crate::pipeline::ConfigSlot`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TrackingConfig {
    pub speed: TrackingSpeed,
    pub zoom: ZoomLevel,
    /// Overrides the zoom preset's face-occupancy fraction when set.
    /// Must lie in [`MIN_FACE_SIZE`, `MAX_FACE_SIZE`].
    #[serde(default)]
    pub face_size_override: Option<f32>,
}

impl TrackingConfig {
    /// Validate ranges. Called by the controller and the config slot
    /// before a config is ever read by per-tick code.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(size) = self.face_size_override {
            if !size.is_finite() {
                return Err(ConfigError::FaceSizeNotFinite);
            }
            if !(MIN_FACE_SIZE..=MAX_FACE_SIZE).contains(&size) {
                return Err(ConfigError::FaceSizeOutOfRange(size));
            }
        }
        Ok(())
    }

    /// Face-occupancy fraction in effect: the override when present,
    /// otherwise the zoom preset.
    pub fn effective_face_size(&self) -> f32 {
        self.face_size_override.unwrap_or_else(|| self.zoom.face_size())
    }

    /// Smoothing constants for the configured speed.
    pub fn smoother_params(&self) -> SmootherParams {
        self.speed.params()
    }
}
