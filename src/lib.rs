//! Auto-framing smoothing controller for face-tracking virtual cameras.
//!
//! Converts noisy per-frame face bounding boxes into stable crop
//! rectangles with bounded per-tick velocity, holding the last good
//! framing gracefully while detection is lost.

pub mod framing;
pub mod pipeline;

pub use framing::{
    ConfigError, FramingController, MotionSmoother, Rect, TrackingConfig, TrackingPhase,
    TrackingSpeed, ZoomLevel, compute_target,
};
pub use pipeline::{ConfigSlot, FaceLocator, FaceObservation, FramingPipeline, ObservationBuilder};
