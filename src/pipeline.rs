//! Integration surface for connecting face-detection backends with the
//! framing controller.
//!
//! The detector itself is an external capability; this module provides
//! the trait it plugs into, a builder for normalizing pixel-space
//! detector output, the tick-boundary config handoff, and a per-frame
//! pipeline bundling a locator with a [`crate::FramingController`].

mod builder;
mod handoff;
mod locator;
mod session;

pub use builder::ObservationBuilder;
pub use handoff::ConfigSlot;
pub use locator::{FaceLocator, FaceObservation};
pub use session::{DEFAULT_MIN_CONFIDENCE, FramingPipeline};
