//! Trait for face-detection inference backends.

use crate::framing::Rect;

/// One raw face detection in normalized coordinates, before
/// confidence thresholding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceObservation {
    /// Bounding box in normalized [0,1] frame coordinates.
    pub rect: Rect,
    /// Detector confidence in [0,1].
    pub confidence: f32,
}

impl FaceObservation {
    pub fn new(rect: Rect, confidence: f32) -> Self {
        Self { rect, confidence }
    }
}

/// Trait for face-detection inference backends.
///
/// Implement this to connect any face detector to the framing
/// pipeline.
///
/// # Example
///
/// ```ignore
/// use autoframe_rs::{FaceLocator, FaceObservation};
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl FaceLocator for MyDetector {
///     type Error = std::io::Error;
///
///     fn locate(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<FaceObservation>, Self::Error> {
///         // Run inference and return observations
///         Ok(vec![])
///     }
/// }
/// ```
pub trait FaceLocator {
    /// Error type for detection failures.
    type Error;

    /// Run inference on raw image data and return face observations.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// Zero or more `FaceObservation`s, or an error. The pipeline
    /// selects at most one per tick.
    fn locate(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<FaceObservation>, Self::Error>;
}
