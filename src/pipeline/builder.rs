//! Builder for creating normalized observations from detector output.

use crate::framing::Rect;
use crate::pipeline::FaceObservation;

/// Builder for creating [`FaceObservation`]s from pixel-space detector
/// output in various box formats.
///
/// Frame dimensions are fixed at construction; the box setters accept
/// pixel coordinates and the result is normalized to [0,1].
#[derive(Debug, Clone)]
pub struct ObservationBuilder {
    frame_width: f32,
    frame_height: f32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    confidence: f32,
}

impl ObservationBuilder {
    /// Create a builder for frames of the given pixel dimensions.
    pub fn new(frame_width: u32, frame_height: u32) -> Self {
        Self {
            frame_width: frame_width as f32,
            frame_height: frame_height as f32,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            confidence: 0.0,
        }
    }

    /// Set the box in TLWH format (top-left x, top-left y, width, height), pixels.
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.x = x;
        self.y = y;
        self.width = w;
        self.height = h;
        self
    }

    /// Set the box in TLBR format (x1, y1, x2, y2), pixels.
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.x = x1;
        self.y = y1;
        self.width = x2 - x1;
        self.height = y2 - y1;
        self
    }

    /// Set the box in XYWH format (center x, center y, width, height), pixels.
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.x = cx - w / 2.0;
        self.y = cy - h / 2.0;
        self.width = w;
        self.height = h;
        self
    }

    /// Set the detector confidence.
    pub fn confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Build the normalized observation.
    pub fn build(self) -> FaceObservation {
        let rect = Rect::new(
            self.x / self.frame_width,
            self.y / self.frame_height,
            self.width / self.frame_width,
            self.height / self.frame_height,
        );
        FaceObservation::new(rect, self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tlwh_normalization() {
        let obs = ObservationBuilder::new(1280, 720)
            .tlwh(320.0, 180.0, 256.0, 288.0)
            .confidence(0.9)
            .build();
        assert!((obs.rect.x - 0.25).abs() < 1e-6);
        assert!((obs.rect.y - 0.25).abs() < 1e-6);
        assert!((obs.rect.width - 0.2).abs() < 1e-6);
        assert!((obs.rect.height - 0.4).abs() < 1e-6);
        assert_eq!(obs.confidence, 0.9);
    }

    #[test]
    fn test_tlbr_matches_tlwh() {
        let a = ObservationBuilder::new(640, 480)
            .tlbr(100.0, 100.0, 200.0, 250.0)
            .build();
        let b = ObservationBuilder::new(640, 480)
            .tlwh(100.0, 100.0, 100.0, 150.0)
            .build();
        assert_eq!(a.rect, b.rect);
    }

    #[test]
    fn test_xywh_centering() {
        let obs = ObservationBuilder::new(640, 480)
            .xywh(320.0, 240.0, 64.0, 96.0)
            .build();
        let (cx, cy) = obs.rect.center();
        assert!((cx - 0.5).abs() < 1e-6);
        assert!((cy - 0.5).abs() < 1e-6);
    }
}
