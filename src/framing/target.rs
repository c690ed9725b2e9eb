//! Framing target calculation: face bounding box to desired crop.

use crate::framing::config::{MAX_ZOOM, TrackingConfig};
use crate::framing::rect::Rect;

/// Compute the desired crop rectangle for one tick.
///
/// With a face present the crop is centered on the face, sized so the
/// face's height fills `config.effective_face_size()` of the crop's
/// shorter dimension, then slid (not shrunk) inside frame bounds.
/// `crop_aspect` is the crop's width/height ratio in normalized units;
/// 1.0 means the output frame has the same aspect as the source.
///
/// With no face the previous target is returned untouched; holding and
/// extrapolation are the smoother's concern, not the calculator's.
///
/// Pure function of its inputs.
pub fn compute_target(
    face: Option<Rect>,
    config: &TrackingConfig,
    previous: Rect,
    crop_aspect: f32,
) -> Rect {
    let Some(face) = face else {
        return previous;
    };
    if face.is_degenerate() {
        return previous;
    }

    let face_size = config.effective_face_size();

    // Face height drives the crop's shorter dimension; the longer one
    // follows the aspect ratio.
    let shorter = (face.height / face_size).clamp(1.0 / MAX_ZOOM, 1.0);
    let (mut width, mut height) = if crop_aspect >= 1.0 {
        (shorter * crop_aspect, shorter)
    } else {
        (shorter, shorter / crop_aspect)
    };

    // Oversized extents shrink together so the aspect survives.
    let overflow = width.max(height);
    if overflow > 1.0 {
        width /= overflow;
        height /= overflow;
    }

    let (cx, cy) = face.center();
    Rect::centered_on(cx, cy, width, height).clamp_to_frame()
}
