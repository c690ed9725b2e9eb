//! Motion smoothing: exponential moving average with velocity limiting.

use tracing::warn;

use crate::framing::config::SmootherParams;
use crate::framing::rect::Rect;

/// Velocity-limited exponential smoother over crop rectangles.
///
/// All four components (x, y, width, height) are filtered
/// independently: each tick moves the current value toward the target
/// by `alpha`, with the per-tick step clamped to `max_velocity`. A
/// large detection jump therefore plays out as an approach over
/// several ticks instead of a visible snap.
///
/// The smoother is a pure numeric filter: it never fails, and
/// non-finite target components are replaced by the current value
/// before filtering so NaN can never propagate into the output.
///
/// Not thread-safe by contract; exactly one pipeline task owns it and
/// calls [`tick`](MotionSmoother::tick) once per frame.
#[derive(Debug, Clone)]
pub struct MotionSmoother {
    params: SmootherParams,
    current: Option<Rect>,
    velocity: (f32, f32, f32, f32),
}

impl MotionSmoother {
    pub fn new(params: SmootherParams) -> Self {
        Self {
            params,
            current: None,
            velocity: (0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Advance one frame toward `target` and return the crop to emit.
    ///
    /// The very first tick adopts the target exactly with zero
    /// velocity, so startup has no smoothing transient.
    pub fn tick(&mut self, target: Rect) -> Rect {
        let Some(current) = self.current else {
            let adopted = target.sanitize(&Rect::full_frame()).clamp_to_frame();
            self.current = Some(adopted);
            self.velocity = (0.0, 0.0, 0.0, 0.0);
            return adopted;
        };

        let target = if target.is_finite() {
            target
        } else {
            warn!(?target, "non-finite smoothing target clamped");
            target.sanitize(&current)
        };

        let cap = self.params.max_velocity;
        let step = |from: f32, to: f32| (self.params.alpha * (to - from)).clamp(-cap, cap);

        let dx = step(current.x, target.x);
        let dy = step(current.y, target.y);
        let dw = step(current.width, target.width);
        let dh = step(current.height, target.height);

        let next = Rect::new(
            current.x + dx,
            current.y + dy,
            current.width + dw,
            current.height + dh,
        )
        .clamp_to_frame();

        self.velocity = (
            next.x - current.x,
            next.y - current.y,
            next.width - current.width,
            next.height - current.height,
        );
        self.current = Some(next);
        next
    }

    /// Zero the velocity and keep the current rect as-is. Used when a
    /// detection loss outlasts the hold timeout.
    pub fn freeze(&mut self) {
        self.velocity = (0.0, 0.0, 0.0, 0.0);
    }

    /// Replace the smoothing constants without disturbing the current
    /// rect, so a settings change never makes the picture jump.
    pub fn set_params(&mut self, params: SmootherParams) {
        self.params = params;
    }

    /// The rect emitted on the last tick, if any.
    pub fn current(&self) -> Option<Rect> {
        self.current
    }

    /// Per-component displacement applied on the last tick.
    pub fn velocity(&self) -> (f32, f32, f32, f32) {
        self.velocity
    }

    /// Discard all state; the next tick behaves like the first.
    pub fn reset(&mut self) {
        self.current = None;
        self.velocity = (0.0, 0.0, 0.0, 0.0);
    }
}
