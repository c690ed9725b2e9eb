//! Per-session framing controller: phase tracking, target calculation
//! and motion smoothing behind a single per-tick entry point.

use tracing::{debug, warn};

use crate::framing::config::{ConfigError, HOLD_TIMEOUT_TICKS, TrackingConfig};
use crate::framing::phase::TrackingPhase;
use crate::framing::rect::Rect;
use crate::framing::smoother::MotionSmoother;
use crate::framing::target::compute_target;

/// One auto-framing session.
///
/// Owns all mutable tracking state; there is no process-wide state
/// anywhere in the crate. Construct one per session, call
/// [`tick`](FramingController::tick) once per captured frame from a
/// single task, and [`reset`](FramingController::reset) (or drop) it
/// when the session ends.
///
/// `tick` never fails: a degenerate bounding box counts as no
/// detection, and the emitted crop is always inside frame bounds.
#[derive(Debug)]
pub struct FramingController {
    config: TrackingConfig,
    crop_aspect: f32,
    smoother: MotionSmoother,
    phase: TrackingPhase,
    last_target: Rect,
}

impl FramingController {
    /// Create a controller for a session.
    ///
    /// `crop_aspect` is the crop's width/height ratio in normalized
    /// units; pass 1.0 when the output frame keeps the source aspect.
    pub fn new(config: TrackingConfig, crop_aspect: f32) -> Result<Self, ConfigError> {
        config.validate()?;
        if !crop_aspect.is_finite() || crop_aspect <= 0.0 {
            return Err(ConfigError::InvalidCropAspect(crop_aspect));
        }
        Ok(Self {
            crop_aspect,
            smoother: MotionSmoother::new(config.smoother_params()),
            config,
            phase: TrackingPhase::Uninitialized,
            last_target: Rect::full_frame(),
        })
    }

    /// Controller with the default configuration and a crop that
    /// keeps the source aspect.
    pub fn with_defaults() -> Self {
        Self {
            crop_aspect: 1.0,
            smoother: MotionSmoother::new(TrackingConfig::default().smoother_params()),
            config: TrackingConfig::default(),
            phase: TrackingPhase::Uninitialized,
            last_target: Rect::full_frame(),
        }
    }

    /// Process one frame tick and return the crop rectangle to apply.
    pub fn tick(&mut self, face: Option<Rect>) -> Rect {
        let face = match face {
            Some(rect) if rect.is_degenerate() => {
                warn!(?rect, "degenerate bounding box treated as no detection");
                None
            }
            other => other,
        };

        match (face, self.phase) {
            (Some(_), phase) => {
                if !phase.is_tracking() {
                    debug!(?phase, "face acquired, tracking");
                }
                self.phase = TrackingPhase::Tracking;
            }
            (None, TrackingPhase::Uninitialized) => {
                // Nothing ever tracked: emit the whole frame and leave
                // the smoother untouched so the first real face is
                // adopted without a transient.
                return Rect::full_frame();
            }
            (None, TrackingPhase::Tracking) => {
                debug!("face lost, holding last framing");
                self.phase = TrackingPhase::Holding { lost_ticks: 1 };
            }
            (None, TrackingPhase::Holding { lost_ticks }) => {
                self.phase = TrackingPhase::Holding {
                    lost_ticks: lost_ticks.saturating_add(1),
                };
            }
        }

        if self.phase.is_long_lost(HOLD_TIMEOUT_TICKS) {
            // Loss outlasted the timeout: decay velocity and hold the
            // crop verbatim until detection resumes.
            self.smoother.freeze();
            if let Some(current) = self.smoother.current() {
                return current;
            }
        }

        let target = compute_target(face, &self.config, self.last_target, self.crop_aspect);
        self.last_target = target;
        self.smoother.tick(target)
    }

    /// Replace the configuration wholesale.
    ///
    /// Smoother state survives so the picture does not jump; only the
    /// smoothing constants and framing targets change from the next
    /// tick on.
    pub fn set_config(&mut self, config: TrackingConfig) -> Result<(), ConfigError> {
        config.validate()?;
        debug!(?config, "tracking config replaced");
        self.config = config;
        self.smoother.set_params(config.smoother_params());
        Ok(())
    }

    /// The configuration currently in effect.
    pub fn config(&self) -> &TrackingConfig {
        &self.config
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> TrackingPhase {
        self.phase
    }

    /// The crop emitted on the most recent tick, if any.
    pub fn current_crop(&self) -> Option<Rect> {
        self.smoother.current()
    }

    /// Return to the uninitialized state, as for a fresh session.
    pub fn reset(&mut self) {
        self.smoother.reset();
        self.phase = TrackingPhase::Uninitialized;
        self.last_target = Rect::full_frame();
    }
}
