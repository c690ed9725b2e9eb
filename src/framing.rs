mod config;
mod controller;
mod phase;
mod rect;
mod smoother;
mod target;

pub use config::{
    ConfigError, HOLD_TIMEOUT_TICKS, MAX_FACE_SIZE, MAX_ZOOM, MIN_FACE_SIZE, SmootherParams,
    TrackingConfig, TrackingSpeed, ZoomLevel,
};
pub use controller::FramingController;
pub use phase::TrackingPhase;
pub use rect::Rect;
pub use smoother::MotionSmoother;
pub use target::compute_target;
