/// Tracking lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingPhase {
    /// No target received yet; the next face adopts its crop directly.
    #[default]
    Uninitialized,
    /// Face seen this tick; the smoother follows it.
    Tracking,
    /// Detection lost; framing converges onto the last known target.
    Holding {
        /// Consecutive ticks without a detection.
        lost_ticks: u32,
    },
}

impl TrackingPhase {
    /// True while a face was present on the most recent tick.
    pub fn is_tracking(&self) -> bool {
        matches!(self, TrackingPhase::Tracking)
    }

    /// True once detection has been lost longer than `timeout_ticks`.
    /// Short gaps keep the last framing warm; long gaps freeze it.
    pub fn is_long_lost(&self, timeout_ticks: u32) -> bool {
        match self {
            TrackingPhase::Holding { lost_ticks } => *lost_ticks >= timeout_ticks,
            TrackingPhase::Uninitialized => true,
            TrackingPhase::Tracking => false,
        }
    }
}
