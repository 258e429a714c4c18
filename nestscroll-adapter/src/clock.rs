/// Step used for the first frame after a reset, when no previous timestamp exists.
pub const NOMINAL_FRAME_SECS: f64 = 1.0 / 60.0;

/// Upper bound on a single step, so a stalled frame does not make the simulation jump.
pub const MAX_FRAME_SECS: f64 = 1.0 / 15.0;

/// Converts the frame ticker's millisecond timestamps into simulation steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameClock {
    last_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the seconds elapsed since the previous call, clamped to [`MAX_FRAME_SECS`].
    ///
    /// A timestamp that does not move forward yields `0`.
    pub fn advance(&mut self, now_ms: u64) -> f64 {
        let dt = match self.last_ms {
            None => NOMINAL_FRAME_SECS,
            Some(prev) => now_ms.saturating_sub(prev) as f64 / 1000.0,
        };
        self.last_ms = Some(now_ms.max(self.last_ms.unwrap_or(0)));
        dt.min(MAX_FRAME_SECS)
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
