/// A vertical pan gesture as delivered by the host's gesture recognizer.
///
/// Positive values point down the screen: a finger moving down yields a positive translation
/// and a positive velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureEvent {
    Began,
    /// Translation since the previous `Changed` (or since `Began`).
    Changed { translation: f64 },
    /// Release velocity in points per second.
    Ended { velocity: f64 },
    Cancelled,
}

/// Turns a recognizer's cumulative translation into per-event deltas.
///
/// Use this when the host cannot reset its translation after each change event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanTracker {
    last: f64,
}

impl PanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the movement since the previous call and makes `total` the new baseline.
    pub fn delta(&mut self, total: f64) -> f64 {
        let delta = total - self.last;
        self.last = total;
        delta
    }

    /// Builds a `Changed` event from a cumulative translation.
    pub fn changed(&mut self, total: f64) -> GestureEvent {
        GestureEvent::Changed {
            translation: self.delta(total),
        }
    }

    pub fn reset(&mut self) {
        self.last = 0.0;
    }
}
