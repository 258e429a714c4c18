use crate::OptionsError;
use crate::types::DEFAULT_BOUNCE_THRESHOLD_RATIO;

/// Tunable constants for the drag distribution and the settling physics.
///
/// Defaults reproduce the classic nested-scroll feel: a fling decays with resistance `2`, and an
/// overscrolled outer region springs back critically damped at `2` Hz.
///
/// With `feature = "serde"`, missing fields fall back to their defaults when deserializing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicsOptions {
    /// Exponential decay rate of inertial velocity, per second.
    pub resistance: f64,
    /// Damping ratio of the bounce spring. `1.0` is critical (no overshoot).
    pub bounce_damping: f64,
    /// Natural frequency of the bounce spring, in Hz.
    pub bounce_frequency: f64,
    /// Fraction of the outer viewport over which rubber-band resistance relaxes.
    pub bounce_threshold_ratio: f64,
    /// Inertial motion stops once `|velocity|` drops below this (points per second).
    pub rest_velocity: f64,
    /// Bounce motion stops once the point is this close to its anchor (points).
    pub rest_distance: f64,
    /// Release velocities are clamped to `±max_fling_velocity` (points per second).
    pub max_fling_velocity: f64,
}

impl Default for PhysicsOptions {
    fn default() -> Self {
        Self {
            resistance: 2.0,
            bounce_damping: 1.0,
            bounce_frequency: 2.0,
            bounce_threshold_ratio: DEFAULT_BOUNCE_THRESHOLD_RATIO,
            rest_velocity: 2.0,
            rest_distance: 0.5,
            max_fling_velocity: 8_000.0,
        }
    }
}

impl PhysicsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resistance(mut self, resistance: f64) -> Self {
        self.resistance = resistance;
        self
    }

    pub fn with_bounce_spring(mut self, damping: f64, frequency: f64) -> Self {
        self.bounce_damping = damping;
        self.bounce_frequency = frequency;
        self
    }

    pub fn with_bounce_threshold_ratio(mut self, ratio: f64) -> Self {
        self.bounce_threshold_ratio = ratio;
        self
    }

    pub fn with_rest_thresholds(mut self, rest_velocity: f64, rest_distance: f64) -> Self {
        self.rest_velocity = rest_velocity;
        self.rest_distance = rest_distance;
        self
    }

    pub fn with_max_fling_velocity(mut self, max_fling_velocity: f64) -> Self {
        self.max_fling_velocity = max_fling_velocity;
        self
    }

    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), OptionsError> {
        positive("resistance", self.resistance)?;
        positive("bounce_damping", self.bounce_damping)?;
        positive("bounce_frequency", self.bounce_frequency)?;
        in_range("bounce_threshold_ratio", self.bounce_threshold_ratio, 0.0, 1.0)?;
        positive("rest_velocity", self.rest_velocity)?;
        positive("rest_distance", self.rest_distance)?;
        positive("max_fling_velocity", self.max_fling_velocity)?;
        Ok(())
    }

    /// Clamps a release velocity to the configured fling limit. Non-finite input becomes `0`.
    pub fn clamp_fling_velocity(&self, velocity: f64) -> f64 {
        if !velocity.is_finite() {
            nwarn!(velocity, "non-finite release velocity treated as zero");
            return 0.0;
        }
        velocity.clamp(-self.max_fling_velocity, self.max_fling_velocity)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), OptionsError> {
    if !value.is_finite() {
        return Err(OptionsError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(OptionsError::NonPositive { field, value });
    }
    Ok(())
}

fn in_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), OptionsError> {
    if !value.is_finite() {
        return Err(OptionsError::NonFinite { field });
    }
    if value < min || value > max {
        return Err(OptionsError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
