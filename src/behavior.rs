use core::f64::consts::TAU;

use crate::{BehaviorKind, PhysicsOptions};

/// Damping ratios this close to `1` are integrated with the critically damped closed form.
const CRITICAL_EPSILON: f64 = 1e-6;

/// A motion law for the outer region's simulated point.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behavior {
    /// Free motion whose velocity decays exponentially with `resistance` (per second).
    Inertial { velocity: f64, resistance: f64 },
    /// A zero-length spring pulling the point towards `anchor_y`.
    ///
    /// `damping` is the damping ratio (`1` is critical) and `frequency` the natural frequency in
    /// Hz.
    Bounce {
        anchor_y: f64,
        damping: f64,
        frequency: f64,
    },
}

impl Behavior {
    pub fn inertial(velocity: f64, options: &PhysicsOptions) -> Self {
        Self::Inertial {
            velocity,
            resistance: options.resistance,
        }
    }

    pub fn bounce(anchor_y: f64, options: &PhysicsOptions) -> Self {
        Self::Bounce {
            anchor_y,
            damping: options.bounce_damping,
            frequency: options.bounce_frequency,
        }
    }

    pub fn kind(&self) -> BehaviorKind {
        match self {
            Self::Inertial { .. } => BehaviorKind::Inertial,
            Self::Bounce { .. } => BehaviorKind::Bounce,
        }
    }

    /// The point a behavior starts from: inertial motion carries its initial velocity, a bounce
    /// starts at rest.
    pub(crate) fn spawn_point(&self, y: f64) -> SimulatedPoint {
        match *self {
            Self::Inertial { velocity, .. } => SimulatedPoint { y, velocity },
            Self::Bounce { .. } => SimulatedPoint { y, velocity: 0.0 },
        }
    }

    /// Advances `point` by `dt` seconds.
    pub(crate) fn step(&self, point: &mut SimulatedPoint, dt: f64) {
        match *self {
            Self::Inertial { resistance, .. } => {
                point.y += point.velocity * dt;
                point.velocity *= (-resistance * dt).exp();
            }
            Self::Bounce {
                anchor_y,
                damping,
                frequency,
            } => {
                let omega = TAU * frequency;
                let (x, v) = spring_step(point.y - anchor_y, point.velocity, omega, damping, dt);
                point.y = anchor_y + x;
                point.velocity = v;
            }
        }
    }

    pub(crate) fn is_at_rest(
        &self,
        point: &SimulatedPoint,
        rest_velocity: f64,
        rest_distance: f64,
    ) -> bool {
        match *self {
            Self::Inertial { .. } => point.velocity.abs() < rest_velocity,
            Self::Bounce { anchor_y, .. } => (point.y - anchor_y).abs() <= rest_distance,
        }
    }
}

/// The abstract point mass a behavior moves. Only `y` is observable by the outer region.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulatedPoint {
    pub y: f64,
    pub velocity: f64,
}

/// Exact solution of `x'' + 2ζωx' + ω²x = 0` advanced by `t`, returning the new `(x, v)`.
///
/// Stable for any `t`; with `x'(0) = 0` and `ζ >= 1` the displacement keeps its sign.
pub(crate) fn spring_step(x0: f64, v0: f64, omega: f64, zeta: f64, t: f64) -> (f64, f64) {
    if (zeta - 1.0).abs() < CRITICAL_EPSILON {
        let c = v0 + omega * x0;
        let decay = (-omega * t).exp();
        let x = (x0 + c * t) * decay;
        let v = (v0 - omega * c * t) * decay;
        return (x, v);
    }

    if zeta < 1.0 {
        let root = (1.0 - zeta * zeta).sqrt();
        let omega_d = omega * root;
        let a = zeta * omega;
        let b = (v0 + a * x0) / omega_d;
        let decay = (-a * t).exp();
        let (sin, cos) = (omega_d * t).sin_cos();
        let x = decay * (x0 * cos + b * sin);
        let v = decay * (v0 * cos - (x0 * omega_d + a * b) * sin);
        return (x, v);
    }

    let root = (zeta * zeta - 1.0).sqrt();
    let r1 = -omega * (zeta - root);
    let r2 = -omega * (zeta + root);
    let c2 = (v0 - r1 * x0) / (r2 - r1);
    let c1 = x0 - c2;
    let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
    (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
}
