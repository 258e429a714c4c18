use crate::behavior::SimulatedPoint;
use crate::{Behavior, BehaviorKind, Motion, PhysicsOptions, TickResult};

/// A non-owning handle to a behavior started on a [`Simulator`].
///
/// Handles are never reused, so a stale handle stops matching as soon as its behavior ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorId(u64);

#[derive(Clone, Debug)]
struct Active {
    id: BehaviorId,
    behavior: Behavior,
    point: SimulatedPoint,
}

/// A fixed-slot integrator that runs at most one [`Behavior`] for the outer region.
///
/// The simulator owns the active behavior and its point. Drive it by calling [`Simulator::tick`]
/// once per display frame while [`Simulator::is_active`] is true.
#[derive(Clone, Debug)]
pub struct Simulator {
    active: Option<Active>,
    next_id: u64,
    rest_velocity: f64,
    rest_distance: f64,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(&PhysicsOptions::default())
    }
}

impl Simulator {
    pub fn new(options: &PhysicsOptions) -> Self {
        Self {
            active: None,
            next_id: 0,
            rest_velocity: options.rest_velocity,
            rest_distance: options.rest_distance,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_id(&self) -> Option<BehaviorId> {
        self.active.as_ref().map(|a| a.id)
    }

    pub fn active_kind(&self) -> Option<BehaviorKind> {
        self.active.as_ref().map(|a| a.behavior.kind())
    }

    /// Whether the behavior behind `id` is still the one running.
    pub fn is_running(&self, id: BehaviorId) -> bool {
        self.active_id() == Some(id)
    }

    pub fn behavior(&self) -> Option<&Behavior> {
        self.active.as_ref().map(|a| &a.behavior)
    }

    pub fn point(&self) -> Option<SimulatedPoint> {
        self.active.as_ref().map(|a| a.point)
    }

    /// Installs `behavior` with a fresh point at `y`, discarding whatever was running.
    pub fn start(&mut self, behavior: Behavior, y: f64) -> BehaviorId {
        ndebug!(
            replaced = ?self.active.as_ref().map(|a| a.id),
            "Simulator::start: discarding previous behavior"
        );

        let id = BehaviorId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        ndebug!(id = id.0, ?behavior, y, "Simulator::start");

        self.active = Some(Active {
            id,
            point: behavior.spawn_point(y),
            behavior,
        });
        id
    }

    /// Cancels the active behavior, if any. Returns the cancelled handle.
    pub fn stop(&mut self) -> Option<BehaviorId> {
        let prev = self.active.take()?;
        ndebug!(id = prev.id.0, kind = ?prev.behavior.kind(), "Simulator::stop");
        Some(prev.id)
    }

    /// Advances the active behavior by `dt` seconds.
    ///
    /// Returns `None` when nothing is running. Inertial behaviors report the change in `y` since
    /// the previous tick; bounces report the absolute `y`, snapped onto the anchor when they come
    /// to rest. A non-positive or non-finite `dt` reports no movement and never terminates.
    pub fn tick(&mut self, dt: f64) -> Option<TickResult> {
        let rest_velocity = self.rest_velocity;
        let rest_distance = self.rest_distance;
        let active = self.active.as_mut()?;
        let kind = active.behavior.kind();

        if !dt.is_finite() || dt <= 0.0 {
            nwarn!(dt, "Simulator::tick: ignoring degenerate dt");
            let motion = match kind {
                BehaviorKind::Inertial => Motion::Delta(0.0),
                BehaviorKind::Bounce => Motion::Position(active.point.y),
            };
            return Some(TickResult {
                kind,
                motion,
                terminated: false,
            });
        }

        let before = active.point.y;
        active.behavior.step(&mut active.point, dt);
        let terminated = active
            .behavior
            .is_at_rest(&active.point, rest_velocity, rest_distance);

        let motion = match active.behavior {
            Behavior::Inertial { .. } => Motion::Delta(active.point.y - before),
            Behavior::Bounce { anchor_y, .. } => {
                if terminated {
                    active.point = SimulatedPoint {
                        y: anchor_y,
                        velocity: 0.0,
                    };
                }
                Motion::Position(active.point.y)
            }
        };
        ntrace!(
            id = active.id.0,
            y = active.point.y,
            velocity = active.point.velocity,
            terminated,
            "Simulator::tick"
        );

        if terminated {
            ndebug!(id = active.id.0, ?kind, "Simulator: behavior came to rest");
            self.active = None;
        }

        Some(TickResult {
            kind,
            motion,
            terminated,
        })
    }
}
