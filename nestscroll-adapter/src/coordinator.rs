use nestscroll::{
    Behavior, BehaviorId, BehaviorKind, Distribution, Motion, OptionsError, PhysicsOptions,
    Simulator, TickResult, distribute_with_ratio,
};

use crate::{FrameClock, GestureEvent, ScrollSurface};

/// Where the coordinator is in the gesture lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    /// A finger is down and drives both regions directly.
    Dragging,
    /// The finger is up and a simulated fling or bounce owns the outer region.
    Settling,
}

#[derive(Clone, Copy, Debug, Default)]
struct Session {
    last_translation: f64,
}

/// Drives an outer and an inner scroll region from one vertical pan gesture.
///
/// This type does not talk to any UI toolkit. Adapters drive it by calling:
/// - [`GestureCoordinator::handle`] (or `begin`/`change`/`end`/`cancel`) for gesture events
/// - [`GestureCoordinator::tick`] or [`GestureCoordinator::tick_at`] once per display frame
///   while [`GestureCoordinator::needs_tick`] is true
///
/// Offsets are written back through the [`ScrollSurface`]s after every accepted change.
#[derive(Clone, Debug)]
pub struct GestureCoordinator<O, I> {
    outer: O,
    inner: I,
    options: PhysicsOptions,
    simulator: Simulator,
    phase: Phase,
    session: Option<Session>,
    fling: Option<BehaviorId>,
    bounce: Option<BehaviorId>,
    clock: FrameClock,
}

impl<O: ScrollSurface, I: ScrollSurface> GestureCoordinator<O, I> {
    pub fn new(outer: O, inner: I) -> Self {
        Self::with_valid_options(outer, inner, PhysicsOptions::default())
    }

    /// Creates a coordinator with custom physics, rejecting invalid options.
    pub fn try_new(outer: O, inner: I, options: PhysicsOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::with_valid_options(outer, inner, options))
    }

    fn with_valid_options(outer: O, inner: I, options: PhysicsOptions) -> Self {
        adebug!(?options, "GestureCoordinator::new");
        Self {
            outer,
            inner,
            simulator: Simulator::new(&options),
            options,
            phase: Phase::Idle,
            session: None,
            fling: None,
            bounce: None,
            clock: FrameClock::new(),
        }
    }

    pub fn outer(&self) -> &O {
        &self.outer
    }

    pub fn outer_mut(&mut self) -> &mut O {
        &mut self.outer
    }

    pub fn inner(&self) -> &I {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut I {
        &mut self.inner
    }

    pub fn into_parts(self) -> (O, I) {
        (self.outer, self.inner)
    }

    pub fn options(&self) -> &PhysicsOptions {
        &self.options
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    pub fn is_settling(&self) -> bool {
        self.phase == Phase::Settling
    }

    /// `true` while a fling or bounce is running and the frame ticker must keep calling `tick`.
    pub fn needs_tick(&self) -> bool {
        self.simulator.is_active()
    }

    /// Whether the inner region may receive its own touches.
    ///
    /// This is `false` while a simulated motion is moving the regions.
    pub fn inner_interaction_enabled(&self) -> bool {
        !self.simulator.is_active()
    }

    /// The translation consumed by the most recent change event of the current gesture.
    pub fn last_translation(&self) -> Option<f64> {
        self.session.map(|s| s.last_translation)
    }

    pub fn handle(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Began => self.begin(),
            GestureEvent::Changed { translation } => {
                self.change(translation);
            }
            GestureEvent::Ended { velocity } => self.end(velocity),
            GestureEvent::Cancelled => self.cancel(),
        }
    }

    /// A finger touched down. Any running fling or bounce is cancelled before anything else.
    pub fn begin(&mut self) {
        if self.simulator.stop().is_some() {
            adebug!("begin: cancelled running behavior");
        }
        self.fling = None;
        self.bounce = None;
        self.clock.reset();
        self.session = Some(Session::default());
        self.set_phase(Phase::Dragging);
    }

    /// The finger moved by `translation` since the previous change.
    ///
    /// A change without a preceding `begin` starts a gesture implicitly.
    pub fn change(&mut self, translation: f64) -> Distribution {
        if self.phase != Phase::Dragging {
            awarn!(phase = ?self.phase, "change without begin; starting a gesture");
            self.begin();
        }
        if let Some(session) = self.session.as_mut() {
            session.last_translation = translation;
        }
        self.apply_delta(translation)
    }

    /// The finger lifted with `velocity` points per second.
    ///
    /// Ignored unless a gesture is in progress.
    pub fn end(&mut self, velocity: f64) {
        if self.phase != Phase::Dragging {
            awarn!(phase = ?self.phase, "end without an active gesture");
            return;
        }
        self.session = None;
        self.clock.reset();

        if self.outer.scroll_state().is_at_top() {
            self.start_bounce();
            return;
        }

        let velocity = self.options.clamp_fling_velocity(velocity);
        if velocity == 0.0 {
            self.set_phase(Phase::Idle);
            return;
        }

        let id = self
            .simulator
            .start(Behavior::inertial(velocity, &self.options), 0.0);
        self.fling = Some(id);
        self.bounce = None;
        self.set_phase(Phase::Settling);
    }

    /// The recognizer gave up on the gesture. An overscrolled outer region still springs back.
    pub fn cancel(&mut self) {
        if self.phase != Phase::Dragging {
            return;
        }
        self.session = None;
        self.clock.reset();

        if self.outer.offset() < 0.0 {
            self.start_bounce();
        } else {
            self.set_phase(Phase::Idle);
        }
    }

    /// Advances the running fling or bounce by `dt` seconds and writes the result back.
    ///
    /// Returns `None` when nothing is running.
    pub fn tick(&mut self, dt: f64) -> Option<TickResult> {
        let result = self.simulator.tick(dt)?;

        match result.motion {
            Motion::Delta(dy) => {
                self.apply_delta(dy);
                if self.outer.scroll_state().is_at_top() {
                    adebug!(offset = self.outer.offset(), "fling reached the top");
                    self.start_bounce();
                    return Some(result);
                }
            }
            Motion::Position(y) => self.outer.set_offset(y),
        }

        if result.terminated {
            self.fling = None;
            self.bounce = None;
            self.set_phase(Phase::Idle);
        }
        Some(result)
    }

    /// Like [`GestureCoordinator::tick`], deriving `dt` from the frame timestamp `now_ms`.
    pub fn tick_at(&mut self, now_ms: u64) -> Option<TickResult> {
        if !self.simulator.is_active() {
            return None;
        }
        let dt = self.clock.advance(now_ms);
        self.tick(dt)
    }

    /// `true` while a released fling is coasting.
    pub fn is_flinging(&self) -> bool {
        self.fling.is_some_and(|id| self.simulator.is_running(id))
    }

    /// `true` while the outer region is springing back to its top.
    pub fn is_bouncing(&self) -> bool {
        self.bounce.is_some_and(|id| self.simulator.is_running(id))
    }

    /// Which behavior is currently running, if any.
    pub fn active_behavior(&self) -> Option<BehaviorKind> {
        self.simulator.active_kind()
    }

    fn apply_delta(&mut self, delta_y: f64) -> Distribution {
        let outer = self.outer.scroll_state();
        let inner = self.inner.scroll_state();
        let ratio = self.options.bounce_threshold_ratio;
        let d = distribute_with_ratio(delta_y, &outer, &inner, ratio);
        if d.is_zero() {
            return d;
        }

        let (next_outer, next_inner) = d.apply(&outer, &inner);
        atrace!(
            delta_y,
            outer_delta = d.outer_delta,
            inner_delta = d.inner_delta,
            rubber_banded = d.rubber_banded,
            "apply_delta"
        );
        if d.outer_delta != 0.0 {
            self.outer.set_offset(next_outer);
        }
        if d.inner_delta != 0.0 {
            self.inner.set_offset(next_inner.clamp(0.0, inner.max_offset()));
        }
        d
    }

    fn start_bounce(&mut self) {
        if self.is_bouncing() {
            return;
        }
        let y = self.outer.offset();
        let id = self.simulator.start(Behavior::bounce(0.0, &self.options), y);
        self.fling = None;
        self.bounce = Some(id);
        self.set_phase(Phase::Settling);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            adebug!(from = ?self.phase, to = ?phase, "phase change");
            self.phase = phase;
        }
    }
}
