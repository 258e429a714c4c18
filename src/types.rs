/// Fraction of the viewport over which rubber-band resistance relaxes to zero.
pub const DEFAULT_BOUNCE_THRESHOLD_RATIO: f64 = 0.66;

/// A snapshot of one scroll region's vertical geometry.
///
/// Offsets grow as content moves up (towards its end). A negative `offset` means the region is
/// overscrolled past its top.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f64,
    pub content_extent: f64,
    pub viewport_extent: f64,
    /// Where this region's leading edge sits inside its parent's content (0 for a root region).
    pub origin: f64,
}

impl ScrollState {
    pub fn new(offset: f64, content_extent: f64, viewport_extent: f64) -> Self {
        Self {
            offset,
            content_extent,
            viewport_extent,
            origin: 0.0,
        }
    }

    pub fn with_origin(mut self, origin: f64) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn max_offset(&self) -> f64 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }

    pub fn is_at_top(&self) -> bool {
        self.offset <= 0.0
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset - self.max_offset() >= 0.0
    }

    /// Distance the offset has been pulled past the top (never negative).
    pub fn overscroll_top(&self) -> f64 {
        (-self.offset).max(0.0)
    }

    /// Overscroll distance at which rubber-band resistance has fully relaxed, using the default
    /// ratio.
    pub fn bounce_threshold(&self) -> f64 {
        self.bounce_threshold_with_ratio(DEFAULT_BOUNCE_THRESHOLD_RATIO)
    }

    pub fn bounce_threshold_with_ratio(&self, ratio: f64) -> f64 {
        (self.viewport_extent * ratio).max(0.0)
    }
}

/// How one incremental drag movement is split between the outer and inner region.
///
/// Deltas use drag-space signs: apply them as `offset -= delta` (see [`Distribution::apply`]).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distribution {
    pub outer_delta: f64,
    pub inner_delta: f64,
    /// `true` when the outer delta was attenuated by rubber-band resistance.
    pub rubber_banded: bool,
}

impl Distribution {
    pub const ZERO: Self = Self {
        outer_delta: 0.0,
        inner_delta: 0.0,
        rubber_banded: false,
    };

    pub fn total(&self) -> f64 {
        self.outer_delta + self.inner_delta
    }

    pub fn is_zero(&self) -> bool {
        self.outer_delta == 0.0 && self.inner_delta == 0.0
    }

    /// Returns the `(outer, inner)` offsets after applying this distribution.
    pub fn apply(&self, outer: &ScrollState, inner: &ScrollState) -> (f64, f64) {
        (
            outer.offset - self.outer_delta,
            inner.offset - self.inner_delta,
        )
    }
}

/// The kind of the simulator's active behavior, without its state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorKind {
    Inertial,
    Bounce,
}

/// What a tick produced for the outer region.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    /// Incremental drag-space movement since the previous tick. Route it through
    /// [`crate::distribute`] like a live drag delta.
    Delta(f64),
    /// Absolute outer offset. Assign it directly.
    Position(f64),
}

/// The outcome of one [`crate::Simulator::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickResult {
    pub kind: BehaviorKind,
    pub motion: Motion,
    /// The behavior reached its rest condition and has been removed.
    pub terminated: bool,
}
