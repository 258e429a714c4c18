use crate::{Distribution, ScrollState};
use crate::types::DEFAULT_BOUNCE_THRESHOLD_RATIO;

/// Remaining distance the outer region can scroll before the inner region's leading edge reaches
/// the top of the outer viewport.
pub fn headroom(outer: &ScrollState, inner: &ScrollState) -> f64 {
    (inner.origin - outer.offset).max(0.0)
}

/// Rubber-band attenuation for a region already pulled `overscroll` past its top.
///
/// Falls linearly from `1` (no overscroll yet) to `0` once `overscroll` reaches `threshold`.
/// A zero threshold (e.g. an empty viewport) yields `0`.
pub fn bounce_factor(threshold: f64, overscroll: f64) -> f64 {
    if !threshold.is_finite() || threshold <= 0.0 {
        return 0.0;
    }
    ((threshold - overscroll.abs()) / threshold).max(0.0)
}

/// Splits one incremental drag movement between the outer and inner region.
///
/// `delta_y < 0` is the finger moving up (content moves towards larger offsets); the outer region
/// takes the movement first until the inner region's top edge reaches the viewport top.
/// `delta_y > 0` is the finger moving down; the inner region gives back its offset first, then
/// the outer region, which is rubber-banded once it would cross its top.
///
/// This is pure: the caller applies the result (see [`Distribution::apply`]).
pub fn distribute(delta_y: f64, outer: &ScrollState, inner: &ScrollState) -> Distribution {
    distribute_with_ratio(delta_y, outer, inner, DEFAULT_BOUNCE_THRESHOLD_RATIO)
}

/// Same as [`distribute`], with a custom bounce threshold ratio (see
/// [`crate::PhysicsOptions::bounce_threshold_ratio`]).
pub fn distribute_with_ratio(
    delta_y: f64,
    outer: &ScrollState,
    inner: &ScrollState,
    bounce_threshold_ratio: f64,
) -> Distribution {
    if !delta_y.is_finite() {
        nwarn!(delta_y, "distribute: non-finite delta ignored");
        return Distribution::ZERO;
    }
    if delta_y == 0.0 {
        return Distribution::ZERO;
    }

    if delta_y < 0.0 {
        let room = headroom(outer, inner);
        let outer_delta = if room + delta_y >= 0.0 { delta_y } else { -room };
        return Distribution {
            outer_delta,
            inner_delta: delta_y - outer_delta,
            rubber_banded: false,
        };
    }

    let inner_offset = inner.offset.max(0.0);
    let inner_delta = if inner_offset - delta_y > 0.0 {
        delta_y
    } else {
        inner_offset
    };
    let outer_delta = delta_y - inner_delta;

    if outer.offset - outer_delta < 0.0 {
        let threshold = outer.bounce_threshold_with_ratio(bounce_threshold_ratio);
        let factor = bounce_factor(threshold, outer.offset);
        ntrace!(
            offset = outer.offset,
            threshold,
            factor,
            "distribute: rubber band engaged"
        );
        return Distribution {
            outer_delta: delta_y * factor,
            inner_delta: 0.0,
            rubber_banded: true,
        };
    }

    Distribution {
        outer_delta,
        inner_delta,
        rubber_banded: false,
    }
}
