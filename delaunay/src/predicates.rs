//! Exact-arithmetic geometric predicates, wrapping the `geometry-predicates`
//! crate's port of Shewchuk's adaptive-precision `orient2d`/`incircle`
//! routines (the same two predicates the original C engine calls directly).

use glam::DVec2;
use std::sync::Once;

static INIT: Once = Once::new();

/// Runs the predicate library's one-time adaptive-precision bootstrap.
///
/// [`triangulate`](crate::triangulate) calls this internally, so it is safe
/// to triangulate without calling `init` yourself. It is exposed for callers
/// who want to pay the (negligible) warm-up cost deterministically at
/// process start rather than on first use.
pub fn init() {
    INIT.call_once(|| {
        // geometry_predicates self-initializes its error bounds on first call;
        // touching orient2d here just forces that to happen now.
        let _ = geometry_predicates::orient2d([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]);
    });
}

#[inline]
pub fn orient2d(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    geometry_predicates::orient2d(a.to_array(), b.to_array(), c.to_array())
}

#[inline]
pub fn incircle(a: DVec2, b: DVec2, c: DVec2, d: DVec2) -> f64 {
    geometry_predicates::incircle(a.to_array(), b.to_array(), c.to_array(), d.to_array())
}

/// True if `a`, `b`, `c` form a counterclockwise turn.
#[inline]
pub fn ccw(a: DVec2, b: DVec2, c: DVec2) -> bool {
    orient2d(a, b, c) > 0.0
}

/// True if `x` lies to the right of the directed edge `ea -> eb`.
#[inline]
pub fn right_of(x: DVec2, ea: DVec2, eb: DVec2) -> bool {
    ccw(x, eb, ea)
}

/// True if `x` lies to the left of the directed edge `ea -> eb`.
#[inline]
pub fn left_of(x: DVec2, ea: DVec2, eb: DVec2) -> bool {
    ccw(x, ea, eb)
}

/// True if `d` lies strictly inside the circle through `a`, `b`, `c`
/// (which must be given in counterclockwise order).
#[inline]
pub fn in_circle(a: DVec2, b: DVec2, c: DVec2, d: DVec2) -> bool {
    incircle(a, b, c, d) > 0.0
}
