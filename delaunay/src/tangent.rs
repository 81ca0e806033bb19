//! Lower and upper common tangent finding between two already-triangulated
//! convex hulls, used to seed the divide-and-conquer zipper merge.

use crate::adjacency::Adjacency;
use crate::predicates::{left_of, right_of};
use crate::types::VertexId;
use glam::DVec2;

/// Finds the lower common tangent of the hull containing `l_rightmost` and
/// the hull containing `r_leftmost`. Returns `(left, right)` endpoints of the
/// tangent edge.
pub(crate) fn lower_common_tangent(
    adj: &Adjacency,
    points: &[DVec2],
    l_rightmost: VertexId,
    r_leftmost: VertexId,
) -> (VertexId, VertexId) {
    let mut x = l_rightmost;
    let mut y = r_leftmost;
    let mut rfast = adj.first(y);
    let mut lfast = adj.first(x).and_then(|fx| adj.pred(x, fx));

    loop {
        if let Some(rf) = rfast {
            if right_of(points[rf], points[x], points[y]) {
                let temp = rf;
                rfast = adj.succ(rf, y);
                y = temp;
                continue;
            }
        }
        if let Some(lf) = lfast {
            if right_of(points[lf], points[x], points[y]) {
                let temp = lf;
                lfast = adj.pred(lf, x);
                x = temp;
                continue;
            }
        }
        return (x, y);
    }
}

/// Finds the upper common tangent of the hull containing `l_rightmost` and
/// the hull containing `r_leftmost`. Returns `(left, right)` endpoints of the
/// tangent edge.
pub(crate) fn upper_common_tangent(
    adj: &Adjacency,
    points: &[DVec2],
    l_rightmost: VertexId,
    r_leftmost: VertexId,
) -> (VertexId, VertexId) {
    let mut x = l_rightmost;
    let mut y = r_leftmost;
    let mut lfast = adj.first(x);
    let mut rfast = adj.first(y).and_then(|fy| adj.pred(y, fy));

    loop {
        if let Some(rf) = rfast {
            if left_of(points[rf], points[x], points[y]) {
                let temp = rf;
                rfast = adj.pred(rf, y);
                y = temp;
                continue;
            }
        }
        if let Some(lf) = lfast {
            if left_of(points[lf], points[x], points[y]) {
                let temp = lf;
                lfast = adj.succ(lf, x);
                x = temp;
                continue;
            }
        }
        return (x, y);
    }
}
