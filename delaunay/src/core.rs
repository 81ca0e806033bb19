//! Lexicographic sort/dedup and the recursive divide-and-conquer core:
//! base cases for 2 and 3 points, and the zipper merge for 4 or more.

use crate::adjacency::Adjacency;
use crate::predicates::{ccw, in_circle, left_of, right_of};
use crate::tangent::{lower_common_tangent, upper_common_tangent};
use crate::types::VertexId;
use crate::DEDUP_EPSILON;
use glam::DVec2;
use std::cmp::Ordering;

fn cmp_lex(a: DVec2, b: DVec2) -> Ordering {
    let dx = a.x - b.x;
    if dx.abs() < DEDUP_EPSILON {
        a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal)
    } else if dx < 0.0 {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Sorts points lexicographically (x, then y, within [`DEDUP_EPSILON`]) and
/// removes duplicates. Unlike the routine this is grounded on, duplicate
/// removal is a two-index compaction sweep, not an in-place shift: each
/// candidate is compared against the last *kept* point, never the previous
/// array slot, so it cannot under-count a run of more than two duplicates.
pub(crate) fn sort_and_dedup(mut points: Vec<DVec2>) -> Vec<DVec2> {
    if points.len() < 2 {
        return points;
    }
    points.sort_by(|&a, &b| cmp_lex(a, b));

    let mut write = 0usize;
    for read in 1..points.len() {
        let last = points[write];
        let cand = points[read];
        let same =
            (cand.x - last.x).abs() < DEDUP_EPSILON && (cand.y - last.y).abs() < DEDUP_EPSILON;
        if !same {
            write += 1;
            points[write] = cand;
        }
    }
    points.truncate(write + 1);
    points
}

/// Triangulates `points[ia..=ib]`, assuming the slice is already sorted
/// lexicographically. Returns `(leftmost, rightmost)` hull vertices of the
/// resulting triangulation.
pub(crate) fn triangulate_range(
    adj: &mut Adjacency,
    points: &[DVec2],
    ia: usize,
    ib: usize,
) -> (VertexId, VertexId) {
    let va = VertexId::from(ia);
    let vb = VertexId::from(ib);

    if ib - ia == 1 {
        adj.connect(points, va, vb);
        return (va, vb);
    }

    if ib - ia == 2 {
        let vm = VertexId::from(ia + 1);
        adj.connect(points, va, vm);
        adj.connect(points, vm, vb);
        if ccw(points[va], points[vm], points[vb]) || ccw(points[va], points[vb], points[vm]) {
            adj.connect(points, va, vb);
        } // else collinear: leave the middle point as a pass-through, no diagonal
        return (va, vb);
    }

    // ia..=ib spans 4+ points: recurse on both halves, then zipper-merge them.
    let mid = (ia + ib) / 2;
    let (lo, mut li) = triangulate_range(adj, points, ia, mid);
    let (mut ri, ro) = triangulate_range(adj, points, mid + 1, ib);

    let (lctl, lctr) = lower_common_tangent(adj, points, li, ri);
    let (uctl, uctr) = upper_common_tangent(adj, points, li, ri);

    li = lctl;
    ri = lctr;

    while li != uctl || ri != uctr {
        adj.connect(points, li, ri);

        let mut r1 = adj.pred(ri, li).expect("li was just connected into ri's ring");
        let right_invalid = if left_of(points[r1], points[li], points[ri]) {
            let mut r2 = adj.pred(ri, r1).expect("r1 is a neighbor of ri");
            while in_circle(points[r1], points[li], points[ri], points[r2]) {
                adj.cut(ri, r1);
                r1 = r2;
                r2 = adj.pred(ri, r1).expect("r1 is a neighbor of ri");
            }
            false
        } else {
            true
        };

        let mut l1 = adj.succ(li, ri).expect("ri was just connected into li's ring");
        let left_invalid = if right_of(points[l1], points[ri], points[li]) {
            let mut l2 = adj.succ(li, l1).expect("l1 is a neighbor of li");
            while in_circle(points[li], points[ri], points[l1], points[l2]) {
                adj.cut(li, l1);
                l1 = l2;
                l2 = adj.succ(li, l1).expect("l1 is a neighbor of li");
            }
            false
        } else {
            true
        };

        if right_invalid {
            li = l1;
        } else if left_invalid {
            ri = r1;
        } else if !in_circle(points[li], points[ri], points[r1], points[l1]) {
            ri = r1;
        } else {
            li = l1;
        }
    }
    adj.connect(points, uctl, uctr);

    (lo, ro)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::Adjacency;

    /// Walks every vertex's ring via `succ`, starting at `first`, to recover
    /// the full neighbor list `Adjacency` doesn't expose directly.
    fn ring_neighbors(adj: &Adjacency, vi: VertexId) -> Vec<VertexId> {
        let mut neighbors = Vec::new();
        if let Some(head) = adj.first(vi) {
            let mut cur = head;
            loop {
                neighbors.push(cur);
                cur = adj.succ(vi, cur).expect("cur is a node in vi's ring");
                if cur == head {
                    break;
                }
            }
        }
        neighbors
    }

    #[test]
    fn edge_symmetry_holds_across_the_whole_triangulation() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(3.0, 2.0),
            DVec2::new(2.0, 4.0),
        ];
        let mut adj = Adjacency::new(points.len());
        triangulate_range(&mut adj, &points, 0, points.len() - 1);

        let rings: Vec<Vec<VertexId>> = (0..points.len())
            .map(|i| ring_neighbors(&adj, VertexId::from(i)))
            .collect();

        for (i, ring) in rings.iter().enumerate() {
            for &j in ring {
                assert!(
                    rings[j.index()].contains(&VertexId::from(i)),
                    "edge ({i}, {j}) is not symmetric"
                );
            }
        }
    }

    #[test]
    fn dedup_collapses_exact_duplicates() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
        ];
        let out = sort_and_dedup(points);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn dedup_collapses_a_long_run() {
        let points = vec![DVec2::new(1.0, 1.0); 6];
        let out = sort_and_dedup(points);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn dedup_preserves_distinct_points() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 0.0),
        ];
        let out = sort_and_dedup(points);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn dedup_is_order_independent() {
        let mut a = vec![
            DVec2::new(2.0, 0.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 1.0),
        ];
        let mut b = a.clone();
        b.reverse();
        let out_a = sort_and_dedup(a.clone());
        let out_b = sort_and_dedup(b);
        a.sort_by(|&p, &q| cmp_lex(p, q));
        assert_eq!(out_a, a);
        assert_eq!(out_a.len(), out_b.len());
    }
}
