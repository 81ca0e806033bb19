//! Converts a completed adjacency structure into an explicit triangle list.
//!
//! Walking a vertex's ring once yields every triangle incident to it that
//! hasn't already been emitted from an earlier vertex; freeing the ring
//! afterwards both releases its arena slots and marks the vertex as done, so
//! no separate "visited" set is needed.

use crate::adjacency::Adjacency;
use crate::predicates::right_of;
use crate::types::VertexId;
use glam::DVec2;

/// Extracts all triangles from `adj` and frees every vertex's ring as it is
/// consumed. `points` must be the same slice the triangulation was built
/// over; `nverts` must be at least 2.
pub(crate) fn extract_triangles(adj: &mut Adjacency, points: &[DVec2], nverts: usize) -> Vec<[u32; 3]> {
    debug_assert!(nverts >= 2);
    // 2(n-1)-k triangles, n = nverts, k = points on the convex hull; 2 is the
    // smallest k can be (the two-point case), giving an upper bound.
    let cap = 2 * (nverts - 1) - 2;
    let mut triangles = Vec::with_capacity(cap);

    for i in 0..nverts {
        let vi = VertexId::from(i);
        if let Some(head) = adj.first(vi) {
            if adj.succ(vi, head) != Some(head) {
                let mut cur = head;
                loop {
                    let next = adj.succ(vi, cur).expect("cur is a node in vi's ring");
                    if adj.has_neighbors(cur) && adj.has_neighbors(next) {
                        if next == head && !right_of(points[cur], points[vi], points[next]) {
                            break; // this edge bounds the outer (unbounded) face
                        }
                        triangles.push([i as u32, cur.raw(), next.raw()]);
                    }
                    cur = next;
                    if cur == head {
                        break;
                    }
                }
            }
        }
        adj.clear_vertex(vi);
    }

    triangles.shrink_to_fit();
    triangles
}
