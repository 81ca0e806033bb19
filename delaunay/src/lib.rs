//! A from-scratch 2-D Delaunay triangulator.
//!
//! Uses the divide-and-conquer algorithm of Lee & Schachter, with the
//! Guibas–Stolfi merge, built on exact `orient2d`/`incircle` predicates so
//! the triangulation is robust to nearly-collinear and nearly-cocircular
//! input.
//!
//! ```
//! use glam::DVec2;
//!
//! let points = vec![
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(1.0, 0.0),
//!     DVec2::new(1.0, 1.0),
//!     DVec2::new(0.0, 1.0),
//! ];
//! let tri = delaunay::triangulate(points);
//! assert_eq!(tri.ntriangles(), 2);
//! ```

mod adjacency;
mod area;
mod core;
mod dump;
mod extract;
mod predicates;
mod tangent;
mod types;

use glam::DVec2;
use std::path::Path;

pub use predicates::{ccw, in_circle, incircle, init, left_of, orient2d, right_of};
pub use types::VertexId;

/// Coordinates within this distance of each other (on both axes) are
/// considered duplicates.
pub(crate) const DEDUP_EPSILON: f64 = 1e-12;

/// Fewer than this many distinct points cannot be triangulated.
pub(crate) const MIN_POINTS: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write diagnostic dump")]
    Dump(#[from] std::io::Error),
}

/// The result of triangulating a point set: the (sorted, deduplicated)
/// points themselves, plus the triangle list over them.
///
/// Each triangle is three indices into [`Triangulation::points`], wound
/// counterclockwise.
#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    pub points: Vec<DVec2>,
    pub triangles: Vec<[u32; 3]>,
}

impl Triangulation {
    pub fn nverts(&self) -> usize {
        self.points.len()
    }

    pub fn ntriangles(&self) -> usize {
        self.triangles.len()
    }

    /// Total surface area, summed over every output triangle.
    pub fn surface_area(&self) -> f64 {
        area::surface_area(&self.points, &self.triangles)
    }

    /// Writes `<stem>.node` and `<stem>.ele` in the format Shewchuk's
    /// `triangle`/`showme` tools read, for visual debugging.
    pub fn write_node_ele(&self, stem: impl AsRef<Path>) -> Result<(), Error> {
        dump::write_node_ele(&self.points, &self.triangles, stem.as_ref())?;
        Ok(())
    }
}

/// Triangulates an unordered, possibly-duplicate-containing point set.
///
/// Fewer than two distinct points is not an error: a warning is logged and
/// an empty [`Triangulation`] is returned, matching the non-fatal
/// "too few points" condition this is modeled on.
pub fn triangulate(points: Vec<DVec2>) -> Triangulation {
    predicates::init();

    if points.len() < MIN_POINTS {
        log::warn!(
            "only {} point(s) given, need at least {MIN_POINTS}; returning empty triangulation",
            points.len()
        );
        return Triangulation {
            points,
            triangles: Vec::new(),
        };
    }

    let points = core::sort_and_dedup(points);

    if points.len() < MIN_POINTS {
        log::warn!(
            "only {} non-duplicate point(s), need at least {MIN_POINTS}; returning empty triangulation",
            points.len()
        );
        return Triangulation {
            points,
            triangles: Vec::new(),
        };
    }

    let mut adj = adjacency::Adjacency::new(points.len());
    core::triangulate_range(&mut adj, &points, 0, points.len() - 1);
    let triangles = extract::extract_triangles(&mut adj, &points, points.len());

    Triangulation { points, triangles }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(triangles: &[[u32; 3]]) -> Vec<(u32, u32)> {
        let mut edges = Vec::new();
        for t in triangles {
            for &(a, b) in &[(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
                edges.push((a.min(b), a.max(b)));
            }
        }
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    #[test]
    fn scenario_single_triangle() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 1.0),
        ];
        let tri = triangulate(points);
        assert_eq!(tri.ntriangles(), 1);
        assert!((tri.surface_area() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn scenario_unit_square() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ];
        let tri = triangulate(points);
        assert_eq!(tri.ntriangles(), 2);
        assert!((tri.surface_area() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn scenario_collinear_triple_produces_no_triangle() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
        ];
        let tri = triangulate(points);
        assert_eq!(tri.ntriangles(), 0);
        assert_eq!(tri.surface_area(), 0.0);
    }

    #[test]
    fn scenario_duplicate_points_are_pruned() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 1.0),
        ];
        let tri = triangulate(points);
        assert_eq!(tri.nverts(), 3);
        assert_eq!(tri.ntriangles(), 1);
    }

    #[test]
    fn too_few_points_returns_empty_triangulation_not_a_panic() {
        let tri = triangulate(vec![DVec2::new(0.0, 0.0)]);
        assert_eq!(tri.ntriangles(), 0);
        let tri = triangulate(vec![]);
        assert_eq!(tri.ntriangles(), 0);
    }

    #[test]
    fn triangle_count_is_bounded_by_euler_formula() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(3.0, 2.0),
            DVec2::new(2.0, 4.0),
        ];
        let nverts = points.len();
        let tri = triangulate(points);
        assert!(tri.ntriangles() <= 2 * (nverts - 1) - 2);
    }

    #[test]
    fn permutation_invariance_of_total_area() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(3.0, 2.0),
            DVec2::new(2.0, 4.0),
        ];
        let mut shuffled = points.clone();
        shuffled.reverse();

        let a = triangulate(points).surface_area();
        let b = triangulate(shuffled).surface_area();
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn every_edge_appears_at_least_once() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(3.0, 2.0),
            DVec2::new(2.0, 4.0),
        ];
        let tri = triangulate(points);
        assert!(!edges(&tri.triangles).is_empty());
    }

    #[test]
    fn every_output_triangle_is_ccw_oriented() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(3.0, 2.0),
            DVec2::new(2.0, 4.0),
        ];
        let tri = triangulate(points);
        assert!(!tri.triangles.is_empty());
        for &[a, b, c] in &tri.triangles {
            let (pa, pb, pc) = (
                tri.points[a as usize],
                tri.points[b as usize],
                tri.points[c as usize],
            );
            assert!(orient2d(pa, pb, pc) > 0.0, "triangle [{a},{b},{c}] is not CCW");
        }
    }

    #[test]
    fn delaunay_empty_circle_property_holds() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(3.0, 2.0),
            DVec2::new(2.0, 4.0),
        ];
        let tri = triangulate(points);
        assert!(!tri.triangles.is_empty());
        for &[a, b, c] in &tri.triangles {
            let (pa, pb, pc) = (
                tri.points[a as usize],
                tri.points[b as usize],
                tri.points[c as usize],
            );
            for (i, &p) in tri.points.iter().enumerate() {
                if i == a as usize || i == b as usize || i == c as usize {
                    continue;
                }
                assert!(
                    incircle(pa, pb, pc, p) <= 0.0,
                    "vertex {i} lies strictly inside the circumcircle of triangle [{a},{b},{c}]"
                );
            }
        }
    }

    #[test]
    fn euler_relation_holds_for_the_planar_subdivision() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(3.0, 2.0),
            DVec2::new(2.0, 4.0),
        ];
        let tri = triangulate(points);
        let v = tri.nverts() as i64;
        let e = edges(&tri.triangles).len() as i64;
        let f = tri.ntriangles() as i64 + 1; // +1 for the unbounded outer face
        assert_eq!(v - e + f, 2);
    }

    #[test]
    fn random_point_clouds_never_panic_and_stay_within_bounds() {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let n = rng.gen_range(3..64);
            let points: Vec<DVec2> = (0..n)
                .map(|_| DVec2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
                .collect();
            let tri = triangulate(points);
            assert!(tri.surface_area() >= 0.0);
            assert!(tri.surface_area() <= 400.0);
        }
    }
}
