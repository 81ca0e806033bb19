//! Triangle-area summation: turns a triangle list into a scalar surface
//! area, the missing link between the component table's "area-estimation
//! engine" framing and a triangle list alone.

use glam::DVec2;

#[inline]
pub(crate) fn triangle_area(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    (ab.perp_dot(ac)).abs() / 2.0
}

/// Sums the area of every triangle in `triangles` over `points`.
pub(crate) fn surface_area(points: &[DVec2], triangles: &[[u32; 3]]) -> f64 {
    triangles
        .iter()
        .map(|&[a, b, c]| {
            triangle_area(
                points[a as usize],
                points[b as usize],
                points[c as usize],
            )
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_right_triangle_has_area_half() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(1.0, 0.0);
        let c = DVec2::new(0.0, 1.0);
        assert!((triangle_area(a, b, c) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn surface_area_sums_two_triangles_to_unit_square() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ];
        let triangles = [[0, 1, 2], [0, 2, 3]];
        let area = surface_area(&points, &triangles);
        assert!((area - 1.0).abs() < 1e-12);
    }
}
