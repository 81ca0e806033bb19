//! Grid allocation: scans every (frame, atom) position for the bounding
//! box, then sizes and zero-fills the weight, heightmap, and area arrays.

use crate::Grid;
use glam::DVec3;

/// Builds an empty, correctly-sized [`Grid`] over `trajectory`.
///
/// `trajectory[frame][atom]` gives every sampled position; the grid's
/// origin is the componentwise minimum over all of them.
pub(crate) fn construct(trajectory: &[Vec<DVec3>], cell_width: f64) -> Grid {
    let mut min = DVec3::splat(f64::MAX);
    let mut max = DVec3::splat(f64::MIN);

    for frame in trajectory {
        for &p in frame {
            min = min.min(p);
            max = max.max(p);
        }
    }

    // +2 accounts for floor-truncation of the last partial cell, plus the
    // extra lattice point needed to close that final cell.
    let span = (max - min).max(DVec3::ZERO);
    let dimx = (span.x / cell_width) as usize + 2;
    let dimy = (span.y / cell_width) as usize + 2;
    let dimz = (span.z / cell_width) as usize + 2;

    Grid {
        dimx,
        dimy,
        dimz,
        cell_width,
        origin: min,
        weights: vec![0.0; dimx * dimy * dimz],
        heightmap: vec![-1; dimx * dimy],
        areas: vec![0.0; (dimx - 1) * (dimy - 1)],
        num_empty: 0,
        surface_area: 0.0,
        area_per_particle: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square_single_frame_sizes_grid_correctly() {
        let frame = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        let grid = construct(&[frame], 1.0);
        assert_eq!(grid.dimx, 3);
        assert_eq!(grid.dimy, 3);
        assert_eq!(grid.dimz, 2);
        assert_eq!(grid.origin, DVec3::new(0.0, 0.0, 0.0));
        assert_eq!(grid.weights.len(), grid.dimx * grid.dimy * grid.dimz);
        assert_eq!(grid.heightmap.len(), grid.dimx * grid.dimy);
        assert_eq!(grid.areas.len(), (grid.dimx - 1) * (grid.dimy - 1));
    }
}
