//! Accumulates each atom's weighted influence onto the eight lattice points
//! of its enclosing cell.

use crate::weight::WeightKernel;
use crate::Grid;
use glam::DVec3;

/// Loads every (frame, atom) position in `trajectory` into `grid`'s weight
/// array using `kernel`.
pub(crate) fn load(grid: &mut Grid, trajectory: &[Vec<DVec3>], kernel: WeightKernel) {
    let dimyz = grid.dimy * grid.dimz;
    let cw = grid.cell_width;

    for frame in trajectory {
        for &atom in frame {
            let xi = ((atom.x - grid.origin.x) / cw) as usize;
            let yi = ((atom.y - grid.origin.y) / cw) as usize;
            let zi = ((atom.z - grid.origin.z) / cw) as usize;
            let base = grid.origin + DVec3::new(xi as f64, yi as f64, zi as f64) * cw;

            for dx in 0..2usize {
                for dy in 0..2usize {
                    for dz in 0..2usize {
                        let corner = base + DVec3::new(dx as f64, dy as f64, dz as f64) * cw;
                        let idx = (xi + dx) * dimyz + (yi + dy) * grid.dimz + (zi + dz);
                        grid.weights[idx] += kernel.weight(atom, corner, cw);
                    }
                }
            }
        }
    }
}
