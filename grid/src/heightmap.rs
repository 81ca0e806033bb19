//! Per-column heightmap extraction and per-cell two-triangle area
//! tessellation.

use crate::Grid;
use glam::DVec3;

/// Fills `grid.heightmap` with the max-weight z-index of every column,
/// `-1` where no z-index exceeds `empty_threshold`. Updates `num_empty`.
pub(crate) fn generate(grid: &mut Grid, empty_threshold: f64) {
    let dimyz = grid.dimy * grid.dimz;
    let mut num_empty = 0;

    for x in 0..grid.dimx {
        for y in 0..grid.dimy {
            let mut maxz = -1i32;
            let mut max_weight = empty_threshold;
            for z in 0..grid.dimz {
                let w = grid.weights[x * dimyz + y * grid.dimz + z];
                if w > max_weight {
                    max_weight = w;
                    maxz = z as i32;
                }
            }
            grid.heightmap[x * grid.dimy + y] = maxz;
            if maxz < 0 {
                num_empty += 1;
            }
        }
    }

    grid.num_empty = num_empty;
}

/// Computes every cell's area from the heightmap, splitting each quad into
/// two triangles along the corner `[0,0] -> [1,1]` diagonal. Cells touching
/// an empty (`-1`) column contribute zero area. Fills `grid.areas`,
/// `grid.surface_area`, and `grid.area_per_particle`.
pub(crate) fn tessellate(grid: &mut Grid, natoms: usize) {
    let cw = grid.cell_width;
    let mut total = 0.0;

    for x in 0..grid.dimx - 1 {
        for y in 0..grid.dimy - 1 {
            let h00 = grid.heightmap[x * grid.dimy + y];
            let h01 = grid.heightmap[x * grid.dimy + y + 1];
            let h10 = grid.heightmap[(x + 1) * grid.dimy + y];
            let h11 = grid.heightmap[(x + 1) * grid.dimy + y + 1];

            if h00 < 0 || h01 < 0 || h10 < 0 || h11 < 0 {
                grid.areas[x * (grid.dimy - 1) + y] = 0.0;
                continue;
            }

            let c0 = DVec3::new(0.0, 0.0, h00 as f64 * cw);
            let c1 = DVec3::new(0.0, cw, h01 as f64 * cw);
            let c2 = DVec3::new(cw, 0.0, h10 as f64 * cw);
            let c3 = DVec3::new(cw, cw, h11 as f64 * cw);

            let ab = c1 - c0;
            let ac = c2 - c0;
            let ad = c3 - c0;

            let area = ab.cross(ad).length() / 2.0 + ad.cross(ac).length() / 2.0;
            total += area;
            grid.areas[x * (grid.dimy - 1) + y] = area;
        }
    }

    grid.surface_area = total;
    grid.area_per_particle = if natoms > 0 { total / natoms as f64 } else { 0.0 };
}
