//! Plain-text diagnostic dump of a computed grid: dimensions and origin,
//! the full weight array, the heightmap, per-cell areas, and summary
//! statistics. Documentation-only format, not meant to be machine-parsed.

use crate::Grid;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub(crate) fn write(grid: &Grid, path: &Path) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);

    writeln!(
        f,
        "Grid points: dimx = {}, dimy = {}, dimz = {}",
        grid.dimx, grid.dimy, grid.dimz
    )?;
    writeln!(f, "Grid cell width = {}", grid.cell_width)?;
    writeln!(
        f,
        "Trajectory origin: minx = {}, miny = {}, minz = {}",
        grid.origin.x, grid.origin.y, grid.origin.z
    )?;

    writeln!(f, "\nWeights ([x][y]: z weights):")?;
    let dimyz = grid.dimy * grid.dimz;
    for x in 0..grid.dimx {
        for y in 0..grid.dimy {
            write!(f, "[{x}][{y}]: ")?;
            for z in 0..grid.dimz {
                write!(f, "{} ", grid.weights[x * dimyz + y * grid.dimz + z])?;
            }
            writeln!(f)?;
        }
    }

    writeln!(f, "\nHeightmap (max weight z indexes, x rows by y columns):")?;
    for x in 0..grid.dimx {
        for y in 0..grid.dimy {
            write!(f, "{}\t", grid.heightmap[x * grid.dimy + y])?;
        }
        writeln!(f)?;
    }

    writeln!(f, "\nGrid cell areas (Cell with origin indices [x][y]: area):")?;
    for x in 0..grid.dimx.saturating_sub(1) {
        for y in 0..grid.dimy.saturating_sub(1) {
            writeln!(f, "Cell [{x}][{y}]: {}", grid.areas[x * (grid.dimy - 1) + y])?;
        }
    }

    writeln!(
        f,
        "\n{} grid cell(s) have empty (zero-weight) corner(s) and are excluded from tessellation.",
        grid.num_empty
    )?;
    writeln!(f, "Total tessellated surface area: {}", grid.surface_area)?;
    writeln!(
        f,
        "Tessellated surface area per particle: {}",
        grid.area_per_particle
    )?;

    f.flush()
}
