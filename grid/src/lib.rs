//! A weighted-lattice heightmap builder: turns a multi-frame point
//! trajectory into a piecewise-planar surface and sums triangle areas over
//! grid cells.
//!
//! ```
//! use glam::DVec3;
//! use grid::{Grid, WeightKernel};
//!
//! let frame = vec![
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(1.0, 0.0, 0.0),
//!     DVec3::new(1.0, 1.0, 0.0),
//!     DVec3::new(0.0, 1.0, 0.0),
//! ];
//! let grid = Grid::compute(&[frame], 1.0, WeightKernel::Linear);
//! assert!((grid.surface_area - 1.0).abs() < 1e-6);
//! ```

mod builder;
mod dump;
mod heightmap;
mod loader;
mod weight;

pub use weight::WeightKernel;

use glam::DVec3;
use std::path::Path;

/// Floor for "non-empty" column weight, guarding against floating-point
/// noise around zero. See [`Grid::compute_with_threshold`] to override it.
pub const DEFAULT_EMPTY_THRESHOLD: f64 = 2.0 * f64::EPSILON;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write diagnostic dump")]
    Dump(#[from] std::io::Error),
}

/// A 3-D lattice of weights, the heightmap derived from it, and the
/// per-cell tessellated areas. See the crate docs for how these relate.
#[derive(Debug, Clone)]
pub struct Grid {
    pub dimx: usize,
    pub dimy: usize,
    pub dimz: usize,
    pub cell_width: f64,
    /// Componentwise minimum over every sampled position; the lattice's
    /// `(0, 0, 0)` point.
    pub origin: DVec3,
    /// Flat `dimx * dimy * dimz` array, indexed `[x * dimy*dimz + y*dimz + z]`.
    pub weights: Vec<f64>,
    /// Flat `dimx * dimy` array of max-weight z-indices, `-1` = empty column.
    pub heightmap: Vec<i32>,
    /// Flat `(dimx-1) * (dimy-1)` array of per-cell areas.
    pub areas: Vec<f64>,
    pub num_empty: usize,
    pub surface_area: f64,
    pub area_per_particle: f64,
}

impl Grid {
    /// Builds a grid over `trajectory` (indexed `[frame][atom]`) using the
    /// default empty-column threshold.
    pub fn compute(trajectory: &[Vec<DVec3>], cell_width: f64, kernel: WeightKernel) -> Grid {
        Self::compute_with_threshold(trajectory, cell_width, kernel, DEFAULT_EMPTY_THRESHOLD)
    }

    /// Builds a grid over `trajectory`, treating any column whose max weight
    /// does not exceed `empty_threshold` as empty.
    pub fn compute_with_threshold(
        trajectory: &[Vec<DVec3>],
        cell_width: f64,
        kernel: WeightKernel,
        empty_threshold: f64,
    ) -> Grid {
        let natoms = trajectory.first().map_or(0, Vec::len);
        if natoms == 0 {
            log::warn!("trajectory has no atoms; returning an empty grid");
        }

        let mut grid = builder::construct(trajectory, cell_width);
        loader::load(&mut grid, trajectory, kernel);
        heightmap::generate(&mut grid, empty_threshold);
        heightmap::tessellate(&mut grid, natoms);
        grid
    }

    /// Writes the plain-text diagnostic dump described in the crate's
    /// external-interface contract.
    pub fn write_diagnostic(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        dump::write(self, path.as_ref())?;
        Ok(())
    }
}
