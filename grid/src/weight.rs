//! Weight kernels distributing an atom's influence onto the eight lattice
//! points surrounding its grid cell.

use glam::DVec3;

/// A non-negative kernel that scores how strongly an atom influences a
/// nearby lattice point; larger for closer atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightKernel {
    /// `diag - |atom - corner|`, `diag = sqrt(3) * cell_width`.
    Linear,
    /// `diag^2 - |atom - corner|^2`, `diag^2 = 3 * cell_width^2`.
    Square,
}

impl WeightKernel {
    #[inline]
    pub(crate) fn weight(self, atom: DVec3, corner: DVec3, cell_width: f64) -> f64 {
        match self {
            WeightKernel::Linear => {
                let diag = 3f64.sqrt() * cell_width;
                diag - atom.distance(corner)
            }
            WeightKernel::Square => {
                let diag2 = 3.0 * cell_width * cell_width;
                diag2 - atom.distance_squared(corner)
            }
        }
    }
}
