use anyhow::Error;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::cell::folding::{fold_into_cell, fold_minimum_image, fold_zero_centered};
use crate::cell::moments;
use crate::config::BASIS_TOLERANCE;

/// A validated crystallographic unit cell.
///
/// Bundles the lattice basis with its precomputed inverse and signed volume,
/// so the inversion cost is paid once and the basis/inverse pair handed to the
/// folding operations is consistent by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitCell {
    /// Lattice basis vectors (columns).
    cell: Matrix3<f64>,
    /// Inverse of the basis; maps cartesian to fractional coordinates.
    inverse: Matrix3<f64>,
    /// Signed cell volume = det(cell).
    volume: f64,
}

impl UnitCell {
    /// Construct a unit cell from a basis matrix whose columns are the lattice vectors.
    pub fn new(cell: Matrix3<f64>) -> Result<Self, Error> {
        let volume = cell.determinant();

        // Run tests on the basis to decide whether a unit cell can be constructed
        // Linearly non-dependent (also checks for zero vectors)
        if volume.abs() < BASIS_TOLERANCE {
            return Err(Error::msg(
                "Determinant too small. Vectors are either too small or linearly dependent.",
            ));
        }

        // Invertibility is guaranteed by the determinant check above
        let inverse = cell
            .try_inverse()
            .ok_or_else(|| Error::msg("Cell basis is not invertible."))?;

        Ok(UnitCell {
            cell,
            inverse,
            volume,
        })
    }

    /// Construct a unit cell from three lattice vectors.
    pub fn from_vectors(
        a: Vector3<f64>,
        b: Vector3<f64>,
        c: Vector3<f64>,
    ) -> Result<Self, Error> {
        Self::new(Matrix3::from_columns(&[a, b, c]))
    }

    pub fn cell(&self) -> &Matrix3<f64> {
        &self.cell
    }

    pub fn inverse(&self) -> &Matrix3<f64> {
        &self.inverse
    }

    /// Signed cell volume, det(cell). Negative for a left-handed basis.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Convert fractional (u,v,w) coords → cartesian.
    pub fn frac_to_cart(&self, v_frac: Vector3<f64>) -> Vector3<f64> {
        self.cell * v_frac
    }

    /// Convert cartesian coords → fractional (u,v,w).
    pub fn cart_to_frac(&self, v_cart: Vector3<f64>) -> Vector3<f64> {
        self.inverse * v_cart
    }

    /// Periodic image with fractional coordinates in [0, 1).
    pub fn wrap(&self, v: Vector3<f64>) -> Vector3<f64> {
        fold_into_cell(v, &self.cell, &self.inverse)
    }

    /// Periodic image with fractional coordinates in [-0.5, 0.5).
    pub fn wrap_centered(&self, v: Vector3<f64>) -> Vector3<f64> {
        fold_zero_centered(v, &self.cell, &self.inverse)
    }

    /// Smallest-norm periodic image (Wigner-Seitz representative).
    pub fn minimum_image(&self, v: Vector3<f64>) -> Vector3<f64> {
        fold_minimum_image(v, &self.cell, &self.inverse)
    }

    /// Third-order moment of nearest-lattice-point distance on an n³ grid.
    pub fn third_order_moment(&self, n: usize) -> f64 {
        moments::third_order_moment(&self.cell, n)
    }
}
