// Folding operations: map a cartesian position to a canonical representative
// under the translation group generated by the lattice vectors.
//
// Every function takes the cell basis together with its precomputed inverse.
// The caller owns the consistency of that pair; the inverse is never
// recomputed or validated here, since callers typically reuse one inverse
// across many position transforms for the same structure.

use nalgebra::{Matrix3, Vector3};

use crate::config::ROUNDOFF;
use crate::fuzzy;

/// Fold a cartesian position into the unit cell.
///
/// Returns the periodic image of `vec` whose fractional coordinates lie in
/// [0, 1). A fractional coordinate within `ROUNDOFF` of an integer counts as
/// that integer, so a point sitting numerically on a cell face folds to 0
/// rather than to just under 1.
///
/// # Arguments
/// * `vec` - Cartesian position
/// * `cell` - Lattice basis (columns are the lattice vectors)
/// * `inverse` - Precomputed inverse of `cell`
pub fn fold_into_cell(
    vec: Vector3<f64>,
    cell: &Matrix3<f64>,
    inverse: &Matrix3<f64>,
) -> Vector3<f64> {
    let mut frac = inverse * vec;
    for axis in 0..3 {
        frac[axis] -= (frac[axis] + ROUNDOFF).floor();
    }
    cell * frac
}

/// Fold a cartesian position into the zero-centered unit cell.
///
/// Returns the periodic image of `vec` whose fractional coordinates lie in
/// [-0.5, 0.5). The upper boundary is closed onto the lower one: a fractional
/// coordinate exactly at +0.5 always folds to -0.5, no matter from which side
/// floating-point noise approaches it.
///
/// # Arguments
/// * `vec` - Cartesian position
/// * `cell` - Lattice basis (columns are the lattice vectors)
/// * `inverse` - Precomputed inverse of `cell`
pub fn fold_zero_centered(
    vec: Vector3<f64>,
    cell: &Matrix3<f64>,
    inverse: &Matrix3<f64>,
) -> Vector3<f64> {
    let mut frac = inverse * vec;
    for axis in 0..3 {
        frac[axis] -= (0.5 + frac[axis] + ROUNDOFF).floor();
        // Numerical stability: +0.5 belongs to the next period, and the
        // floor/subtract step can undershoot -0.5 by one ulp.
        if fuzzy::eq(frac[axis], 0.5) {
            frac[axis] = -0.5;
        } else if fuzzy::lt(frac[axis], -0.5) {
            frac[axis] += 1.0;
        }
    }
    cell * frac
}

/// Fold a cartesian position to its minimum-image (Wigner-Seitz) representative.
///
/// First wraps `vec` into the unit cell as [`fold_into_cell`] does, then
/// searches the 3x3x3 block of neighboring cells for the periodic image of
/// smallest cartesian norm. The wrapped point only loses to a translate that
/// is strictly closer to the origin (beyond the fuzzy tolerance), so among
/// exactly equidistant images the wrapped [0, 1) representative wins.
///
/// The search covers one shell of neighbors. For a pathologically skewed cell
/// whose true minimum image lies further out the result is an approximation;
/// callers should supply a reasonably reduced basis.
///
/// # Arguments
/// * `vec` - Cartesian position
/// * `cell` - Lattice basis (columns are the lattice vectors)
/// * `inverse` - Precomputed inverse of `cell`
pub fn fold_minimum_image(
    vec: Vector3<f64>,
    cell: &Matrix3<f64>,
    inverse: &Matrix3<f64>,
) -> Vector3<f64> {
    let mut frac = inverse * vec;
    for axis in 0..3 {
        frac[axis] -= (frac[axis] + ROUNDOFF).floor();
        // Numerical stability: a wrapped coordinate left at a whole period by
        // propagated round-off snaps back to 0.
        if fuzzy::eq(frac[axis], -1.0) || fuzzy::eq(frac[axis], 1.0) {
            frac[axis] = 0.0;
        }
    }

    let origin = frac;
    let mut best = origin;
    let mut min_norm = (cell * origin).norm_squared();
    for i in -1..2 {
        for j in -1..2 {
            for k in -1..2 {
                let translated = origin + Vector3::new(i as f64, j as f64, k as f64);
                let d = (cell * translated).norm_squared();
                if fuzzy::gt(min_norm, d) {
                    min_norm = d;
                    best = translated;
                }
            }
        }
    }
    cell * best
}
