// Discretized lattice integral over the Wigner-Seitz cell, used for
// higher-order lattice-sum corrections.

use nalgebra::{Matrix3, Vector3};

/// Third-order moment of nearest-lattice-point distance over the unit cell.
///
/// Samples an `n` x `n` x `n` grid of fractional points across the cell, each
/// sample shifted by -0.5 per axis so the sampled cell is centered on the
/// origin, and accumulates the squared cartesian distance to the nearest of
/// the 27 neighboring origin images. The sum is normalized by
/// `det(cell) * n^3`, approximating the volume-normalized integral of the
/// squared distance to the nearest lattice point over the Wigner-Seitz cell.
///
/// The normalization uses the signed determinant, so a left-handed basis
/// yields a negative moment. Cost is O(27 * n^3) with no adaptive refinement;
/// `n` fully controls the accuracy/cost trade-off.
///
/// Precondition: `n >= 1`. `n = 0` divides by zero and is a caller error.
pub fn third_order_moment(cell: &Matrix3<f64>, n: usize) -> f64 {
    debug_assert!(n > 0, "grid resolution must be at least 1");

    let ninv = 1.0 / n as f64;
    // Farther than any image one shell out; seeds each per-sample minimum.
    let far = (cell * (Vector3::new(1.0, 1.0, 1.0) * 10.0)).norm_squared();

    let mut sum = 0.0;
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                let mut min_dist = far;
                for l in -1..2 {
                    for m in -1..2 {
                        for p in -1..2 {
                            let image = cell
                                * Vector3::new(
                                    i as f64 * ninv + l as f64 - 0.5,
                                    j as f64 * ninv + m as f64 - 0.5,
                                    k as f64 * ninv + p as f64 - 0.5,
                                );
                            let d = image.norm_squared();
                            if d < min_dist {
                                min_dist = d;
                            }
                        }
                    }
                }
                sum += min_dist;
            }
        }
    }
    sum / (cell.determinant() * (n * n * n) as f64)
}
