// Cell module: canonical representatives of points under the translational
// symmetry of a 3D crystallographic unit cell

// ======================== MODULE DECLARATIONS ========================
pub mod folding;
pub mod moments;
pub mod unit_cell;


// ======================== FOLDING OPERATIONS ========================
pub use folding::{
    fold_into_cell,      // fn(vec: Vector3<f64>, cell: &Matrix3<f64>, inverse: &Matrix3<f64>) -> Vector3<f64> - fractional coordinates in [0, 1)
    fold_zero_centered,  // fn(vec: Vector3<f64>, cell: &Matrix3<f64>, inverse: &Matrix3<f64>) -> Vector3<f64> - fractional coordinates in [-0.5, 0.5)
    fold_minimum_image,  // fn(vec: Vector3<f64>, cell: &Matrix3<f64>, inverse: &Matrix3<f64>) -> Vector3<f64> - smallest-norm periodic image (Wigner-Seitz representative)
};

// ======================== LATTICE MOMENTS ========================
pub use moments::third_order_moment; // fn(cell: &Matrix3<f64>, n: usize) -> f64 - discretized third-order moment of nearest-lattice-point distance

// ======================== UNIT CELL ========================
pub use unit_cell::UnitCell; // struct - validated (basis, inverse, volume) triple with folding convenience methods
