// Constants

// Tolerances
pub const ROUNDOFF: f64 = 1e-11; // Bias added inside floor() when folding fractional coordinates
pub const FUZZY_TOLERANCE: f64 = 1e-8; // Default tolerance for fuzzy float comparisons
pub const BASIS_TOLERANCE: f64 = 1e-10; // For construction of unit cells
