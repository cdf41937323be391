//! Periodic cell folding library
//!
//! This library provides exact geometric folding operations for points embedded in a
//! 3D periodic lattice: wrapping positions into the unit cell, centering them around
//! the origin, and finding the minimum-image (Wigner-Seitz) representative used in
//! distance and neighbor calculations.

pub mod cell;
pub mod config;
pub mod fuzzy;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
