// Tolerance-aware float comparisons
//
// Raw ==, <, > on fractional coordinates near cell boundaries (0, ±0.5, ±1) are
// unstable under floating-point noise. Every boundary comparison in the folding
// code goes through these predicates instead. The default tolerance is
// FUZZY_TOLERANCE; each predicate also has an explicit-tolerance variant.

use crate::config::FUZZY_TOLERANCE;

/// True if |a - b| < tol.
pub fn eq_tol(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// True if |a - b| < FUZZY_TOLERANCE.
pub fn eq(a: f64, b: f64) -> bool {
    eq_tol(a, b, FUZZY_TOLERANCE)
}

/// True if |a - b| >= tol.
pub fn neq_tol(a: f64, b: f64, tol: f64) -> bool {
    !eq_tol(a, b, tol)
}

/// True if |a - b| >= FUZZY_TOLERANCE.
pub fn neq(a: f64, b: f64) -> bool {
    !eq(a, b)
}

/// True if a < b + tol (less-than or fuzzily equal).
pub fn leq_tol(a: f64, b: f64, tol: f64) -> bool {
    a < b + tol
}

/// True if a < b + FUZZY_TOLERANCE.
pub fn leq(a: f64, b: f64) -> bool {
    leq_tol(a, b, FUZZY_TOLERANCE)
}

/// True if a > b - tol (greater-than or fuzzily equal).
pub fn geq_tol(a: f64, b: f64, tol: f64) -> bool {
    a > b - tol
}

/// True if a > b - FUZZY_TOLERANCE.
pub fn geq(a: f64, b: f64) -> bool {
    geq_tol(a, b, FUZZY_TOLERANCE)
}

/// True if a is smaller than b by more than tol.
pub fn lt_tol(a: f64, b: f64, tol: f64) -> bool {
    !geq_tol(a, b, tol)
}

/// True if a is smaller than b by more than FUZZY_TOLERANCE.
pub fn lt(a: f64, b: f64) -> bool {
    !geq(a, b)
}

/// True if a is larger than b by more than tol.
pub fn gt_tol(a: f64, b: f64, tol: f64) -> bool {
    !leq_tol(a, b, tol)
}

/// True if a is larger than b by more than FUZZY_TOLERANCE.
pub fn gt(a: f64, b: f64) -> bool {
    !leq(a, b)
}

/// True if x is within FUZZY_TOLERANCE of an integer.
pub fn is_integer(x: f64) -> bool {
    eq(x, (x + 0.1).floor())
}

/// True if x is within FUZZY_TOLERANCE of zero.
pub fn is_null(x: f64) -> bool {
    eq(x, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_absorbs_noise() {
        assert!(eq(0.5, 0.5 + 1e-12));
        assert!(eq(0.5, 0.5 - 1e-12));
        assert!(!eq(0.5, 0.5 + 1e-6));
        assert!(eq_tol(1.0, 1.4, 0.5));
    }

    #[test]
    fn test_lt_gt_are_strict_beyond_tolerance() {
        // Within tolerance neither side is strictly smaller or larger
        assert!(!lt(0.5, 0.5 + 1e-12));
        assert!(!gt(0.5 + 1e-12, 0.5));
        assert!(lt(0.5, 0.5 + 1e-6));
        assert!(gt(0.5 + 1e-6, 0.5));
    }

    #[test]
    fn test_leq_geq() {
        assert!(leq(0.5 + 1e-12, 0.5));
        assert!(geq(0.5 - 1e-12, 0.5));
        assert!(!leq(0.5 + 1e-6, 0.5));
        assert!(!geq(0.5 - 1e-6, 0.5));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(3.0));
        assert!(is_integer(-2.0 + 1e-12));
        assert!(!is_integer(2.5));
    }

    #[test]
    fn test_is_null() {
        assert!(is_null(1e-12));
        assert!(is_null(-1e-12));
        assert!(!is_null(1e-6));
    }
}
