//! Approximate comparison of `f64` values in tests.

/// Absolute tolerance between two `f64` values.
#[derive(Debug, Clone, Copy)]
pub struct Tol(f64);
impl Tol {
    /// Creates a tolerance accepting `|a - b| <= atol`.
    ///
    /// The sign of `atol` is ignored.
    pub fn abs(atol: f64) -> Tol {
        Tol(atol.abs())
    }

    /// Tests if two values lie within the tolerance of each other.
    ///
    /// Equal values are always close, including equal infinities. `NaN` is
    /// never close to anything.
    pub fn close(&self, a: f64, b: f64) -> bool {
        a == b || (a - b).abs() <= self.0
    }
}

macro_rules! assert_close {
    ($tol:expr, $a:expr, $b:expr) => {{
        let (tol, a, b): ($crate::compare::Tol, f64, f64) = ($tol, $a, $b);
        if !tol.close(a, b) {
            panic!(
                "assertion failed: `(left ≈ right)`
  left:  `{:?}`
  right: `{:?}`
  tol:   `{:?}`",
                a, b, tol
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_tolerance() {
        assert!(Tol::abs(1e-3).close(1.0, 1.0009));
        assert!(!Tol::abs(1e-3).close(1.0, 1.0011));
        assert!(Tol::abs(-1e-3).close(1.0, 1.0009));
    }

    #[test]
    fn test_large_values_compare_by_absolute_difference() {
        assert!(Tol::abs(200.0).close(1.0e9, 1.0e9 + 100.0));
        assert!(!Tol::abs(1e-6).close(1.0e9, 1.0e9 + 100.0));
    }

    #[test]
    fn test_non_finite_values() {
        let tol = Tol::abs(1e-9);
        assert!(tol.close(f64::INFINITY, f64::INFINITY));
        assert!(!tol.close(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!tol.close(f64::NAN, f64::NAN));
    }

    #[test]
    #[should_panic]
    fn test_assert_close_panics_when_far() {
        assert_close!(Tol::abs(1e-12), 1.0, 1.5);
    }
}
