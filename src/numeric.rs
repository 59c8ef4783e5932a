//! Scalar numerical toolbox.
//!
//! Free functions for modular arithmetic on reals, angles on the circle,
//! interpolation, and finding roots of continuous functions in two steps:
//! a coarse bracket scan ([`first_interval_containing_root`]) followed by
//! bisection ([`improve_root`]).

use crate::error::{Error, Result};
use log::{debug, trace};
use std::f64::consts::PI;

/// A full turn, `2π`.
pub const PI2: f64 = 2.0 * PI;

/// Returns `x * x`.
pub fn square(x: f64) -> f64 {
    x * x
}

/// Floored modulo of two reals.
///
/// Returns `r` such that `n == (n / d).floor() * d + r`. The remainder has
/// the sign of `d`, unlike the `%` operator which follows the sign of `n`.
///
/// # Returns
///
/// - `Ok(r)` for any non-zero `d`.
/// - `Err(Error::ZeroDivisor)` if `d == 0`.
pub fn floor_mod(n: f64, d: f64) -> Result<f64> {
    if d == 0.0 {
        return Err(Error::ZeroDivisor);
    }
    Ok(floored_remainder(n, d))
}

fn floored_remainder(n: f64, d: f64) -> f64 {
    n - d * (n / d).floor()
}

/// Haversine of an angle in radians: `(1 - cos(a)) / 2`.
pub fn haversine(a: f64) -> f64 {
    (1.0 - a.cos()) / 2.0
}

/// Signed shortest angular displacement from `a1` to `a2`, in radians.
///
/// The result lies in the half-open range `[-π, π)`. Two angles exactly `π`
/// apart give `-π` whichever order they are passed in, so
/// `angular_distance(a1, a2) == -angular_distance(a2, a1)` holds for every
/// other pair.
pub fn angular_distance(a1: f64, a2: f64) -> f64 {
    let r = floored_remainder(a2 - a1 + PI, PI2);
    // Rounding may leave r a hair outside [0, 2π); both ends are the same angle.
    let r = if r >= PI2 || r < 0.0 { 0.0 } else { r };
    r - PI
}

/// Linear interpolation between `v1` (at `p = 0`) and `v2` (at `p = 1`).
///
/// `p` is not clamped: values outside `[0, 1]` extrapolate.
pub fn lerp(v1: f64, v2: f64, p: f64) -> f64 {
    v1 + (v2 - v1) * p
}

/// Bilinear interpolation over the unit square.
///
/// # Parameters
///
/// - `v00`: Value at `(0, 0)`.
/// - `v10`: Value at `(1, 0)`.
/// - `v01`: Value at `(0, 1)`.
/// - `v11`: Value at `(1, 1)`.
/// - `x`, `y`: Position at which to interpolate. Not clamped.
pub fn bilerp(v00: f64, v10: f64, v01: f64, v11: f64, x: f64, y: f64) -> f64 {
    lerp(lerp(v00, v10, x), lerp(v01, v11, x), y)
}

/// Tests whether two function values bracket a root: they have opposite
/// signs, or one of them is exactly zero.
fn brackets_root(fa: f64, fb: f64) -> bool {
    fa == 0.0 || fb == 0.0 || (fa < 0.0 && fb > 0.0) || (fa > 0.0 && fb < 0.0)
}

fn check_bounds(lower: f64, upper: f64) -> Result<()> {
    if lower.is_finite() && upper.is_finite() && lower <= upper {
        Ok(())
    } else {
        Err(Error::MalformedBracket { lower, upper })
    }
}

/// Finds the first interval of width `step` that brackets a root of `f`.
///
/// Samples `f` at `lower`, `lower + step`, `lower + 2 * step`, ... and
/// returns the left end `x` of the first pair `(x, x + step)` whose values
/// bracket a root (opposite signs, or either value exactly zero). Only pairs
/// with `x + step <= upper` are examined.
///
/// # Parameters
///
/// - `f`: Continuous function to scan.
/// - `lower`: Start of the scanned domain.
/// - `upper`: End of the scanned domain.
/// - `step`: Width of each interval. Must be strictly positive.
///
/// # Returns
///
/// - `Ok(x)`: The left end of the first bracketing interval.
/// - `Err(Error::InvalidStep)` or `Err(Error::MalformedBracket)` for invalid
///   parameters.
/// - `Err(Error::NoRootFound)` if the scan reaches `upper` without finding a
///   bracket.
pub fn first_interval_containing_root<F>(f: F, lower: f64, upper: f64, step: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if !(step.is_finite() && step > 0.0) {
        return Err(Error::InvalidStep(step));
    }
    check_bounds(lower, upper)?;

    // Sample points are computed from their index so that no rounding error
    // accumulates along the scan.
    let mut x = lower;
    let mut fx = f(x);
    let mut i = 1.0;
    loop {
        let next = lower + i * step;
        if next > upper {
            break;
        }
        let fnext = f(next);
        if brackets_root(fx, fnext) {
            trace!("Root bracketed in [{}, {}]", x, next);
            return Ok(x);
        }
        x = next;
        fx = fnext;
        i += 1.0;
    }

    debug!("No root found in [{}, {}] with step {}", lower, upper, step);
    Err(Error::NoRootFound { lower, upper, step })
}

/// Refines a bracketed root of `f` by bisection.
///
/// The bracket is halved repeatedly, keeping the half whose end points still
/// bracket the root, until it is at most `epsilon` wide. The midpoint of the
/// final bracket is returned. An end point where `f` is exactly zero is
/// returned as soon as it is found.
///
/// # Parameters
///
/// - `f`: Continuous function.
/// - `lower`, `upper`: Bracket containing the root. `f(lower)` and
///   `f(upper)` must have opposite signs, or one of them must be zero.
/// - `epsilon`: Target width of the bracket. Must be strictly positive.
///
/// # Returns
///
/// - `Ok(x)`: A root, accurate to within `epsilon`.
/// - `Err(Error::NoSignChange)` if `[lower, upper]` does not bracket a root.
/// - `Err(Error::InvalidTolerance)` or `Err(Error::MalformedBracket)` for
///   invalid parameters.
pub fn improve_root<F>(f: F, lower: f64, upper: f64, epsilon: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(Error::InvalidTolerance(epsilon));
    }
    check_bounds(lower, upper)?;

    let (mut a, mut b) = (lower, upper);
    let mut fa = f(a);
    let fb = f(b);
    if !brackets_root(fa, fb) {
        return Err(Error::NoSignChange { lower, upper });
    }
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }

    let mut steps = 0u32;
    // Halves are summed so that brackets wider than f64::MAX do not overflow.
    while b - a > epsilon {
        let m = a / 2.0 + b / 2.0;
        if m <= a || m >= b {
            // The bracket cannot shrink any further in floating point.
            break;
        }
        let fm = f(m);
        steps += 1;
        if fm == 0.0 {
            trace!("Exact root {} after {} bisection steps", m, steps);
            return Ok(m);
        }
        if (fm < 0.0) == (fa < 0.0) {
            a = m;
            fa = fm;
        } else {
            b = m;
        }
    }

    trace!("Root bracketed in [{}, {}] after {} bisection steps", a, b, steps);
    Ok(a / 2.0 + b / 2.0)
}
