//! Integer grid intervals and a scalar numerical toolbox.
//!
//! - [`Interval1D`] and [`Interval2D`] describe closed integer intervals and
//!   axis-aligned grid regions.
//! - [`numeric`] holds free functions for floored modulo, angular distance,
//!   interpolation and root finding.
//!
//! Everything here is immutable or stateless, and safe to share between
//! threads.

#[cfg(test)]
#[macro_use]
mod compare;
mod error;
mod interval;
mod interval2d;
pub mod numeric;
mod types;

pub use error::{Error, Result};
pub use interval::{Interval1D, Interval1DIter};
pub use interval2d::Interval2D;
pub use types::GridPoint;
