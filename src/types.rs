//! Common types for grid geometry.

use cgmath::Point2;

/// Integer grid point: a [`Point2<i32>`].
pub type GridPoint = Point2<i32>;
