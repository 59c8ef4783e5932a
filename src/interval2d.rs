//! Two-dimensional integer intervals: axis-aligned regions of the grid.

use crate::{
    error::{Error, Result},
    interval::Interval1D,
    types::GridPoint,
};
use std::fmt;

/// Axis-aligned region of the integer grid.
///
/// An `Interval2D` is the cartesian product of two [`Interval1D`] values. For
/// example, `[3..4]x[-2..0]` contains the six points `(3,-2)`, `(3,-1)`,
/// `(3,0)`, `(4,-2)`, `(4,-1)` and `(4,0)`.
///
/// Sizes, intersections and bounding unions are always computed one axis at a
/// time and then combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval2D {
    ix: Interval1D,
    iy: Interval1D,
}
impl Interval2D {
    /// Creates a region from its x and y intervals.
    pub fn new(ix: Interval1D, iy: Interval1D) -> Interval2D {
        Interval2D { ix, iy }
    }

    /// Creates a region from raw bounds along each axis.
    ///
    /// Fails with [`Error::InvalidBounds`] if either axis is inverted.
    pub fn from_bounds(x_lo: i32, x_hi: i32, y_lo: i32, y_hi: i32) -> Result<Interval2D> {
        Ok(Interval2D {
            ix: Interval1D::new(x_lo, x_hi)?,
            iy: Interval1D::new(y_lo, y_hi)?,
        })
    }

    /// Returns the interval along the x axis.
    pub fn ix(&self) -> Interval1D {
        self.ix
    }

    /// Returns the interval along the y axis.
    pub fn iy(&self) -> Interval1D {
        self.iy
    }

    /// Tests whether this region contains the point `(x, y)`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.ix.contains(x) && self.iy.contains(y)
    }

    /// Tests whether this region contains a grid point.
    pub fn contains_point(&self, point: GridPoint) -> bool {
        self.contains(point.x, point.y)
    }

    /// Returns the number of grid points in the region.
    ///
    /// Saturates at `u64::MAX`, which only the full `i32` plane reaches.
    pub fn size(&self) -> u64 {
        self.ix.size().saturating_mul(self.iy.size())
    }

    /// Returns the number of grid points shared by two regions.
    ///
    /// This is zero whenever the regions are disjoint along either axis.
    pub fn size_of_intersection_with(&self, other: &Interval2D) -> u64 {
        self.ix
            .size_of_intersection_with(&other.ix)
            .saturating_mul(self.iy.size_of_intersection_with(&other.iy))
    }

    /// Returns the smallest region covering both regions.
    ///
    /// This is not the union of the two point sets: the result may contain
    /// points that belong to neither region, for example when the regions are
    /// diagonal to one another.
    pub fn bounding_union(&self, other: &Interval2D) -> Interval2D {
        Interval2D {
            ix: self.ix.bounding_union(&other.ix),
            iy: self.iy.bounding_union(&other.iy),
        }
    }

    /// Tests if the bounding union of two regions is exactly their union.
    ///
    /// This holds when `size(a) + size(b) - size(a ∩ b)` equals the size of
    /// the bounding union, that is, when the bounding union needs no filler
    /// cells. Two regions that overlap are not necessarily unionable.
    pub fn is_unionable_with(&self, other: &Interval2D) -> bool {
        // Evaluated in u128 so the identity stays exact for any bounds.
        let area = |x: u64, y: u64| u128::from(x) * u128::from(y);
        let a = area(self.ix.size(), self.iy.size());
        let b = area(other.ix.size(), other.iy.size());
        let shared = area(
            self.ix.size_of_intersection_with(&other.ix),
            self.iy.size_of_intersection_with(&other.iy),
        );
        let bounding = self.bounding_union(other);
        a + b - shared == area(bounding.ix.size(), bounding.iy.size())
    }

    /// Returns the union of two regions.
    ///
    /// # Returns
    ///
    /// - `Ok(region)` if the regions are unionable (see
    ///   [`Interval2D::is_unionable_with`]).
    /// - `Err(Error::NotUnionable)` otherwise. Use
    ///   [`Interval2D::bounding_union`] to get the covering rectangle anyway.
    pub fn union(&self, other: &Interval2D) -> Result<Interval2D> {
        if self.is_unionable_with(other) {
            Ok(self.bounding_union(other))
        } else {
            Err(Error::NotUnionable {
                a: self.to_string(),
                b: other.to_string(),
            })
        }
    }

    /// Iterates over all grid points of the region, row by row.
    pub fn iter(&self) -> impl Iterator<Item = GridPoint> {
        let ix = self.ix;
        self.iy
            .iter()
            .flat_map(move |y| ix.iter().map(move |x| GridPoint::new(x, y)))
    }
}

impl fmt::Display for Interval2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.ix, self.iy)
    }
}
