use rust_decimal::Decimal;

use crate::error::Result;
use crate::math;

use super::Point;

/// A directed segment from `p1` to `p2`.
///
/// Lines are derived views: build one from two points or from a start,
/// bearing and length, query it, and throw it away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    p1: Point,
    p2: Point,
}

impl Line {
    /// Creates a line between two points.
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Creates a line from `p1` along `angle` degrees for `length` units.
    ///
    /// The far endpoint keeps `p1.z` and is rounded to
    /// [`COORD_DP`](crate::math::COORD_DP) places.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction cannot be evaluated.
    pub fn from_polar(p1: Point, angle: Decimal, length: Decimal) -> Result<Self> {
        let (cos, sin) = math::cos_sin_deg(angle)?;
        let p2 = Point::new_3d(p1.x + cos * length, p1.y + sin * length, p1.z);
        Ok(Self {
            p1,
            p2: p2.rounded(math::COORD_DP),
        })
    }

    /// Returns the start point.
    #[must_use]
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// Returns the end point.
    #[must_use]
    pub fn p2(&self) -> Point {
        self.p2
    }

    /// Euclidean distance between the endpoints, including `z`, rounded to
    /// [`COORD_DP`](crate::math::COORD_DP) places.
    ///
    /// # Errors
    ///
    /// Returns an error if the square root cannot be taken.
    pub fn length(&self) -> Result<Decimal> {
        let d = self.p2 - self.p1;
        let squared = d.x * d.x + d.y * d.y + d.z * d.z;
        Ok(math::round_dp(math::sqrt(squared)?, math::COORD_DP))
    }

    /// Bearing from `p1` to `p2` in the XY plane, in `[0, 360)` degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if the bearing cannot be evaluated.
    pub fn angle(&self) -> Result<Decimal> {
        let d = self.p2 - self.p1;
        math::atan2_deg(d.y, d.x)
    }

    /// Returns `p1 + distance * unit_direction`.
    ///
    /// A degenerate line returns `p1` for any distance.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be evaluated.
    pub fn point_from_start(&self, distance: Decimal) -> Result<Point> {
        let len = self.length()?;
        if len.is_zero() {
            return Ok(self.p1);
        }
        let d = self.p2 - self.p1;
        Ok(self.p1 + d * (distance / len))
    }

    /// Returns this line shifted perpendicular to its direction.
    ///
    /// Positive `offset` moves to the left of the walking direction
    /// (counter-clockwise normal), negative to the right. A degenerate
    /// line is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be evaluated.
    pub fn parallel_line(&self, offset: Decimal) -> Result<Self> {
        let len = self.length()?;
        if len.is_zero() {
            return Ok(*self);
        }
        let d = self.p2 - self.p1;
        let shift = Point::new(-d.y / len * offset, d.x / len * offset);
        Ok(Self {
            p1: self.p1 + shift,
            p2: self.p2 + shift,
        })
    }

    /// Returns both endpoints as `[x1, y1, x2, y2]`.
    #[must_use]
    pub fn as_array(&self) -> [Decimal; 4] {
        [self.p1.x, self.p1.y, self.p2.x, self.p2.y]
    }
}
