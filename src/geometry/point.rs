use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use rust_decimal::Decimal;

use crate::math::{self, Point2};

/// A model-space point with exact decimal coordinates.
///
/// Routing happens in the XY plane; `z` is carried for persisted 3D
/// endpoints and defaults to zero. Points are plain values: equality is
/// coordinate equality and copies are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Decimal,
    pub y: Decimal,
    pub z: Decimal,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Self {
        x: Decimal::ZERO,
        y: Decimal::ZERO,
        z: Decimal::ZERO,
    };

    /// Creates a point in the XY plane.
    #[must_use]
    pub fn new(x: Decimal, y: Decimal) -> Self {
        Self {
            x,
            y,
            z: Decimal::ZERO,
        }
    }

    /// Creates a 3D point.
    #[must_use]
    pub fn new_3d(x: Decimal, y: Decimal, z: Decimal) -> Self {
        Self { x, y, z }
    }

    /// Creates an XY point from integer coordinates.
    #[must_use]
    pub fn from_ints(x: i64, y: i64) -> Self {
        Self::new(Decimal::from(x), Decimal::from(y))
    }

    /// Rounds every coordinate to `dp` decimal places.
    #[must_use]
    pub fn rounded(self, dp: u32) -> Self {
        Self::new_3d(
            math::round_dp(self.x, dp),
            math::round_dp(self.y, dp),
            math::round_dp(self.z, dp),
        )
    }

    /// Projects to a float XY point for rendering.
    #[must_use]
    pub fn to_f64(self) -> Point2 {
        Point2::new(math::to_f64(self.x), math::to_f64(self.y))
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new_3d(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new_3d(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new_3d(-self.x, -self.y, -self.z)
    }
}

impl Mul<Decimal> for Point {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self {
        Self::new_3d(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.z.is_zero() {
            write!(f, "({}, {})", self.x, self.y)
        } else {
            write!(f, "({}, {}, {})", self.x, self.y, self.z)
        }
    }
}
