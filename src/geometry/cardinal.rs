use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::Result;
use crate::math;

use super::{Line, Point};

/// One of the four axis-aligned directions a section may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    East,
    North,
    West,
    South,
}

impl Cardinal {
    /// Buckets a bearing into its nearest cardinal direction.
    ///
    /// Buckets are half-open and lower-bound inclusive:
    /// `[315, 45) -> 0`, `[45, 135) -> 90`, `[135, 225) -> 180`,
    /// `[225, 315) -> 270`. The input is normalized first.
    #[must_use]
    pub fn snap(angle: Decimal) -> Self {
        let angle = math::normalize_deg(angle);
        if angle < dec!(45) {
            Self::East
        } else if angle < dec!(135) {
            Self::North
        } else if angle < dec!(225) {
            Self::West
        } else if angle < dec!(315) {
            Self::South
        } else {
            Self::East
        }
    }

    /// Returns the bearing of this direction in degrees.
    #[must_use]
    pub fn degrees(self) -> Decimal {
        match self {
            Self::East => dec!(0),
            Self::North => dec!(90),
            Self::West => dec!(180),
            Self::South => dec!(270),
        }
    }

    /// Moves `distance` from `origin` in this direction.
    #[must_use]
    pub fn step(self, origin: Point, distance: Decimal) -> Point {
        let (dx, dy) = match self {
            Self::East => (distance, Decimal::ZERO),
            Self::North => (Decimal::ZERO, distance),
            Self::West => (-distance, Decimal::ZERO),
            Self::South => (Decimal::ZERO, -distance),
        };
        Point::new_3d(origin.x + dx, origin.y + dy, origin.z)
    }
}

/// Resolves where `target` lands when pinned to a cardinal ray from `anchor`.
///
/// The raw bearing `anchor -> target` is bucketed with [`Cardinal::snap`] and
/// the raw distance is kept, then projected from `anchor` along the snapped direction.
///
/// # Errors
///
/// Returns an error if the bearing or length cannot be evaluated.
pub fn snap_to_cardinal(anchor: Point, target: Point) -> Result<Point> {
    let raw = Line::new(anchor, Point::new_3d(target.x, target.y, anchor.z));
    let direction = Cardinal::snap(raw.angle()?);
    Ok(direction.step(anchor, raw.length()?))
}

/// Returns `true` if `angle` lies within `tolerance` degrees of a multiple of 90.
#[must_use]
pub fn is_cardinal(angle: Decimal, tolerance: Decimal) -> bool {
    let rem = math::normalize_deg(angle) % dec!(90);
    rem <= tolerance || dec!(90) - rem <= tolerance
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bucket_bounds_are_lower_inclusive() {
        assert_eq!(Cardinal::snap(dec!(0)), Cardinal::East);
        assert_eq!(Cardinal::snap(dec!(44.9)), Cardinal::East);
        assert_eq!(Cardinal::snap(dec!(45)), Cardinal::North);
        assert_eq!(Cardinal::snap(dec!(134.9)), Cardinal::North);
        assert_eq!(Cardinal::snap(dec!(135)), Cardinal::West);
        assert_eq!(Cardinal::snap(dec!(224.9)), Cardinal::West);
        assert_eq!(Cardinal::snap(dec!(225)), Cardinal::South);
        assert_eq!(Cardinal::snap(dec!(314.9)), Cardinal::South);
        assert_eq!(Cardinal::snap(dec!(315)), Cardinal::East);
        assert_eq!(Cardinal::snap(dec!(359.99)), Cardinal::East);
    }

    #[test]
    fn snap_keeps_raw_length() {
        let p = snap_to_cardinal(Point::ORIGIN, Point::from_ints(4, 3)).unwrap();
        assert_eq!(p, Point::from_ints(5, 0));
    }

    #[test]
    fn snap_projects_from_anchor() {
        let anchor = Point::from_ints(100, 100);
        let p = snap_to_cardinal(anchor, Point::from_ints(97, 104)).unwrap();
        assert_eq!(p, Point::from_ints(100, 105));
    }

    #[test]
    fn snap_of_coincident_points_is_anchor() {
        let anchor = Point::from_ints(3, 3);
        assert_eq!(snap_to_cardinal(anchor, anchor).unwrap(), anchor);
    }

    #[test]
    fn cardinal_tolerance() {
        let tol = dec!(0.5);
        assert!(is_cardinal(dec!(0), tol));
        assert!(is_cardinal(dec!(90.4), tol));
        assert!(is_cardinal(dec!(359.6), tol));
        assert!(!is_cardinal(dec!(45), tol));
        assert!(!is_cardinal(dec!(180.6), tol));
    }
}
