use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{GeometryError, Result};
use crate::geometry::{Line, Point};
use crate::math::Point2;

use super::wire::WireId;

slotmap::new_key_type! {
    /// Unique identifier for a wire section in the route store.
    pub struct SectionId;
}

/// Which endpoint of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {
    P1,
    P2,
}

/// Bearing of the stripe tick relative to its section, taken from the
/// `(68, 0) -> (36, 24)` tick template.
fn stripe_tick_angle() -> Result<Decimal> {
    Line::new(Point::from_ints(68, 0), Point::from_ints(36, 24)).angle()
}

/// One straight, axis-aligned run of a wire.
///
/// `prev`/`next` are the handles of the neighboring sections in the owning
/// wire. While the wire is valid, `prev.p2 == p1` and `next.p1 == p2`.
#[derive(Debug, Clone)]
pub struct SectionData {
    /// Start point.
    pub p1: Point,
    /// End point.
    pub p2: Point,
    /// Owning wire.
    pub wire: WireId,
    /// Preceding section in the wire, if any.
    pub prev: Option<SectionId>,
    /// Following section in the wire, if any.
    pub next: Option<SectionId>,
}

impl SectionData {
    /// Creates a detached section owned by `wire`.
    #[must_use]
    pub fn new(wire: WireId, p1: Point, p2: Point) -> Self {
        Self {
            p1,
            p2,
            wire,
            prev: None,
            next: None,
        }
    }

    /// Returns the given endpoint.
    #[must_use]
    pub fn endpoint(&self, end: End) -> Point {
        match end {
            End::P1 => self.p1,
            End::P2 => self.p2,
        }
    }

    /// Returns the section as a line.
    #[must_use]
    pub fn line(&self) -> Line {
        Line::new(self.p1, self.p2)
    }

    /// Returns the endpoints as `[x1, y1, x2, y2]`.
    #[must_use]
    pub fn points(&self) -> [Decimal; 4] {
        self.line().as_array()
    }

    /// Length of the section.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be evaluated.
    pub fn length(&self) -> Result<Decimal> {
        self.line().length()
    }

    /// Bearing of the section in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if the bearing cannot be evaluated.
    pub fn angle(&self) -> Result<Decimal> {
        self.line().angle()
    }

    /// Returns `true` if `p` lies inside the section's hit band.
    ///
    /// The band is the axis-aligned rectangle spanned by the two lines parallel
    /// to the section at `±(pixel_width / 2 + margin)`. That rectangle matches
    /// the rotated band only because sections are cardinal. A zero-length
    /// section has no direction, so its band is the square of the same
    /// half-size around `p1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parallel lines cannot be evaluated.
    pub fn contains(&self, p: Point, pixel_width: u32, margin: Decimal) -> Result<bool> {
        let half = Decimal::from(pixel_width) / dec!(2) + margin;
        let line = self.line();
        if line.length()?.is_zero() {
            return Ok(within_square(self.p1, p, half));
        }
        let upper = line.parallel_line(half)?;
        let lower = line.parallel_line(-half)?;

        let (ax, ay) = (upper.p1().x, upper.p1().y);
        let (bx, by) = (lower.p2().x, lower.p2().y);
        let (x1, x2) = (ax.min(bx), ax.max(bx));
        let (y1, y2) = (ay.min(by), ay.max(by));

        Ok(x1 <= p.x && p.x <= x2 && y1 <= p.y && p.y <= y2)
    }

    /// Returns `true` if `p` is within the square grab region around `p1`.
    #[must_use]
    pub fn is_p1_grabbed(&self, p: Point, tolerance: Decimal) -> bool {
        within_square(self.p1, p, tolerance)
    }

    /// Returns `true` if `p` is within the square grab region around `p2`.
    #[must_use]
    pub fn is_p2_grabbed(&self, p: Point, tolerance: Decimal) -> bool {
        within_square(self.p2, p, tolerance)
    }

    /// Generates the stripe tick marks along the section.
    ///
    /// A tick is placed every `step` units from `p1` for as long as the
    /// previous tick is more than one step away from `p2`. Each tick is
    /// centered on the section and spans
    /// `max(pixel_width, 1)` units to either side along the tick bearing.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidConfig`] if `step` is not positive, or
    /// an error if the section geometry cannot be evaluated.
    pub fn stripe_lines(&self, step: Decimal, pixel_width: u32) -> Result<Vec<[Point2; 2]>> {
        if step <= Decimal::ZERO {
            return Err(GeometryError::InvalidConfig(format!("stripe step {step} must be positive")).into());
        }
        let line = self.line();
        let length = line.length()?;
        let tick_angle = line.angle()? + stripe_tick_angle()?;
        let half_tick = Decimal::from(pixel_width.max(1));

        let mut ticks = Vec::new();
        let mut distance = Decimal::ZERO;
        while distance < length - step {
            distance += step;
            let center = line.point_from_start(distance)?;
            let a = Line::from_polar(center, tick_angle, half_tick)?;
            let b = Line::from_polar(center, tick_angle + dec!(180), half_tick)?;
            ticks.push([a.p2().to_f64(), b.p2().to_f64()]);
        }
        Ok(ticks)
    }
}

fn within_square(center: Point, p: Point, tolerance: Decimal) -> bool {
    (p.x - center.x).abs() <= tolerance && (p.y - center.y).abs() <= tolerance
}
