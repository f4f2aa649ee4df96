use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{GeometryError, Result};

/// Interaction tolerances used by routing edits and hit tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingConfig {
    grab_tolerance: Decimal,
    hit_margin: Decimal,
    stripe_step: Decimal,
    angle_tolerance: Decimal,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            grab_tolerance: dec!(5),
            hit_margin: dec!(1),
            stripe_step: dec!(40),
            angle_tolerance: dec!(0.5),
        }
    }
}

impl RoutingConfig {
    /// Creates a routing configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or `stripe_step` is not positive.
    pub fn new(
        grab_tolerance: Decimal,
        hit_margin: Decimal,
        stripe_step: Decimal,
        angle_tolerance: Decimal,
    ) -> Result<Self> {
        if grab_tolerance < Decimal::ZERO
            || hit_margin < Decimal::ZERO
            || angle_tolerance < Decimal::ZERO
        {
            return Err(GeometryError::InvalidConfig("tolerances must not be negative".to_owned()).into());
        }
        if stripe_step <= Decimal::ZERO {
            return Err(GeometryError::InvalidConfig("stripe step must be positive".to_owned()).into());
        }
        Ok(Self {
            grab_tolerance,
            hit_margin,
            stripe_step,
            angle_tolerance,
        })
    }

    /// Half-size of the square endpoint grab region.
    #[must_use]
    pub fn grab_tolerance(&self) -> Decimal {
        self.grab_tolerance
    }

    /// Extra band added beyond half the stroke width in hit tests.
    #[must_use]
    pub fn hit_margin(&self) -> Decimal {
        self.hit_margin
    }

    /// Distance between stripe ticks.
    #[must_use]
    pub fn stripe_step(&self) -> Decimal {
        self.stripe_step
    }

    /// Degrees a section may deviate from a cardinal bearing and still be accepted.
    #[must_use]
    pub fn angle_tolerance(&self) -> Decimal {
        self.angle_tolerance
    }
}
