use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::{GeometryError, Result};

/// 2D point type for render-facing float output.
pub type Point2 = nalgebra::Point2<f64>;

/// Decimal places kept for model coordinates and snapped lengths.
pub const COORD_DP: u32 = 4;

/// Decimal places kept for bearings after the `f64` round trip.
pub const ANGLE_DP: u32 = 6;

/// A full turn in degrees.
pub const FULL_TURN: Decimal = dec!(360);

/// Rounds `value` to `dp` places, half away from zero.
#[must_use]
pub fn round_dp(value: Decimal, dp: u32) -> Decimal {
    value
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Square root of a non-negative decimal.
///
/// # Errors
///
/// Returns an error if `value` is negative.
pub fn sqrt(value: Decimal) -> Result<Decimal> {
    value.sqrt().ok_or_else(|| {
        GeometryError::Degenerate(format!("square root of negative value {value}")).into()
    })
}

/// Converts a float back into a decimal.
///
/// # Errors
///
/// Returns an error for NaN, infinities or out-of-range values.
pub fn from_f64(value: f64) -> Result<Decimal> {
    Decimal::from_f64(value).ok_or_else(|| GeometryError::NotRepresentable(value).into())
}

/// Converts a decimal to a float. Decimal's range always fits in `f64`.
#[must_use]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Wraps an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_deg(angle: Decimal) -> Decimal {
    let wrapped = angle % FULL_TURN;
    if wrapped < Decimal::ZERO {
        wrapped + FULL_TURN
    } else {
        wrapped
    }
}

/// Bearing of the vector `(dx, dy)` in degrees, normalized to `[0, 360)`.
///
/// A zero vector has bearing 0.
///
/// # Errors
///
/// Returns an error if the float result cannot be converted back.
pub fn atan2_deg(dy: Decimal, dx: Decimal) -> Result<Decimal> {
    if dx.is_zero() && dy.is_zero() {
        return Ok(Decimal::ZERO);
    }
    let raw = to_f64(dy).atan2(to_f64(dx)).to_degrees();
    Ok(normalize_deg(round_dp(from_f64(raw)?, ANGLE_DP)))
}

/// Cosine and sine of an angle in degrees.
///
/// Multiples of 90 degrees are exact; other angles go through `f64`.
///
/// # Errors
///
/// Returns an error if the float result cannot be converted back.
pub fn cos_sin_deg(angle: Decimal) -> Result<(Decimal, Decimal)> {
    let angle = normalize_deg(angle);
    if angle == Decimal::ZERO {
        return Ok((Decimal::ONE, Decimal::ZERO));
    }
    if angle == dec!(90) {
        return Ok((Decimal::ZERO, Decimal::ONE));
    }
    if angle == dec!(180) {
        return Ok((Decimal::NEGATIVE_ONE, Decimal::ZERO));
    }
    if angle == dec!(270) {
        return Ok((Decimal::ZERO, Decimal::NEGATIVE_ONE));
    }
    let (sin, cos) = to_f64(angle).to_radians().sin_cos();
    Ok((from_f64(cos)?, from_f64(sin)?))
}
