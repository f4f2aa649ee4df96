use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{CatalogError, Result};
use crate::math;

use super::MM_PER_IN;

/// Gauge value meaning "no thicker gauge left to try".
pub const AWG_EXHAUSTED: i32 = -1;

const PI: Decimal = dec!(3.141592653589793238462643383);

/// Cross-section in mm² of a solid conductor of the given AWG, to 4 places.
///
/// `d_in = 0.005 * 92^((36 - awg) / 39)`, `area = pi/4 * (25.4 * d_in)^2`.
///
/// # Errors
///
/// Returns an error if the diameter cannot be represented as a decimal.
pub fn awg_to_mm2(awg: i32) -> Result<Decimal> {
    let exponent = f64::from(36 - awg) / 39.0;
    let d_in = dec!(0.005) * math::from_f64(92f64.powf(exponent))?;
    let d_mm = d_in * MM_PER_IN;
    let area = PI / dec!(4) * d_mm * d_mm;
    Ok(math::round_dp(area, 4))
}

/// Stroke width in pixels used to draw a wire of the given AWG.
///
/// # Errors
///
/// Returns [`CatalogError::AwgOutOfRange`] outside `0..=30`.
pub fn pixel_width(awg: i32) -> Result<u32> {
    let width = match awg {
        28..=30 => 1,
        25..=27 => 2,
        22..=24 => 3,
        19..=21 => 4,
        15..=18 => 5,
        12..=14 => 6,
        9..=11 => 7,
        6..=8 => 8,
        3..=5 => 9,
        0..=2 => 10,
        _ => return Err(CatalogError::AwgOutOfRange(awg).into()),
    };
    Ok(width)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn awg_22_area() {
        let area = awg_to_mm2(22).unwrap();
        assert!((area - dec!(0.3255)).abs() <= dec!(0.0001), "area={area}");
    }

    #[test]
    fn awg_10_and_0_areas() {
        assert!((awg_to_mm2(10).unwrap() - dec!(5.2612)).abs() <= dec!(0.0001));
        assert!((awg_to_mm2(0).unwrap() - dec!(53.4751)).abs() <= dec!(0.0001));
    }

    #[test]
    fn thicker_gauge_has_larger_area() {
        for awg in 1..=30 {
            assert!(awg_to_mm2(awg - 1).unwrap() > awg_to_mm2(awg).unwrap());
        }
    }

    #[test]
    fn pixel_width_table() {
        assert_eq!(pixel_width(30).unwrap(), 1);
        assert_eq!(pixel_width(27).unwrap(), 2);
        assert_eq!(pixel_width(22).unwrap(), 3);
        assert_eq!(pixel_width(21).unwrap(), 4);
        assert_eq!(pixel_width(18).unwrap(), 5);
        assert_eq!(pixel_width(15).unwrap(), 5);
        assert_eq!(pixel_width(14).unwrap(), 6);
        assert_eq!(pixel_width(11).unwrap(), 7);
        assert_eq!(pixel_width(8).unwrap(), 8);
        assert_eq!(pixel_width(5).unwrap(), 9);
        assert_eq!(pixel_width(0).unwrap(), 10);
    }

    #[test]
    fn pixel_width_out_of_range() {
        assert!(matches!(
            pixel_width(31),
            Err(crate::HarnessError::Catalog(CatalogError::AwgOutOfRange(31)))
        ));
        assert!(pixel_width(-1).is_err());
    }
}
