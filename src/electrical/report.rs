use rust_decimal::Decimal;

use crate::error::Result;
use crate::math::round_dp;

use super::catalog::PartCatalog;
use super::gauge::awg_to_mm2;
use super::wire_info::WireInfo;

/// Snapshot of a wire's derived values, rounded for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireReport {
    pub length_ft: Decimal,
    pub length_m: Decimal,
    pub length_cm: Decimal,
    pub resistance: Decimal,
    pub voltage_drop: Decimal,
    pub recommended_awg: Option<i32>,
    pub recommendation_message: String,
    pub recommended_mm2: Option<Decimal>,
    pub weight_lb: Decimal,
    pub weight_kg: Decimal,
    pub diameter_mm: Decimal,
    pub diameter_in: Decimal,
    pub pixel_width: u32,
}

impl WireReport {
    /// Evaluates every derived value of `info`.
    ///
    /// Lengths, resistance, weights and areas are rounded to 4 places and the
    /// voltage drop to 2, the precision the info panel shows.
    ///
    /// # Errors
    ///
    /// Returns an error if any derived value cannot be evaluated.
    pub fn from_info(info: &WireInfo, catalog: &dyn PartCatalog) -> Result<Self> {
        let recommendation = info.recommended_awg(catalog)?;
        let recommended_mm2 = recommendation.awg.map(awg_to_mm2).transpose()?;

        Ok(Self {
            length_ft: round_dp(info.length_ft()?, 4),
            length_m: round_dp(info.length_m()?, 4),
            length_cm: round_dp(info.length_cm()?, 4),
            resistance: round_dp(info.resistance()?, 4),
            voltage_drop: round_dp(info.voltage_drop()?, 2),
            recommended_awg: recommendation.awg,
            recommendation_message: recommendation.message,
            recommended_mm2,
            weight_lb: round_dp(info.weight_lb()?, 4),
            weight_kg: round_dp(info.weight_g()? / Decimal::ONE_THOUSAND, 4),
            diameter_mm: info.diameter_mm(),
            diameter_in: round_dp(info.diameter_in(), 4),
            pixel_width: info.pixel_width()?,
        })
    }
}
