use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::Result;
use crate::math;

use super::catalog::PartCatalog;
use super::gauge::AWG_EXHAUSTED;
use super::wire_info::WireInfo;

/// Advisory returned when no gauge in the series keeps the drop in limits.
pub const NO_LARGER_GAUGE: &str =
    "No larger gauge is available in the same series\nthat will carry the current.";

/// Outcome of a gauge search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// Recommended AWG, or `None` when the series is exhausted.
    pub awg: Option<i32>,
    /// Advisory for the user; empty when there is nothing to say.
    pub message: String,
}

impl Recommendation {
    /// Returns `true` if the series ran out of thicker gauges.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.awg.is_none()
    }
}

/// Walks the wire's series from its current AWG towards thicker gauges until
/// the voltage drop is within the circuit's allowed drop.
///
/// Gauges the series does not stock are skipped. Candidate drops use the
/// catalog's per-kilometre resistance over the wire length, for a single
/// conductor. Running past AWG 0 is not an error: the result carries no
/// gauge and the [`NO_LARGER_GAUGE`] advisory.
///
/// When a gauge is found and it weighs at least as much as two conductors of
/// the current part, the message points out the weight saved by adding a
/// second conductor instead.
///
/// # Errors
///
/// Returns an error if the series cannot be fetched or the wire length
/// cannot be evaluated.
pub fn recommend_gauge(info: &WireInfo, catalog: &dyn PartCatalog) -> Result<Recommendation> {
    let length_m = info.length_m()?;
    let load = info.load();
    let allowed = info.allowed_drop();
    let series = catalog.series(info.part().series_id)?;

    let mut drop = info.voltage_drop()?;
    let mut awg = info.awg();

    while awg > AWG_EXHAUSTED && drop > allowed {
        awg -= 1;
        let Some(candidate) = series.iter().find(|part| part.awg == awg) else {
            continue;
        };
        let resistance = candidate.resistance_1km / Decimal::ONE_THOUSAND * length_m;
        drop = dec!(2) * load * resistance;
        tracing::trace!(awg, %drop, "evaluated gauge candidate");
    }

    if awg <= AWG_EXHAUSTED {
        tracing::debug!(start_awg = info.awg(), "series exhausted");
        return Ok(Recommendation {
            awg: None,
            message: NO_LARGER_GAUGE.to_owned(),
        });
    }

    let recommended = series
        .iter()
        .find(|part| part.awg == awg)
        .unwrap_or(info.part());
    let double_weight = info.weight_g_m() * dec!(2);

    let message = if recommended.weight_g_m >= double_weight {
        let savings = length_m * recommended.weight_g_m - length_m * double_weight;
        format!(
            "Adding a second conductor will have\na weight savings of {} grams",
            math::round_dp(savings, 4)
        )
    } else {
        String::new()
    };

    tracing::debug!(start_awg = info.awg(), awg, "recommended gauge");
    Ok(Recommendation {
        awg: Some(awg),
        message,
    })
}
