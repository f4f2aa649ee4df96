use std::cmp::Ordering;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{CatalogError, Result};
use crate::geometry::Line;

use super::catalog::{CircuitRecord, Color, PartCatalog, PartRecord, WireRecord};
use super::gauge;
use super::recommend::{recommend_gauge, Recommendation};
use super::report::WireReport;
use super::{FT_PER_M, G_PER_LB};

/// Electrical view of one wire.
///
/// Wraps the persisted wire record with its part and circuit. Every
/// electrical quantity is computed on demand from the record; the only extra
/// input held here is the routed length reported by the topology layer.
#[derive(Debug, Clone)]
pub struct WireInfo {
    record: WireRecord,
    routed_length_mm: Option<Decimal>,
}

impl WireInfo {
    /// Creates the view over a wire record.
    #[must_use]
    pub fn new(record: WireRecord) -> Self {
        Self {
            record,
            routed_length_mm: None,
        }
    }

    /// Returns the underlying record.
    #[must_use]
    pub fn record(&self) -> &WireRecord {
        &self.record
    }

    /// Returns the assigned part.
    #[must_use]
    pub fn part(&self) -> &PartRecord {
        &self.record.part
    }

    /// Returns the circuit.
    #[must_use]
    pub fn circuit(&self) -> &CircuitRecord {
        &self.record.circuit
    }

    /// Reassigns the part.
    pub fn set_part(&mut self, part: PartRecord) {
        self.record.part = part;
    }

    /// Reassigns the circuit.
    pub fn set_circuit(&mut self, circuit: CircuitRecord) {
        self.record.circuit = circuit;
    }

    // --- Circuit ---

    #[must_use]
    pub fn volts(&self) -> Decimal {
        self.record.circuit.volts
    }

    pub fn set_volts(&mut self, volts: Decimal) {
        self.record.circuit.volts = volts;
    }

    #[must_use]
    pub fn load(&self) -> Decimal {
        self.record.circuit.load
    }

    pub fn set_load(&mut self, load: Decimal) {
        self.record.circuit.load = load;
    }

    #[must_use]
    pub fn allowed_drop(&self) -> Decimal {
        self.record.circuit.allowed_drop
    }

    pub fn set_allowed_drop(&mut self, allowed_drop: Decimal) {
        self.record.circuit.allowed_drop = allowed_drop;
    }

    // --- Part ---

    #[must_use]
    pub fn awg(&self) -> i32 {
        self.record.part.awg
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.record.part.color
    }

    #[must_use]
    pub fn stripe_color(&self) -> Option<Color> {
        self.record.part.stripe_color
    }

    #[must_use]
    pub fn num_conductors(&self) -> u32 {
        self.record.part.num_conductors
    }

    #[must_use]
    pub fn is_shielded(&self) -> bool {
        self.record.part.shielded
    }

    #[must_use]
    pub fn od_mm(&self) -> Decimal {
        self.record.part.od_mm
    }

    #[must_use]
    pub fn material(&self) -> &str {
        &self.record.part.material
    }

    #[must_use]
    pub fn mm2(&self) -> Decimal {
        self.record.part.mm2
    }

    #[must_use]
    pub fn in2(&self) -> Decimal {
        self.record.part.in2()
    }

    #[must_use]
    pub fn diameter_mm(&self) -> Decimal {
        self.record.part.conductor_dia_mm
    }

    #[must_use]
    pub fn diameter_in(&self) -> Decimal {
        self.record.part.conductor_dia_in()
    }

    #[must_use]
    pub fn resistance_1km(&self) -> Decimal {
        self.record.part.resistance_1km
    }

    #[must_use]
    pub fn resistance_m(&self) -> Decimal {
        self.record.part.resistance_m()
    }

    #[must_use]
    pub fn resistance_ft(&self) -> Decimal {
        self.record.part.resistance_ft()
    }

    #[must_use]
    pub fn resistance_1kft(&self) -> Decimal {
        self.record.part.resistance_1kft()
    }

    #[must_use]
    pub fn weight_g_m(&self) -> Decimal {
        self.record.part.weight_g_m
    }

    #[must_use]
    pub fn weight_1km(&self) -> Decimal {
        self.record.part.weight_1km()
    }

    #[must_use]
    pub fn weight_g_ft(&self) -> Decimal {
        self.record.part.weight_g_ft()
    }

    #[must_use]
    pub fn weight_lb_ft(&self) -> Decimal {
        self.record.part.weight_lb_ft()
    }

    #[must_use]
    pub fn weight_1kft(&self) -> Decimal {
        self.record.part.weight_1kft()
    }

    /// Stroke width used to draw this wire.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::AwgOutOfRange`] if the part's AWG has no width.
    pub fn pixel_width(&self) -> Result<u32> {
        gauge::pixel_width(self.awg())
    }

    // --- Length ---

    /// Records the summed length of the routed sections, in model units.
    pub(crate) fn set_routed_length(&mut self, length_mm: Decimal) {
        self.routed_length_mm = Some(length_mm);
    }

    /// Routed length in model units, once the route has been measured.
    #[must_use]
    pub fn routed_length_mm(&self) -> Option<Decimal> {
        self.routed_length_mm
    }

    /// Wire length in metres.
    ///
    /// Uses the routed length when one has been recorded, otherwise the
    /// straight distance between the persisted start and stop points.
    ///
    /// # Errors
    ///
    /// Returns an error if the distance cannot be evaluated.
    pub fn length_m(&self) -> Result<Decimal> {
        let mm = match self.routed_length_mm {
            Some(mm) => mm,
            None => Line::new(self.record.start, self.record.stop).length()?,
        };
        Ok(mm / Decimal::ONE_THOUSAND)
    }

    /// Wire length in feet.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be evaluated.
    pub fn length_ft(&self) -> Result<Decimal> {
        Ok(self.length_m()? * FT_PER_M)
    }

    /// Wire length in centimetres.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be evaluated.
    pub fn length_cm(&self) -> Result<Decimal> {
        Ok(self.length_m()? * dec!(100))
    }

    // --- Electrical ---

    /// Resistance of one conductor over the wire length.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be evaluated.
    pub fn resistance(&self) -> Result<Decimal> {
        Ok(self.length_ft()? * self.resistance_ft())
    }

    /// Voltage drop over supply and return, shared across the conductors.
    ///
    /// # Errors
    ///
    /// Returns an error if the part has no conductors or the length cannot
    /// be evaluated.
    pub fn voltage_drop(&self) -> Result<Decimal> {
        let conductors = self.num_conductors();
        if conductors == 0 {
            return Err(CatalogError::InvalidPart(format!(
                "part {} has no conductors",
                self.record.part.part_number
            ))
            .into());
        }
        Ok(dec!(2) * self.resistance()? * self.load() / Decimal::from(conductors))
    }

    /// Total wire weight in grams.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be evaluated.
    pub fn weight_g(&self) -> Result<Decimal> {
        Ok(self.length_m()? * self.weight_g_m())
    }

    /// Total wire weight in pounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be evaluated.
    pub fn weight_lb(&self) -> Result<Decimal> {
        Ok(self.weight_g()? / G_PER_LB)
    }

    // --- Sizing ---

    /// Searches the part's series for the thinnest gauge that keeps the
    /// voltage drop within the allowed limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog query or a length evaluation fails.
    pub fn recommended_awg(&self, catalog: &dyn PartCatalog) -> Result<Recommendation> {
        recommend_gauge(self, catalog)
    }

    /// Cross-section in mm² of the recommended gauge, or `None` if the
    /// series has no gauge that carries the load.
    ///
    /// # Errors
    ///
    /// Returns an error if the recommendation search fails.
    pub fn recommended_mm2(&self, catalog: &dyn PartCatalog) -> Result<Option<Decimal>> {
        self.recommended_awg(catalog)?
            .awg
            .map(gauge::awg_to_mm2)
            .transpose()
    }

    /// Computes every derived value shown to the user.
    ///
    /// # Errors
    ///
    /// Returns an error if any derived value cannot be evaluated.
    pub fn report(&self, catalog: &dyn PartCatalog) -> Result<WireReport> {
        WireReport::from_info(self, catalog)
    }
}

impl PartialEq for WireInfo {
    fn eq(&self, other: &Self) -> bool {
        self.awg() == other.awg()
            && self.num_conductors() == other.num_conductors()
            && self.is_shielded() == other.is_shielded()
    }
}

/// Upgrade order: a wire is greater than another when it is thicker (smaller
/// AWG) without using more conductors. Other combinations are incomparable.
impl PartialOrd for WireInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        let (awg, n) = (self.awg(), self.num_conductors());
        let (other_awg, other_n) = (other.awg(), other.num_conductors());
        if awg < other_awg && n <= other_n {
            Some(Ordering::Greater)
        } else if awg > other_awg && n >= other_n {
            Some(Ordering::Less)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::electrical::fixtures;
    use crate::geometry::Point;

    #[test]
    fn length_from_persisted_points() {
        let mut info = fixtures::wire_info(18);
        let mut record = info.record().clone();
        record.start = Point::new_3d(dec!(0), dec!(0), dec!(0));
        record.stop = Point::new_3d(dec!(300), dec!(400), dec!(1200));
        info = WireInfo::new(record);
        assert_eq!(info.length_m().unwrap(), dec!(1.3));
    }

    #[test]
    fn routed_length_overrides_persisted_points() {
        let mut info = fixtures::wire_info(18);
        info.set_routed_length(dec!(1500));
        assert_eq!(info.length_m().unwrap(), dec!(1.5));
        assert_eq!(info.length_ft().unwrap(), dec!(4.92126));
        assert_eq!(info.length_cm().unwrap(), dec!(150));
    }

    #[test]
    fn resistance_and_drop() {
        let mut info = fixtures::wire_info(18);
        let mut part = info.part().clone();
        part.resistance_1km = dec!(32.8084); // 0.01 ohm/ft
        info.set_part(part);
        info.set_load(dec!(10));
        info.set_routed_length(dec!(3048));

        let resistance = info.resistance().unwrap();
        let drop = info.voltage_drop().unwrap();
        assert!((resistance - dec!(0.1)).abs() < dec!(0.0001), "r={resistance}");
        assert!((drop - dec!(2.0)).abs() < dec!(0.0001), "drop={drop}");
    }

    #[test]
    fn drop_is_shared_across_conductors() {
        let mut info = fixtures::wire_info(18);
        let single = info.voltage_drop().unwrap();
        let mut part = info.part().clone();
        part.num_conductors = 2;
        info.set_part(part);
        let shared = info.voltage_drop().unwrap();
        assert!((shared * dec!(2) - single).abs() < dec!(0.0000001));
    }

    #[test]
    fn zero_conductors_is_a_catalog_error() {
        let mut info = fixtures::wire_info(18);
        let mut part = info.part().clone();
        part.num_conductors = 0;
        info.set_part(part);
        assert!(info.voltage_drop().is_err());
    }

    #[test]
    fn weight_over_length() {
        let mut info = fixtures::wire_info(18);
        info.set_routed_length(dec!(2000));
        assert_eq!(info.weight_g().unwrap(), info.weight_g_m() * dec!(2));
    }

    #[test]
    fn equality_compares_gauge_conductors_and_shield() {
        let a = fixtures::wire_info(18);
        let mut b = fixtures::wire_info(18);
        b.set_load(dec!(99));
        assert!(a == b);

        let mut part = b.part().clone();
        part.shielded = true;
        b.set_part(part);
        assert!(a != b);
    }

    #[test]
    fn upgrade_order() {
        let thin = fixtures::wire_info(18);
        let thick = fixtures::wire_info(14);
        assert!(thick > thin);
        assert!(thin < thick);
        assert!(thick >= thin);
        assert!(!(thin > thick));
    }

    #[test]
    fn more_conductors_is_not_an_upgrade() {
        let thin = fixtures::wire_info(18);
        let mut thick_pair = fixtures::wire_info(14);
        let mut part = thick_pair.part().clone();
        part.num_conductors = 2;
        thick_pair.set_part(part);

        assert_eq!(thick_pair.partial_cmp(&thin), None);
        assert!(!(thick_pair > thin));
        assert!(!(thick_pair < thin));
        assert!(!(thick_pair >= thin));
    }

    #[test]
    fn pixel_width_follows_gauge() {
        assert_eq!(fixtures::wire_info(18).pixel_width().unwrap(), 5);
        let mut info = fixtures::wire_info(18);
        let mut part = info.part().clone();
        part.awg = 40;
        info.set_part(part);
        assert!(info.pixel_width().is_err());
    }
}
