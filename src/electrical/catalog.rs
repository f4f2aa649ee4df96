use rust_decimal::Decimal;

use crate::error::{CatalogError, Result};
use crate::geometry::Point;

use super::{FT_PER_M, G_PER_LB, MM2_PER_IN2, MM_PER_IN};

/// An sRGB color as stored in the part catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from its components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One wire part from the catalog.
///
/// Resistance is stored per kilometre and weight per metre; the other units
/// are derived.
#[derive(Debug, Clone, PartialEq)]
pub struct PartRecord {
    pub part_number: String,
    pub series_id: u32,
    pub color: Color,
    pub stripe_color: Option<Color>,
    pub awg: i32,
    pub mm2: Decimal,
    pub od_mm: Decimal,
    pub conductor_dia_mm: Decimal,
    pub material: String,
    pub num_conductors: u32,
    pub shielded: bool,
    /// Ohms per 1000 m.
    pub resistance_1km: Decimal,
    /// Grams per metre.
    pub weight_g_m: Decimal,
}

impl PartRecord {
    /// Ohms per metre.
    #[must_use]
    pub fn resistance_m(&self) -> Decimal {
        self.resistance_1km / Decimal::ONE_THOUSAND
    }

    /// Ohms per foot.
    #[must_use]
    pub fn resistance_ft(&self) -> Decimal {
        self.resistance_m() / FT_PER_M
    }

    /// Ohms per 1000 ft.
    #[must_use]
    pub fn resistance_1kft(&self) -> Decimal {
        self.resistance_ft() * Decimal::ONE_THOUSAND
    }

    /// Grams per 1000 m.
    #[must_use]
    pub fn weight_1km(&self) -> Decimal {
        self.weight_g_m * Decimal::ONE_THOUSAND
    }

    /// Grams per foot.
    #[must_use]
    pub fn weight_g_ft(&self) -> Decimal {
        self.weight_g_m / FT_PER_M
    }

    /// Pounds per foot.
    #[must_use]
    pub fn weight_lb_ft(&self) -> Decimal {
        self.weight_g_ft() / G_PER_LB
    }

    /// Pounds per 1000 ft.
    #[must_use]
    pub fn weight_1kft(&self) -> Decimal {
        self.weight_lb_ft() * Decimal::ONE_THOUSAND
    }

    /// Conductor diameter in inches.
    #[must_use]
    pub fn conductor_dia_in(&self) -> Decimal {
        self.conductor_dia_mm / MM_PER_IN
    }

    /// Conductor cross-section in square inches.
    #[must_use]
    pub fn in2(&self) -> Decimal {
        self.mm2 / MM2_PER_IN2
    }
}

/// Electrical requirements of the circuit a wire belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitRecord {
    pub name: String,
    /// Rated supply voltage.
    pub volts: Decimal,
    /// Load current in amps.
    pub load: Decimal,
    /// Maximum voltage drop the circuit tolerates.
    pub allowed_drop: Decimal,
}

/// Persisted wire: its end points, the assigned part and its circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct WireRecord {
    pub start: Point,
    pub stop: Point,
    pub part: PartRecord,
    pub circuit: CircuitRecord,
}

/// Read-only access to the part catalog.
///
/// The catalog is owned elsewhere; implementations must not change while a
/// gauge search is running.
pub trait PartCatalog {
    /// Returns every part of a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the series is unknown.
    fn series(&self, series_id: u32) -> Result<Vec<PartRecord>>;
}

/// A part catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    parts: Vec<PartRecord>,
}

impl MemoryCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a part.
    pub fn insert(&mut self, part: PartRecord) {
        self.parts.push(part);
    }

    /// Returns the number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` if the catalog has no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl FromIterator<PartRecord> for MemoryCatalog {
    fn from_iter<I: IntoIterator<Item = PartRecord>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

impl PartCatalog for MemoryCatalog {
    fn series(&self, series_id: u32) -> Result<Vec<PartRecord>> {
        let parts: Vec<_> = self
            .parts
            .iter()
            .filter(|part| part.series_id == series_id)
            .cloned()
            .collect();
        if parts.is_empty() {
            return Err(CatalogError::UnknownSeries(series_id).into());
        }
        Ok(parts)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::electrical::fixtures;
    use rust_decimal_macros::dec;

    #[test]
    fn resistance_unit_conversions() {
        let mut part = fixtures::part(18);
        part.resistance_1km = dec!(32.8084);
        assert_eq!(part.resistance_m(), dec!(0.0328084));
        assert_eq!(part.resistance_ft(), dec!(0.01));
        assert_eq!(part.resistance_1kft(), dec!(10));
    }

    #[test]
    fn weight_unit_conversions() {
        let mut part = fixtures::part(18);
        part.weight_g_m = dec!(3.28084);
        assert_eq!(part.weight_1km(), dec!(3280.84));
        assert_eq!(part.weight_g_ft(), dec!(1));
        assert!((part.weight_lb_ft() * G_PER_LB - dec!(1)).abs() < dec!(0.000001));
    }

    #[test]
    fn series_filters_by_id() {
        let mut catalog = fixtures::catalog();
        let mut other = fixtures::part(18);
        other.series_id = 7;
        catalog.insert(other);

        let series = catalog.series(fixtures::SERIES).unwrap();
        assert!(series.iter().all(|p| p.series_id == fixtures::SERIES));
        assert_eq!(catalog.series(7).unwrap().len(), 1);
    }

    #[test]
    fn unknown_series_fails() {
        assert!(fixtures::catalog().series(99).is_err());
    }
}
