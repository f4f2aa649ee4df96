mod catalog;
mod gauge;
mod recommend;
mod report;
mod wire_info;

pub use catalog::{CircuitRecord, Color, MemoryCatalog, PartCatalog, PartRecord, WireRecord};
pub use gauge::{awg_to_mm2, pixel_width, AWG_EXHAUSTED};
pub use recommend::{recommend_gauge, Recommendation, NO_LARGER_GAUGE};
pub use report::WireReport;
pub use wire_info::WireInfo;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Feet per metre. Fixed at this precision so lengths match existing output.
pub const FT_PER_M: Decimal = dec!(3.28084);

/// Millimetres per inch.
pub const MM_PER_IN: Decimal = dec!(25.4);

/// Square millimetres per square inch.
pub const MM2_PER_IN2: Decimal = dec!(645.16);

/// Grams per avoirdupois pound.
pub const G_PER_LB: Decimal = dec!(453.59237);

#[cfg(test)]
pub(crate) mod fixtures {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::{CircuitRecord, Color, MemoryCatalog, PartRecord, WireInfo, WireRecord};
    use crate::geometry::Point;

    pub const SERIES: u32 = 1;

    /// (awg, ohm/km, g/m) for a stocked series of even gauges.
    const STOCK: [(i32, Decimal, Decimal); 7] = [
        (22, dec!(52.9), dec!(3.0)),
        (20, dec!(33.3), dec!(4.4)),
        (18, dec!(20.9), dec!(6.3)),
        (16, dec!(13.2), dec!(9.2)),
        (14, dec!(8.28), dec!(14.0)),
        (12, dec!(5.21), dec!(21.0)),
        (10, dec!(3.28), dec!(33.0)),
    ];

    pub fn part(awg: i32) -> PartRecord {
        let (resistance_1km, weight_g_m) = STOCK
            .iter()
            .find(|(a, _, _)| *a == awg)
            .map_or((dec!(20.9), dec!(6.3)), |(_, r, w)| (*r, *w));
        PartRecord {
            part_number: format!("TXL-{awg}"),
            series_id: SERIES,
            color: Color::new(200, 30, 30),
            stripe_color: Some(Color::new(255, 255, 255)),
            awg,
            mm2: dec!(0.8),
            od_mm: dec!(2.1),
            conductor_dia_mm: dec!(1.02),
            material: "Copper".to_owned(),
            num_conductors: 1,
            shielded: false,
            resistance_1km,
            weight_g_m,
        }
    }

    pub fn catalog() -> MemoryCatalog {
        STOCK.iter().map(|(awg, _, _)| part(*awg)).collect()
    }

    pub fn wire_info(awg: i32) -> WireInfo {
        WireInfo::new(WireRecord {
            start: Point::ORIGIN,
            stop: Point::from_ints(1000, 0),
            part: part(awg),
            circuit: CircuitRecord {
                name: "HEADLAMP".to_owned(),
                volts: dec!(12),
                load: dec!(5),
                allowed_drop: dec!(0.5),
            },
        })
    }
}
