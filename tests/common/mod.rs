#![allow(dead_code, clippy::unwrap_used)]

use harness_route::electrical::{
    CircuitRecord, Color, MemoryCatalog, PartRecord, WireInfo, WireRecord,
};
use harness_route::geometry::Point;
use harness_route::operations::creation::{FinishRoute, StartRoute};
use harness_route::operations::modification::{MoveEndpoint, NewSection};
use harness_route::topology::{RouteStore, WireId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const SERIES: u32 = 7;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn part(awg: i32, resistance_1km: Decimal, weight_g_m: Decimal) -> PartRecord {
    PartRecord {
        part_number: format!("GXL-{awg}"),
        series_id: SERIES,
        color: Color::new(0, 0, 0),
        stripe_color: None,
        awg,
        mm2: harness_route::electrical::awg_to_mm2(awg).unwrap(),
        od_mm: dec!(2.4),
        conductor_dia_mm: dec!(1.2),
        material: "Copper".to_owned(),
        num_conductors: 1,
        shielded: false,
        resistance_1km,
        weight_g_m,
    }
}

/// A series whose AWG 18 part has exactly 0.01 ohm per foot.
pub fn catalog() -> MemoryCatalog {
    [
        part(18, dec!(32.8084), dec!(6.3)),
        part(16, dec!(20.0), dec!(9.2)),
        part(14, dec!(12.0), dec!(14.0)),
    ]
    .into_iter()
    .collect()
}

pub fn wire_info(load: Decimal, allowed_drop: Decimal) -> WireInfo {
    WireInfo::new(WireRecord {
        start: Point::ORIGIN,
        stop: Point::ORIGIN,
        part: part(18, dec!(32.8084), dec!(6.3)),
        circuit: CircuitRecord {
            name: "FUEL PUMP".to_owned(),
            volts: dec!(12),
            load,
            allowed_drop,
        },
    })
}

/// Draws a finished wire through `points`.
pub fn route(store: &mut RouteStore, info: WireInfo, points: &[Point]) -> WireId {
    let started = StartRoute::new(info, points[0]).execute(store).unwrap();
    if let Some(second) = points.get(1) {
        MoveEndpoint::new(started.section, *second)
            .execute(store)
            .unwrap();
    }
    for p in points.iter().skip(2) {
        NewSection::new(started.wire, *p).execute(store).unwrap();
    }
    FinishRoute::new(started.wire).execute(store).unwrap();
    started.wire
}

pub fn to_f64(value: Decimal) -> f64 {
    harness_route::math::to_f64(value)
}
