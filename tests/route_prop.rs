#![allow(clippy::unwrap_used)]

mod common;

use harness_route::geometry::Point;
use harness_route::operations::modification::{
    MoveEndpoint, MoveSection, NewSection, RemoveLastSection,
};
use harness_route::operations::query::IsValid;
use harness_route::topology::RouteStore;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use common::{catalog, route, wire_info};

#[derive(Debug, Clone)]
enum Edit {
    Append(i64, i64),
    DragEnd(usize, i64, i64),
    Translate(usize, i64, i64),
    Undo,
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (-500i64..500, -500i64..500).prop_map(|(x, y)| Edit::Append(x, y)),
        (0usize..8, -500i64..500, -500i64..500).prop_map(|(i, x, y)| Edit::DragEnd(i, x, y)),
        (0usize..8, -60i64..60, -60i64..60).prop_map(|(i, x, y)| Edit::Translate(i, x, y)),
        Just(Edit::Undo),
    ]
}

proptest! {
    #[test]
    fn edits_keep_wire_connected_and_cardinal(edits in prop::collection::vec(edit(), 1..24)) {
        let mut store = RouteStore::new();
        let wire = route(
            &mut store,
            wire_info(dec!(1), dec!(1)),
            &[Point::ORIGIN, Point::from_ints(100, 0), Point::from_ints(100, 100)],
        );

        for edit in edits {
            let sections = store.wire(wire).unwrap().sections().to_vec();
            // Rejected edits are part of the contract; only the result matters.
            match edit {
                Edit::Append(x, y) => {
                    let _ = NewSection::new(wire, Point::from_ints(x, y)).execute(&mut store);
                }
                Edit::DragEnd(i, x, y) => {
                    let id = sections[i % sections.len()];
                    let _ = MoveEndpoint::new(id, Point::from_ints(x, y)).execute(&mut store);
                }
                Edit::Translate(i, x, y) => {
                    let id = sections[i % sections.len()];
                    let _ = MoveSection::new(id, Point::from_ints(x, y)).execute(&mut store);
                }
                Edit::Undo => {
                    if sections.len() > 1 {
                        RemoveLastSection::new(wire).execute(&mut store).unwrap();
                    }
                }
            }
            prop_assert!(IsValid::new(wire).check(&store).is_ok());
        }
    }

    #[test]
    fn heavier_load_never_recommends_a_thinner_gauge(
        load in 1u32..200,
        extra in 0u32..200,
        length in 100i64..20_000,
    ) {
        let catalog = catalog();
        let recommend = |load: u32| {
            let mut store = RouteStore::new();
            let wire = route(
                &mut store,
                wire_info(Decimal::from(load), dec!(0.5)),
                &[Point::ORIGIN, Point::from_ints(length, 0)],
            );
            harness_route::operations::query::UpdateWireInfo::new(wire)
                .execute(&mut store, &catalog)
                .unwrap()
                .recommended_awg
        };

        // `None` means the series ran out, the thickest possible outcome.
        let light = recommend(load).unwrap_or(-1);
        let heavy = recommend(load + extra).unwrap_or(-1);
        prop_assert!(heavy <= light);
    }
}
