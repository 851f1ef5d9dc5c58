use std::sync::Arc;

use proptest::prelude::*;
use transport_catalogue_core::prelude::*;

fn catalogue(stop_count: usize, buses: &[(Vec<usize>, bool)], distance: u32) -> TransitCatalogue {
    let mut catalogue = TransitCatalogue::new();
    for stop in 0..stop_count {
        catalogue
            .add_stop(format!("stop-{stop}"), 55.0, 37.0 + stop as f64 / 100.0)
            .unwrap();
    }
    for stop in 1..stop_count {
        catalogue
            .add_distance(&format!("stop-{}", stop - 1), &format!("stop-{stop}"), distance)
            .unwrap();
    }
    for (bus, (stops, is_roundtrip)) in buses.iter().enumerate() {
        let names: Vec<String> = stops.iter().map(|stop| format!("stop-{stop}")).collect();
        catalogue
            .add_bus(format!("bus-{bus}"), &names, *is_roundtrip)
            .unwrap();
    }
    catalogue
}

fn buses_strategy(stop_count: usize) -> impl Strategy<Value = Vec<(Vec<usize>, bool)>> {
    prop::collection::vec(
        (prop::collection::vec(0..stop_count, 0..8), any::<bool>()),
        0..5,
    )
}

fn network_strategy() -> impl Strategy<Value = (usize, Vec<(Vec<usize>, bool)>)> {
    (1_usize..10).prop_flat_map(|stop_count| (Just(stop_count), buses_strategy(stop_count)))
}

fn expected_rides(stops: &[usize], is_roundtrip: bool) -> usize {
    let pairs = |n: usize| n * n.saturating_sub(1) / 2;
    if is_roundtrip {
        pairs(stops.len())
    } else {
        // logical length 2n - 1, forward half of n stops, both directions
        2 * pairs(stops.len())
    }
}

proptest! {
    #[test]
    fn edge_counts_follow_bus_shapes(
        (stop_count, buses) in network_strategy(),
        distance in 1_u32..5000,
    ) {
        let catalogue = catalogue(stop_count, &buses, distance);
        let settings = RoutingSettings::new(5.0, 30.0).unwrap();
        let graph = TransitGraph::build(&catalogue, &settings);

        let waits: Vec<_> = graph.edge_weights().filter(|w| w.is_wait()).collect();
        prop_assert_eq!(waits.len(), stop_count);
        prop_assert!(waits.iter().all(|w| w.span_count() == 0));
        prop_assert_eq!(graph.vertex_count(), 2 * stop_count);

        let rides = graph.edge_weights().filter(|w| !w.is_wait()).count();
        let expected: usize = buses
            .iter()
            .map(|(stops, is_roundtrip)| expected_rides(stops, *is_roundtrip))
            .sum();
        prop_assert_eq!(rides, expected);
    }

    #[test]
    fn ride_times_are_non_negative_and_spans_positive(
        (stop_count, buses) in network_strategy(),
        distance in 0_u32..5000,
    ) {
        let catalogue = catalogue(stop_count, &buses, distance);
        let graph = TransitGraph::build(&catalogue, &RoutingSettings::new(1.0, 1.0).unwrap());

        for weight in graph.edge_weights().filter(|w| !w.is_wait()) {
            prop_assert!(weight.time >= 0.0);
            prop_assert!(weight.span_count() >= 1);
        }
    }

    #[test]
    fn queries_are_repeatable_and_self_routes_wait_once(
        (stop_count, buses) in network_strategy(),
        from in 0_usize..10,
        to in 0_usize..10,
    ) {
        let catalogue = catalogue(stop_count, &buses, 700);
        let router = TransportRouter::new(
            Arc::new(catalogue),
            RoutingSettings::new(4.0, 25.0).unwrap(),
        )
        .unwrap();
        let from = format!("stop-{from}");
        let to = format!("stop-{to}");

        let first = router.build_route(&from, &to);
        let second = router.build_route(&from, &to);
        prop_assert_eq!(
            first.as_ref().map(|r| r.total_time),
            second.as_ref().map(|r| r.total_time)
        );

        if let Some(route) = first {
            let sum: f64 = route.segments.iter().map(RouteSegment::time).sum();
            prop_assert!((sum - route.total_time).abs() < 1e-6);
            let starts_with_wait =
                matches!(route.segments.first(), Some(RouteSegment::Wait { .. }));
            prop_assert!(starts_with_wait);
            if from == to {
                prop_assert_eq!(route.segments.len(), 1);
                prop_assert!((route.total_time - 4.0).abs() < f64::EPSILON);
            }
        }
    }
}
