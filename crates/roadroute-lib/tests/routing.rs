mod common;

use roadroute_lib::{plan_route, CostMode, Error, RouteRequest};

use common::{
    brute_force_cost, disconnected_network, network_from, parallel_network, triangle_network,
    ALL_MODES,
};

#[test]
fn single_edge_distance_route() {
    let network = network_from(
        "Ash Birch 10 60 US_1\n",
        "Ash 39.0 -86.0\nBirch 39.1 -86.0\n",
    );
    let request = RouteRequest::new("Ash", "Birch", CostMode::Distance);
    let route = plan_route(&network, &request).expect("route exists");

    assert_eq!(route.total_segments, 1);
    assert_eq!(route.total_miles, 10.0);
    assert!((route.total_hours - 10.0 / 60.0).abs() < 1e-12);
    assert_eq!(route.steps.len(), 1);
    assert_eq!(
        network.location_name(route.steps[0].location),
        Some("Birch")
    );
}

#[test]
fn distance_mode_prefers_the_shorter_detour() {
    let network = triangle_network();
    let request = RouteRequest::new("Ash", "Birch", CostMode::Distance);
    let route = plan_route(&network, &request).expect("route exists");

    assert_eq!(route.total_segments, 2);
    assert_eq!(route.total_miles, 8.0);
}

#[test]
fn time_mode_prefers_the_faster_direct_road() {
    let network = triangle_network();
    let request = RouteRequest::new("Ash", "Birch", CostMode::Time);
    let route = plan_route(&network, &request).expect("route exists");

    assert_eq!(route.total_segments, 1);
    assert_eq!(route.total_miles, 10.0);
    assert!((route.total_hours - 10.0 / 60.0).abs() < 1e-12);
}

#[test]
fn segments_mode_minimises_hop_count() {
    let network = triangle_network();
    let request = RouteRequest::new("Ash", "Birch", CostMode::Segments);
    let route = plan_route(&network, &request).expect("route exists");
    assert_eq!(route.total_segments, 1);
}

#[test]
fn every_mode_matches_exhaustive_enumeration() {
    let network = network_from(
        "Ash Birch 10 60 US_1\n\
         Ash Cedar 4 30 CR_7\n\
         Cedar Birch 4 30 CR_8\n\
         Cedar Dogwood 6 55 SR_9\n\
         Birch Dogwood 3 45 CR_10\n\
         Ash Dogwood 15 65 I_70\n",
        "Ash 39.00 -86.00\n\
         Birch 39.10 -86.00\n\
         Cedar 39.05 -86.02\n\
         Dogwood 39.12 -86.03\n",
    );

    for mode in ALL_MODES {
        let expected =
            brute_force_cost(&network, mode, "Ash", "Dogwood").expect("path exists");
        let request = RouteRequest::new("Ash", "Dogwood", mode);
        let route = plan_route(&network, &request).expect("route exists");
        let actual = match mode {
            CostMode::Segments => route.total_segments as f64,
            CostMode::Distance => route.total_miles,
            CostMode::Time => route.total_hours,
            CostMode::Delivery => route.total_delivery_hours,
        };
        assert!(
            (actual - expected).abs() < 1e-9,
            "{mode}: search found {actual}, brute force found {expected}"
        );
    }
}

#[test]
fn parallel_roads_pick_the_cheaper_one_per_mode() {
    let network = parallel_network();

    let by_distance = plan_route(
        &network,
        &RouteRequest::new("Ash", "Birch", CostMode::Distance),
    )
    .expect("route exists");
    assert_eq!(by_distance.total_miles, 9.0);
    assert_eq!(by_distance.steps[0].road_name, "BYPASS");

    let by_time = plan_route(&network, &RouteRequest::new("Ash", "Birch", CostMode::Time))
        .expect("route exists");
    // 9 mi at 55 mph beats 12 mi at 40 mph.
    assert_eq!(by_time.steps[0].road_name, "BYPASS");
}

#[test]
fn heuristic_is_admissible_across_modes() {
    let network = triangle_network();
    let graph = roadroute_lib::build_graph(&network).unwrap();

    for mode in ALL_MODES {
        for start in ["Ash", "Birch", "Cedar"] {
            for goal in ["Ash", "Birch", "Cedar"] {
                if start == goal {
                    continue;
                }
                let from = network
                    .position(network.location_id_by_name(start).unwrap())
                    .unwrap();
                let to = network
                    .position(network.location_id_by_name(goal).unwrap())
                    .unwrap();
                let estimate = mode.estimate(
                    &from,
                    &to,
                    graph.max_speed_limit_mph(),
                    graph.max_segment_miles(),
                );
                let true_cost = brute_force_cost(&network, mode, start, goal).unwrap();
                assert!(
                    estimate <= true_cost + 1e-9,
                    "{mode}: estimate {estimate} exceeds true cost {true_cost} ({start}->{goal})"
                );
            }
        }
    }
}

#[test]
fn totals_round_trip_over_step_miles() {
    let network = triangle_network();
    for mode in ALL_MODES {
        let route = plan_route(&network, &RouteRequest::new("Ash", "Birch", mode))
            .expect("route exists");
        let summed: f64 = route.steps.iter().map(|step| step.miles).sum();
        assert_eq!(summed, route.total_miles, "{mode}");
    }
}

#[test]
fn identical_queries_yield_identical_routes() {
    let network = triangle_network();
    for mode in ALL_MODES {
        let request = RouteRequest::new("Ash", "Birch", mode);
        let first = plan_route(&network, &request).expect("route exists");
        let second = plan_route(&network, &request).expect("route exists");
        assert_eq!(first.steps, second.steps, "{mode}");
        assert_eq!(first.total_miles, second.total_miles, "{mode}");
        assert_eq!(first.total_hours, second.total_hours, "{mode}");
        assert_eq!(
            first.total_delivery_hours,
            second.total_delivery_hours,
            "{mode}"
        );
    }
}

#[test]
fn disconnected_goal_is_route_not_found() {
    let network = disconnected_network();
    for mode in ALL_MODES {
        let err = plan_route(&network, &RouteRequest::new("Ash", "Zinnia", mode))
            .expect_err("no route");
        assert!(
            matches!(err, Error::RouteNotFound { .. }),
            "{mode}: {err:?}"
        );
    }
}

#[test]
fn start_equal_to_goal_is_an_empty_route() {
    let network = triangle_network();
    let route = plan_route(&network, &RouteRequest::new("Ash", "Ash", CostMode::Distance))
        .expect("trivial route");
    assert_eq!(route.total_segments, 0);
    assert_eq!(route.total_miles, 0.0);
    assert_eq!(route.total_hours, 0.0);
    assert_eq!(route.total_delivery_hours, 0.0);
    assert!(route.steps.is_empty());
}

#[test]
fn unknown_location_error_carries_suggestions() {
    let network = triangle_network();
    let err = plan_route(
        &network,
        &RouteRequest::new("Ashh", "Birch", CostMode::Distance),
    )
    .expect_err("unknown start");

    match &err {
        Error::UnknownLocation { name, suggestions } => {
            assert_eq!(name, "Ashh");
            assert!(suggestions.contains(&"Ash".to_string()));
        }
        other => panic!("expected UnknownLocation, got {other:?}"),
    }
    assert!(format!("{err}").contains("Did you mean"));
}

#[test]
fn goal_without_coordinate_still_terminates_at_goal() {
    // Gap never appears in the coordinate dataset, but has a positioned
    // neighbour, so the fallback substitutes that coordinate and the route
    // still ends at Gap itself.
    let network = network_from(
        "Ash Birch 10 60 US_1\nBirch Gap 5 40 CR_1\n",
        "Ash 39.00 -86.00\nBirch 39.05 -86.00\n",
    );
    let request = RouteRequest::new("Ash", "Gap", CostMode::Distance);
    let route = plan_route(&network, &request).expect("route exists");

    let last = route.steps.last().expect("non-empty route");
    assert_eq!(network.location_name(last.location), Some("Gap"));
    assert_eq!(route.total_miles, 15.0);
}

#[test]
fn unknown_start_anchor_still_finds_the_route() {
    let network = network_from(
        "Ash Birch 10 60 US_1\nBirch Cedar 5 40 CR_1\n",
        "Birch 39.05 -86.00\nCedar 39.10 -86.00\n",
    );
    let request = RouteRequest::new("Ash", "Cedar", CostMode::Distance);
    let route = plan_route(&network, &request).expect("route exists");
    assert_eq!(route.total_segments, 2);
    assert_eq!(route.total_miles, 15.0);
}

#[test]
fn delivery_mode_accumulates_the_congestion_recurrence() {
    // One fast, long segment then a short local one.
    let network = network_from(
        "Depot Junction 2000 70 I_99\nJunction Porch 10 30 ELM_ST\n",
        "Depot 39.0 -86.0\nJunction 39.2 -86.0\nPorch 39.21 -86.0\n",
    );
    let request = RouteRequest::new("Depot", "Porch", CostMode::Delivery);
    let route = plan_route(&network, &request).expect("route exists");

    let first_hours = 2000.0 / 70.0;
    let p = 2.0f64.tanh();
    let first_delivery = first_hours + 2.0 * p * first_hours;
    // Second segment is below the 50 mph penalty threshold.
    let expected = first_delivery + 10.0 / 30.0;

    assert!((route.total_delivery_hours - expected).abs() < 1e-9);
    assert!((route.total_hours - (first_hours + 10.0 / 30.0)).abs() < 1e-9);
}

#[test]
fn delivery_and_time_modes_can_disagree() {
    // Fast long highway vs slow short local roads: the congestion penalty
    // makes the highway costly for delivery while staying fastest by clock.
    // Highway: 1000/70 ≈ 14.3 h but delivery ≈ 36.0 h with p = tanh(1).
    // Locals: 2 × 500/45 ≈ 22.2 h both ways (45 mph carries no penalty).
    let network = network_from(
        "Depot Porch 1000 70 I_99\n\
         Depot Mid 500 45 LOCAL_1\n\
         Mid Porch 500 45 LOCAL_2\n",
        "Depot 39.0 -86.0\nMid 40.0 -86.0\nPorch 41.0 -86.0\n",
    );

    let by_time = plan_route(&network, &RouteRequest::new("Depot", "Porch", CostMode::Time))
        .expect("route exists");
    assert_eq!(by_time.total_segments, 1, "highway is fastest by clock");

    let by_delivery = plan_route(
        &network,
        &RouteRequest::new("Depot", "Porch", CostMode::Delivery),
    )
    .expect("route exists");
    assert_eq!(by_delivery.total_segments, 2, "penalty pushes delivery off the highway");
}
