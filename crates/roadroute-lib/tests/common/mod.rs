//! Common test utilities and fixture helpers.
//!
//! Provides in-memory network fixtures and a brute-force path enumerator
//! used as an optimality oracle on small synthetic networks.

#![allow(dead_code)]

use roadroute_lib::routing::delivery_contribution;
use roadroute_lib::{CostMode, LocationId, RoadNetwork};

/// Build a network from inline dataset literals.
pub fn network_from(segments: &str, coordinates: &str) -> RoadNetwork {
    RoadNetwork::from_readers(segments.as_bytes(), coordinates.as_bytes())
        .expect("fixture datasets parse")
}

/// Small network where the shortest-distance and shortest-time routes
/// disagree: the direct road is longer in miles but faster than the detour.
///
/// Coordinates are spaced so the great-circle distances stay below the road
/// mileage, keeping the heuristic admissible.
pub fn triangle_network() -> RoadNetwork {
    network_from(
        "Ash Birch 10 60 US_1\n\
         Ash Cedar 4 30 CR_7\n\
         Cedar Birch 4 30 CR_8\n",
        "Ash 39.00 -86.00\n\
         Birch 39.10 -86.00\n\
         Cedar 39.05 -86.02\n",
    )
}

/// Network with a pair of parallel roads between the same two locations.
pub fn parallel_network() -> RoadNetwork {
    network_from(
        "Ash Birch 12 40 OLD_PIKE\n\
         Ash Birch 9 55 BYPASS\n",
        "Ash 39.00 -86.00\n\
         Birch 39.10 -86.00\n",
    )
}

/// One connected pair plus an isolated location.
pub fn disconnected_network() -> RoadNetwork {
    network_from(
        "Ash Birch 10 60 US_1\n\
         Yew Zinnia 3 25 LANE_2\n",
        "Ash 39.00 -86.00\n\
         Birch 39.10 -86.00\n\
         Yew 45.00 -90.00\n\
         Zinnia 45.02 -90.00\n",
    )
}

/// Exhaustively enumerate simple paths and return the minimum cost in the
/// given mode, or `None` when the goal is unreachable.
///
/// Parallel segments are enumerated individually, and the delivery
/// recurrence is folded along each path in order.
pub fn brute_force_cost(
    network: &RoadNetwork,
    mode: CostMode,
    start: &str,
    goal: &str,
) -> Option<f64> {
    let start = network.location_id_by_name(start)?;
    let goal = network.location_id_by_name(goal)?;

    let mut best: Option<f64> = None;
    let mut visited = vec![start];
    walk(network, mode, goal, &mut visited, Costs::default(), &mut best);
    best
}

#[derive(Debug, Clone, Copy, Default)]
struct Costs {
    segments: usize,
    miles: f64,
    hours: f64,
    delivery_hours: f64,
}

fn walk(
    network: &RoadNetwork,
    mode: CostMode,
    goal: LocationId,
    visited: &mut Vec<LocationId>,
    costs: Costs,
    best: &mut Option<f64>,
) {
    let current = *visited.last().expect("walk starts with one location");
    if current == goal {
        let cost = match mode {
            CostMode::Segments => costs.segments as f64,
            CostMode::Distance => costs.miles,
            CostMode::Time => costs.hours,
            CostMode::Delivery => costs.delivery_hours,
        };
        if best.map_or(true, |b| cost < b) {
            *best = Some(cost);
        }
        return;
    }

    for segment in &network.segments {
        let next = if segment.a == current {
            segment.b
        } else if segment.b == current {
            segment.a
        } else {
            continue;
        };
        if visited.contains(&next) {
            continue;
        }

        let next_costs = Costs {
            segments: costs.segments + 1,
            miles: costs.miles + segment.miles,
            hours: costs.hours + segment.miles / segment.speed_limit_mph,
            delivery_hours: costs.delivery_hours
                + delivery_contribution(
                    segment.miles,
                    segment.speed_limit_mph,
                    costs.delivery_hours,
                ),
        };

        visited.push(next);
        walk(network, mode, goal, visited, next_costs, best);
        visited.pop();
    }
}

pub const ALL_MODES: [CostMode; 4] = [
    CostMode::Segments,
    CostMode::Distance,
    CostMode::Time,
    CostMode::Delivery,
];
