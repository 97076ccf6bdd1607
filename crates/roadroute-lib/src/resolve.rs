//! Endpoint coordinate resolution.
//!
//! The search needs coordinates for both endpoints to seed the heuristic.
//! When one is missing from the coordinate dataset, a nearby known
//! coordinate stands in for it. Resolution runs exactly once per query,
//! before the frontier is seeded; interior nodes without a coordinate simply
//! search with a zero estimate.

use tracing::warn;

use crate::dataset::{GeoPoint, LocationId, RoadNetwork};
use crate::graph::Graph;
use crate::routing::CostMode;

/// Coordinates adopted for the start and goal after resolution.
///
/// `start_estimate` carries the start node's initial estimate when the
/// fallback search already minimised it, so the seed skips recomputation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolvedEndpoints {
    pub start: Option<GeoPoint>,
    pub goal: Option<GeoPoint>,
    pub start_estimate: Option<f64>,
}

/// Resolve the coordinates used to seed the heuristic for one query.
pub fn resolve_endpoints(
    network: &RoadNetwork,
    graph: &Graph,
    mode: CostMode,
    start: LocationId,
    goal: LocationId,
) -> ResolvedEndpoints {
    let start_position = network.position(start);
    let goal_position = network.position(goal);

    match (start_position, goal_position) {
        (Some(start_point), Some(goal_point)) => ResolvedEndpoints {
            start: Some(start_point),
            goal: Some(goal_point),
            start_estimate: None,
        },
        (Some(start_point), None) => {
            // The goal's nearest known-coordinate neighbour stands in for it;
            // the minimised estimate doubles as the start node's seed.
            let mut best: Option<(GeoPoint, f64)> = None;
            for position in neighbour_positions(network, graph, goal) {
                let estimate = mode.estimate(
                    &start_point,
                    &position,
                    graph.max_speed_limit_mph(),
                    graph.max_segment_miles(),
                );
                if best.map_or(true, |(_, current)| estimate < current) {
                    best = Some((position, estimate));
                }
            }

            match best {
                Some((position, estimate)) => ResolvedEndpoints {
                    start: Some(start_point),
                    goal: Some(position),
                    start_estimate: Some(estimate),
                },
                None => {
                    warn!(
                        goal = network.location_name(goal).unwrap_or("<unknown>"),
                        "goal has no neighbour with a known coordinate; searching uninformed"
                    );
                    ResolvedEndpoints {
                        start: Some(start_point),
                        goal: None,
                        start_estimate: None,
                    }
                }
            }
        }
        (None, Some(goal_point)) => {
            // The start has no surveyed coordinate; anchor it at (0, 0) so
            // the goal estimate stays defined.
            ResolvedEndpoints {
                start: Some(GeoPoint {
                    latitude: 0.0,
                    longitude: 0.0,
                }),
                goal: Some(goal_point),
                start_estimate: None,
            }
        }
        (None, None) => {
            // Neither endpoint is surveyed: pick the pair of known-coordinate
            // neighbours that minimises the estimate between them.
            let start_candidates: Vec<GeoPoint> =
                neighbour_positions(network, graph, start).collect();
            let goal_candidates: Vec<GeoPoint> =
                neighbour_positions(network, graph, goal).collect();

            let mut best: Option<(GeoPoint, GeoPoint, f64)> = None;
            for start_point in &start_candidates {
                for goal_point in &goal_candidates {
                    let estimate = mode.estimate(
                        start_point,
                        goal_point,
                        graph.max_speed_limit_mph(),
                        graph.max_segment_miles(),
                    );
                    if best.map_or(true, |(_, _, current)| estimate < current) {
                        best = Some((*start_point, *goal_point, estimate));
                    }
                }
            }

            match best {
                Some((start_point, goal_point, estimate)) => ResolvedEndpoints {
                    start: Some(start_point),
                    goal: Some(goal_point),
                    start_estimate: Some(estimate),
                },
                None => {
                    warn!(
                        start = network.location_name(start).unwrap_or("<unknown>"),
                        goal = network.location_name(goal).unwrap_or("<unknown>"),
                        "no positioned neighbours for either endpoint; searching uninformed"
                    );
                    ResolvedEndpoints::default()
                }
            }
        }
    }
}

fn neighbour_positions<'a>(
    network: &'a RoadNetwork,
    graph: &'a Graph,
    location: LocationId,
) -> impl Iterator<Item = GeoPoint> + 'a {
    graph
        .neighbours(location)
        .iter()
        .filter_map(|edge| network.position(edge.target))
}
