//! Route planning over the road network.
//!
//! This module provides:
//! - [`CostMode`] - the four interchangeable cost functions
//! - [`RouteRequest`] - high-level route planning request
//! - [`Route`] - planned route result with aggregate totals
//! - [`plan_route`] - main entry point for computing routes

mod cost;

pub use cost::{congestion_penalty, delivery_contribution, Accumulated, CostMode};

use serde::Serialize;
use tracing::debug;

use crate::dataset::{LocationId, RoadNetwork};
use crate::error::{Error, Result};
use crate::graph::build_graph;
use crate::resolve::resolve_endpoints;
use crate::search::{find_route, PathStep};

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub mode: CostMode,
}

impl RouteRequest {
    /// Convenience constructor.
    pub fn new(start: impl Into<String>, goal: impl Into<String>, mode: CostMode) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            mode,
        }
    }
}

/// Planned route returned by the library.
///
/// `steps` lists one entry per segment crossed; the totals are the
/// mode-independent metrics accumulated along the winning path.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub mode: CostMode,
    pub start: LocationId,
    pub goal: LocationId,
    pub steps: Vec<PathStep>,
    pub total_segments: usize,
    pub total_miles: f64,
    pub total_hours: f64,
    pub total_delivery_hours: f64,
}

/// Resolve a location name to its identifier, suggesting close names on miss.
fn resolve_location(network: &RoadNetwork, name: &str) -> Result<LocationId> {
    network.location_id_by_name(name).ok_or_else(|| {
        let suggestions = network.fuzzy_location_matches(name, 3);
        Error::UnknownLocation {
            name: name.to_string(),
            suggestions,
        }
    })
}

/// Compute a route using the requested cost mode.
///
/// This is the main entry point for route planning. It:
/// 1. Resolves location names to identifiers
/// 2. Builds the routing graph (rejecting empty or degenerate networks)
/// 3. Resolves endpoint coordinates for the heuristic
/// 4. Executes the search
/// 5. Assembles the itinerary and aggregate totals
pub fn plan_route(network: &RoadNetwork, request: &RouteRequest) -> Result<Route> {
    let start_id = resolve_location(network, &request.start)?;
    let goal_id = resolve_location(network, &request.goal)?;

    let graph = build_graph(network)?;
    let endpoints = resolve_endpoints(network, &graph, request.mode, start_id, goal_id);

    let outcome = find_route(&graph, network, request.mode, start_id, goal_id, &endpoints)
        .ok_or_else(|| Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        })?;

    debug!(
        mode = %request.mode,
        segments = outcome.steps.len(),
        miles = outcome.totals.miles,
        "route found"
    );

    Ok(Route {
        mode: request.mode,
        start: start_id,
        goal: goal_id,
        total_segments: outcome.steps.len(),
        total_miles: outcome.totals.miles,
        total_hours: outcome.totals.hours,
        total_delivery_hours: outcome.totals.delivery_hours,
        steps: outcome.steps,
    })
}
