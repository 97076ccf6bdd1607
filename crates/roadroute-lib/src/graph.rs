//! Adjacency view over the road segment records.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::dataset::{LocationId, RoadNetwork};
use crate::error::{Error, Result};

/// Edge within the routing graph.
#[derive(Debug, Clone)]
pub struct Edge {
    pub target: LocationId,
    pub miles: f64,
    pub speed_limit_mph: f64,
    pub road_name: String,
}

/// Graph structure used by the search engine.
///
/// Holds the undirected adjacency and the two graph-wide constants the
/// heuristic scales by. Both constants are computed once at build time.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Arc<HashMap<LocationId, Vec<Edge>>>,
    max_speed_limit_mph: f64,
    max_segment_miles: f64,
}

impl Graph {
    /// Return the neighbours for a given location identifier.
    ///
    /// Parallel roads between the same pair of locations yield one edge each,
    /// in dataset order.
    pub fn neighbours(&self, location: LocationId) -> &[Edge] {
        self.adjacency
            .get(&location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Maximum speed limit across all segments, in mph.
    pub fn max_speed_limit_mph(&self) -> f64 {
        self.max_speed_limit_mph
    }

    /// Maximum segment length across all segments, in miles.
    pub fn max_segment_miles(&self) -> f64 {
        self.max_segment_miles
    }
}

/// Build the routing graph from the loaded network.
///
/// A network with no segments, or one whose maximum speed limit or segment
/// length is not positive, cannot support cost computation and is rejected.
pub fn build_graph(network: &RoadNetwork) -> Result<Graph> {
    if network.segments.is_empty() {
        return Err(Error::EmptyNetwork);
    }

    let mut adjacency: HashMap<LocationId, Vec<Edge>> = HashMap::new();
    let mut max_speed_limit_mph = 0.0f64;
    let mut max_segment_miles = 0.0f64;

    for segment in &network.segments {
        max_speed_limit_mph = max_speed_limit_mph.max(segment.speed_limit_mph);
        max_segment_miles = max_segment_miles.max(segment.miles);

        adjacency.entry(segment.a).or_default().push(Edge {
            target: segment.b,
            miles: segment.miles,
            speed_limit_mph: segment.speed_limit_mph,
            road_name: segment.road_name.clone(),
        });
        if segment.a != segment.b {
            adjacency.entry(segment.b).or_default().push(Edge {
                target: segment.a,
                miles: segment.miles,
                speed_limit_mph: segment.speed_limit_mph,
                road_name: segment.road_name.clone(),
            });
        }
    }

    for &id in network.locations.keys() {
        adjacency.entry(id).or_default();
    }

    if max_speed_limit_mph <= 0.0 {
        return Err(Error::DegenerateNetwork {
            detail: "maximum speed limit is zero".to_string(),
        });
    }
    if max_segment_miles <= 0.0 {
        return Err(Error::DegenerateNetwork {
            detail: "maximum segment length is zero".to_string(),
        });
    }

    debug!(
        locations = adjacency.len(),
        segments = network.segments.len(),
        max_speed_limit_mph,
        max_segment_miles,
        "built road graph"
    );

    Ok(Graph {
        adjacency: Arc::new(adjacency),
        max_speed_limit_mph,
        max_segment_miles,
    })
}
