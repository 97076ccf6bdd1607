//! Roadroute library entry points.
//!
//! This crate exposes helpers to load the road network datasets, build the
//! routing graph, and plan routes under four interchangeable cost functions.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod output;
pub mod resolve;
pub mod routing;
pub mod search;

pub use dataset::{load_road_network, GeoPoint, Location, LocationId, RoadNetwork, RoadSegment};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, Graph};
pub use output::{RouteStep, RouteSummary};
pub use routing::{plan_route, CostMode, Route, RouteRequest};
pub use search::{find_route, PathStep, SearchOutcome};
