//! Presentation-ready summaries of planned routes.

use std::fmt::Write;

use serde::Serialize;

use crate::dataset::{LocationId, RoadNetwork};
use crate::routing::{CostMode, Route};

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub next_stop: String,
    pub segment_info: String,
    pub miles: f64,
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise or render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub mode: CostMode,
    pub start: String,
    pub goal: String,
    pub total_segments: usize,
    pub total_miles: f64,
    pub total_hours: f64,
    pub total_delivery_hours: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`Route`] into a summary with resolved location names.
    pub fn from_route(network: &RoadNetwork, route: &Route) -> Self {
        let steps = route
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let next_stop = display_name(network, step.location);
                RouteStep {
                    index,
                    segment_info: format!(
                        "{} for {} miles",
                        step.road_name,
                        step.miles.round() as i64
                    ),
                    miles: step.miles,
                    next_stop,
                }
            })
            .collect();

        Self {
            mode: route.mode,
            start: display_name(network, route.start),
            goal: display_name(network, route.goal),
            total_segments: route.total_segments,
            total_miles: route.total_miles,
            total_hours: route.total_hours,
            total_delivery_hours: route.total_delivery_hours,
            steps,
        }
    }

    /// Render the itinerary and totals as the plain-text report.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Start in {}", self.start);
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "   Then go to {} via {}",
                step.next_stop, step.segment_info
            );
        }
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "          Total segments: {:4}", self.total_segments);
        let _ = writeln!(buffer, "             Total miles: {:8.3}", self.total_miles);
        let _ = writeln!(buffer, "             Total hours: {:8.3}", self.total_hours);
        let _ = writeln!(
            buffer,
            "Total hours for delivery: {:8.3}",
            self.total_delivery_hours
        );
        buffer
    }
}

fn display_name(network: &RoadNetwork, id: LocationId) -> String {
    network
        .location_name(id)
        .unwrap_or("<unknown>")
        .to_string()
}
