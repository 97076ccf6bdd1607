//! Cost-mode strategies for the search engine.
//!
//! Each mode defines the quantity the search minimises, the scaling that
//! keeps the haversine estimate a lower bound in that cost space, and the
//! frontier re-insertion policy.

use std::fmt;

use serde::Serialize;

use crate::dataset::GeoPoint;

/// Selects which accumulated quantity the search minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostMode {
    /// Fewest road segments.
    Segments,
    /// Shortest total distance in miles.
    #[default]
    Distance,
    /// Shortest total driving time in hours.
    Time,
    /// Shortest expected delivery time in hours.
    Delivery,
}

impl fmt::Display for CostMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CostMode::Segments => "segments",
            CostMode::Distance => "distance",
            CostMode::Time => "time",
            CostMode::Delivery => "delivery",
        };
        f.write_str(value)
    }
}

impl CostMode {
    /// Whether a better-scoring successor may replace an open entry for the
    /// same location. `distance` and `time` instead push duplicate entries
    /// and rely on the closed set.
    pub fn allows_reopen(self) -> bool {
        matches!(self, CostMode::Segments | CostMode::Delivery)
    }

    /// Lower-bound estimate of the remaining cost between two coordinates.
    ///
    /// The great-circle distance is rescaled into this mode's cost space:
    /// no segment is longer than `max_segment_miles`, and no segment is
    /// driven faster than `max_speed_limit_mph`, so each quotient cannot
    /// exceed the true remaining cost. Returns 0 for identical coordinates.
    pub fn estimate(
        self,
        from: &GeoPoint,
        to: &GeoPoint,
        max_speed_limit_mph: f64,
        max_segment_miles: f64,
    ) -> f64 {
        let miles = from.haversine_miles(to);
        match self {
            CostMode::Segments => miles / max_segment_miles,
            CostMode::Distance => miles,
            CostMode::Time | CostMode::Delivery => miles / max_speed_limit_mph,
        }
    }

    /// Cost-so-far of a successor whose accumulated metrics are `next`.
    pub fn step_cost(self, next: &Accumulated) -> f64 {
        match self {
            CostMode::Segments => next.segments as f64,
            CostMode::Distance => next.miles,
            CostMode::Time => next.hours,
            CostMode::Delivery => next.delivery_hours,
        }
    }
}

/// Real-world quantities accumulated along a path, independent of cost mode.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulated {
    pub segments: usize,
    pub miles: f64,
    pub hours: f64,
    pub delivery_hours: f64,
}

impl Accumulated {
    /// Metrics after crossing one more segment.
    pub fn extend(&self, miles: f64, speed_limit_mph: f64) -> Accumulated {
        Accumulated {
            segments: self.segments + 1,
            miles: self.miles + miles,
            hours: self.hours + miles / speed_limit_mph,
            delivery_hours: self.delivery_hours
                + delivery_contribution(miles, speed_limit_mph, self.delivery_hours),
        }
    }
}

/// Congestion penalty for a segment: `tanh(miles / 1000)` on roads posted at
/// 50 mph or above, zero otherwise.
pub fn congestion_penalty(miles: f64, speed_limit_mph: f64) -> f64 {
    if speed_limit_mph >= 50.0 {
        (miles / 1000.0).tanh()
    } else {
        0.0
    }
}

/// Expected extra hours a delivery driver spends crossing one segment,
/// accounting for the chance of returning for a fresh package:
/// `roadHours + 2p(roadHours + priorDeliveryHours)`.
pub fn delivery_contribution(miles: f64, speed_limit_mph: f64, prior_delivery_hours: f64) -> f64 {
    let road_hours = miles / speed_limit_mph;
    let p = congestion_penalty(miles, speed_limit_mph);
    road_hours + 2.0 * p * (road_hours + prior_delivery_hours)
}
