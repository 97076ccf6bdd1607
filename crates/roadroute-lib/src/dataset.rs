//! In-memory road network model and dataset loaders.
//!
//! Two plain-text datasets feed the network: road segment records
//! (`locationA locationB lengthMiles speedLimitMph roadName`) and location
//! coordinate records (`locationName latitude longitude`). Locations are
//! interned to dense integer identifiers; a location that only appears in one
//! of the datasets is still a valid node, and a missing coordinate is a
//! permanent, valid state.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Numeric identifier for an interned location name.
pub type LocationId = u32;

/// Mean Earth radius in miles, matching the dataset's unit system.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Great-circle distance to another point in miles (haversine).
    pub fn haversine_miles(&self, other: &Self) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * a.sqrt().asin() * EARTH_RADIUS_MILES
    }
}

/// Representation of a named location with an optional coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub position: Option<GeoPoint>,
}

/// Undirected road segment between two locations.
///
/// Multiple segments may connect the same pair of locations (parallel roads).
#[derive(Debug, Clone, PartialEq)]
pub struct RoadSegment {
    pub a: LocationId,
    pub b: LocationId,
    pub miles: f64,
    pub speed_limit_mph: f64,
    pub road_name: String,
}

/// In-memory representation of the road network datasets.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    pub locations: HashMap<LocationId, Location>,
    pub name_to_id: HashMap<String, LocationId>,
    pub segments: Vec<RoadSegment>,
}

impl RoadNetwork {
    /// Lookup a location identifier by its case-sensitive name.
    pub fn location_id_by_name(&self, name: &str) -> Option<LocationId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a location name by identifier.
    pub fn location_name(&self, id: LocationId) -> Option<&str> {
        self.locations.get(&id).map(|location| location.name.as_str())
    }

    /// Coordinate of a location, when the dataset provides one.
    pub fn position(&self, id: LocationId) -> Option<GeoPoint> {
        self.locations.get(&id).and_then(|location| location.position)
    }

    /// Return up to `limit` location names similar to `name`, best first.
    pub fn fuzzy_location_matches(&self, name: &str, limit: usize) -> Vec<String> {
        const SIMILARITY_FLOOR: f64 = 0.7;

        let mut scored: Vec<(f64, &str)> = self
            .name_to_id
            .keys()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate.as_str()))
            .filter(|(score, _)| *score >= SIMILARITY_FLOOR)
            .collect();

        scored.sort_by(|(score_a, name_a), (score_b, name_b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| name_a.cmp(name_b))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    /// Parse a road network out of the two datasets.
    ///
    /// Accepts any readers so tests and embedders can supply in-memory data;
    /// see [`load_road_network`] for the file-based entry point.
    pub fn from_readers(mut segments: impl Read, mut coordinates: impl Read) -> Result<Self> {
        let mut network = RoadNetwork::default();

        let mut raw = String::new();
        segments.read_to_string(&mut raw)?;
        network.parse_segments(&raw)?;

        raw.clear();
        coordinates.read_to_string(&mut raw)?;
        network.parse_coordinates(&raw)?;

        let positioned = network
            .locations
            .values()
            .filter(|location| location.position.is_some())
            .count();
        debug!(
            locations = network.locations.len(),
            segments = network.segments.len(),
            positioned,
            "loaded road network"
        );

        Ok(network)
    }

    fn intern(&mut self, name: &str) -> LocationId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        let id = self.locations.len() as LocationId;
        self.locations.insert(
            id,
            Location {
                id,
                name: name.to_string(),
                position: None,
            },
        );
        self.name_to_id.insert(name.to_string(), id);
        id
    }

    fn parse_segments(&mut self, raw: &str) -> Result<()> {
        for (index, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [a, b, miles, speed, road] = fields.as_slice() else {
                return Err(malformed(
                    "road segments",
                    index,
                    format!("expected 5 fields, found {}", fields.len()),
                ));
            };

            let miles = parse_positive("road segments", index, "length", miles)?;
            let speed_limit_mph = parse_positive("road segments", index, "speed limit", speed)?;

            let a = self.intern(a);
            let b = self.intern(b);
            self.segments.push(RoadSegment {
                a,
                b,
                miles,
                speed_limit_mph,
                road_name: road.to_string(),
            });
        }
        Ok(())
    }

    fn parse_coordinates(&mut self, raw: &str) -> Result<()> {
        for (index, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [name, latitude, longitude] = fields.as_slice() else {
                return Err(malformed(
                    "coordinates",
                    index,
                    format!("expected 3 fields, found {}", fields.len()),
                ));
            };

            let latitude = parse_number("coordinates", index, "latitude", latitude)?;
            let longitude = parse_number("coordinates", index, "longitude", longitude)?;

            let id = self.intern(name);
            if let Some(location) = self.locations.get_mut(&id) {
                // Duplicate coordinate records: the last one wins.
                location.position = Some(GeoPoint {
                    latitude,
                    longitude,
                });
            }
        }
        Ok(())
    }
}

/// Load a road network from the segment and coordinate dataset files.
pub fn load_road_network(segments_path: &Path, coordinates_path: &Path) -> Result<RoadNetwork> {
    let segments = File::open(segments_path)?;
    let coordinates = File::open(coordinates_path)?;
    RoadNetwork::from_readers(segments, coordinates)
}

fn malformed(dataset: &str, index: usize, message: String) -> Error {
    Error::MalformedRecord {
        dataset: dataset.to_string(),
        line: index + 1,
        message,
    }
}

fn parse_number(dataset: &str, index: usize, field: &str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| malformed(dataset, index, format!("invalid {field}: {value}")))
}

fn parse_positive(dataset: &str, index: usize, field: &str, value: &str) -> Result<f64> {
    let parsed = parse_number(dataset, index, field, value)?;
    if parsed <= 0.0 || !parsed.is_finite() {
        return Err(malformed(
            dataset,
            index,
            format!("{field} must be positive, found {value}"),
        ));
    }
    Ok(parsed)
}
