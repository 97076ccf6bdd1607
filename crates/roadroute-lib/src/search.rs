//! Best-first search over the road graph.
//!
//! The engine keeps every [`SearchNode`] in an arena; predecessors are
//! integer handles into that arena, and a node is fully constructed before
//! it is exposed to the frontier. Improvement happens by insertion-time
//! replacement, never by mutating a node already pushed.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;

use crate::dataset::{LocationId, RoadNetwork};
use crate::graph::Graph;
use crate::resolve::ResolvedEndpoints;
use crate::routing::{Accumulated, CostMode};

/// Handle into the search arena.
type NodeHandle = usize;

/// A path-specific view of a location reached during the search.
#[derive(Debug, Clone)]
struct SearchNode {
    location: LocationId,
    parent: Option<NodeHandle>,
    /// Road taken to arrive here; `None` on the start node.
    road_name: Option<String>,
    segment_miles: f64,
    totals: Accumulated,
}

/// One hop of a finished path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStep {
    pub location: LocationId,
    pub road_name: String,
    pub miles: f64,
}

/// Aggregate outcome of a successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub steps: Vec<PathStep>,
    pub totals: Accumulated,
}

/// Run the best-first search from `start` to `goal` in the given cost mode.
///
/// Returns `None` when the frontier empties without reaching the goal.
pub fn find_route(
    graph: &Graph,
    network: &RoadNetwork,
    mode: CostMode,
    start: LocationId,
    goal: LocationId,
    endpoints: &ResolvedEndpoints,
) -> Option<SearchOutcome> {
    let mut arena: Vec<SearchNode> = Vec::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    // Live frontier entry per location, for the modes that replace open
    // entries. Heap entries it no longer points at are skipped on pop.
    let mut open_index: HashMap<LocationId, OpenSlot> = HashMap::new();
    let mut closed: HashSet<LocationId> = HashSet::new();
    let mut seq: u64 = 0;

    let start_estimate = match endpoints.start_estimate {
        Some(estimate) => estimate,
        None => match (&endpoints.start, &endpoints.goal) {
            (Some(from), Some(to)) => mode.estimate(
                from,
                to,
                graph.max_speed_limit_mph(),
                graph.max_segment_miles(),
            ),
            _ => 0.0,
        },
    };

    arena.push(SearchNode {
        location: start,
        parent: None,
        road_name: None,
        segment_miles: 0.0,
        totals: Accumulated::default(),
    });
    open.push(OpenEntry::new(0, start_estimate, seq));
    if mode.allows_reopen() {
        open_index.insert(
            start,
            OpenSlot {
                f: start_estimate,
                seq,
            },
        );
    }
    seq += 1;

    while let Some(entry) = open.pop() {
        let current = entry.handle;
        let current_location = arena[current].location;

        if mode.allows_reopen() {
            match open_index.get(&current_location) {
                Some(slot) if slot.seq == entry.seq => {
                    open_index.remove(&current_location);
                }
                // Entry was replaced by a better-scoring successor.
                _ => continue,
            }
        }

        closed.insert(current_location);

        if current_location == goal {
            return Some(assemble(&arena, current));
        }

        for edge in graph.neighbours(current_location) {
            if closed.contains(&edge.target) {
                continue;
            }

            let totals = arena[current].totals.extend(edge.miles, edge.speed_limit_mph);
            let g = mode.step_cost(&totals);
            let h = match (network.position(edge.target), &endpoints.goal) {
                (Some(position), Some(goal_point)) => mode.estimate(
                    &position,
                    goal_point,
                    graph.max_speed_limit_mph(),
                    graph.max_segment_miles(),
                ),
                _ => 0.0,
            };
            let f = g + h;

            if mode.allows_reopen() {
                if let Some(slot) = open_index.get(&edge.target) {
                    if f >= slot.f {
                        continue;
                    }
                }
                open_index.insert(edge.target, OpenSlot { f, seq });
            }

            arena.push(SearchNode {
                location: edge.target,
                parent: Some(current),
                road_name: Some(edge.road_name.clone()),
                segment_miles: edge.miles,
                totals,
            });
            open.push(OpenEntry::new(arena.len() - 1, f, seq));
            seq += 1;
        }
    }

    None
}

fn assemble(arena: &[SearchNode], terminal: NodeHandle) -> SearchOutcome {
    let mut steps = Vec::new();
    let mut current = Some(terminal);
    while let Some(handle) = current {
        let node = &arena[handle];
        if let Some(road_name) = &node.road_name {
            steps.push(PathStep {
                location: node.location,
                road_name: road_name.clone(),
                miles: node.segment_miles,
            });
        }
        current = node.parent;
    }
    steps.reverse();

    SearchOutcome {
        steps,
        totals: arena[terminal].totals,
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenSlot {
    f: f64,
    seq: u64,
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct OpenEntry {
    handle: NodeHandle,
    f: FloatOrd,
    seq: u64,
}

impl OpenEntry {
    fn new(handle: NodeHandle, f: f64, seq: u64) -> Self {
        Self {
            handle,
            f: FloatOrd(f),
            seq,
        }
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap: lowest f first,
        // earliest insertion on ties.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
