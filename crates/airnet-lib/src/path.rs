use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::Graph;
use crate::network::{AirportId, Network};

/// A path located by one of the search engines, ordered from start to
/// goal, together with its total distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundPath {
    pub cost: u64,
    pub steps: Vec<AirportId>,
}

/// Distance and predecessor tables produced by a full Dijkstra sweep
/// from a single start airport.
///
/// The tables are owned by the tree and scoped to one query; nothing is
/// shared between invocations.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    start: AirportId,
    distances: HashMap<AirportId, u64>,
    parents: HashMap<AirportId, Option<AirportId>>,
}

impl ShortestPathTree {
    /// Total distance from the start to `goal`, if reachable.
    pub fn distance_to(&self, goal: AirportId) -> Option<u64> {
        self.distances.get(&goal).copied()
    }

    /// Whether `goal` is reachable from the start.
    pub fn is_reachable(&self, goal: AirportId) -> bool {
        self.distances.contains_key(&goal)
    }

    /// Reconstruct the start-to-goal path, if `goal` was reached.
    pub fn path_to(&self, goal: AirportId) -> Option<Vec<AirportId>> {
        if !self.is_reachable(goal) {
            return None;
        }
        Some(reconstruct_path(&self.parents, self.start, goal))
    }
}

/// Run Dijkstra's algorithm from `start` over the whole graph.
///
/// The sweep continues until the queue drains; with non-negative edge
/// weights every settled distance is exact, so callers can read off the
/// distance to any airport, not just one goal.
pub fn dijkstra_tree(graph: &Graph, start: AirportId) -> ShortestPathTree {
    let mut distances: HashMap<AirportId, u64> = HashMap::new();
    let mut parents: HashMap<AirportId, Option<AirportId>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0));

    while let Some(entry) = queue.pop() {
        let current = match distances.get(&entry.node) {
            // Stale entry superseded by a cheaper relaxation.
            Some(&distance) if distance < entry.cost => continue,
            Some(&distance) => distance,
            None => continue,
        };

        for edge in graph.neighbours(entry.node) {
            let next_cost = current + u64::from(edge.distance_km);
            if next_cost < distances.get(&edge.target).copied().unwrap_or(u64::MAX) {
                distances.insert(edge.target, next_cost);
                parents.insert(edge.target, Some(entry.node));
                queue.push(QueueEntry::new(edge.target, next_cost));
            }
        }
    }

    ShortestPathTree {
        start,
        distances,
        parents,
    }
}

/// Find the lowest-cost path between `start` and `goal`, or `None` when
/// the goal is unreachable.
pub fn find_route_dijkstra(graph: &Graph, start: AirportId, goal: AirportId) -> Option<FoundPath> {
    let tree = dijkstra_tree(graph, start);
    let cost = tree.distance_to(goal)?;
    let steps = tree.path_to(goal)?;
    Some(FoundPath { cost, steps })
}

/// Estimate of the remaining cost from an airport to the goal, used to
/// order the A* open set.
///
/// A* only guarantees an optimal result when the estimate never exceeds
/// the true remaining distance.
pub trait Heuristic {
    fn estimate(&self, network: &Network, from: AirportId, goal: AirportId) -> u64;
}

/// Default heuristic: the absolute difference between the two airport
/// name lengths.
///
/// This is a syntactic placeholder with no relationship to route
/// distance and no admissibility guarantee; paths it produces can cost
/// more than the true optimum. Callers that need the optimality
/// guarantee should inject [`ZeroHeuristic`] or a distance-based
/// estimate of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameLengthHeuristic;

impl Heuristic for NameLengthHeuristic {
    fn estimate(&self, network: &Network, from: AirportId, goal: AirportId) -> u64 {
        let from_len = network.airport_name(from).map(str::len).unwrap_or(0);
        let goal_len = network.airport_name(goal).map(str::len).unwrap_or(0);
        from_len.abs_diff(goal_len) as u64
    }
}

/// Trivially admissible heuristic; A* degenerates to Dijkstra ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _network: &Network, _from: AirportId, _goal: AirportId) -> u64 {
        0
    }
}

/// Run A* search between `start` and `goal` with the given heuristic.
///
/// Unlike [`find_route_dijkstra`] this exits as soon as the goal is
/// popped from the open set. The result cost is re-derived from the
/// adjacency weights along the reconstructed path rather than read back
/// from the g-score table.
pub fn find_route_a_star(
    graph: &Graph,
    network: &Network,
    start: AirportId,
    goal: AirportId,
    heuristic: &dyn Heuristic,
) -> Option<FoundPath> {
    let mut g_score: HashMap<AirportId, u64> = HashMap::new();
    let mut parents: HashMap<AirportId, Option<AirportId>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    g_score.insert(start, 0);
    parents.insert(start, None);
    queue.push(AStarEntry::new(
        start,
        0,
        heuristic.estimate(network, start, goal),
    ));

    while let Some(entry) = queue.pop() {
        let current = match g_score.get(&entry.node) {
            Some(&score) if score < entry.cost => continue,
            Some(&score) => score,
            None => continue,
        };

        if entry.node == goal {
            let steps = reconstruct_path(&parents, start, goal);
            let cost = accumulate_route_cost(graph, &steps);
            return Some(FoundPath { cost, steps });
        }

        for edge in graph.neighbours(entry.node) {
            let tentative = current + u64::from(edge.distance_km);
            if tentative < g_score.get(&edge.target).copied().unwrap_or(u64::MAX) {
                g_score.insert(edge.target, tentative);
                parents.insert(edge.target, Some(entry.node));
                let estimate = heuristic.estimate(network, edge.target, goal);
                queue.push(AStarEntry::new(edge.target, tentative, estimate));
            }
        }
    }

    None
}

/// Sum the first matching adjacency weight for each hop of `steps`.
fn accumulate_route_cost(graph: &Graph, steps: &[AirportId]) -> u64 {
    steps
        .windows(2)
        .filter_map(|pair| {
            graph
                .neighbours(pair[0])
                .iter()
                .find(|edge| edge.target == pair[1])
        })
        .map(|edge| u64::from(edge.distance_km))
        .sum()
}

fn reconstruct_path(
    parents: &HashMap<AirportId, Option<AirportId>>,
    start: AirportId,
    goal: AirportId,
) -> Vec<AirportId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

/// Lazy enumeration of every simple path between two airports.
///
/// The walk is depth-first with an explicit frame stack; airports on
/// the current path are marked and cannot repeat, so every yielded path
/// is simple and the traversal is finite. The goal airport is emitted
/// but never expanded.
#[derive(Debug)]
pub struct AllSimplePaths<'a> {
    graph: &'a Graph,
    goal: AirportId,
    stack: Vec<Frame>,
    on_path: Vec<bool>,
    path: Vec<AirportId>,
}

#[derive(Debug)]
struct Frame {
    node: AirportId,
    next_edge: usize,
}

/// Enumerate all simple paths between `start` and `goal`.
///
/// Produces an empty iterator when no path exists; callers expecting a
/// large network can check reachability through [`dijkstra_tree`]
/// first to skip the traversal entirely.
pub fn all_simple_paths(graph: &Graph, start: AirportId, goal: AirportId) -> AllSimplePaths<'_> {
    let mut walker = AllSimplePaths {
        graph,
        goal,
        stack: Vec::new(),
        on_path: vec![false; graph.len()],
        path: Vec::new(),
    };
    if start < graph.len() {
        walker.enter(start);
    }
    walker
}

impl AllSimplePaths<'_> {
    fn enter(&mut self, node: AirportId) {
        self.on_path[node] = true;
        self.path.push(node);
        self.stack.push(Frame { node, next_edge: 0 });
    }

    fn leave(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.on_path[frame.node] = false;
            self.path.pop();
        }
    }
}

impl Iterator for AllSimplePaths<'_> {
    type Item = Vec<AirportId>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.len().checked_sub(1)?;
            let node = self.stack[top].node;

            if node == self.goal {
                let found = self.path.clone();
                self.leave();
                return Some(found);
            }

            let index = self.stack[top].next_edge;
            let graph = self.graph;
            match graph.neighbours(node).get(index).copied() {
                None => self.leave(),
                Some(edge) => {
                    self.stack[top].next_edge += 1;
                    if !self.on_path[edge.target] {
                        self.enter(edge.target);
                    }
                }
            }
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: AirportId,
    cost: u64,
}

impl QueueEntry {
    fn new(node: AirportId, cost: u64) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: AirportId,
    cost: u64,
    estimate: u64,
}

impl AStarEntry {
    fn new(node: AirportId, cost: u64, heuristic: u64) -> Self {
        Self {
            node,
            cost,
            estimate: cost + heuristic,
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
