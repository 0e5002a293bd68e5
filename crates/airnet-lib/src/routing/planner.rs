//! Route planning strategies implementing the Strategy pattern.
//!
//! Each routing algorithm is encapsulated in its own planner struct so
//! new algorithms can be added without touching [`super::plan_route`],
//! and so the A* heuristic can be injected by the caller.

use crate::graph::Graph;
use crate::network::{AirportId, Network};
use crate::path::{
    find_route_a_star, find_route_dijkstra, FoundPath, Heuristic, NameLengthHeuristic,
};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the pathfinding algorithm on the given graph.
    ///
    /// Returns `Some(path)` if a route is found, `None` otherwise.
    fn find_path(
        &self,
        graph: &Graph,
        network: &Network,
        start: AirportId,
        goal: AirportId,
    ) -> Option<FoundPath>;
}

/// Dijkstra planner: exact shortest path over the weighted graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &Graph,
        _network: &Network,
        start: AirportId,
        goal: AirportId,
    ) -> Option<FoundPath> {
        find_route_dijkstra(graph, start, goal)
    }
}

/// A* planner: heuristic-guided search with an injectable estimate.
///
/// Defaults to [`NameLengthHeuristic`]; callers wanting a guaranteed
/// optimal result must supply an admissible heuristic instead.
pub struct AStarPlanner {
    heuristic: Box<dyn Heuristic + Send + Sync>,
}

impl AStarPlanner {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(NameLengthHeuristic))
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic + Send + Sync>) -> Self {
        Self { heuristic }
    }
}

impl Default for AStarPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        graph: &Graph,
        network: &Network,
        start: AirportId,
        goal: AirportId,
    ) -> Option<FoundPath> {
        find_route_a_star(graph, network, start, goal, self.heuristic.as_ref())
    }
}

/// Select the appropriate planner for a given algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner::new()),
    }
}
