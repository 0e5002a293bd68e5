//! Route planning module for the airnet network.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (Dijkstra, A*)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] / [`RouteOutcome`] - Planned route results
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Strategy Pattern
//!
//! Routing uses the Strategy pattern via the [`RoutePlanner`] trait.
//! Each algorithm is encapsulated in its own planner struct, allowing
//! new algorithms to be added without modifying the orchestration
//! logic, and allowing the A* heuristic to be swapped out.

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::build_graph;
use crate::network::{AirportId, Network};
use crate::path::{all_simple_paths, dijkstra_tree};

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm (exact shortest path).
    #[default]
    Dijkstra,
    /// A* search (heuristic guided).
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for Dijkstra routes.
    pub fn dijkstra(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Dijkstra,
        }
    }

    /// Convenience constructor for A* routes.
    pub fn a_star(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::AStar,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: AirportId,
    pub goal: AirportId,
    pub cost: u64,
    pub steps: Vec<AirportId>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Resolve the route steps to airport names, start first.
    pub fn step_names<'a>(&self, network: &'a Network) -> Vec<&'a str> {
        self.steps
            .iter()
            .filter_map(|&id| network.airport_name(id))
            .collect()
    }
}

/// Outcome of a planning query.
///
/// An unreachable goal is an expected result, never an error; only an
/// unknown airport name fails the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RouteOutcome {
    Found(RoutePlan),
    NoPath,
}

impl RouteOutcome {
    pub fn plan(&self) -> Option<&RoutePlan> {
        match self {
            RouteOutcome::Found(plan) => Some(plan),
            RouteOutcome::NoPath => None,
        }
    }

    pub fn is_no_path(&self) -> bool {
        matches!(self, RouteOutcome::NoPath)
    }
}

/// Compute a route using the requested algorithm.
///
/// Resolves the airport names, builds the adjacency graph from the
/// current route records, and dispatches to the planner strategy for
/// the requested algorithm.
pub fn plan_route(network: &Network, request: &RouteRequest) -> Result<RouteOutcome> {
    let start_id = network.resolve(&request.start)?;
    let goal_id = network.resolve(&request.goal)?;

    debug!(
        algorithm = %request.algorithm,
        start = %request.start,
        goal = %request.goal,
        "planning route"
    );

    let graph = build_graph(network);
    let planner = select_planner(request.algorithm);

    match planner.find_path(&graph, network, start_id, goal_id) {
        Some(found) => Ok(RouteOutcome::Found(RoutePlan {
            algorithm: request.algorithm,
            start: start_id,
            goal: goal_id,
            cost: found.cost,
            steps: found.steps,
        })),
        None => Ok(RouteOutcome::NoPath),
    }
}

/// Compute the exact shortest path between two airport names.
pub fn shortest_path(network: &Network, start: &str, goal: &str) -> Result<RouteOutcome> {
    plan_route(network, &RouteRequest::dijkstra(start, goal))
}

/// Compute a heuristic-guided path between two airport names.
pub fn informed_path(network: &Network, start: &str, goal: &str) -> Result<RouteOutcome> {
    plan_route(network, &RouteRequest::a_star(start, goal))
}

/// Enumerate every simple path between two airport names, resolved to
/// name sequences.
///
/// The goal's reachability is checked against the Dijkstra distance
/// table first, so an unreachable pair returns an empty list without
/// walking the graph.
pub fn enumerate_routes(network: &Network, start: &str, goal: &str) -> Result<Vec<Vec<String>>> {
    let start_id = network.resolve(start)?;
    let goal_id = network.resolve(goal)?;

    let graph = build_graph(network);
    if !dijkstra_tree(&graph, start_id).is_reachable(goal_id) {
        return Ok(Vec::new());
    }

    let paths = all_simple_paths(&graph, start_id, goal_id)
        .map(|steps| {
            steps
                .iter()
                .filter_map(|&id| network.airport_name(id).map(str::to_string))
                .collect()
        })
        .collect();
    Ok(paths)
}
