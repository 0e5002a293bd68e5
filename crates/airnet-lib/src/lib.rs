//! Airnet library entry points.
//!
//! This crate models a network of named airports connected by weighted
//! directed or bidirectional routes, and answers shortest-path
//! (Dijkstra), heuristic-informed (A*), and all-simple-paths queries
//! over it. Higher-level consumers (the CLI) should only depend on the
//! items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod network;
pub mod path;
pub mod routing;

pub use dataset::{demo_network, load_network, NetworkSpec, RouteSpec};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, Graph};
pub use network::{Airport, AirportId, Network, RouteRecord};
pub use path::{
    all_simple_paths, dijkstra_tree, find_route_a_star, find_route_dijkstra, AllSimplePaths,
    FoundPath, Heuristic, NameLengthHeuristic, ShortestPathTree, ZeroHeuristic,
};
pub use routing::{
    enumerate_routes, informed_path, plan_route, select_planner, shortest_path, AStarPlanner,
    DijkstraPlanner, RouteAlgorithm, RouteOutcome, RoutePlan, RoutePlanner, RouteRequest,
};
