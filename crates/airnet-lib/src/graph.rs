use crate::network::{AirportId, Network};

/// Directed edge within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: AirportId,
    pub distance_km: u32,
}

/// Adjacency structure used by the pathfinding algorithms.
///
/// Built on demand from a [`Network`]'s route records; mutating the
/// network never touches an existing graph, so a graph stays coherent
/// for the duration of a query.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Return the outgoing edges for a given airport handle.
    pub fn neighbours(&self, airport: AirportId) -> &[Edge] {
        self.adjacency
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of airports the graph was built over.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Build the adjacency graph from a network's scheduled routes.
///
/// A bidirectional record expands into two directed edges with the same
/// distance; a one-way record contributes a single edge.
pub fn build_graph(network: &Network) -> Graph {
    let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); network.airport_count()];

    for route in network.routes() {
        adjacency[route.origin].push(Edge {
            target: route.destination,
            distance_km: route.distance_km,
        });
        if route.bidirectional {
            adjacency[route.destination].push(Edge {
                target: route.origin,
                distance_km: route.distance_km,
            });
        }
    }

    Graph { adjacency }
}
