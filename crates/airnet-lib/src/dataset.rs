use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::network::Network;

/// Serialized description of a route network.
///
/// This is an input format only; mutations applied to a loaded
/// [`Network`] are never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub airports: Vec<String>,
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

/// One scheduled route in a network description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSpec {
    pub from: String,
    pub to: String,
    pub distance_km: u32,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

impl Network {
    /// Build a network from a parsed description.
    ///
    /// Fails with [`crate::Error::DuplicateAirport`] for repeated
    /// airport declarations and [`crate::Error::UnknownAirport`] for
    /// routes referencing undeclared airports.
    pub fn from_spec(spec: &NetworkSpec) -> Result<Self> {
        let mut network = Network::new();
        for name in &spec.airports {
            network.register_airport(name.clone())?;
        }
        for route in &spec.routes {
            network.add_route(&route.from, &route.to, route.distance_km, route.bidirectional)?;
        }
        Ok(network)
    }
}

/// Load a network description from a JSON file.
pub fn load_network(path: &Path) -> Result<Network> {
    let contents = fs::read_to_string(path)?;
    let spec: NetworkSpec = serde_json::from_str(&contents)?;
    debug!(
        path = %path.display(),
        airports = spec.airports.len(),
        routes = spec.routes.len(),
        "loaded network file"
    );
    Network::from_spec(&spec)
}

/// Built-in four-city demo network used when no network file is given.
pub fn demo_network() -> Network {
    let spec = NetworkSpec {
        airports: ["Delhi", "Mumbai", "Lucknow", "Chennai"]
            .into_iter()
            .map(String::from)
            .collect(),
        routes: vec![
            demo_route("Delhi", "Mumbai", 500),
            demo_route("Mumbai", "Lucknow", 150),
            demo_route("Delhi", "Lucknow", 100),
            demo_route("Delhi", "Chennai", 600),
        ],
    };

    // The demo description is static and self-consistent.
    Network::from_spec(&spec).expect("demo network is valid")
}

fn demo_route(from: &str, to: &str, distance_km: u32) -> RouteSpec {
    RouteSpec {
        from: from.to_string(),
        to: to.to_string(),
        distance_km,
        bidirectional: true,
    }
}
