use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Stable handle for an airport within a [`Network`] arena.
///
/// Handles are plain indices into the airport arena. Routes and search
/// state reference airports by handle only, so nothing in the library
/// ever holds a dangling pointer to an airport.
pub type AirportId = usize;

/// Minimum Jaro-Winkler similarity for a name to count as a suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// A uniquely named airport. Immutable after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Airport {
    pub id: AirportId,
    pub name: String,
}

/// A scheduled route between two airports.
///
/// One record is stored per `add_route` call; a bidirectional route is
/// still a single record describing the logical connection. The
/// per-origin adjacency used by the search engines is derived from
/// these records (see [`crate::graph::build_graph`]), so the record
/// list is the single source of truth and the two views cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRecord {
    pub origin: AirportId,
    pub destination: AirportId,
    pub distance_km: u32,
    pub bidirectional: bool,
}

/// In-memory route network: the airport arena plus scheduled routes.
#[derive(Debug, Clone, Default)]
pub struct Network {
    airports: Vec<Airport>,
    name_to_id: HashMap<String, AirportId>,
    routes: Vec<RouteRecord>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new airport and return its handle.
    ///
    /// Names are unique; registering the same name twice fails with
    /// [`Error::DuplicateAirport`] so that name lookup stays
    /// unambiguous.
    pub fn register_airport(&mut self, name: impl Into<String>) -> Result<AirportId> {
        let name = name.into();
        if self.name_to_id.contains_key(&name) {
            return Err(Error::DuplicateAirport { name });
        }

        let id = self.airports.len();
        self.name_to_id.insert(name.clone(), id);
        self.airports.push(Airport { id, name });
        Ok(id)
    }

    /// Lookup an airport handle by its case-sensitive name.
    pub fn airport_id_by_name(&self, name: &str) -> Option<AirportId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup an airport name by handle.
    pub fn airport_name(&self, id: AirportId) -> Option<&str> {
        self.airports.get(id).map(|airport| airport.name.as_str())
    }

    /// All registered airports in insertion order.
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// Number of registered airports.
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Schedule a route between two registered airports.
    ///
    /// A bidirectional route stores one record but contributes edges in
    /// both directions when the adjacency graph is built.
    pub fn add_route(
        &mut self,
        origin_name: &str,
        dest_name: &str,
        distance_km: u32,
        bidirectional: bool,
    ) -> Result<()> {
        let origin = self.resolve(origin_name)?;
        let destination = self.resolve(dest_name)?;

        debug!(
            origin = origin_name,
            destination = dest_name,
            distance_km,
            bidirectional,
            "scheduling route"
        );
        self.routes.push(RouteRecord {
            origin,
            destination,
            distance_km,
            bidirectional,
        });
        Ok(())
    }

    /// Cancel the first route matching the given origin and destination
    /// names exactly. Returns whether a route was removed.
    ///
    /// Removal drops the record itself, so both directions of a
    /// bidirectional route disappear from any graph built afterwards.
    pub fn remove_route(&mut self, origin_name: &str, dest_name: &str) -> bool {
        let (Some(origin), Some(destination)) = (
            self.airport_id_by_name(origin_name),
            self.airport_id_by_name(dest_name),
        ) else {
            return false;
        };

        let position = self
            .routes
            .iter()
            .position(|route| route.origin == origin && route.destination == destination);

        match position {
            Some(index) => {
                self.routes.remove(index);
                debug!(origin = origin_name, destination = dest_name, "route cancelled");
                true
            }
            None => false,
        }
    }

    /// All scheduled route records in insertion order.
    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    /// Resolve an airport name to its handle, with fuzzy suggestions on
    /// failure.
    pub fn resolve(&self, name: &str) -> Result<AirportId> {
        self.airport_id_by_name(name).ok_or_else(|| {
            let suggestions = self.fuzzy_airport_matches(name, 3);
            Error::UnknownAirport {
                name: name.to_string(),
                suggestions,
            }
        })
    }

    /// Return up to `limit` airport names similar to `name`, best match
    /// first. Names below the similarity threshold are excluded.
    pub fn fuzzy_airport_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .airports
            .iter()
            .map(|airport| (strsim::jaro_winkler(name, &airport.name), airport.name.as_str()))
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}
