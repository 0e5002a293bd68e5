use std::io::Write;

use airnet_lib::{build_graph, load_network, Error, Network, NetworkSpec, RouteSpec};

fn three_city_network() -> Network {
    let mut network = Network::new();
    for name in ["Delhi", "Mumbai", "Lucknow"] {
        network.register_airport(name).expect("fresh name");
    }
    network
}

#[test]
fn airports_keep_insertion_order() {
    let network = three_city_network();
    let names: Vec<&str> = network
        .airports()
        .iter()
        .map(|airport| airport.name.as_str())
        .collect();
    assert_eq!(names, vec!["Delhi", "Mumbai", "Lucknow"]);
}

#[test]
fn lookup_is_case_sensitive() {
    let network = three_city_network();
    assert!(network.airport_id_by_name("Delhi").is_some());
    assert!(network.airport_id_by_name("delhi").is_none());
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut network = three_city_network();
    let err = network.register_airport("Delhi").expect_err("name is taken");
    assert!(matches!(err, Error::DuplicateAirport { ref name } if name == "Delhi"));
}

#[test]
fn unknown_airport_error_carries_suggestions() {
    let network = three_city_network();
    let err = network.resolve("Lucknw").expect_err("typo does not resolve");

    match err {
        Error::UnknownAirport { name, suggestions } => {
            assert_eq!(name, "Lucknw");
            assert!(suggestions.contains(&"Lucknow".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn fuzzy_matches_respect_limit_and_threshold() {
    let network = three_city_network();

    let matches = network.fuzzy_airport_matches("Mumbay", 3);
    assert_eq!(matches.first().map(String::as_str), Some("Mumbai"));

    let capped = network.fuzzy_airport_matches("a", 1);
    assert!(capped.len() <= 1);

    let nothing = network.fuzzy_airport_matches("Reykjavik", 3);
    assert!(nothing.is_empty());
}

#[test]
fn route_to_unknown_airport_fails() {
    let mut network = three_city_network();
    let err = network
        .add_route("Delhi", "Atlantis", 500, true)
        .expect_err("destination is unregistered");
    assert!(matches!(err, Error::UnknownAirport { ref name, .. } if name == "Atlantis"));
}

#[test]
fn bidirectional_route_stores_one_record_but_two_edges() {
    let mut network = three_city_network();
    network
        .add_route("Delhi", "Mumbai", 500, true)
        .expect("airports exist");

    assert_eq!(network.routes().len(), 1);

    let graph = build_graph(&network);
    let delhi = network.airport_id_by_name("Delhi").expect("registered");
    let mumbai = network.airport_id_by_name("Mumbai").expect("registered");

    assert!(graph
        .neighbours(delhi)
        .iter()
        .any(|edge| edge.target == mumbai && edge.distance_km == 500));
    assert!(graph
        .neighbours(mumbai)
        .iter()
        .any(|edge| edge.target == delhi && edge.distance_km == 500));
}

#[test]
fn one_way_route_stores_a_single_edge() {
    let mut network = three_city_network();
    network
        .add_route("Delhi", "Mumbai", 500, false)
        .expect("airports exist");

    let graph = build_graph(&network);
    let delhi = network.airport_id_by_name("Delhi").expect("registered");
    let mumbai = network.airport_id_by_name("Mumbai").expect("registered");

    assert_eq!(graph.neighbours(delhi).len(), 1);
    assert!(graph.neighbours(mumbai).is_empty());
}

#[test]
fn remove_route_drops_the_first_matching_record() {
    let mut network = three_city_network();
    network
        .add_route("Delhi", "Mumbai", 500, true)
        .expect("airports exist");
    network
        .add_route("Delhi", "Mumbai", 650, true)
        .expect("airports exist");

    assert!(network.remove_route("Delhi", "Mumbai"));
    assert_eq!(network.routes().len(), 1);
    assert_eq!(network.routes()[0].distance_km, 650);

    // Direction matters for removal even on bidirectional records.
    assert!(!network.remove_route("Mumbai", "Lucknow"));
    assert!(!network.remove_route("Delhi", "Nowhere"));
}

#[test]
fn removed_route_leaves_no_adjacency_behind() {
    let mut network = three_city_network();
    network
        .add_route("Delhi", "Mumbai", 500, true)
        .expect("airports exist");
    assert!(network.remove_route("Delhi", "Mumbai"));

    let graph = build_graph(&network);
    let delhi = network.airport_id_by_name("Delhi").expect("registered");
    let mumbai = network.airport_id_by_name("Mumbai").expect("registered");

    assert!(graph.neighbours(delhi).is_empty());
    assert!(graph.neighbours(mumbai).is_empty());
}

#[test]
fn network_spec_builds_a_network() {
    let spec = NetworkSpec {
        airports: vec!["Delhi".to_string(), "Mumbai".to_string()],
        routes: vec![RouteSpec {
            from: "Delhi".to_string(),
            to: "Mumbai".to_string(),
            distance_km: 500,
            bidirectional: true,
        }],
    };

    let network = Network::from_spec(&spec).expect("spec is valid");
    assert_eq!(network.airport_count(), 2);
    assert_eq!(network.routes().len(), 1);
}

#[test]
fn network_spec_rejects_undeclared_route_endpoints() {
    let spec = NetworkSpec {
        airports: vec!["Delhi".to_string()],
        routes: vec![RouteSpec {
            from: "Delhi".to_string(),
            to: "Mumbai".to_string(),
            distance_km: 500,
            bidirectional: true,
        }],
    };

    let err = Network::from_spec(&spec).expect_err("Mumbai is undeclared");
    assert!(matches!(err, Error::UnknownAirport { ref name, .. } if name == "Mumbai"));
}

#[test]
fn load_network_reads_json_and_defaults_bidirectional() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(
        file,
        r#"{{
            "airports": ["Delhi", "Mumbai"],
            "routes": [{{"from": "Delhi", "to": "Mumbai", "distance_km": 500}}]
        }}"#
    )
    .expect("write network file");

    let network = load_network(file.path()).expect("file loads");
    assert_eq!(network.airport_count(), 2);
    assert!(network.routes()[0].bidirectional, "bidirectional defaults to true");
}

#[test]
fn load_network_surfaces_malformed_json() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(file, "{{ not json").expect("write network file");

    let err = load_network(file.path()).expect_err("malformed file fails");
    assert!(matches!(err, Error::Json(_)));
}
