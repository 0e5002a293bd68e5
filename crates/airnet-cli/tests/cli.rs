use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("airnet-cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

fn write_network(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(file, "{contents}").expect("write network file");
    file
}

#[test]
fn route_on_demo_network() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Delhi")
        .arg("--to")
        .arg("Lucknow")
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: dijkstra"))
        .stdout(predicate::str::contains("cost: 100 km"))
        .stdout(predicate::str::contains("Delhi -> Lucknow"));
}

#[test]
fn a_star_algorithm_is_supported() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Mumbai")
        .arg("--to")
        .arg("Chennai")
        .arg("--algorithm")
        .arg("a-star")
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: a-star"))
        .stdout(predicate::str::contains("cost: 850 km"));
}

#[test]
fn unknown_airport_error_is_friendly() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Delhi")
        .arg("--to")
        .arg("Lucknw")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown airport name: Lucknw"))
        .stderr(predicate::str::contains("Did you mean 'Lucknow'?"));
}

#[test]
fn no_route_is_reported_without_failing() {
    let file = write_network(
        r#"{
            "airports": ["Delhi", "Mumbai", "Kolkata"],
            "routes": [{"from": "Delhi", "to": "Mumbai", "distance_km": 500}]
        }"#,
    );

    cli()
        .arg("--network")
        .arg(file.path())
        .arg("route")
        .arg("--from")
        .arg("Delhi")
        .arg("--to")
        .arg("Kolkata")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No route found between Delhi and Kolkata",
        ));
}

#[test]
fn json_output_includes_named_path() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Mumbai")
        .arg("--to")
        .arg("Lucknow")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\": \"found\""))
        .stdout(predicate::str::contains("\"cost\": 150"))
        .stdout(predicate::str::contains("\"Mumbai\""));
}

#[test]
fn paths_lists_every_simple_path() {
    cli()
        .arg("paths")
        .arg("--from")
        .arg("Delhi")
        .arg("--to")
        .arg("Lucknow")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delhi -> Lucknow"))
        .stdout(predicate::str::contains("Delhi -> Mumbai -> Lucknow"))
        .stdout(predicate::str::contains("2 path(s) found"));
}

#[test]
fn airports_lists_insertion_order() {
    let output = cli().arg("airports").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).expect("utf8 output");

    let delhi = stdout.find("- Delhi").expect("Delhi listed");
    let chennai = stdout.find("- Chennai").expect("Chennai listed");
    assert!(delhi < chennai, "insertion order preserved");
}

#[test]
fn routes_lists_scheduled_records() {
    cli()
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delhi <-> Mumbai (500 km)"))
        .stdout(predicate::str::contains("Delhi <-> Chennai (600 km)"));
}

#[test]
fn network_file_with_bad_json_fails_with_context() {
    let file = write_network("{ not json");

    cli()
        .arg("--network")
        .arg(file.path())
        .arg("airports")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load network from"));
}
