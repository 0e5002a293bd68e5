use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use airnet_lib::{
    demo_network, load_network, plan_route, Network, RouteAlgorithm, RouteOutcome, RouteRequest,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Airnet route network utilities")]
struct Cli {
    /// Path to a JSON network description. Falls back to the built-in
    /// demo network when omitted.
    #[arg(long)]
    network: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two airport names.
    Route {
        /// Starting airport name.
        #[arg(long = "from")]
        from: String,
        /// Destination airport name.
        #[arg(long = "to")]
        to: String,
        /// Pathfinding algorithm.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
        /// Emit the result as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Enumerate every simple path between two airport names.
    Paths {
        /// Starting airport name.
        #[arg(long = "from")]
        from: String,
        /// Destination airport name.
        #[arg(long = "to")]
        to: String,
    },
    /// List the registered airports in insertion order.
    Airports,
    /// List the scheduled routes.
    Routes,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum AlgorithmArg {
    Dijkstra,
    AStar,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let network = open_network(cli.network.as_deref())?;

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
            json,
        } => handle_route(&network, &from, &to, algorithm.into(), json),
        Command::Paths { from, to } => handle_paths(&network, &from, &to),
        Command::Airports => handle_airports(&network),
        Command::Routes => handle_routes(&network),
    }
}

fn open_network(path: Option<&Path>) -> Result<Network> {
    match path {
        Some(path) => load_network(path)
            .with_context(|| format!("failed to load network from {}", path.display())),
        None => Ok(demo_network()),
    }
}

fn handle_route(
    network: &Network,
    from: &str,
    to: &str,
    algorithm: RouteAlgorithm,
    json: bool,
) -> Result<()> {
    let request = RouteRequest {
        start: from.to_string(),
        goal: to.to_string(),
        algorithm,
    };
    let outcome = plan_route(network, &request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&json_outcome(network, &outcome))?);
        return Ok(());
    }

    match outcome {
        RouteOutcome::Found(plan) => {
            println!("algorithm: {}", plan.algorithm);
            println!("cost: {} km", plan.cost);
            println!("route: {}", plan.step_names(network).join(" -> "));
        }
        RouteOutcome::NoPath => {
            println!("No route found between {} and {}", from, to);
        }
    }
    Ok(())
}

fn json_outcome(network: &Network, outcome: &RouteOutcome) -> serde_json::Value {
    match outcome {
        RouteOutcome::Found(plan) => serde_json::json!({
            "outcome": "found",
            "algorithm": plan.algorithm,
            "cost": plan.cost,
            "path": plan.step_names(network),
        }),
        RouteOutcome::NoPath => serde_json::json!({ "outcome": "no_path" }),
    }
}

fn handle_paths(network: &Network, from: &str, to: &str) -> Result<()> {
    let paths = airnet_lib::enumerate_routes(network, from, to)?;

    if paths.is_empty() {
        println!("No path exists between {} and {}", from, to);
        return Ok(());
    }

    for path in &paths {
        println!("{}", path.join(" -> "));
    }
    println!("{} path(s) found", paths.len());
    Ok(())
}

fn handle_airports(network: &Network) -> Result<()> {
    for airport in network.airports() {
        println!("- {}", airport.name);
    }
    Ok(())
}

fn handle_routes(network: &Network) -> Result<()> {
    for route in network.routes() {
        let origin = network.airport_name(route.origin).unwrap_or("<unknown>");
        let destination = network.airport_name(route.destination).unwrap_or("<unknown>");
        let direction = if route.bidirectional { "<->" } else { "->" };
        println!(
            "{} {} {} ({} km)",
            origin, direction, destination, route.distance_km
        );
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
