use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadroute_lib::{
    load_road_network, plan_route, CostMode, Error as LibError, RouteRequest, RouteSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Road network route planner")]
struct Cli {
    /// Starting location name.
    start: String,

    /// Destination location name.
    goal: String,

    /// Cost function to optimise.
    #[arg(value_enum)]
    cost: CostArg,

    /// Path to the road segment dataset.
    #[arg(long, default_value = "road-segments.txt")]
    segments: PathBuf,

    /// Path to the location coordinate dataset.
    #[arg(long, default_value = "city-gps.txt")]
    coordinates: PathBuf,

    /// Emit the itinerary as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CostArg {
    Segments,
    Distance,
    Time,
    Delivery,
}

impl From<CostArg> for CostMode {
    fn from(value: CostArg) -> Self {
        match value {
            CostArg::Segments => CostMode::Segments,
            CostArg::Distance => CostMode::Distance,
            CostArg::Time => CostMode::Time,
            CostArg::Delivery => CostMode::Delivery,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    handle_route(
        &cli.segments,
        &cli.coordinates,
        &cli.start,
        &cli.goal,
        cli.cost.into(),
        cli.json,
    )
}

fn handle_route(
    segments: &Path,
    coordinates: &Path,
    start: &str,
    goal: &str,
    mode: CostMode,
    json: bool,
) -> Result<()> {
    let network = load_road_network(segments, coordinates).with_context(|| {
        format!(
            "failed to load datasets from {} and {}",
            segments.display(),
            coordinates.display()
        )
    })?;

    let request = RouteRequest::new(start, goal, mode);
    match plan_route(&network, &request) {
        Ok(route) => {
            let summary = RouteSummary::from_route(&network, &route);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", summary.render_plain());
            }
            Ok(())
        }
        Err(LibError::RouteNotFound { start, goal }) => {
            eprintln!("No route exists between {start} and {goal}.");
            std::process::exit(1);
        }
        Err(err) => Err(err).context("route planning failed"),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
