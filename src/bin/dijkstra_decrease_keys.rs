use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use env_logger::Env;
use indexed_paths::{
    monte_carlo::{self, write_results, SimulationConfig, SimulationError},
    utility::get_progressbar_long_jobs,
};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

/// Counts the decrease key operations of Dijkstra's algorithm on random
/// complete graphs, once with an indexed priority queue and once with plain
/// re-insertion, and saves average and maximum per graph size as `(n, value)`
/// coordinates.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of vertices, graphs with 1..=N vertices are simulated
    #[arg(
        value_name = "N",
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_vertices: u32,
    /// A graph with n vertices is simulated max(M * n, min-simulations) times
    #[arg(
        value_name = "M",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    multiplier: u64,
    /// Lower bound for the number of simulations per graph size
    #[arg(long, default_value_t = 2000)]
    min_simulations: u64,
    /// Directory the coordinate files are written to
    #[arg(short, long, default_value = "results")]
    output: PathBuf,
    /// Seed for the random weights, a random one is used if omitted
    #[arg(short, long)]
    seed: Option<u64>,
}

/// Runs the simulation and writes the results, returns the written paths.
fn execute(args: &Args) -> Result<Vec<PathBuf>, SimulationError> {
    let config = SimulationConfig {
        max_vertices: args.max_vertices,
        multiplier: args.multiplier,
        min_simulations: args.min_simulations,
    };
    info!("N: maximum number of vertices = {}", config.max_vertices);
    info!("M: Monte-Carlo multiplier = {}", config.multiplier);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let progress = get_progressbar_long_jobs("graph sizes", config.max_vertices as u64);
    let statistics = match monte_carlo::run(&config, &mut rng, &progress) {
        Ok(statistics) => statistics,
        Err(err) => {
            progress.abandon();
            return Err(err);
        }
    };
    progress.finish_and_clear();

    write_results(&config, &statistics, &args.output)
}

fn exit_status(result: &Result<Vec<PathBuf>, SimulationError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let result = execute(&args);
    match &result {
        Ok(paths) => {
            for path in paths {
                info!("results saved to {}", path.display());
            }
        }
        // Goes to stderr directly, the log filter must not hide failures.
        Err(err) => eprintln!("error: {}", err),
    }

    ExitCode::from(exit_status(&result))
}
