//! Monte-Carlo comparison of the decrease key counts of [`dijkstra_eager`] and
//! [`dijkstra_lazy`] on random complete graphs.

use std::{
    fmt::Display,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use indicatif::ProgressBar;
use itertools::izip;
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    graphs::random_graph::{complete_graph_edges, random_complete_graph},
    search::dijkstra::{dijkstra_eager, dijkstra_lazy},
};

/// Every search starts at this vertex, it exists in every graph size.
pub const SOURCE: u32 = 0;

pub const COORDINATE_FILES: [&str; 4] = [
    "avg_decrease_keys.txt",
    "avg_decrease_keys_lazy.txt",
    "max_decrease_keys.txt",
    "max_decrease_keys_lazy.txt",
];

pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("maximum number of vertices and multiplier must be positive")]
    InvalidConfig,
    #[error("eager and lazy dijkstra disagree for {vertices} vertices in trial {trial}")]
    DistanceMismatch { vertices: u32, trial: u64 },
    #[error("unable to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to serialize the run summary: {0}")]
    Summary(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Graphs with `1..=max_vertices` vertices are simulated.
    pub max_vertices: u32,
    /// A graph with `n` vertices is simulated `multiplier * n` times...
    pub multiplier: u64,
    /// ...but at least `min_simulations` times.
    pub min_simulations: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            max_vertices: 100,
            multiplier: 10,
            min_simulations: 2000,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.max_vertices == 0 || self.multiplier == 0 {
            return Err(SimulationError::InvalidConfig);
        }
        Ok(())
    }

    pub fn number_of_simulations(&self, number_of_vertices: u32) -> u64 {
        std::cmp::max(
            self.multiplier * number_of_vertices as u64,
            self.min_simulations,
        )
    }
}

/// Decrease key counts observed for a single graph size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeStatistics {
    pub vertices: u32,
    pub simulations: u64,
    pub eager_avg: f64,
    pub lazy_avg: f64,
    pub eager_max: u64,
    pub lazy_max: u64,
}

impl SizeStatistics {
    pub fn new(vertices: u32, simulations: u64) -> Self {
        SizeStatistics {
            vertices,
            simulations,
            eager_avg: 0.0,
            lazy_avg: 0.0,
            eager_max: 0,
            lazy_max: 0,
        }
    }

    pub fn record(&mut self, eager_count: u64, lazy_count: u64) {
        self.eager_avg += eager_count as f64 / self.simulations as f64;
        self.lazy_avg += lazy_count as f64 / self.simulations as f64;
        self.eager_max = self.eager_max.max(eager_count);
        self.lazy_max = self.lazy_max.max(lazy_count);
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub config: SimulationConfig,
    pub statistics: Vec<SizeStatistics>,
}

/// Runs the whole simulation, one progress step per graph size.
pub fn run<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
    progress: &ProgressBar,
) -> Result<Vec<SizeStatistics>, SimulationError> {
    config.validate()?;
    info!(
        "simulating graphs with up to {} vertices, {} x n but at least {} runs per size",
        config.max_vertices, config.multiplier, config.min_simulations
    );

    (1..=config.max_vertices)
        .map(|number_of_vertices| {
            let statistics = simulate_size(
                number_of_vertices,
                config.number_of_simulations(number_of_vertices),
                rng,
            )?;
            progress.inc(1);
            Ok(statistics)
        })
        .collect()
}

/// Runs `number_of_simulations` trials on fresh random complete graphs with
/// `number_of_vertices` vertices. Each trial cross-checks both variants.
pub fn simulate_size<R: Rng + ?Sized>(
    number_of_vertices: u32,
    number_of_simulations: u64,
    rng: &mut R,
) -> Result<SizeStatistics, SimulationError> {
    let mut statistics = SizeStatistics::new(number_of_vertices, number_of_simulations);

    for trial in 0..number_of_simulations {
        let graph = random_complete_graph(number_of_vertices, rng);

        let eager = dijkstra_eager(&graph, SOURCE);
        let lazy = dijkstra_lazy(&graph, SOURCE);
        if eager.distances != lazy.distances {
            return Err(SimulationError::DistanceMismatch {
                vertices: number_of_vertices,
                trial,
            });
        }

        statistics.record(eager.decrease_key_count, lazy.decrease_key_count);
    }

    debug!(
        "n = {} ({} edges): avg {:.3} / {:.3}, max {} / {} decrease keys (eager / lazy)",
        number_of_vertices,
        complete_graph_edges(number_of_vertices),
        statistics.eager_avg,
        statistics.lazy_avg,
        statistics.eager_max,
        statistics.lazy_max
    );

    Ok(statistics)
}

pub fn format_coordinate(x: impl Display, y: impl Display) -> String {
    format!("({}, {})", x, y)
}

/// Writes one coordinate file per statistic and a json summary into
/// `directory`, creating it if needed. Returns the written paths.
pub fn write_results(
    config: &SimulationConfig,
    statistics: &[SizeStatistics],
    directory: &Path,
) -> Result<Vec<PathBuf>, SimulationError> {
    fs::create_dir_all(directory).map_err(|source| SimulationError::Io {
        path: directory.to_path_buf(),
        source,
    })?;

    let paths: Vec<PathBuf> = COORDINATE_FILES
        .iter()
        .map(|file_name| directory.join(file_name))
        .collect();
    let mut writers = paths
        .iter()
        .map(|path| create_writer(path))
        .collect::<Result<Vec<_>, _>>()?;

    for size in statistics {
        let values = [
            size.eager_avg.to_string(),
            size.lazy_avg.to_string(),
            size.eager_max.to_string(),
            size.lazy_max.to_string(),
        ];

        for (path, writer, value) in izip!(&paths, &mut writers, values) {
            writeln!(writer, "{}", format_coordinate(size.vertices, value))
                .map_err(|source| io_error(path, source))?;
        }
    }

    for (path, writer) in paths.iter().zip(writers.iter_mut()) {
        writer.flush().map_err(|source| io_error(path, source))?;
    }

    let summary_path = directory.join(SUMMARY_FILE);
    let summary = RunSummary {
        config: config.clone(),
        statistics: statistics.to_vec(),
    };
    let mut writer = create_writer(&summary_path)?;
    serde_json::to_writer_pretty(&mut writer, &summary)?;
    writer
        .flush()
        .map_err(|source| io_error(&summary_path, source))?;

    Ok(paths.into_iter().chain(Some(summary_path)).collect())
}

fn create_writer(path: &Path) -> Result<BufWriter<File>, SimulationError> {
    let file = File::create(path).map_err(|source| io_error(path, source))?;
    Ok(BufWriter::new(file))
}

fn io_error(path: &Path, source: io::Error) -> SimulationError {
    SimulationError::Io {
        path: path.to_path_buf(),
        source,
    }
}
