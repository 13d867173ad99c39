use std::{fs, path::PathBuf};

use indexed_paths::monte_carlo::{
    run, write_results, SimulationConfig, SimulationError, COORDINATE_FILES, SUMMARY_FILE,
};
use indicatif::ProgressBar;
use rand::{rngs::StdRng, SeedableRng};

fn init_test() {
    drop(env_logger::try_init());
}

fn scratch_directory(name: &str) -> PathBuf {
    let directory = std::env::temp_dir()
        .join("indexed_paths_tests")
        .join(format!("{}_{}", name, std::process::id()));
    drop(fs::remove_dir_all(&directory));
    directory
}

fn small_config() -> SimulationConfig {
    SimulationConfig {
        max_vertices: 6,
        multiplier: 2,
        min_simulations: 5,
    }
}

#[test]
fn run_covers_every_size() {
    init_test();
    let config = small_config();
    let progress = ProgressBar::hidden();

    let statistics = run(&config, &mut StdRng::seed_from_u64(3), &progress).unwrap();

    assert_eq!(statistics.len(), 6);
    assert_eq!(progress.position(), 6);
    for (index, size) in statistics.iter().enumerate() {
        let vertices = index as u32 + 1;
        assert_eq!(size.vertices, vertices);
        assert_eq!(size.simulations, config.number_of_simulations(vertices));

        // Every vertex but the source improves at least once.
        assert!(size.eager_avg >= (vertices - 1) as f64 - 1e-9);
        assert!(size.eager_max as f64 >= size.eager_avg - 1e-9);
        assert!(size.lazy_max as f64 >= size.lazy_avg - 1e-9);
    }
}

#[test]
fn run_is_reproducible_with_a_seed() {
    let config = small_config();

    let first = run(&config, &mut StdRng::seed_from_u64(5), &ProgressBar::hidden()).unwrap();
    let second = run(&config, &mut StdRng::seed_from_u64(5), &ProgressBar::hidden()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn run_rejects_invalid_config() {
    let config = SimulationConfig {
        max_vertices: 0,
        ..small_config()
    };

    let result = run(&config, &mut StdRng::seed_from_u64(0), &ProgressBar::hidden());
    assert!(matches!(result, Err(SimulationError::InvalidConfig)));
}

#[test]
fn writes_coordinate_files() {
    init_test();
    let config = small_config();
    let statistics = run(&config, &mut StdRng::seed_from_u64(8), &ProgressBar::hidden()).unwrap();
    let directory = scratch_directory("writes_coordinate_files").join("results");

    let paths = write_results(&config, &statistics, &directory).unwrap();
    assert_eq!(paths.len(), COORDINATE_FILES.len() + 1);

    let max_eager = fs::read_to_string(directory.join("max_decrease_keys.txt")).unwrap();
    let expected: String = statistics
        .iter()
        .map(|size| format!("({}, {})\n", size.vertices, size.eager_max))
        .collect();
    assert_eq!(max_eager, expected);

    for file_name in COORDINATE_FILES {
        let content = fs::read_to_string(directory.join(file_name)).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "(1, 0)");
        assert!(lines[1].starts_with("(2, "));
    }

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(directory.join(SUMMARY_FILE)).unwrap()).unwrap();
    assert_eq!(summary["config"]["max_vertices"], 6);
    assert_eq!(summary["statistics"].as_array().map(Vec::len), Some(6));

    drop(fs::remove_dir_all(directory.parent().unwrap()));
}

#[test]
fn unwritable_output_is_an_error() {
    let directory = scratch_directory("unwritable_output_is_an_error");
    fs::create_dir_all(&directory).unwrap();

    // A regular file where the results directory should go.
    let blocked = directory.join("results");
    fs::write(&blocked, "not a directory").unwrap();

    let result = write_results(&small_config(), &[], &blocked);
    assert!(matches!(result, Err(SimulationError::Io { .. })));

    drop(fs::remove_dir_all(directory));
}
