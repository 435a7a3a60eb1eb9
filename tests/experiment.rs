use std::fs;

use wormforage_io::RunManifest;
use wormforage_lib::experiment::{
    clustering_sweep, export_sweep, spot_sweep, ClusteringSweep, Condition, ExperimentConfig,
    SpotSweep, WorldSettings,
};
use wormforage_lib::model::state::SweepParameter;

fn small_config() -> ExperimentConfig {
    ExperimentConfig {
        name: "small".to_string(),
        runs_per_point: 3,
        base_seed: 9,
        depletion_fraction: 0.5,
        max_steps: 20_000,
        world: WorldSettings {
            dim_grid: 12,
            n_food: 300,
            clustered_start: false,
        },
        clustering: ClusteringSweep {
            n_agents: 8,
            gammas: vec![0.0, 2.0],
        },
        spots: SpotSweep {
            n_agents: 8,
            spot_counts: vec![1, 4],
        },
        conditions: vec![
            Condition {
                social: true,
                strain_specific: true,
            },
            Condition {
                social: false,
                strain_specific: true,
            },
        ],
        ..Default::default()
    }
}

#[test]
fn test_clustering_sweep_shape() {
    let config = small_config();
    let result = clustering_sweep(&config).unwrap();

    assert_eq!(result.parameter, SweepParameter::Gamma);
    assert_eq!(result.summary.len(), 4);
    assert_eq!(result.frequencies.len(), 4);
    for row in &result.summary {
        assert!(row.mean_steps > 0.0);
        assert!(row.std_dev >= 0.0);
    }
    for row in &result.frequencies {
        assert_eq!(row.sense_frequency.len(), 8);
        assert_eq!(row.food_consumption.len(), 8);
    }
    assert_eq!(result.summary[0].parameter, 0.0);
    assert_eq!(result.summary[1].parameter, 2.0);
    assert!(result.summary[0].social);
    assert!(!result.summary[2].social);
}

#[test]
fn test_spot_sweep_pools_all_runs() {
    let config = small_config();
    let result = spot_sweep(&config).unwrap();

    assert_eq!(result.parameter, SweepParameter::Spots);
    let params: Vec<f64> = result.summary.iter().map(|r| r.parameter).collect();
    assert_eq!(params, vec![1.0, 4.0, 1.0, 4.0]);
    for row in &result.frequencies {
        // 8 worms over 3 runs
        assert_eq!(row.sense_frequency.len(), 24);
        assert!(row.sense_frequency.iter().all(|f| (0.0..=1.0).contains(f)));
    }
}

#[test]
fn test_sweeps_are_reproducible() {
    let config = small_config();
    let a = clustering_sweep(&config).unwrap();
    let b = clustering_sweep(&config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_export_writes_all_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config();
    let result = clustering_sweep(&config).unwrap();
    let files = export_sweep(&result, &config, dir.path().join("out")).unwrap();

    let summary = fs::read_to_string(&files.summary).unwrap();
    let mut lines = summary.lines();
    assert_eq!(
        lines.next(),
        Some("Social,Strain specific,Gamma,Mean time,Standard deviation")
    );
    assert_eq!(lines.count(), 4);
    assert!(summary.contains("True,True,0,"));

    let frequencies = fs::read_to_string(&files.frequencies).unwrap();
    assert!(frequencies.starts_with("Gamma,Social,Sense Frequency,Food consumption"));

    let manifest = RunManifest::load(&files.manifest).unwrap();
    assert_eq!(manifest.name, "small");
    assert_eq!(manifest.runs_per_point, 3);
    assert_eq!(manifest.config_fingerprint, config.fingerprint());
    assert_eq!(manifest.sweep, SweepParameter::Gamma);
    assert_eq!(manifest.summary.len(), result.summary.len());
}

#[test]
fn test_invalid_spot_count_fails_sweep() {
    let mut config = small_config();
    config.spots.spot_counts = vec![3];
    assert!(spot_sweep(&config).is_err());
}
