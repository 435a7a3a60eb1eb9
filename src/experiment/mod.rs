//! Batch experiments: repeated seeded runs, parameter sweeps and export.

pub mod config;
pub mod runner;

use std::path::Path;

use anyhow::Context;
use wormforage_io::{write_frequencies_csv, write_summary_csv, ExperimentFiles, RunManifest};

pub use config::{ClusteringSweep, Condition, ExperimentConfig, SpotSweep, WorldSettings};
pub use runner::{
    clustering_sweep, mean_std, run_point, run_single, run_until_depleted, spot_sweep, RunOutcome,
    SweepResult,
};

/// Writes the summary table, the distribution table and the manifest of a
/// finished sweep into `dir`.
pub fn export_sweep<P: AsRef<Path>>(
    result: &SweepResult,
    config: &ExperimentConfig,
    dir: P,
) -> anyhow::Result<ExperimentFiles> {
    let files = ExperimentFiles::prepare(dir, &config.name)?;
    write_summary_csv(&result.summary, result.parameter, &files.summary)
        .with_context(|| format!("writing {}", files.summary.display()))?;
    write_frequencies_csv(&result.frequencies, result.parameter, &files.frequencies)
        .with_context(|| format!("writing {}", files.frequencies.display()))?;

    let manifest = RunManifest::new(
        &config.name,
        result.parameter,
        config.base_seed,
        config.runs_per_point,
        config.fingerprint(),
        result.summary.clone(),
    );
    manifest
        .save(&files.manifest)
        .with_context(|| format!("writing {}", files.manifest.display()))?;
    Ok(files)
}
