use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use wormforage_core::init_logging;
use wormforage_lib::experiment::{self, Condition, ExperimentConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Experiment to run
    #[arg(short, long, value_enum, default_value = "clustering")]
    sweep: Sweep,

    /// Experiment config file path; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the exported tables
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base name of the exported files
    #[arg(short, long)]
    name: Option<String>,

    /// Base seed for all runs
    #[arg(long)]
    seed: Option<u64>,

    /// Runs per sweep point
    #[arg(long)]
    runs: Option<usize>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Sweep {
    /// Time to depletion across clustering exponents
    Clustering,
    /// Time to depletion across multi-spot patch counts
    Spots,
    /// One run of the first condition, printed as JSON
    Single,
}

fn load_config(args: &Args) -> Result<ExperimentConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            ExperimentConfig::from_toml(&content)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => ExperimentConfig::default(),
    };
    if let Some(name) = &args.name {
        config.name = name.clone();
    }
    if let Some(seed) = args.seed {
        config.base_seed = seed;
    }
    if let Some(runs) = args.runs {
        config.runs_per_point = runs;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let config = load_config(&args)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));

    tracing::info!(
        name = %config.name,
        seed = config.base_seed,
        runs = config.runs_per_point,
        sweep = ?args.sweep,
        "Starting experiment"
    );

    let result = match args.sweep {
        Sweep::Clustering => experiment::clustering_sweep(&config)?,
        Sweep::Spots => experiment::spot_sweep(&config)?,
        Sweep::Single => {
            let condition = config.conditions.first().copied().unwrap_or(Condition {
                social: false,
                strain_specific: false,
            });
            let gamma = config.clustering.gammas.first().copied().unwrap_or(0.0);
            let outcome = experiment::run_single(
                config.clustering_run(condition, gamma),
                config.base_seed,
                0,
                config.depletion_fraction,
                config.max_steps,
            )?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            return Ok(());
        }
    };

    let files = experiment::export_sweep(&result, &config, &output)?;
    tracing::info!(
        summary = %files.summary.display(),
        frequencies = %files.frequencies.display(),
        "Experiment finished"
    );
    Ok(())
}
