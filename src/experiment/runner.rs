//! Repeated runs and parameter sweeps.
//!
//! Runs of one sweep point execute in parallel, each with its own generator
//! derived from the base seed and a global run index.

use anyhow::Context;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use wormforage_core::rng::derive_run_rng;
use wormforage_core::{Simulation, SimulationConfig};
use wormforage_data::{AgentRecord, ForagingData, FrequencyRow, SummaryRow, SweepParameter};

use super::config::{Condition, ExperimentConfig};

/// What one run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Steps taken before the stop condition was met.
    pub steps: u64,
    /// False when the run was cut off by the step limit.
    pub depleted: bool,
    pub initial_food: u64,
    pub final_food: u64,
    /// Reporter rows of the final snapshot.
    pub last_agents: Vec<AgentRecord>,
    pub foraging: Vec<ForagingData>,
}

/// Steps `sim` while remaining food stays at or above `fraction` of the
/// initial amount, or until `max_steps`.
pub fn run_until_depleted(sim: &mut Simulation, fraction: f64, max_steps: u64) -> RunOutcome {
    let threshold = sim.initial_food() as f64 * fraction;
    let mut steps = 0;
    while sim.total_food() as f64 >= threshold && steps < max_steps {
        sim.step();
        steps += 1;
    }
    let depleted = (sim.total_food() as f64) < threshold;
    if !depleted {
        tracing::warn!(
            steps,
            food = sim.total_food(),
            initial = sim.initial_food(),
            "Run hit the step limit before depleting its food"
        );
    }
    RunOutcome {
        steps,
        depleted,
        initial_food: sim.initial_food(),
        final_food: sim.total_food(),
        last_agents: sim.metrics().last_agent_records().to_vec(),
        foraging: sim.worms().iter().map(|w| w.state.foraging_data()).collect(),
    }
}

/// Builds and runs a single seeded simulation.
pub fn run_single(
    config: SimulationConfig,
    seed_base: u64,
    run_index: u64,
    fraction: f64,
    max_steps: u64,
) -> anyhow::Result<RunOutcome> {
    let mut sim = Simulation::new(config, derive_run_rng(seed_base, run_index))
        .with_context(|| format!("building run {run_index}"))?;
    Ok(run_until_depleted(&mut sim, fraction, max_steps))
}

/// Runs `runs` independent simulations of `config` in parallel.
///
/// `first_index` offsets the run indices so that different sweep points
/// never reuse a seed.
pub fn run_point(
    config: &SimulationConfig,
    runs: usize,
    seed_base: u64,
    first_index: u64,
    fraction: f64,
    max_steps: u64,
) -> anyhow::Result<Vec<RunOutcome>> {
    (0..runs as u64)
        .into_par_iter()
        .map(|i| run_single(config.clone(), seed_base, first_index + i, fraction, max_steps))
        .collect()
}

/// Mean and population standard deviation.
#[must_use]
pub fn mean_std(values: &[u64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let var = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    (mean, var.sqrt())
}

/// Everything a sweep produced, ready for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    pub parameter: SweepParameter,
    pub summary: Vec<SummaryRow>,
    pub frequencies: Vec<FrequencyRow>,
}

fn summarize(condition: Condition, parameter: f64, outcomes: &[RunOutcome]) -> SummaryRow {
    let steps: Vec<u64> = outcomes.iter().map(|o| o.steps).collect();
    let (mean_steps, std_dev) = mean_std(&steps);
    SummaryRow {
        social: condition.social,
        strain_specific: condition.strain_specific,
        parameter,
        mean_steps,
        std_dev,
    }
}

fn run_sweep<F, G>(
    config: &ExperimentConfig,
    parameter: SweepParameter,
    points: &[f64],
    build: F,
    distribution: G,
) -> anyhow::Result<SweepResult>
where
    F: Fn(Condition, f64) -> SimulationConfig,
    G: Fn(Condition, f64, &[RunOutcome]) -> FrequencyRow,
{
    config.validate()?;
    let runs = config.runs_per_point;
    let mut summary = Vec::new();
    let mut frequencies = Vec::new();

    for (ci, &condition) in config.conditions.iter().enumerate() {
        tracing::info!(
            social = condition.social,
            strain_specific = condition.strain_specific,
            "Launching condition {}/{}",
            ci + 1,
            config.conditions.len()
        );
        for (pi, &point) in points.iter().enumerate() {
            let first_index = ((ci * points.len() + pi) * runs) as u64;
            let outcomes = run_point(
                &build(condition, point),
                runs,
                config.base_seed,
                first_index,
                config.depletion_fraction,
                config.max_steps,
            )
            .with_context(|| format!("{} = {point}", parameter.label()))?;

            let row = summarize(condition, point, &outcomes);
            tracing::info!(
                parameter = parameter.label(),
                value = point,
                mean_steps = row.mean_steps,
                std_dev = row.std_dev,
                "Sweep point finished"
            );
            summary.push(row);
            frequencies.push(distribution(condition, point, &outcomes));
        }
    }

    Ok(SweepResult {
        parameter,
        summary,
        frequencies,
    })
}

/// Time to depletion across clustering exponents.
///
/// The distribution row holds the foraging efficiency and consumed food of
/// every worm in the last run of each point.
pub fn clustering_sweep(config: &ExperimentConfig) -> anyhow::Result<SweepResult> {
    run_sweep(
        config,
        SweepParameter::Gamma,
        &config.clustering.gammas,
        |condition, gamma| config.clustering_run(condition, gamma),
        |condition, gamma, outcomes| {
            let last = outcomes.last().map(|o| o.last_agents.as_slice()).unwrap_or(&[]);
            FrequencyRow {
                parameter: gamma,
                social: condition.social,
                sense_frequency: last.iter().map(|a| a.foraging_efficiency).collect(),
                food_consumption: last.iter().map(|a| a.consumed_food).collect(),
            }
        },
    )
}

/// Time to depletion across multi-spot patch counts.
///
/// The distribution row holds the sense frequency and consumed food of every
/// worm over all runs of each point.
pub fn spot_sweep(config: &ExperimentConfig) -> anyhow::Result<SweepResult> {
    let points: Vec<f64> = config.spots.spot_counts.iter().map(|&s| f64::from(s)).collect();
    run_sweep(
        config,
        SweepParameter::Spots,
        &points,
        |condition, spots| config.spot_run(condition, spots as u32),
        |condition, spots, outcomes| {
            let worms = outcomes.iter().flat_map(|o| o.foraging.iter());
            let (sense_frequency, food_consumption) = worms
                .map(|f| (f.sense_frequency(), f.consumed_food))
                .unzip();
            FrequencyRow {
                parameter: spots,
                social: condition.social,
                sense_frequency,
                food_consumption,
            }
        },
    )
}
