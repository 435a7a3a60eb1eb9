//! Metrics collection for the simulation.
//!
//! The collector keeps an append-only stream of [`Snapshot`]s. Each holds
//! the model reporter (remaining food) and one agent reporter row per worm
//! (consumed food, foraging efficiency).

use std::collections::BTreeMap;

use tracing_subscriber::EnvFilter;
use wormforage_data::{round2, AgentRecord, ModelRecord, Snapshot, WormState};

use crate::grid::Grid;

/// `consumed / (steps + 1)`, rounded to two decimals.
#[must_use]
pub fn foraging_efficiency(consumed_food: u64, steps: u64) -> f64 {
    round2(consumed_food as f64 / (steps + 1) as f64)
}

/// Stream of reporter snapshots for one run.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    snapshots: Vec<Snapshot>,
}

impl MetricsCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples every reporter at the given step index.
    pub fn collect<'a>(
        &mut self,
        step: u64,
        grid: &Grid,
        worms: impl IntoIterator<Item = &'a WormState>,
    ) {
        let agents = worms
            .into_iter()
            .map(|w| AgentRecord {
                step,
                agent_id: w.id,
                consumed_food: w.consumed_food,
                foraging_efficiency: foraging_efficiency(w.consumed_food, step),
            })
            .collect();
        self.snapshots.push(Snapshot {
            model: ModelRecord {
                step,
                food: grid.get_total_food(),
            },
            agents,
        });
    }

    #[must_use]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Step index of every snapshot, in collection order.
    #[must_use]
    pub fn steps(&self) -> Vec<u64> {
        self.snapshots.iter().map(|s| s.model.step).collect()
    }

    /// The `Food` reporter over time.
    #[must_use]
    pub fn model_series(&self) -> Vec<ModelRecord> {
        self.snapshots.iter().map(|s| s.model).collect()
    }

    /// Agent rows of the most recent snapshot.
    #[must_use]
    pub fn last_agent_records(&self) -> &[AgentRecord] {
        self.snapshots
            .last()
            .map(|s| s.agents.as_slice())
            .unwrap_or(&[])
    }

    /// Agent rows keyed by step; when a step was sampled twice the later
    /// (post-step) sample wins.
    #[must_use]
    pub fn agent_table(&self) -> BTreeMap<u64, &[AgentRecord]> {
        let mut table = BTreeMap::new();
        for s in &self.snapshots {
            table.insert(s.model.step, s.agents.as_slice());
        }
        table
    }
}

/// Installs a formatted tracing subscriber honouring `RUST_LOG`, `info` by default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish(),
    )
    .ok();
}
