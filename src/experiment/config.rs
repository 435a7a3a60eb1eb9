//! Configuration for batch experiments.
//!
//! This is where the defaults of the published experiments live; the
//! simulation core itself takes no defaults.
//!
//! ## Example `experiment.toml`
//!
//! ```toml
//! name = "food_clustering"
//! runs_per_point = 10
//! base_seed = 42
//!
//! [world]
//! dim_grid = 35
//! n_food = 12250
//!
//! [clustering]
//! n_agents = 40
//! gammas = [0.0, 1.0, 2.0, 3.0]
//!
//! [[conditions]]
//! social = true
//! strain_specific = true
//! ```

use serde::{Deserialize, Serialize};
use wormforage_core::SimulationConfig;

const DEFAULT_GRID: u32 = 35;

/// Grid and food settings shared by every sweep.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldSettings {
    pub dim_grid: u32,
    pub n_food: u64,
    /// Start worms in a tight cluster.
    pub clustered_start: bool,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            dim_grid: DEFAULT_GRID,
            n_food: u64::from(DEFAULT_GRID * DEFAULT_GRID) * 10,
            clustered_start: false,
        }
    }
}

/// Sweep over the food clustering exponent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClusteringSweep {
    pub n_agents: usize,
    pub gammas: Vec<f64>,
}

impl Default for ClusteringSweep {
    fn default() -> Self {
        Self {
            n_agents: 40,
            gammas: vec![0.0, 1.0, 2.0, 3.0],
        }
    }
}

/// Sweep over the number of multi-spot patches.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SpotSweep {
    pub n_agents: usize,
    pub spot_counts: Vec<u32>,
}

impl Default for SpotSweep {
    fn default() -> Self {
        Self {
            n_agents: 35,
            spot_counts: vec![1, 2, 4],
        }
    }
}

/// One behavioral condition compared in a sweep.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub social: bool,
    pub strain_specific: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Base name of the exported files.
    pub name: String,
    pub output_dir: String,
    /// Independent runs per condition and parameter value.
    pub runs_per_point: usize,
    pub base_seed: u64,
    /// A run ends once remaining food drops below this share of the start.
    pub depletion_fraction: f64,
    /// Hard stop for runs whose worms never deplete the food.
    pub max_steps: u64,
    pub world: WorldSettings,
    pub clustering: ClusteringSweep,
    pub spots: SpotSweep,
    pub conditions: Vec<Condition>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            name: "food_clustering".to_string(),
            output_dir: "CSV".to_string(),
            runs_per_point: 10,
            base_seed: 42,
            depletion_fraction: 0.1,
            max_steps: 200_000,
            world: WorldSettings::default(),
            clustering: ClusteringSweep::default(),
            spots: SpotSweep::default(),
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
        }
    }
}

impl ExperimentConfig {
    /// Validates all experiment parameters.
    ///
    /// Spot counts and agent limits are left to the simulation core, which
    /// reports them as configuration errors when a run is built.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.name.trim().is_empty(), "Experiment name must not be empty");
        anyhow::ensure!(self.runs_per_point > 0, "Runs per point must be positive");
        anyhow::ensure!(
            self.depletion_fraction > 0.0 && self.depletion_fraction <= 1.0,
            "Depletion fraction must be in (0.0, 1.0]"
        );
        anyhow::ensure!(self.max_steps > 0, "Max steps must be positive");
        anyhow::ensure!(self.world.dim_grid > 0, "Grid dimension must be positive");
        anyhow::ensure!(
            self.world.dim_grid <= 1000,
            "Grid dimension too large (max 1000)"
        );
        anyhow::ensure!(
            !self.conditions.is_empty(),
            "At least one condition is required"
        );
        anyhow::ensure!(
            self.clustering.gammas.iter().all(|g| g.is_finite() && *g >= 0.0),
            "Clustering exponents must be finite and non-negative"
        );
        Ok(())
    }

    /// Parses and validates an experiment configuration from TOML.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Run configuration for one point of the clustering sweep.
    #[must_use]
    pub fn clustering_run(&self, condition: Condition, gamma: f64) -> SimulationConfig {
        SimulationConfig {
            n_agents: self.clustering.n_agents,
            n_food: self.world.n_food,
            clustering: gamma,
            dim_grid: self.world.dim_grid,
            social: condition.social,
            multispot: false,
            num_spots: 1,
            clustered: self.world.clustered_start,
            strain_specific: condition.strain_specific,
        }
    }

    /// Run configuration for one point of the spot sweep.
    #[must_use]
    pub fn spot_run(&self, condition: Condition, num_spots: u32) -> SimulationConfig {
        SimulationConfig {
            n_agents: self.spots.n_agents,
            n_food: self.world.n_food,
            clustering: 1.0,
            dim_grid: self.world.dim_grid,
            social: condition.social,
            multispot: true,
            num_spots,
            clustered: self.world.clustered_start,
            strain_specific: condition.strain_specific,
        }
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.clustering).as_bytes());
        hasher.update(format!("{:?}", self.spots).as_bytes());
        hasher.update(format!("{:?}", self.conditions).as_bytes());
        hasher.update(self.base_seed.to_le_bytes());
        hasher.update(self.depletion_fraction.to_le_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = ExperimentConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.world.n_food, 12_250);
    }

    #[test]
    fn test_invalid_depletion_fraction() {
        let config = ExperimentConfig {
            depletion_fraction: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_runs_rejected() {
        let config = ExperimentConfig {
            runs_per_point: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_gamma_rejected() {
        let config = ExperimentConfig {
            clustering: ClusteringSweep {
                gammas: vec![1.0, -1.0],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ExperimentConfig::from_toml(
            r#"
            name = "spots"
            runs_per_point = 3

            [world]
            dim_grid = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.runs_per_point, 3);
        assert_eq!(config.world.dim_grid, 20);
        assert_eq!(config.world.n_food, 12_250);
        assert_eq!(config.spots.spot_counts, vec![1, 2, 4]);
    }

    #[test]
    fn test_spot_run_uses_swept_count() {
        let config = ExperimentConfig::default();
        let cond = config.conditions[0];
        let run = config.spot_run(cond, 4);
        assert!(run.multispot);
        assert_eq!(run.num_spots, 4);
        assert_eq!(run.n_agents, 35);
    }

    #[test]
    fn test_fingerprint_consistency() {
        let a = ExperimentConfig::default();
        let b = ExperimentConfig::default();
        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}
