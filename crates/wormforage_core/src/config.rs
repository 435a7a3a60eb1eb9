//! Configuration of a single simulation run.
//!
//! [`SimulationConfig`] is the immutable bundle a [`crate::simulation::Simulation`]
//! is built from. Every field is required: defaults belong to whoever drives
//! the runs, not to the engine.
//!
//! ## Example `run.toml`
//!
//! ```toml
//! n_agents = 40
//! n_food = 12250
//! clustering = 1.5
//! dim_grid = 35
//! social = true
//! multispot = false
//! num_spots = 1
//! clustered = false
//! strain_specific = false
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Parameters fixed for the lifetime of one simulation run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Number of worms.
    pub n_agents: usize,
    /// Total food budget shared by both food layouts.
    pub n_food: u64,
    /// Power-law clustering exponent `gamma` for the smoothly-varying layout.
    pub clustering: f64,
    /// Side length of the square torus.
    pub dim_grid: u32,
    pub social: bool,
    /// Use the multi-spot layout instead of the smoothly-varying one.
    pub multispot: bool,
    pub num_spots: u32,
    /// Start the worms in a tight cluster instead of spreading them out.
    pub clustered: bool,
    pub strain_specific: bool,
}

/// Number of food patches in the multi-spot layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpotCount {
    One,
    Two,
    Four,
}

impl SpotCount {
    #[must_use]
    pub fn get(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
        }
    }
}

impl TryFrom<u32> for SpotCount {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            other => Err(ConfigError::UnsupportedSpotCount(other)),
        }
    }
}

/// Food distribution selected by a configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FoodLayout {
    /// Power-law clustering with exponent `gamma` (0 means uniform).
    Clustered { gamma: f64 },
    MultiSpot { spots: SpotCount },
}

/// Initial agent placement selected by a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStrategy {
    Uniform,
    /// Tight cluster; biased toward a fixed corner when food is multi-spot.
    Clustered { hotspot: Option<SpotCount> },
}

impl SimulationConfig {
    /// Checks every parameter that can be rejected without touching a grid.
    ///
    /// Agent-count limits depend on neighborhood geometry and are checked
    /// during placement.
    pub fn validate(&self) -> Result<()> {
        if self.dim_grid == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if !self.clustering.is_finite() || self.clustering < 0.0 {
            return Err(ConfigError::InvalidGamma(self.clustering));
        }
        if self.multispot {
            SpotCount::try_from(self.num_spots)?;
        }
        Ok(())
    }

    /// Resolves the food layout, failing on an unsupported spot count.
    pub fn food_layout(&self) -> Result<FoodLayout> {
        if self.multispot {
            Ok(FoodLayout::MultiSpot {
                spots: SpotCount::try_from(self.num_spots)?,
            })
        } else {
            Ok(FoodLayout::Clustered {
                gamma: self.clustering,
            })
        }
    }

    /// Resolves the placement strategy, failing on an unsupported spot count.
    pub fn placement(&self) -> Result<PlacementStrategy> {
        if !self.clustered {
            return Ok(PlacementStrategy::Uniform);
        }
        let hotspot = if self.multispot {
            Some(SpotCount::try_from(self.num_spots)?)
        } else {
            None
        };
        Ok(PlacementStrategy::Clustered { hotspot })
    }

    /// Parses and validates a configuration from TOML.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable hash of every parameter, used to tag exported results.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{self:?}").as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SimulationConfig {
        SimulationConfig {
            n_agents: 10,
            n_food: 100,
            clustering: 1.0,
            dim_grid: 20,
            social: false,
            multispot: false,
            num_spots: 1,
            clustered: false,
            strain_specific: false,
        }
    }

    #[test]
    fn test_base_config_validates() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn test_zero_grid_rejected() {
        let config = SimulationConfig {
            dim_grid: 0,
            ..base()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyGrid));
    }

    #[test]
    fn test_negative_gamma_rejected() {
        let config = SimulationConfig {
            clustering: -0.5,
            ..base()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidGamma(_))));
    }

    #[test]
    fn test_three_spots_rejected_only_in_multispot_mode() {
        let config = SimulationConfig {
            num_spots: 3,
            ..base()
        };
        assert!(config.validate().is_ok());

        let config = SimulationConfig {
            multispot: true,
            ..config
        };
        assert_eq!(config.validate(), Err(ConfigError::UnsupportedSpotCount(3)));
        assert!(config.food_layout().is_err());
    }

    #[test]
    fn test_placement_hotspot_follows_multispot() {
        let config = SimulationConfig {
            clustered: true,
            multispot: true,
            num_spots: 4,
            ..base()
        };
        assert_eq!(
            config.placement(),
            Ok(PlacementStrategy::Clustered {
                hotspot: Some(SpotCount::Four)
            })
        );
    }

    #[test]
    fn test_from_toml_requires_every_field() {
        let partial = "n_agents = 5\nn_food = 10\n";
        assert!(SimulationConfig::from_toml(partial).is_err());

        let full = r#"
            n_agents = 5
            n_food = 10
            clustering = 0.0
            dim_grid = 8
            social = true
            multispot = true
            num_spots = 2
            clustered = false
            strain_specific = true
        "#;
        let config = SimulationConfig::from_toml(full).unwrap();
        assert_eq!(config.num_spots, 2);
        assert!(config.social);
    }

    #[test]
    fn test_fingerprint_tracks_parameters() {
        let a = base();
        let b = SimulationConfig {
            clustering: 2.0,
            ..base()
        };
        assert_eq!(a.fingerprint(), base().fingerprint());
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
