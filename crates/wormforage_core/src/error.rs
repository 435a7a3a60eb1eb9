//! Error types for simulation construction.
//!
//! Every variant is fatal: construction stops and no partially built
//! simulation is handed back.

use thiserror::Error;

/// Reasons a simulation configuration cannot be turned into a run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Multi-spot layouts exist only for 1, 2 or 4 spots.
    #[error("unsupported spot count {0} (expected 1, 2 or 4)")]
    UnsupportedSpotCount(u32),

    /// Uniform placement ran out of distinct grid cells.
    #[error("cannot place {requested} agents on a grid of {available} cells")]
    TooManyAgents { requested: usize, available: usize },

    /// Clustered placement ran out of distinct cells inside the cluster.
    #[error("cluster of radius {radius} holds {available} cells, {requested} agents requested")]
    ClusterTooSmall {
        requested: usize,
        available: usize,
        radius: u32,
    },

    /// Grid side must be at least one cell.
    #[error("grid dimension must be positive")]
    EmptyGrid,

    /// Clustering exponent must be a finite, non-negative number.
    #[error("clustering exponent must be finite and >= 0, got {0}")]
    InvalidGamma(f64),
}

/// Result type alias for simulation construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::UnsupportedSpotCount(3);
        assert_eq!(err.to_string(), "unsupported spot count 3 (expected 1, 2 or 4)");
    }

    #[test]
    fn test_cluster_error_mentions_radius() {
        let err = ConfigError::ClusterTooSmall {
            requested: 30,
            available: 25,
            radius: 2,
        };
        assert!(err.to_string().contains("radius 2"));
    }
}
