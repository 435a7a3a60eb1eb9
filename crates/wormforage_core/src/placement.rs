//! Initial worm positions.

use rand::seq::SliceRandom;
use rand::Rng;
use wormforage_data::Coord;

use crate::config::{PlacementStrategy, SpotCount};
use crate::error::{ConfigError, Result};
use crate::grid::Grid;

/// Picks `n_agents` distinct starting cells.
pub fn place<R: Rng>(
    grid: &Grid,
    n_agents: usize,
    strategy: PlacementStrategy,
    rng: &mut R,
) -> Result<Vec<Coord>> {
    match strategy {
        PlacementStrategy::Uniform => uniform_positions(grid, n_agents, rng),
        PlacementStrategy::Clustered { hotspot } => {
            clustered_positions(grid, n_agents, hotspot, rng).map(|c| c.positions)
        }
    }
}

/// Samples distinct cells from the whole grid without replacement.
pub fn uniform_positions<R: Rng>(grid: &Grid, n_agents: usize, rng: &mut R) -> Result<Vec<Coord>> {
    let cells: Vec<Coord> = grid.coord_iter().map(|(_, c)| c).collect();
    if n_agents > cells.len() {
        return Err(ConfigError::TooManyAgents {
            requested: n_agents,
            available: cells.len(),
        });
    }
    Ok(cells.choose_multiple(rng, n_agents).copied().collect())
}

/// Radius of the square cluster that holds `n_agents` worms.
#[must_use]
pub fn cluster_radius(n_agents: usize) -> u32 {
    ((n_agents as f64).sqrt() / 2.0).ceil() as u32
}

/// Where a clustered start is centred.
///
/// With multi-spot food the cluster sits away from the patches: near the
/// lower-right corner for one or two spots, in the grid middle for four.
/// Otherwise the center is drawn uniformly.
pub fn cluster_center<R: Rng>(
    grid: &Grid,
    radius: u32,
    hotspot: Option<SpotCount>,
    rng: &mut R,
) -> Coord {
    let dim = grid.dim();
    match hotspot {
        Some(SpotCount::One | SpotCount::Two) => {
            grid.wrap(i64::from(dim) - i64::from(radius) - 1, i64::from(radius))
        }
        Some(SpotCount::Four) => Coord::new(dim / 2, dim / 2),
        None => Coord::new(rng.gen_range(0..dim), rng.gen_range(0..dim)),
    }
}

/// Result of a clustered placement, keeping the sampled neighborhood around
/// for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub center: Coord,
    pub radius: u32,
    pub neighborhood: Vec<Coord>,
    pub positions: Vec<Coord>,
}

/// Samples distinct cells from a square neighborhood of radius
/// `ceil(sqrt(n)/2)` around the cluster center.
pub fn clustered_positions<R: Rng>(
    grid: &Grid,
    n_agents: usize,
    hotspot: Option<SpotCount>,
    rng: &mut R,
) -> Result<Cluster> {
    let radius = cluster_radius(n_agents);
    let center = cluster_center(grid, radius, hotspot, rng);
    let neighborhood = grid.get_neighborhood(center, true, true, radius);
    if n_agents > neighborhood.len() {
        return Err(ConfigError::ClusterTooSmall {
            requested: n_agents,
            available: neighborhood.len(),
            radius,
        });
    }
    let positions = neighborhood.choose_multiple(rng, n_agents).copied().collect();
    tracing::debug!(%center, radius, n_agents, "Clustered worm placement");
    Ok(Cluster {
        center,
        radius,
        neighborhood,
        positions,
    })
}
