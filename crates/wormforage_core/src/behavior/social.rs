//! Social foragers: drift toward other worms when nothing edible is sensed.

use rand::Rng;
use serde::{Deserialize, Serialize};
use wormforage_data::{BehaviorKind, Coord, WormState};

use super::{movement, BehaviorParams, Forager};
use crate::grid::Grid;

/// Aggregating wander shared by both social strategies.
fn aggregate<R: Rng>(params: BehaviorParams, worm: &WormState, grid: &Grid, rng: &mut R) -> Coord {
    if rng.gen_bool(params.aggregation) {
        if let Some(crowd) = movement::busiest_neighbor(grid, worm.pos) {
            return crowd;
        }
    }
    movement::random_step(grid, worm.pos, params.speed, rng)
}

/// Generic social worm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social;

impl Forager for Social {
    fn params(&self) -> BehaviorParams {
        BehaviorParams {
            sense_probability: 1.0,
            sensing_radius: 1,
            speed: 1,
            aggregation: 0.5,
        }
    }

    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Social
    }

    fn wander<R: Rng>(&self, worm: &WormState, grid: &Grid, rng: &mut R) -> Coord {
        aggregate(self.params(), worm, grid, rng)
    }
}

/// npr-1-like social worm: rarely samples, moves fast, clumps strongly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrainSocial;

impl Forager for StrainSocial {
    fn params(&self) -> BehaviorParams {
        BehaviorParams {
            sense_probability: 0.35,
            sensing_radius: 2,
            speed: 2,
            aggregation: 0.7,
        }
    }

    fn kind(&self) -> BehaviorKind {
        BehaviorKind::StrainSocial
    }

    fn wander<R: Rng>(&self, worm: &WormState, grid: &Grid, rng: &mut R) -> Coord {
        aggregate(self.params(), worm, grid, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use wormforage_data::WormId;

    #[test]
    fn test_social_worm_joins_neighbor_when_aggregating() {
        let mut grid = Grid::new(10).unwrap();
        let here = Coord::new(5, 5);
        let crowd = Coord::new(4, 5);
        grid.place_agent(WormId(1), crowd);
        grid.place_agent(WormId(2), crowd);
        let worm = WormState::new(WormId(0), here, BehaviorKind::Social);
        grid.place_agent(worm.id, here);

        let params = BehaviorParams {
            aggregation: 1.0,
            ..Social.params()
        };
        let mut rng = create_rng(11);
        assert_eq!(aggregate(params, &worm, &grid, &mut rng), crowd);
    }

    #[test]
    fn test_strain_social_moves_up_to_two_cells() {
        let grid = Grid::new(20).unwrap();
        let worm = WormState::new(WormId(0), Coord::new(10, 10), BehaviorKind::StrainSocial);
        let mut rng = create_rng(12);
        for _ in 0..50 {
            let next = StrainSocial.wander(&worm, &grid, &mut rng);
            let (dx, dy) = worm.pos.toroidal_delta(next, 20);
            assert!(dx.abs() <= 2 && dy.abs() <= 2);
            assert_ne!(next, worm.pos);
        }
    }
}
