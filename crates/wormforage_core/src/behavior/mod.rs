//! Worm foraging strategies.
//!
//! Four behaviors exist: {solitary, social} x {generic, strain-specific}.
//! They share the [`Forager`] capability (consume, sense, move) and are
//! gathered in the closed [`Behavior`] enum. [`Behavior::select`] is the
//! only way a run picks one.

pub mod movement;
pub mod social;
pub mod solitary;

use rand::Rng;
use serde::{Deserialize, Serialize};
use wormforage_data::{BehaviorKind, Coord, WormState};

use crate::grid::Grid;

pub use social::{Social, StrainSocial};
pub use solitary::{Solitary, StrainSolitary};

/// Tunables distinguishing one strategy from another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorParams {
    /// Chance per activation that the worm samples its surroundings.
    pub sense_probability: f64,
    /// Chebyshev radius of the sampled surroundings.
    pub sensing_radius: u32,
    /// Maximum cells moved per axis in one activation.
    pub speed: u32,
    /// Chance that a social worm heads for the busiest adjacent cell
    /// instead of wandering.
    pub aggregation: f64,
}

/// What every foraging strategy can do.
pub trait Forager {
    fn params(&self) -> BehaviorParams;

    fn kind(&self) -> BehaviorKind;

    /// Eats one unit from the current cell. Returns whether anything was eaten.
    fn consume(&self, worm: &mut WormState, grid: &mut Grid) -> bool {
        let taken = grid.consume_food(worm.pos, 1);
        worm.consumed_food += u64::from(taken);
        taken > 0
    }

    /// Looks around for the richest cell within sensing range.
    fn sense(&self, worm: &WormState, grid: &Grid) -> Option<Coord> {
        movement::richest_cell(grid, worm.pos, self.params().sensing_radius)
    }

    /// Where to go when no food was sensed.
    fn wander<R: Rng>(&self, worm: &WormState, grid: &Grid, rng: &mut R) -> Coord {
        movement::random_step(grid, worm.pos, self.params().speed, rng)
    }

    /// One full activation: eat if possible, otherwise sense and move.
    fn activate<R: Rng>(&self, worm: &mut WormState, grid: &mut Grid, rng: &mut R) {
        worm.steps_taken += 1;
        if self.consume(worm, grid) {
            return;
        }

        let params = self.params();
        let target = if rng.gen_bool(params.sense_probability) {
            worm.sense_count += 1;
            self.sense(worm, grid)
        } else {
            None
        };

        let next = match target {
            Some(t) => movement::step_toward(worm.pos, t, grid.dim(), params.speed),
            None => self.wander(worm, grid, rng),
        };
        grid.move_agent(worm.id, worm.pos, next);
        worm.pos = next;
    }
}

/// The closed set of strategies a worm can be given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    Solitary(Solitary),
    Social(Social),
    StrainSolitary(StrainSolitary),
    StrainSocial(StrainSocial),
}

impl Behavior {
    /// Maps the experiment flags onto a strategy.
    #[must_use]
    pub fn select(social: bool, strain_specific: bool) -> Self {
        match (social, strain_specific) {
            (false, false) => Self::Solitary(Solitary),
            (true, false) => Self::Social(Social),
            (false, true) => Self::StrainSolitary(StrainSolitary),
            (true, true) => Self::StrainSocial(StrainSocial),
        }
    }

    #[must_use]
    pub fn from_kind(kind: BehaviorKind) -> Self {
        Self::select(kind.is_social(), kind.is_strain_specific())
    }

    #[must_use]
    pub fn kind(&self) -> BehaviorKind {
        match self {
            Self::Solitary(b) => b.kind(),
            Self::Social(b) => b.kind(),
            Self::StrainSolitary(b) => b.kind(),
            Self::StrainSocial(b) => b.kind(),
        }
    }

    #[must_use]
    pub fn params(&self) -> BehaviorParams {
        match self {
            Self::Solitary(b) => b.params(),
            Self::Social(b) => b.params(),
            Self::StrainSolitary(b) => b.params(),
            Self::StrainSocial(b) => b.params(),
        }
    }

    pub fn activate<R: Rng>(&self, worm: &mut WormState, grid: &mut Grid, rng: &mut R) {
        match self {
            Self::Solitary(b) => b.activate(worm, grid, rng),
            Self::Social(b) => b.activate(worm, grid, rng),
            Self::StrainSolitary(b) => b.activate(worm, grid, rng),
            Self::StrainSocial(b) => b.activate(worm, grid, rng),
        }
    }
}
