use serde::{Deserialize, Serialize};

use super::grid::Coord;
use super::record::ForagingData;

/// Ordinal index of a worm within one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WormId(pub usize);

impl std::fmt::Display for WormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "worm_{}", self.0)
    }
}

/// The four foraging strategies a worm can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorKind {
    /// Generic solitary forager.
    Solitary,
    /// Generic aggregating forager.
    Social,
    /// Solitary forager with N2-like sensing and locomotion.
    StrainSolitary,
    /// Aggregating forager with npr-1-like sensing and locomotion.
    StrainSocial,
}

impl BehaviorKind {
    #[must_use]
    pub fn is_social(self) -> bool {
        matches!(self, Self::Social | Self::StrainSocial)
    }

    #[must_use]
    pub fn is_strain_specific(self) -> bool {
        matches!(self, Self::StrainSolitary | Self::StrainSocial)
    }
}

/// Mutable per-worm state. The behavior attached to `kind` is the only
/// thing that changes it after placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WormState {
    pub id: WormId,
    pub pos: Coord,
    pub kind: BehaviorKind,
    pub consumed_food: u64,
    /// Number of activations this worm has had.
    pub steps_taken: u64,
    /// Number of activations in which the worm sampled its surroundings.
    pub sense_count: u64,
}

impl WormState {
    #[must_use]
    pub fn new(id: WormId, pos: Coord, kind: BehaviorKind) -> Self {
        Self {
            id,
            pos,
            kind,
            consumed_food: 0,
            steps_taken: 0,
            sense_count: 0,
        }
    }

    #[must_use]
    pub fn foraging_data(&self) -> ForagingData {
        ForagingData {
            steps_taken: self.steps_taken,
            sense_count: self.sense_count,
            consumed_food: self.consumed_food,
        }
    }
}
