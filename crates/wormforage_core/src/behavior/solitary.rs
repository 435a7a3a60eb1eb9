//! Solitary foragers: wander at random until food comes into range.

use serde::{Deserialize, Serialize};
use wormforage_data::BehaviorKind;

use super::{BehaviorParams, Forager};

/// Generic solitary worm. Senses every activation, moves one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solitary;

impl Forager for Solitary {
    fn params(&self) -> BehaviorParams {
        BehaviorParams {
            sense_probability: 1.0,
            sensing_radius: 1,
            speed: 1,
            aggregation: 0.0,
        }
    }

    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Solitary
    }
}

/// N2-like solitary worm: samples less often but further out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrainSolitary;

impl Forager for StrainSolitary {
    fn params(&self) -> BehaviorParams {
        BehaviorParams {
            sense_probability: 0.6,
            sensing_radius: 2,
            speed: 1,
            aggregation: 0.0,
        }
    }

    fn kind(&self) -> BehaviorKind {
        BehaviorKind::StrainSolitary
    }
}
