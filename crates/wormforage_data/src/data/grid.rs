use serde::{Deserialize, Serialize};

use super::food::FoodId;
use super::worm::WormId;

/// Integer cell coordinate on the toroidal grid.
///
/// Coordinates handed out by the grid are always normalised into
/// `0..dim_grid` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Wraps a signed offset from `self` back onto a torus of side `dim`.
    #[must_use]
    pub fn offset_wrapped(self, dx: i64, dy: i64, dim: u32) -> Self {
        let d = i64::from(dim);
        Self {
            x: (i64::from(self.x) + dx).rem_euclid(d) as u32,
            y: (i64::from(self.y) + dy).rem_euclid(d) as u32,
        }
    }

    /// Shortest signed displacement from `self` to `other` on a torus of side `dim`.
    #[must_use]
    pub fn toroidal_delta(self, other: Coord, dim: u32) -> (i64, i64) {
        let d = i64::from(dim);
        let wrap = |a: u32, b: u32| {
            let raw = (i64::from(b) - i64::from(a)).rem_euclid(d);
            if raw > d / 2 {
                raw - d
            } else {
                raw
            }
        };
        (wrap(self.x, other.x), wrap(self.y, other.y))
    }

    /// Euclidean distance along the shortest toroidal path.
    #[must_use]
    pub fn toroidal_distance(self, other: Coord, dim: u32) -> f64 {
        let (dx, dy) = self.toroidal_delta(other, dim);
        ((dx * dx + dy * dy) as f64).sqrt()
    }
}

impl From<(u32, u32)> for Coord {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Anything that can sit in a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    Worm(WormId),
    Food(FoodId),
}
