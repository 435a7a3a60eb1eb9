//! Movement primitives shared by the foraging strategies.

use rand::seq::SliceRandom;
use rand::Rng;
use wormforage_data::Coord;

use crate::grid::Grid;

/// One move of at most `speed` cells per axis toward `target`, along the
/// shorter way round the torus.
#[must_use]
pub fn step_toward(from: Coord, target: Coord, dim: u32, speed: u32) -> Coord {
    let (dx, dy) = from.toroidal_delta(target, dim);
    let s = i64::from(speed);
    from.offset_wrapped(dx.clamp(-s, s), dy.clamp(-s, s), dim)
}

/// Uniformly random cell within `speed` of `from`, never `from` itself.
///
/// Stays put on a grid with a single cell.
pub fn random_step<R: Rng>(grid: &Grid, from: Coord, speed: u32, rng: &mut R) -> Coord {
    grid.get_neighborhood(from, true, false, speed.max(1))
        .choose(rng)
        .copied()
        .unwrap_or(from)
}

/// Neighboring cell holding the most food, if any holds food at all.
///
/// Ties go to the cell met first in neighborhood order.
#[must_use]
pub fn richest_cell(grid: &Grid, from: Coord, radius: u32) -> Option<Coord> {
    let mut best: Option<(Coord, u64)> = None;
    for c in grid.get_neighborhood(from, true, false, radius) {
        let food = grid.food_at(c);
        if food > 0 && best.map_or(true, |(_, f)| food > f) {
            best = Some((c, food));
        }
    }
    best.map(|(c, _)| c)
}

/// Adjacent cell with the most worms on it, if any is occupied.
#[must_use]
pub fn busiest_neighbor(grid: &Grid, from: Coord) -> Option<Coord> {
    let mut best: Option<(Coord, usize)> = None;
    for c in grid.get_neighborhood(from, true, false, 1) {
        let worms = grid.worm_count_at(c);
        if worms > 0 && best.map_or(true, |(_, w)| worms > w) {
            best = Some((c, worms));
        }
    }
    best.map(|(c, _)| c)
}
