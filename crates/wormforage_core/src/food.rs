//! Food generation.
//!
//! Two layouts share one budget:
//!
//! - **Smoothly varying**: each new unit jumps a power-law distance away from
//!   a randomly chosen earlier unit, so food piles up around existing
//!   clusters. Larger `gamma` means shorter jumps and tighter patches;
//!   `gamma == 0` degenerates to independent uniform placement.
//! - **Multi-spot**: the budget is split evenly over the cells of 1, 2 or 4
//!   square patches at fixed positions. Integer division drops the remainder.

use std::f64::consts::{PI, SQRT_2};

use rand::Rng;
use wormforage_data::{Coord, FoodUnit};

use crate::config::{FoodLayout, SpotCount};
use crate::grid::Grid;

/// Populates `grid` with `total_food` worth of food in the given layout.
pub fn generate<R: Rng>(grid: &mut Grid, total_food: u64, layout: FoodLayout, rng: &mut R) {
    match layout {
        FoodLayout::Clustered { gamma } => smoothly_varying_food(grid, total_food, gamma, rng),
        FoodLayout::MultiSpot { spots } => multispot_food(grid, total_food, spots),
    }
    tracing::debug!(
        ?layout,
        requested = total_food,
        placed = grid.get_total_food(),
        units = grid.food_units().len(),
        "Food generated"
    );
}

/// Longest jump allowed between a food unit and its parent.
#[must_use]
pub fn max_jump(dim: u32) -> f64 {
    f64::from(dim) / SQRT_2
}

/// Draws a jump length `U^(-1/gamma)` for `gamma > 0`.
///
/// Draws beyond [`max_jump`] are replaced by a uniform draw from
/// `(1, max_jump]`. On a grid too small for that interval to exist the bound
/// itself is returned; every jump lands back on the only cell anyway.
pub fn sample_step_length<R: Rng>(gamma: f64, dim: u32, rng: &mut R) -> f64 {
    let bound = max_jump(dim);
    let u: f64 = rng.gen();
    let d = u.powf(-1.0 / gamma);
    if d > 1.0 && d <= bound {
        return d;
    }
    if bound <= 1.0 {
        return bound;
    }
    let v: f64 = rng.gen();
    bound - (bound - 1.0) * v
}

fn random_coord<R: Rng>(dim: u32, rng: &mut R) -> Coord {
    Coord::new(rng.gen_range(0..dim), rng.gen_range(0..dim))
}

/// Places `total_food` unit-quantity food items with power-law clustering.
pub fn smoothly_varying_food<R: Rng>(grid: &mut Grid, total_food: u64, gamma: f64, rng: &mut R) {
    let dim = grid.dim();
    if gamma <= 0.0 {
        for _ in 0..total_food {
            let c = random_coord(dim, rng);
            grid.place_food(c, FoodUnit::new(c));
        }
        return;
    }
    if total_food == 0 {
        return;
    }

    let mut placed: Vec<Coord> = Vec::with_capacity(total_food as usize);
    let seed = random_coord(dim, rng);
    grid.place_food(seed, FoodUnit::new(seed));
    placed.push(seed);

    for _ in 1..total_food {
        let d = sample_step_length(gamma, dim, rng);
        let start = placed[rng.gen_range(0..placed.len())];
        let angle = rng.gen_range(0.0..2.0 * PI);
        let dx = (d * angle.cos()).round() as i64;
        let dy = (d * angle.sin()).round() as i64;
        let c = start.offset_wrapped(dx, dy, dim);
        grid.place_food(c, FoodUnit::new(c));
        placed.push(c);
    }
}

/// Patch centers and their shared radius for a multi-spot layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotLayout {
    pub centers: Vec<Coord>,
    pub radius: u32,
}

fn round_half_even(v: f64) -> i64 {
    v.round_ties_even() as i64
}

impl SpotLayout {
    /// Symmetric patch arrangement for a grid of side `dim`.
    ///
    /// One spot sits in the middle with radius `dim/6`, two spots sit on the
    /// main diagonal with radius `dim/8`, four spots sit at the quadrant
    /// centers with radius `dim/12`. Halves round to even.
    #[must_use]
    pub fn for_grid(grid: &Grid, spots: SpotCount) -> Self {
        let dim = f64::from(grid.dim());
        let at = |fx: f64, fy: f64| grid.wrap(round_half_even(fx), round_half_even(fy));
        let q = dim / 4.0;
        let (centers, radius) = match spots {
            SpotCount::One => (vec![at(dim / 2.0, dim / 2.0)], dim / 6.0),
            SpotCount::Two => (vec![at(q, q), at(3.0 * q, 3.0 * q)], dim / 8.0),
            SpotCount::Four => (
                vec![
                    at(q, q),
                    at(3.0 * q, q),
                    at(q, 3.0 * q),
                    at(3.0 * q, 3.0 * q),
                ],
                dim / 12.0,
            ),
        };
        Self {
            centers,
            radius: round_half_even(radius) as u32,
        }
    }

    /// Cells covered by the patch around `center`.
    #[must_use]
    pub fn patch(&self, grid: &Grid, center: Coord) -> Vec<Coord> {
        grid.get_neighborhood(center, true, true, self.radius)
    }
}

/// Splits `total_food` evenly over the cells of each spot.
pub fn multispot_food(grid: &mut Grid, total_food: u64, spots: SpotCount) {
    let layout = SpotLayout::for_grid(grid, spots);
    let per_spot = total_food / u64::from(spots.get());
    for &center in &layout.centers {
        let cells = layout.patch(grid, center);
        let per_cell = per_spot / cells.len() as u64;
        let quantity = u32::try_from(per_cell).unwrap_or(u32::MAX);
        for c in cells {
            grid.place_food(c, FoodUnit::with_quantity(c, quantity));
        }
    }
}
