//! Toroidal grid holding worms and food.
//!
//! Cells are stored in a flat `Vec` indexed by `y * dim + x`, so every
//! occupied cell is reachable by coordinate in O(1). Worms are referenced by
//! [`WormId`]; the worm state itself lives with the simulation. Food units
//! live in an append-only arena owned by the grid.

use std::collections::HashSet;

use wormforage_data::{Coord, FoodId, FoodUnit, Occupant, WormId};

use crate::error::{ConfigError, Result};

/// Contents of a single cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub worms: Vec<WormId>,
    pub food: Vec<FoodId>,
}

impl Cell {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.worms.is_empty() && self.food.is_empty()
    }
}

/// Square grid whose edges wrap on both axes.
#[derive(Debug, Clone)]
pub struct Grid {
    dim: u32,
    cells: Vec<Cell>,
    food: Vec<FoodUnit>,
    total_food: u64,
}

impl Grid {
    /// Creates an empty torus of side `dim`.
    pub fn new(dim: u32) -> Result<Self> {
        if dim == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let n = dim as usize * dim as usize;
        Ok(Self {
            dim,
            cells: vec![Cell::default(); n],
            food: Vec::new(),
            total_food: 0,
        })
    }

    #[must_use]
    pub fn dim(&self) -> u32 {
        self.dim
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn index(&self, c: Coord) -> usize {
        debug_assert!(c.x < self.dim && c.y < self.dim, "coordinate {c} off grid");
        c.y as usize * self.dim as usize + c.x as usize
    }

    /// Maps any signed coordinate onto the torus.
    #[must_use]
    pub fn wrap(&self, x: i64, y: i64) -> Coord {
        Coord::new(0, 0).offset_wrapped(x, y, self.dim)
    }

    #[must_use]
    pub fn cell(&self, c: Coord) -> &Cell {
        &self.cells[self.index(c)]
    }

    /// Folds a coordinate past the edge back onto the torus.
    fn normalize(&self, c: Coord) -> Coord {
        self.wrap(i64::from(c.x), i64::from(c.y))
    }

    /// Registers a worm on cell `c`, wrapped onto the grid.
    pub fn place_agent(&mut self, id: WormId, c: Coord) {
        let idx = self.index(self.normalize(c));
        self.cells[idx].worms.push(id);
    }

    /// Moves a worm between cells. A no-op when `from == to`.
    pub fn move_agent(&mut self, id: WormId, from: Coord, to: Coord) {
        if from == to {
            return;
        }
        let (from, to) = (self.normalize(from), self.normalize(to));
        if from == to {
            return;
        }
        let src = self.index(from);
        if let Some(pos) = self.cells[src].worms.iter().position(|w| *w == id) {
            self.cells[src].worms.swap_remove(pos);
        }
        let dst = self.index(to);
        self.cells[dst].worms.push(id);
    }

    /// Adds a food unit to cell `c`, wrapped onto the grid, and returns the
    /// identity assigned to it.
    pub fn place_food(&mut self, c: Coord, mut unit: FoodUnit) -> FoodId {
        let c = self.normalize(c);
        let id = FoodId(self.food.len());
        unit.id = id;
        unit.pos = c;
        self.total_food += u64::from(unit.quantity);
        self.food.push(unit);
        let idx = self.index(c);
        self.cells[idx].food.push(id);
        id
    }

    /// Cells within `radius` of `center`, wrapping around the edges.
    ///
    /// `moore` selects the square (Chebyshev) neighborhood, otherwise the
    /// diamond (von Neumann) one. Each cell appears at most once even when
    /// the radius is large enough for the neighborhood to wrap onto itself.
    #[must_use]
    pub fn get_neighborhood(
        &self,
        center: Coord,
        moore: bool,
        include_center: bool,
        radius: u32,
    ) -> Vec<Coord> {
        let r = i64::from(radius);
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for dx in -r..=r {
            for dy in -r..=r {
                if !moore && dx.abs() + dy.abs() > r {
                    continue;
                }
                if dx == 0 && dy == 0 && !include_center {
                    continue;
                }
                let c = center.offset_wrapped(dx, dy, self.dim);
                if !include_center && c == center {
                    continue;
                }
                if seen.insert(c) {
                    out.push(c);
                }
            }
        }
        out
    }

    /// Every cell with its coordinate, column by column.
    pub fn coord_iter(&self) -> impl Iterator<Item = (&Cell, Coord)> + '_ {
        let dim = self.dim;
        (0..dim).flat_map(move |x| {
            (0..dim).map(move |y| {
                let c = Coord::new(x, y);
                (self.cell(c), c)
            })
        })
    }

    /// Worms first, then food, in placement order.
    #[must_use]
    pub fn get_cell_list_contents(&self, c: Coord) -> Vec<Occupant> {
        let cell = self.cell(c);
        cell.worms
            .iter()
            .copied()
            .map(Occupant::Worm)
            .chain(cell.food.iter().copied().map(Occupant::Food))
            .collect()
    }

    /// Sum of remaining quantity over every food unit.
    #[must_use]
    pub fn get_total_food(&self) -> u64 {
        self.total_food
    }

    /// Remaining food quantity on one cell.
    #[must_use]
    pub fn food_at(&self, c: Coord) -> u64 {
        self.cell(c)
            .food
            .iter()
            .map(|id| u64::from(self.food[id.0].quantity))
            .sum()
    }

    #[must_use]
    pub fn worm_count_at(&self, c: Coord) -> usize {
        self.cell(c).worms.len()
    }

    /// Takes up to `amount` units of food from cell `c`.
    ///
    /// Units emptied by this call are dropped from the cell; units that were
    /// placed with zero quantity stay where they are.
    pub fn consume_food(&mut self, c: Coord, amount: u32) -> u32 {
        let idx = self.index(c);
        let mut remaining = amount;
        let mut emptied = Vec::new();
        for id in &self.cells[idx].food {
            if remaining == 0 {
                break;
            }
            let unit = &mut self.food[id.0];
            if unit.is_depleted() {
                continue;
            }
            remaining -= unit.take(remaining);
            if unit.is_depleted() {
                emptied.push(*id);
            }
        }
        if !emptied.is_empty() {
            self.cells[idx].food.retain(|id| !emptied.contains(id));
        }
        let taken = amount - remaining;
        self.total_food -= u64::from(taken);
        taken
    }

    #[must_use]
    pub fn food_unit(&self, id: FoodId) -> Option<&FoodUnit> {
        self.food.get(id.0)
    }

    /// Every food unit ever placed, including ones already eaten.
    #[must_use]
    pub fn food_units(&self) -> &[FoodUnit] {
        &self.food
    }
}
