use serde::{Deserialize, Serialize};

use super::grid::Coord;

/// Index of a food unit inside the grid's food arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FoodId(pub usize);

/// A unit of food lying on one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodUnit {
    /// Stable identity, assigned by the grid on placement.
    pub id: FoodId,
    /// Owning cell.
    pub pos: Coord,
    /// Remaining consumable mass. Zero-quantity units still occupy their cell.
    pub quantity: u32,
}

impl FoodUnit {
    /// A single-quantity unit, as laid down by the clustered generator.
    #[must_use]
    pub fn new(pos: Coord) -> Self {
        Self::with_quantity(pos, 1)
    }

    #[must_use]
    pub fn with_quantity(pos: Coord, quantity: u32) -> Self {
        Self {
            id: FoodId(usize::MAX),
            pos,
            quantity,
        }
    }

    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.quantity == 0
    }

    /// Removes up to `amount` from the unit and returns how much was taken.
    pub fn take(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.quantity);
        self.quantity -= taken;
        taken
    }
}
