pub use wormforage_core::{Behavior, Forager, Simulation, Worm};
pub mod behavior {
    pub use wormforage_core::behavior::*;
}
pub mod config {
    pub use wormforage_core::config::*;
}
pub mod error {
    pub use wormforage_core::error::*;
}
pub mod food {
    pub use wormforage_core::food::*;
    pub use wormforage_data::{FoodId, FoodUnit};
}
pub mod grid {
    pub use wormforage_core::grid::*;
    pub use wormforage_data::{Coord, Occupant};
}
pub mod metrics {
    pub use wormforage_core::metrics::*;
}
pub mod placement {
    pub use wormforage_core::placement::*;
}
pub mod rng {
    pub use wormforage_core::rng::*;
}
pub mod simulation {
    pub use wormforage_core::simulation::*;
}

pub mod state {
    pub use wormforage_data::*;
}
