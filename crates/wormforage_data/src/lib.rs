//! Plain data shared by the simulation engine, the experiment driver and
//! the exporters. Nothing in here owns behavior beyond small accessors.

pub mod data;

pub use data::experiment::{FrequencyRow, SummaryRow, SweepParameter};
pub use data::food::{FoodId, FoodUnit};
pub use data::grid::{Coord, Occupant};
pub use data::record::{round2, AgentRecord, ForagingData, ModelRecord, Snapshot};
pub use data::worm::{BehaviorKind, WormId, WormState};
