//! # Wormforage Core
//!
//! The simulation engine for worm foraging experiments on a toroidal grid.
//!
//! This crate contains:
//! - The toroidal grid holding worms and food
//! - Food generation (power-law clustering and multi-spot patches)
//! - Initial worm placement (uniform or clustered)
//! - The four foraging strategies and the factory choosing between them
//! - The step loop and its metrics stream
//!
//! Every stochastic decision draws from one seeded `ChaCha8Rng` owned by the
//! run, so a configuration and a seed fully determine the outcome.
//!
//! ## Example
//!
//! ```
//! use wormforage_core::config::SimulationConfig;
//! use wormforage_core::simulation::Simulation;
//!
//! let config = SimulationConfig {
//!     n_agents: 10,
//!     n_food: 500,
//!     clustering: 1.0,
//!     dim_grid: 20,
//!     social: false,
//!     multispot: false,
//!     num_spots: 1,
//!     clustered: false,
//!     strain_specific: false,
//! };
//! let mut sim = Simulation::with_seed(config, 42).unwrap();
//! let start = sim.total_food();
//! while sim.total_food() as f64 >= start as f64 * 0.9 {
//!     sim.step();
//! }
//! assert!(sim.steps() > 0);
//! ```

/// Foraging strategies and the factory selecting one
pub mod behavior;
/// Run configuration and its validation
pub mod config;
/// Construction errors
pub mod error;
/// Food layouts
pub mod food;
/// Toroidal grid service
pub mod grid;
/// Reporter snapshots and logging setup
pub mod metrics;
/// Initial worm placement
pub mod placement;
/// Seeded random sources
pub mod rng;
/// The step loop
pub mod simulation;

pub use behavior::{Behavior, BehaviorParams, Forager};
pub use config::{FoodLayout, PlacementStrategy, SimulationConfig, SpotCount};
pub use error::ConfigError;
pub use grid::Grid;
pub use metrics::{init_logging, MetricsCollector};
pub use simulation::{Simulation, Worm};
