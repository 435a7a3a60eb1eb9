//! Core data structures for the worm foraging simulation.

pub mod experiment;
pub mod food;
pub mod grid;
pub mod record;
pub mod worm;
