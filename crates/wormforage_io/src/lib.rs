//! Result export for worm foraging experiments.
//!
//! Sweep results are written as CSV tables for plotting tools and a JSON
//! manifest recording how they were produced.

pub mod error;
pub mod export;
pub mod manifest;

pub use error::{IoError, Result};
pub use export::{write_frequencies_csv, write_summary_csv, ExperimentFiles};
pub use manifest::RunManifest;
