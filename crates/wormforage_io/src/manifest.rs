//! JSON manifest describing how a set of results was produced.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wormforage_data::{SummaryRow, SweepParameter};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub name: String,
    /// RFC 3339 creation time.
    pub created_at: String,
    pub sweep: SweepParameter,
    pub base_seed: u64,
    pub runs_per_point: usize,
    /// Fingerprint of the experiment configuration.
    pub config_fingerprint: String,
    pub summary: Vec<SummaryRow>,
}

impl RunManifest {
    #[must_use]
    pub fn new(
        name: &str,
        sweep: SweepParameter,
        base_seed: u64,
        runs_per_point: usize,
        config_fingerprint: String,
        summary: Vec<SummaryRow>,
    ) -> Self {
        Self {
            name: name.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            sweep,
            base_seed,
            runs_per_point,
            config_fingerprint,
            summary,
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}
