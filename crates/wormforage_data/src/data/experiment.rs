use serde::{Deserialize, Serialize};

/// The quantity varied across an experiment sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepParameter {
    /// Food clustering exponent.
    Gamma,
    /// Number of multi-spot patches.
    Spots,
}

impl SweepParameter {
    /// Column header used for this parameter in exported tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Gamma => "Gamma",
            Self::Spots => "Number of spots",
        }
    }
}

/// Time-to-depletion statistics for one condition and parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub social: bool,
    pub strain_specific: bool,
    pub parameter: f64,
    pub mean_steps: f64,
    /// Population standard deviation of the steps to depletion.
    pub std_dev: f64,
}

/// Per-worm distributions for one condition and parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    pub parameter: f64,
    pub social: bool,
    pub sense_frequency: Vec<f64>,
    pub food_consumption: Vec<u64>,
}
