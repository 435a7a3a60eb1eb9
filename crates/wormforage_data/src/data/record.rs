use serde::{Deserialize, Serialize};

use super::worm::WormId;

/// Model-level reporter values captured at one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub step: u64,
    /// Total remaining food on the grid.
    pub food: u64,
}

/// Agent-level reporter values captured at one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub step: u64,
    pub agent_id: WormId,
    pub consumed_food: u64,
    /// `consumed_food / (step + 1)`, rounded to two decimals.
    pub foraging_efficiency: f64,
}

/// One entry of the metrics stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub model: ModelRecord,
    pub agents: Vec<AgentRecord>,
}

/// Raw counters behind a worm's foraging statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ForagingData {
    pub steps_taken: u64,
    pub sense_count: u64,
    pub consumed_food: u64,
}

impl ForagingData {
    /// Fraction of activations spent sensing, rounded to two decimals.
    #[must_use]
    pub fn sense_frequency(&self) -> f64 {
        if self.steps_taken == 0 {
            return 0.0;
        }
        round2(self.sense_count as f64 / self.steps_taken as f64)
    }
}

/// Rounds to two decimal places, the precision every reporter uses.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sense_frequency_rounds() {
        let data = ForagingData {
            steps_taken: 3,
            sense_count: 2,
            consumed_food: 0,
        };
        assert_eq!(data.sense_frequency(), 0.67);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = Snapshot {
            model: ModelRecord { step: 1, food: 10 },
            agents: vec![AgentRecord {
                step: 1,
                agent_id: WormId(0),
                consumed_food: 1,
                foraging_efficiency: 0.5,
            }],
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
