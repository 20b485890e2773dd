use serde::{Deserialize, Serialize};

/// Risk-score histogram; bucket `i` covers scores in `[i/n, (i+1)/n)`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScoreDistribution {
    pub buckets: Vec<u64>,
}

impl ScoreDistribution {
    pub fn total(&self) -> u64 {
        self.buckets.iter().sum()
    }
}
