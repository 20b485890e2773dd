use serde::{Deserialize, Serialize};

/// Live decision mix, percentages rounded to two decimals by the API
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OnlineStats {
    pub total: u64,
    pub allow_pct: f64,
    pub review_pct: f64,
    pub block_pct: f64,
}
