use serde::{Deserialize, Serialize};
use super::transaction::Decision;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelSignals {
    pub fraud_prob: f64,
    pub anomaly_score: f64,
    pub decision: Decision,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PersistScoreResponse {
    pub status: String,
    pub transaction_id: String,
    pub decision: Decision,
}
