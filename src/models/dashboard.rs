use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DashboardKpis {
    pub total_transactions: u64,
    pub flagged_transactions: u64,
    pub high_severity_alerts: u64,
    pub flag_rate: f64,
}

/// One point of the recent-risk time series, risk already scaled to 0-100
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RiskPoint {
    pub timestamp: String,
    pub risk_score: f64,
}
