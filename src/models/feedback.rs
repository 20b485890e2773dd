use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AlertFeedback {
    pub alert_id: Uuid,
    pub is_fraud: bool,
    pub analyst: String,
    pub timestamp: DateTime<Utc>,
}

impl AlertFeedback {
    pub fn new(alert_id: Uuid, is_fraud: bool, analyst: impl Into<String>) -> Self {
        Self {
            alert_id,
            is_fraud,
            analyst: analyst.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FeedbackReceipt {
    pub status: String,
    pub total_feedback: u64,
}
