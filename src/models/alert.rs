use serde::{Deserialize, Serialize};
use super::transaction::Decision;

/// Alert severity. The decision engine emits uppercase, older rows lowercase.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[serde(alias = "LOW", alias = "Low")]
    Low,
    #[serde(alias = "MEDIUM", alias = "Medium")]
    Medium,
    #[serde(alias = "HIGH", alias = "High")]
    High,
}

impl Severity {
    /// Mesma regra do backend: BLOCK → high, REVIEW → medium, ALLOW → low
    pub fn from_decision(decision: Decision) -> Self {
        match decision {
            Decision::Block => Severity::High,
            Decision::Review => Severity::Medium,
            Decision::Allow => Severity::Low,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Pending,
    Resolved,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Alert {
    pub id: String,
    pub transaction_id: String,
    pub user_id: String,
    pub risk_score: f64,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub decision: Option<Decision>,
    pub status: AlertStatus,
    pub created_at: String,
    #[serde(default)]
    pub anomaly_score: Option<f64>,
    #[serde(default)]
    pub reasons: Vec<String>,
}

impl Alert {
    /// Severidade informada ou, se ausente, derivada da decisão do modelo
    pub fn effective_severity(&self) -> Option<Severity> {
        self.severity.or(self.decision.map(Severity::from_decision))
    }
}

/// Analyst verdict on a flagged transaction
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalystDecision {
    Approve,
    ConfirmFraud,
}

impl AnalystDecision {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalystDecision::Approve => "APPROVE",
            AnalystDecision::ConfirmFraud => "CONFIRM_FRAUD",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ResolveAlertRequest {
    pub decision: AnalystDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ResolveAlertResponse {
    pub transaction_id: String,
    pub status: AlertStatus,
}
