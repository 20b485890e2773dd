use serde::{Deserialize, Serialize};

/// Model decision for a transaction
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Allow,
    Review,
    Block,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub merchant: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, alias = "ingested_at")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub fraud_prob: Option<f64>,
    #[serde(default)]
    pub anomaly_score: Option<f64>,
    #[serde(default)]
    pub decision: Option<Decision>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PaginatedTransactions {
    pub items: Vec<Transaction>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl PaginatedTransactions {
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }
}
