use serde::{Deserialize, Serialize};

/// Outcome of a batch ingestion run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct IngestionReport {
    pub status: String,
    pub rows_ingested: u64,
}
