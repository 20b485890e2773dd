use crate::{
    gateway::{Gateway, RequestOptions},
    models::{PaginatedTransactions, Transaction},
    utils::error::GatewayResult,
};
use futures::future::AbortRegistration;
use urlencoding::encode;

pub const TRANSACTIONS_PATH: &str = "/api/transactions";
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 15;

pub(crate) fn transaction_path(id: &str) -> String {
    format!("{}/{}", TRANSACTIONS_PATH, encode(id))
}

/// Busca uma transação pelo id (aceita sinal de cancelamento)
pub async fn fetch_transaction_by_id(
    gateway: &Gateway,
    id: &str,
    abort: Option<AbortRegistration>,
) -> GatewayResult<Transaction> {
    log::info!("🔍 Fetching transaction {}", id);

    let options = RequestOptions::new().abort_registration(abort);
    gateway.request_json(&transaction_path(id), options, true).await
}

/// Listagem paginada, mais recentes primeiro
pub async fn fetch_transactions(
    gateway: &Gateway,
    page: u32,
    page_size: u32,
) -> GatewayResult<PaginatedTransactions> {
    log::info!("📄 Fetching transactions page {} (size {})", page, page_size);

    let path = format!("{}?page={}&page_size={}", TRANSACTIONS_PATH, page, page_size);
    let listing: PaginatedTransactions = gateway
        .request_json(&path, RequestOptions::new(), true)
        .await?;

    log::info!(
        "✅ Page {}/{}: {} of {} transactions",
        listing.page,
        listing.page_count(),
        listing.items.len(),
        listing.total
    );
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gateway::client::tests::FakeTransport;
    use crate::models::Decision;
    use serde_json::json;

    fn gateway_with(fake: FakeTransport) -> Gateway {
        Gateway::with_transport(&Config::new("https://risk.example.com").unwrap(), fake)
    }

    #[tokio::test]
    async fn test_listing_query_string() {
        let (fake, recorded) = FakeTransport::json(json!({
            "items": [{
                "id": "t1",
                "user_id": "user_t1",
                "merchant": "SIM_DEST",
                "amount": 10.0,
                "ingested_at": "2024-05-01T10:00:00",
                "fraud_prob": 0.2,
                "anomaly_score": 0.1,
                "decision": "ALLOW"
            }],
            "total": 16,
            "page": 2,
            "page_size": 15
        }));
        let gateway = gateway_with(fake);

        let listing = fetch_transactions(&gateway, 2, DEFAULT_PAGE_SIZE).await.unwrap();
        assert_eq!(
            recorded.last().url,
            "https://risk.example.com/api/transactions?page=2&page_size=15"
        );
        assert_eq!(listing.items[0].decision, Some(Decision::Allow));
        assert_eq!(listing.page_count(), 2);
    }

    #[tokio::test]
    async fn test_pages_are_cached_separately() {
        let (fake, recorded) = FakeTransport::json(json!({ "items": [], "total": 0, "page": 1, "page_size": 15 }));
        let gateway = gateway_with(fake);

        fetch_transactions(&gateway, DEFAULT_PAGE, DEFAULT_PAGE_SIZE).await.unwrap();
        fetch_transactions(&gateway, 2, DEFAULT_PAGE_SIZE).await.unwrap();
        fetch_transactions(&gateway, DEFAULT_PAGE, DEFAULT_PAGE_SIZE).await.unwrap();
        assert_eq!(recorded.calls(), 2);
    }

    #[tokio::test]
    async fn test_single_transaction() {
        let (fake, recorded) = FakeTransport::json(json!({
            "id": "t9",
            "user_id": "user_t9",
            "amount": 42.0,
            "decision": "BLOCK",
            "shap_values": []
        }));
        let gateway = gateway_with(fake);

        let tx = fetch_transaction_by_id(&gateway, "t9", None).await.unwrap();
        assert_eq!(tx.id, "t9");
        assert_eq!(tx.amount, Some(42.0));
        assert_eq!(recorded.last().url, "https://risk.example.com/api/transactions/t9");
    }
}
