use crate::{
    gateway::{Gateway, RequestOptions},
    models::IngestionReport,
    services::{
        alerts_service::ALERTS_PATH,
        analytics_service::SCORE_DISTRIBUTION_PATH,
        dashboard_service::{KPIS_PATH, RISK_STATS_PATH},
        models_service::ONLINE_STATS_PATH,
        transactions_service::TRANSACTIONS_PATH,
    },
    utils::error::GatewayResult,
};

pub const INGESTION_PATH: &str = "/api/ingestion/start";
pub const DEFAULT_INGESTION_LIMIT: u32 = 1000;

/// Dispara a ingestão em lote de até `limit` transações
pub async fn start_ingestion(gateway: &Gateway, limit: u32) -> GatewayResult<IngestionReport> {
    log::info!("📥 Starting ingestion (limit {})", limit);

    let path = format!("{}?limit={}", INGESTION_PATH, limit);
    let report: IngestionReport = gateway
        .request_json(&path, RequestOptions::post(), false)
        .await?;

    // New rows change every aggregate and every listing page.
    gateway.invalidate(KPIS_PATH);
    gateway.invalidate(RISK_STATS_PATH);
    gateway.invalidate(ALERTS_PATH);
    gateway.invalidate(SCORE_DISTRIBUTION_PATH);
    gateway.invalidate(ONLINE_STATS_PATH);
    gateway.invalidate_prefix(TRANSACTIONS_PATH);

    log::info!("✅ Ingestion {}: {} rows", report.status, report.rows_ingested);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gateway::client::tests::{ok, FakeTransport};
    use crate::services::{fetch_alerts, fetch_dashboard_kpis, fetch_transactions, DEFAULT_PAGE_SIZE};
    use reqwest::Method;

    #[tokio::test]
    async fn test_ingestion_posts_limit_and_drops_stale_views() {
        let (fake, recorded) = FakeTransport::new(|_| {
            ok(r#"{
                "status": "ieee_ingestion_complete",
                "rows_ingested": 250,
                "total_transactions": 10,
                "flagged_transactions": 1,
                "high_severity_alerts": 0,
                "flag_rate": 0.1,
                "items": [],
                "total": 0,
                "page": 1,
                "page_size": 15
            }"#)
        });
        let gateway = Gateway::with_transport(&Config::new("https://risk.example.com").unwrap(), fake);

        fetch_dashboard_kpis(&gateway).await.unwrap();
        fetch_transactions(&gateway, 1, DEFAULT_PAGE_SIZE).await.unwrap();
        fetch_transactions(&gateway, 2, DEFAULT_PAGE_SIZE).await.unwrap();
        assert_eq!(gateway.cache_len(), 3);

        let report = start_ingestion(&gateway, 250).await.unwrap();
        assert_eq!(report.rows_ingested, 250);
        assert_eq!(report.status, "ieee_ingestion_complete");

        let sent = recorded.last();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.url, "https://risk.example.com/api/ingestion/start?limit=250");
        assert_eq!(gateway.cache_len(), 0);
    }

    #[tokio::test]
    async fn test_ingestion_is_never_cached() {
        let (fake, recorded) = FakeTransport::new(|n| match n {
            1 => ok("[]"),
            _ => ok(r#"{"status":"ieee_ingestion_complete","rows_ingested":1000}"#),
        });
        let gateway = Gateway::with_transport(&Config::new("https://risk.example.com").unwrap(), fake);

        fetch_alerts(&gateway).await.unwrap();
        start_ingestion(&gateway, DEFAULT_INGESTION_LIMIT).await.unwrap();
        start_ingestion(&gateway, DEFAULT_INGESTION_LIMIT).await.unwrap();
        assert_eq!(recorded.calls(), 3);
        assert_eq!(gateway.cache_len(), 0);
    }
}
