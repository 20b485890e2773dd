use crate::{
    gateway::{Gateway, RequestOptions},
    models::{DashboardKpis, RiskPoint},
    utils::error::GatewayResult,
};

pub const KPIS_PATH: &str = "/api/dashboard/kpis";
pub const RISK_STATS_PATH: &str = "/api/dashboard/risk-stats";

pub async fn fetch_dashboard_kpis(gateway: &Gateway) -> GatewayResult<DashboardKpis> {
    log::info!("📈 Fetching dashboard KPIs");

    let kpis: DashboardKpis = gateway
        .request_json(KPIS_PATH, RequestOptions::new(), true)
        .await?;

    log::info!(
        "✅ KPIs: {} transactions, {} flagged ({:.2}%)",
        kpis.total_transactions,
        kpis.flagged_transactions,
        kpis.flag_rate * 100.0
    );
    Ok(kpis)
}

/// Série temporal de risco das transações mais recentes
pub async fn fetch_risk_stats(gateway: &Gateway) -> GatewayResult<Vec<RiskPoint>> {
    log::info!("📈 Fetching risk stats");

    gateway
        .request_json(RISK_STATS_PATH, RequestOptions::new(), true)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gateway::client::tests::FakeTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_kpis() {
        let (fake, recorded) = FakeTransport::json(json!({
            "total_transactions": 1000,
            "flagged_transactions": 40,
            "high_severity_alerts": 12,
            "flag_rate": 0.04
        }));
        let gateway = Gateway::with_transport(&Config::new("https://risk.example.com").unwrap(), fake);

        let kpis = fetch_dashboard_kpis(&gateway).await.unwrap();
        assert_eq!(
            kpis,
            DashboardKpis {
                total_transactions: 1000,
                flagged_transactions: 40,
                high_severity_alerts: 12,
                flag_rate: 0.04,
            }
        );
        assert_eq!(recorded.last().url, "https://risk.example.com/api/dashboard/kpis");
    }

    #[tokio::test]
    async fn test_risk_stats() {
        let (fake, _) = FakeTransport::json(json!([
            { "timestamp": "2024-05-01T10:00:00", "risk_score": 12.5 },
            { "timestamp": "2024-05-01T10:01:00", "risk_score": 97.0 }
        ]));
        let gateway = Gateway::with_transport(&Config::new("https://risk.example.com").unwrap(), fake);

        let points = fetch_risk_stats(&gateway).await.unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].risk_score, 97.0);
    }
}
