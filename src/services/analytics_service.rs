use crate::{
    gateway::{Gateway, RequestOptions},
    models::ScoreDistribution,
    utils::error::GatewayResult,
};

pub const SCORE_DISTRIBUTION_PATH: &str = "/api/analytics/score-distribution";

/// Histograma de risco sobre todas as transações
pub async fn fetch_score_distribution(gateway: &Gateway) -> GatewayResult<ScoreDistribution> {
    log::info!("📊 Fetching score distribution");

    let distribution: ScoreDistribution = gateway
        .request_json(SCORE_DISTRIBUTION_PATH, RequestOptions::new(), true)
        .await?;

    log::info!(
        "✅ Score distribution: {} buckets, {} transactions",
        distribution.buckets.len(),
        distribution.total()
    );
    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gateway::client::tests::FakeTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_buckets_keep_order() {
        let (fake, _) = FakeTransport::json(json!({ "buckets": [50, 20, 9, 0, 0, 0, 0, 1, 3, 7] }));
        let gateway = Gateway::with_transport(&Config::new("https://risk.example.com").unwrap(), fake);

        let distribution = fetch_score_distribution(&gateway).await.unwrap();
        assert_eq!(distribution.buckets, vec![50, 20, 9, 0, 0, 0, 0, 1, 3, 7]);
        assert_eq!(distribution.total(), 90);
    }
}
