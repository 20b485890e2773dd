use crate::{
    gateway::{Gateway, RequestOptions},
    models::OnlineStats,
    utils::error::GatewayResult,
};
use serde_json::Value;

pub const ONLINE_STATS_PATH: &str = "/online-stats";
pub const OFFLINE_METRICS_PATH: &str = "/offline-metrics";

/// Distribuição das decisões em produção
pub async fn fetch_online_stats(gateway: &Gateway) -> GatewayResult<OnlineStats> {
    log::info!("🧮 Fetching online model stats");

    gateway
        .request_json(ONLINE_STATS_PATH, RequestOptions::new(), true)
        .await
}

/// Offline evaluation report. Its layout depends on the evaluation run, so it
/// is passed through undecoded.
pub async fn fetch_offline_metrics(gateway: &Gateway) -> GatewayResult<Value> {
    log::info!("🧮 Fetching offline model metrics");

    gateway
        .request(OFFLINE_METRICS_PATH, RequestOptions::new(), true)
        .await
}
