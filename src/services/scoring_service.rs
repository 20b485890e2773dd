use crate::{
    gateway::{Gateway, RequestOptions},
    models::{ModelSignals, PersistScoreResponse},
    services::{alerts_service::ALERTS_PATH, dashboard_service::KPIS_PATH, transactions_service::transaction_path},
    utils::error::GatewayResult,
};
use futures::future::AbortRegistration;
use urlencoding::encode;

fn score_path(transaction_id: &str) -> String {
    format!("/api/scoring/score/{}", encode(transaction_id))
}

/// Sinais do modelo para uma transação (scoring em runtime, sem escrita no banco)
///
/// Como não altera o estado do servidor, passa pelo cache como qualquer leitura.
pub async fn fetch_model_signals(
    gateway: &Gateway,
    transaction_id: &str,
    abort: Option<AbortRegistration>,
) -> GatewayResult<ModelSignals> {
    log::info!("🤖 Scoring transaction {}", transaction_id);

    let options = RequestOptions::post().abort_registration(abort);
    let signals: ModelSignals = gateway
        .request_json(&score_path(transaction_id), options, true)
        .await?;

    log::info!(
        "✅ {}: fraud_prob={:.3} anomaly={:.3} decision={:?}",
        transaction_id,
        signals.fraud_prob,
        signals.anomaly_score,
        signals.decision
    );
    Ok(signals)
}

/// Recalcula e persiste o score da transação
pub async fn persist_score(
    gateway: &Gateway,
    transaction_id: &str,
) -> GatewayResult<PersistScoreResponse> {
    log::info!("💾 Persisting score for {}", transaction_id);

    let path = format!("/api/scoring/persist/{}", encode(transaction_id));
    let response: PersistScoreResponse = gateway
        .request_json(&path, RequestOptions::post(), false)
        .await?;

    // Views derived from the stored decision are now stale.
    gateway.invalidate(&transaction_path(transaction_id));
    gateway.invalidate(&score_path(transaction_id));
    gateway.invalidate(ALERTS_PATH);
    gateway.invalidate(KPIS_PATH);

    Ok(response)
}
