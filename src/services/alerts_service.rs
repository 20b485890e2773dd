use crate::{
    gateway::{Gateway, RequestOptions},
    models::{Alert, AnalystDecision, ResolveAlertRequest, ResolveAlertResponse, Severity},
    utils::error::GatewayResult,
};
use urlencoding::encode;

pub const ALERTS_PATH: &str = "/api/alerts";

/// Lista os alertas pendentes (cache de 30s)
pub async fn fetch_alerts(gateway: &Gateway) -> GatewayResult<Vec<Alert>> {
    log::info!("🚨 Fetching pending alerts");

    let alerts: Vec<Alert> = gateway
        .request_json(ALERTS_PATH, RequestOptions::new(), true)
        .await?;

    let high = alerts
        .iter()
        .filter(|a| a.effective_severity() == Some(Severity::High))
        .count();
    log::info!("✅ Retrieved {} alerts ({} high severity)", alerts.len(), high);
    Ok(alerts)
}

/// Registra a decisão do analista para a transação do alerta
pub async fn resolve_alert(
    gateway: &Gateway,
    transaction_id: &str,
    decision: AnalystDecision,
    reason: Option<&str>,
) -> GatewayResult<ResolveAlertResponse> {
    log::info!("📝 Resolving alert for {} as {}", transaction_id, decision.as_str());

    let payload = ResolveAlertRequest {
        decision,
        reason: reason.map(str::to_string),
    };
    let path = format!("{}/{}/resolve", ALERTS_PATH, encode(transaction_id));
    let options = RequestOptions::post().json(&payload)?;

    let response: ResolveAlertResponse = gateway.request_json(&path, options, false).await?;

    // The pending list no longer contains this transaction.
    gateway.invalidate(ALERTS_PATH);

    log::info!("✅ Alert for {} resolved", response.transaction_id);
    Ok(response)
}
