use crate::{
    gateway::{Gateway, RequestOptions},
    models::{AlertFeedback, FeedbackReceipt},
    utils::error::GatewayResult,
};

pub const FEEDBACK_PATH: &str = "/api/feedback/";

/// Envia o feedback do analista sobre um alerta
pub async fn submit_feedback(
    gateway: &Gateway,
    feedback: &AlertFeedback,
) -> GatewayResult<FeedbackReceipt> {
    log::info!("🗳️  Submitting feedback for alert {} (fraud: {})", feedback.alert_id, feedback.is_fraud);

    let options = RequestOptions::post().json(feedback)?;
    let receipt: FeedbackReceipt = gateway.request_json(FEEDBACK_PATH, options, false).await?;

    log::info!("✅ Feedback saved ({} total)", receipt.total_feedback);
    Ok(receipt)
}
