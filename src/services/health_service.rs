use crate::{
    gateway::{Gateway, RequestOptions},
    models::HealthStatus,
    utils::error::GatewayResult,
};

pub const HEALTH_PATH: &str = "/";

/// Health check always goes to the network
pub async fn check_health(gateway: &Gateway) -> GatewayResult<HealthStatus> {
    let status: HealthStatus = gateway
        .request_json(HEALTH_PATH, RequestOptions::new(), false)
        .await?;

    if status.is_ok() {
        log::info!("💚 {} is healthy", status.service);
    } else {
        log::warn!("⚠️  {} reported status '{}'", status.service, status.status);
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gateway::client::tests::FakeTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_health_bypasses_cache() {
        let (fake, recorded) = FakeTransport::json(json!({
            "status": "ok",
            "service": "financial-risk-intelligence-api"
        }));
        let gateway = Gateway::with_transport(&Config::new("https://risk.example.com/").unwrap(), fake);

        assert!(check_health(&gateway).await.unwrap().is_ok());
        check_health(&gateway).await.unwrap();
        assert_eq!(recorded.calls(), 2);
        assert_eq!(recorded.last().url, "https://risk.example.com/");
    }
}
