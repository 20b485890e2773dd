use thiserror::Error;

/// Fallback message when a failed response carries no body.
pub const GENERIC_REQUEST_ERROR: &str = "API request failed";

/// Errors surfaced by the client.
///
/// `Clone` is required: one in-flight result is handed to every caller that
/// joined it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Missing or invalid configuration. Fatal at startup.
    #[error("configuration error: {0}")]
    Config(String),
    /// Non-success response, transport failure, abort or undecodable body.
    #[error("{0}")]
    Request(String),
}

impl GatewayError {
    /// Builds the error for a non-success response from its body text.
    pub fn from_body(body: &str) -> Self {
        if body.is_empty() {
            GatewayError::Request(GENERIC_REQUEST_ERROR.to_string())
        } else {
            GatewayError::Request(body.to_string())
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, GatewayError::Config(_))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        GatewayError::Request(e.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::Request(format!("Failed to decode response: {}", e))
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
