use crate::utils::error::GatewayResult;
use futures::future::{AbortHandle, AbortRegistration};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;

/// Transport-level overrides for a single gateway call.
#[derive(Debug, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<String>,
    pub abort: Option<AbortRegistration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self::new().method(Method::POST)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Serializes `payload` as the JSON request body.
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> GatewayResult<Self> {
        self.body = Some(serde_json::to_string(payload)?);
        Ok(self)
    }

    pub fn abort_registration(mut self, registration: Option<AbortRegistration>) -> Self {
        self.abort = registration;
        self
    }

    /// Attaches a fresh abort pair and hands back the handle that cancels it.
    pub fn abortable(mut self) -> (Self, AbortHandle) {
        let (handle, registration) = AbortHandle::new_pair();
        self.abort = Some(registration);
        (self, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;

    #[test]
    fn test_defaults() {
        let options = RequestOptions::new();
        assert_eq!(options.method, Method::GET);
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
        assert!(options.abort.is_none());
    }

    #[test]
    fn test_json_body_and_header() {
        let options = RequestOptions::post()
            .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .json(&serde_json::json!({ "decision": "APPROVE" }))
            .unwrap();

        assert_eq!(options.method, Method::POST);
        assert_eq!(options.headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(options.body.as_deref(), Some(r#"{"decision":"APPROVE"}"#));
    }
}
