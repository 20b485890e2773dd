use crate::utils::error::GatewayResult;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

/// A fully-resolved request, ready for the wire.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

/// Status and raw body text of a settled response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Network seam of the gateway.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, request: OutboundRequest) -> GatewayResult<RawResponse>;
}

/// Production transport backed by one shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: OutboundRequest) -> GatewayResult<RawResponse> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use reqwest::header::{HeaderValue, CONTENT_TYPE};

    async fn echo(req: HttpRequest, body: String) -> HttpResponse {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        HttpResponse::Ok().json(serde_json::json!({
            "method": req.method().as_str(),
            "content_type": content_type,
            "body": body,
        }))
    }

    async fn missing() -> HttpResponse {
        HttpResponse::NotFound().body("not found")
    }

    async fn start_server() -> String {
        let server = HttpServer::new(|| {
            App::new()
                .route("/echo", web::to(echo))
                .route("/missing", web::get().to(missing))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        actix_rt::spawn(server.run());
        format!("http://{}", addr)
    }

    #[actix_web::test]
    async fn test_sends_method_headers_and_body() {
        let base = start_server().await;
        let transport = ReqwestTransport::new();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = transport
            .send(OutboundRequest {
                method: Method::POST,
                url: format!("{}/echo", base),
                headers,
                body: Some(r#"{"decision":"APPROVE"}"#.to_string()),
            })
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
        let echoed: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(echoed["method"], "POST");
        assert_eq!(echoed["content_type"], "application/json");
        assert_eq!(echoed["body"], r#"{"decision":"APPROVE"}"#);
    }

    #[actix_web::test]
    async fn test_non_success_is_not_a_transport_error() {
        let base = start_server().await;
        let transport = ReqwestTransport::new();

        let response = transport
            .send(OutboundRequest {
                method: Method::GET,
                url: format!("{}/missing", base),
                headers: HeaderMap::new(),
                body: None,
            })
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, "not found");
    }

    #[actix_web::test]
    async fn test_connection_refused_is_request_error() {
        let transport = ReqwestTransport::new();

        let result = transport
            .send(OutboundRequest {
                method: Method::GET,
                url: "http://127.0.0.1:1/nothing".to_string(),
                headers: HeaderMap::new(),
                body: None,
            })
            .await;

        assert!(matches!(result, Err(crate::utils::error::GatewayError::Request(_))));
    }
}
