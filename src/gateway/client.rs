use crate::config::Config;
use crate::gateway::cache::CacheStore;
use crate::gateway::inflight::{InFlightRegistry, SharedResponse};
use crate::gateway::options::RequestOptions;
use crate::gateway::transport::{OutboundRequest, RawResponse, ReqwestTransport, Transport};
use crate::utils::error::{GatewayError, GatewayResult};
use futures::future::{AbortRegistration, Abortable};
use futures::FutureExt;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

pub const ABORTED_MESSAGE: &str = "request aborted";

/// Both stores sit behind one lock so lookup, eviction and in-flight
/// registration happen in a single critical section.
#[derive(Debug)]
struct Stores {
    cache: CacheStore,
    in_flight: InFlightRegistry,
}

fn lock(stores: &Mutex<Stores>) -> MutexGuard<'_, Stores> {
    stores.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared fetch helper for every API call: caches decoded responses for the
/// configured TTL and collapses concurrent identical requests into one call.
///
/// Build one per process and clone it freely; clones share the stores.
#[derive(Clone)]
pub struct Gateway {
    base_url: String,
    transport: Arc<dyn Transport>,
    stores: Arc<Mutex<Stores>>,
}

impl Gateway {
    pub fn new(config: &Config) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }

    pub fn with_transport<T: Transport>(config: &Config, transport: T) -> Self {
        log::info!(
            "🔌 API gateway ready: {} (cache TTL {}s)",
            config.base_url(),
            config.cache_ttl().as_secs_f64()
        );

        Self {
            base_url: config.base_url().to_string(),
            transport: Arc::new(transport),
            stores: Arc::new(Mutex::new(Stores {
                cache: CacheStore::new(config.cache_ttl()),
                in_flight: InFlightRegistry::new(),
            })),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache_ttl(&self) -> Duration {
        lock(&self.stores).cache.ttl()
    }

    /// Full URL for `path`; also the cache and in-flight key.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Issues a request for `path`, serving a fresh cached payload or joining
    /// an identical in-flight call when `use_cache` is set.
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
        use_cache: bool,
    ) -> GatewayResult<Value> {
        let key = self.url_for(path);
        let RequestOptions {
            method,
            headers,
            body,
            abort,
        } = options;

        let outbound = OutboundRequest {
            method,
            url: key.clone(),
            headers: with_json_content_type(headers),
            body,
        };

        if !use_cache {
            return execute(self.transport.as_ref(), outbound, abort).await;
        }

        let pending = {
            let mut stores = lock(&self.stores);

            if let Some(payload) = stores.cache.lookup(&key) {
                log::debug!("📦 Cache hit for {}", key);
                return Ok(payload);
            }

            match stores.in_flight.join(&key) {
                Some(shared) => {
                    log::debug!("🔗 Joining in-flight request for {}", key);
                    shared
                }
                None => {
                    let shared = self.spawn_shared(key.clone(), outbound, abort);
                    stores.in_flight.register(key, shared.clone());
                    shared
                }
            }
        };

        pending.await
    }

    /// Same as [`Gateway::request`], decoding the payload into `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
        use_cache: bool,
    ) -> GatewayResult<T> {
        let payload = self.request(path, options, use_cache).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Starts the network call on its own task. The caller must register the
    /// returned handle before releasing the store lock: settlement takes the
    /// same lock, so it always observes the registration.
    fn spawn_shared(
        &self,
        key: String,
        outbound: OutboundRequest,
        abort: Option<AbortRegistration>,
    ) -> SharedResponse {
        let transport = Arc::clone(&self.transport);
        let stores = Arc::clone(&self.stores);
        let task_key = key.clone();
        let task_stores = Arc::clone(&stores);

        let task = tokio::spawn(async move {
            let result = execute(transport.as_ref(), outbound, abort).await;

            let mut stores = lock(&task_stores);
            stores.in_flight.settle(&task_key);
            if let Ok(payload) = &result {
                stores.cache.store(task_key.clone(), payload.clone());
                log::debug!("💾 Cached response for {}", task_key);
            }
            result
        });

        async move {
            match task.await {
                Ok(result) => result,
                Err(e) => {
                    lock(&stores).in_flight.settle(&key);
                    Err(GatewayError::Request(format!("Request task failed: {}", e)))
                }
            }
        }
        .boxed()
        .shared()
    }

    /// Drops the cached entry for `path`, if any. In-flight calls are untouched.
    pub fn invalidate(&self, path: &str) -> bool {
        let key = self.url_for(path);
        lock(&self.stores).cache.remove(&key).is_some()
    }

    /// Drops every cached entry under `path`, query-string variants included.
    pub fn invalidate_prefix(&self, path: &str) -> usize {
        let prefix = self.url_for(path);
        lock(&self.stores).cache.remove_prefix(&prefix)
    }

    pub fn clear_cache(&self) {
        lock(&self.stores).cache.clear();
    }

    pub fn cache_len(&self) -> usize {
        lock(&self.stores).cache.len()
    }

    pub fn in_flight_len(&self) -> usize {
        lock(&self.stores).in_flight.len()
    }

    /// Capture instant of the cached entry for `path`, fresh or not.
    pub fn cached_at(&self, path: &str) -> Option<Instant> {
        let key = self.url_for(path);
        lock(&self.stores).cache.entry(&key).map(|entry| entry.timestamp)
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// JSON content type first, then caller headers on top so they win.
fn with_json_content_type(headers: HeaderMap) -> HeaderMap {
    let mut merged = HeaderMap::new();
    merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    merged.extend(headers);
    merged
}

async fn execute(
    transport: &dyn Transport,
    request: OutboundRequest,
    abort: Option<AbortRegistration>,
) -> GatewayResult<Value> {
    log::debug!("🌐 {} {}", request.method, request.url);
    let url = request.url.clone();

    let sent = match abort {
        Some(registration) => Abortable::new(transport.send(request), registration)
            .await
            .unwrap_or_else(|_| Err(GatewayError::Request(ABORTED_MESSAGE.to_string()))),
        None => transport.send(request).await,
    };

    let result = sent.and_then(decode);
    if let Err(e) = &result {
        log::warn!("⚠️  Request to {} failed: {}", url, e);
    }
    result
}

fn decode(response: RawResponse) -> GatewayResult<Value> {
    if !response.status.is_success() {
        return Err(GatewayError::from_body(&response.body));
    }
    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&response.body)?)
}
