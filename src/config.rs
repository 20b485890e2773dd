use crate::utils::error::{GatewayError, GatewayResult};
use reqwest::Url;
use std::env;
use std::time::Duration;

pub const BASE_URL_VAR: &str = "API_BASE_URL";
pub const CACHE_TTL_VAR: &str = "API_CACHE_TTL_SECS";

/// Default freshness window for cached responses.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);

/// Client configuration.
///
/// The only way to obtain one outside this crate is through [`Config::new`] or
/// [`Config::from_env`], both of which force the origin onto HTTPS.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    cache_ttl: Duration,
}

impl Config {
    /// Validates `origin` and builds a config with the default TTL.
    pub fn new(origin: &str) -> GatewayResult<Self> {
        Ok(Self {
            base_url: normalize_origin(origin)?,
            cache_ttl: DEFAULT_CACHE_TTL,
        })
    }

    /// Lê a configuração das variáveis de ambiente (`.env` já carregado pelo binário)
    pub fn from_env() -> GatewayResult<Self> {
        let origin = env::var(BASE_URL_VAR).unwrap_or_default();
        let ttl = env::var(CACHE_TTL_VAR).ok();
        Self::from_values(&origin, ttl.as_deref())
    }

    fn from_values(origin: &str, ttl_secs: Option<&str>) -> GatewayResult<Self> {
        let config = Self::new(origin)?;

        match ttl_secs.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    GatewayError::Config(format!("{} must be a whole number of seconds, got '{}'", CACHE_TTL_VAR, raw))
                })?;
                Ok(config.with_cache_ttl(Duration::from_secs(secs)))
            }
            None => Ok(config),
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Normalised origin, always `https://`, no trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    /// Plaintext origin for in-process test servers.
    #[cfg(test)]
    pub(crate) fn plaintext_for_tests(origin: &str) -> Self {
        Self {
            base_url: origin.trim_end_matches('/').to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

/// Trims, drops trailing slashes and upgrades `http://` to `https://`.
pub fn normalize_origin(origin: &str) -> GatewayResult<String> {
    let trimmed = origin.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(GatewayError::Config(format!("{} is not defined", BASE_URL_VAR)));
    }

    let upgraded = match strip_prefix_ignore_case(trimmed, "http://") {
        Some(rest) => {
            log::warn!("⚠️  {} uses http://, upgrading to https://", BASE_URL_VAR);
            format!("https://{}", rest)
        }
        None => trimmed.to_string(),
    };

    let url = Url::parse(&upgraded)
        .map_err(|e| GatewayError::Config(format!("{} is not a valid URL ({}): {}", BASE_URL_VAR, upgraded, e)))?;

    if url.scheme() != "https" {
        return Err(GatewayError::Config(format!(
            "{} must use https, got scheme '{}'",
            BASE_URL_VAR,
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(GatewayError::Config(format!("{} has no host: {}", BASE_URL_VAR, upgraded)));
    }

    Ok(upgraded)
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    value
        .get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &value[prefix.len()..])
}
