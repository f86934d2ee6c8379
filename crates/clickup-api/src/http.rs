//! reqwest-backed executor for the ClickUp v2 REST API

use crate::executor::{ApiRequest, Method, RequestExecutor};
use clickup_core::{ServiceConfig, UpstreamError};
use reqwest::header::RETRY_AFTER;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

const CLICKUP_API_URL: &str = "https://api.clickup.com/api/v2";
const DEFAULT_RETRY_AFTER_MS: u64 = 60_000;

pub struct HttpExecutor {
    client: Client,
    api_key: String,
    base_url: String,
}

impl HttpExecutor {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: CLICKUP_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Executor with the configured base url and request timeout.
    pub fn from_config(config: &ServiceConfig) -> clickup_core::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| clickup_core::Error::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: CLICKUP_API_URL.to_string(),
        }
        .with_base_url(config.base_url.clone()))
    }
}

#[async_trait::async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, request: ApiRequest) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.base_url, request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        debug!("ClickUp request: {}", request.description());

        let mut builder = self
            .client
            .request(method, &url)
            .header("Authorization", &self.api_key);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "ClickUp error {} on {}: {}",
                status,
                request.description(),
                error_text
            );
            return Err(classify_status(status.as_u16(), retry_after, error_text));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;
        decode_body(status.as_u16(), &bytes)
    }
}

/// Map a non-success status to the executor's error classes.
/// `retry_after_secs` comes from the Retry-After header when present.
pub fn classify_status(status: u16, retry_after_secs: Option<u64>, body: String) -> UpstreamError {
    match status {
        401 | 403 => UpstreamError::Auth(body),
        429 => UpstreamError::RateLimited {
            retry_after_ms: retry_after_secs
                .map(|s| s.saturating_mul(1000))
                .unwrap_or(DEFAULT_RETRY_AFTER_MS),
        },
        404 => UpstreamError::NotFound(body),
        _ => UpstreamError::Unknown {
            status,
            message: body,
        },
    }
}

/// Successful bodies: blank decodes to `null`, anything else must be JSON.
pub fn decode_body(status: u16, bytes: &[u8]) -> Result<Value, UpstreamError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).map_err(|e| UpstreamError::Unknown {
        status,
        message: format!("invalid JSON body: {}", e),
    })
}
