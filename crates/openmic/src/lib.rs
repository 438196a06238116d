//! # OpenMic client
//!
//! Thin client for the OpenMic bot-management API.
//!
//! The relay never owns bot state; every operation is a passthrough to the
//! vendor, with the configured API key attached as a bearer credential.
//! Responses stay `serde_json::Value` because the vendor owns that schema.
//! Nothing is retried and no timeout is configured beyond the HTTP client
//! default.

pub mod bot_config;

pub use bot_config::{BotConfig, WebhookEndpoints};

use serde_json::{json, Value};

/// Outcome classification at the vendor boundary.
///
/// A non-2xx vendor reply and a transport failure are different things: the
/// first is forwarded to the caller with the vendor's status and body, the
/// second surfaces as a generic internal error.
#[derive(Debug, thiserror::Error)]
pub enum OpenMicError {
    #[error("vendor returned status {status}")]
    Vendor { status: u16, body: Value },
    #[error("request to vendor failed: {0}")]
    Network(#[from] reqwest::Error),
}

pub type OpenMicResult<T> = std::result::Result<T, OpenMicError>;

/// Client for the vendor's `/v1/bots` endpoints.
#[derive(Clone)]
pub struct OpenMicClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenMicClient {
    /// Creates a client for the given API base URL and bearer key.
    ///
    /// `base_url` is expected without a trailing slash (the relay config
    /// normalises this).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Lists all bots configured at the vendor.
    pub async fn list_bots(&self) -> OpenMicResult<Value> {
        let response = self
            .http
            .get(self.url("/v1/bots"))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        Self::read_body(response).await
    }

    /// Creates a bot from the given configuration.
    pub async fn create_bot(&self, config: &BotConfig) -> OpenMicResult<Value> {
        let response = self
            .http
            .post(self.url("/v1/bots"))
            .bearer_auth(&self.api_key)
            .json(config)
            .send()
            .await?;
        Self::read_body(response).await
    }

    /// Updates bot fields; the body is forwarded untouched.
    pub async fn update_bot(&self, bot_id: &str, body: &Value) -> OpenMicResult<Value> {
        let response = self
            .http
            .put(self.url(&format!("/v1/bots/{bot_id}")))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;
        Self::read_body(response).await
    }

    /// Deletes a bot. Vendors commonly answer with an empty body here, which
    /// is mapped to `{"ok": true}`.
    pub async fn delete_bot(&self, bot_id: &str) -> OpenMicResult<Value> {
        let response = self
            .http
            .delete(self.url(&format!("/v1/bots/{bot_id}")))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        Self::read_body(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_body(response: reqwest::Response) -> OpenMicResult<Value> {
        let status = response.status();
        let text = response.text().await?;
        let body = parse_body(&text);

        if status.is_success() {
            Ok(body)
        } else {
            tracing::warn!(status = status.as_u16(), "vendor call failed");
            Err(OpenMicError::Vendor {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Interprets a vendor body: JSON when it parses, `{"ok": true}` for an
/// empty body, the raw text otherwise.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return json!({ "ok": true });
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
