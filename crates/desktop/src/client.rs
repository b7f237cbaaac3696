//! HTTP client for the inventory endpoints.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::types::ItemSummary;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },
    #[error("parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// The server's `detail` message, when it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuantityUpdate {
    pub message: String,
    pub new_quantity: i64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for the inventory API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    api_url: String,
    http: reqwest::Client,
}

impl InventoryClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Base URL from `DCCLINK_API_URL`, or [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        let api_url = std::env::var("DCCLINK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(api_url)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub async fn fetch_inventory(&self) -> Result<Vec<ItemSummary>, ClientError> {
        let url = format!("{}/get-inventory", self.api_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read_json(resp).await
    }

    pub async fn add_item(&self, name: &str, quantity: i64) -> Result<MessageBody, ClientError> {
        self.post("/add-item", json!({ "name": name, "quantity": quantity }))
            .await
    }

    pub async fn remove_item(&self, name: &str) -> Result<MessageBody, ClientError> {
        self.post("/remove-item", json!({ "name": name, "quantity": 0 }))
            .await
    }

    /// Apply a signed delta (purchase when positive, return when negative).
    pub async fn update_quantity(&self, name: &str, delta: i64) -> Result<QuantityUpdate, ClientError> {
        self.post("/update-quantity", json!({ "name": name, "quantity": delta }))
            .await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.api_url, path);
        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read_json(resp).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.detail);
        return Err(ClientError::Api {
            status: status.as_u16(),
            detail,
        });
    }

    resp.json().await.map_err(|e| ClientError::Parse(e.to_string()))
}
