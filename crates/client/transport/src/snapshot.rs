//! HTTP snapshot source.
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use runtime::{SnapshotFetchError, SnapshotSource};

/// Snapshot source backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpSnapshotSource {
    url: String,
    http_client: reqwest::Client,
}

impl HttpSnapshotSource {
    /// Create a source for `url`, failing requests that take longer than
    /// `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SnapshotFetchError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SnapshotFetchError::Transport(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            http_client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch_snapshot(&self) -> Result<Vec<Value>, SnapshotFetchError> {
        tracing::debug!(target: "client::transport", url = %self.url, "Fetching snapshot");

        let response = self
            .http_client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SnapshotFetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SnapshotFetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SnapshotFetchError::Transport(e.to_string()))?;

        let payloads = parse_snapshot_body(&body)?;
        tracing::debug!(
            target: "client::transport",
            count = payloads.len(),
            "Snapshot body decoded"
        );
        Ok(payloads)
    }
}

/// Decode a snapshot response body into its raw payloads.
///
/// The body must be a JSON array. Individual elements are not validated here;
/// the bridge decides which of them are usable records.
pub fn parse_snapshot_body(body: &str) -> Result<Vec<Value>, SnapshotFetchError> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(payloads)) => Ok(payloads),
        Ok(other) => Err(SnapshotFetchError::Body(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(SnapshotFetchError::Body(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
