//! HTTP gateway client for the remote ledger.

use crate::client::LedgerClient;
use crate::error::LedgerError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default timeout for ledger requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Ledger client speaking JSON-RPC to a ledger gateway.
///
/// Wraps `reqwest::Client` with the gateway's base URL and provides the
/// three keyed operations the registry needs. Byte values travel
/// hex-encoded inside the JSON body.
#[derive(Clone)]
pub struct HttpLedgerClient {
    http: reqwest::Client,
    gateway_url: String,
}

/// Response to an `is_available` call.
#[derive(Debug, Deserialize)]
struct AvailableResult {
    available: bool,
}

/// Response to a `get_data` call.
#[derive(Debug, Deserialize)]
struct GetDataResult {
    /// Hex-encoded value; empty string when the key is absent.
    #[serde(default)]
    value: String,
}

impl HttpLedgerClient {
    /// Create a new client targeting the given gateway base URL.
    pub fn new(gateway_url: impl Into<String>) -> Result<Self, LedgerError> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .map_err(|e| LedgerError::Network(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            gateway_url: gateway_url.into(),
        })
    }

    /// The configured gateway URL.
    pub fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    /// Send a JSON-RPC request and return the `result` field.
    async fn rpc_call(
        &self,
        action: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, LedgerError> {
        let mut body = params;
        body.as_object_mut()
            .ok_or_else(|| LedgerError::InvalidResponse("params must be a JSON object".into()))?
            .insert("action".to_string(), serde_json::json!(action));

        let response = self
            .http
            .post(&self.gateway_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LedgerError::Network(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(LedgerError::Network(format!(
                "gateway returned HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LedgerError::InvalidResponse(format!("invalid JSON response: {e}")))?;

        if let Some(err) = json.get("error").and_then(|e| e.as_str()) {
            // The gateway reports a user-declined signature as a plain
            // error string; it must stay distinguishable from transport
            // failures so callers can pick the right message.
            if err.contains("user rejected") {
                return Err(LedgerError::UserRejected);
            }
            return Err(LedgerError::Network(format!("gateway error: {err}")));
        }

        Ok(json.get("result").cloned().unwrap_or(json))
    }
}

#[async_trait]
impl LedgerClient for HttpLedgerClient {
    async fn is_available(&self) -> Result<bool, LedgerError> {
        let result = self
            .rpc_call("is_available", serde_json::json!({}))
            .await?;
        let resp: AvailableResult = serde_json::from_value(result)
            .map_err(|e| LedgerError::InvalidResponse(format!("invalid availability response: {e}")))?;
        Ok(resp.available)
    }

    async fn get_data(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        let result = self
            .rpc_call("get_data", serde_json::json!({ "key": key }))
            .await?;
        let resp: GetDataResult = serde_json::from_value(result)
            .map_err(|e| LedgerError::InvalidResponse(format!("invalid get_data response: {e}")))?;
        if resp.value.is_empty() {
            return Ok(Vec::new());
        }
        hex::decode(&resp.value)
            .map_err(|e| LedgerError::InvalidResponse(format!("invalid hex value: {e}")))
    }

    async fn set_data(&self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        self.rpc_call(
            "set_data",
            serde_json::json!({ "key": key, "value": hex::encode(value) }),
        )
        .await?;
        Ok(())
    }
}
