//! Lunch Money asset balance updates over its REST API.

use super::{format_balance, Ledger, LedgerError};
use asset_valuation::AssetId;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://dev.lunchmoney.app";

#[derive(Debug, Serialize)]
struct UpdateAssetBody {
    balance: String,
}

/// Client for `PUT /v1/assets/:id`.
#[derive(Clone)]
pub struct LunchMoneyClient {
    client: reqwest::Client,
    base: String,
    token: String,
}

impl LunchMoneyClient {
    /// Client for the API at `base`, e.g. [`DEFAULT_API_BASE`] or a mock server.
    pub fn with_base(
        token: impl Into<String>,
        base: impl Into<String>,
    ) -> Result<Self, LedgerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("asset-valuation-sync/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base: base.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn asset_url(&self, id: AssetId) -> String {
        format!("{}/v1/assets/{id}", self.base)
    }
}

#[async_trait]
impl Ledger for LunchMoneyClient {
    async fn update_asset_balance(&self, id: AssetId, balance: f64) -> Result<(), LedgerError> {
        let resp = self
            .client
            .put(self.asset_url(id))
            .bearer_auth(&self.token)
            .json(&UpdateAssetBody {
                balance: format_balance(balance),
            })
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();

        if let Some(message) = reported_error(&body) {
            return Err(LedgerError::Rejected(message));
        }
        if !(200..300).contains(&status) {
            return Err(LedgerError::Status { status, body });
        }
        if !body.trim().is_empty() {
            serde_json::from_str::<Value>(&body)?;
        }
        Ok(())
    }
}

/// Lunch Money reports failures as `{"error": ...}` or `{"errors": [...]}`,
/// sometimes with a 200 status.
fn reported_error(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let err = value.get("error").or_else(|| value.get("errors"))?;
    match err {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|i| i.as_str().map_or_else(|| i.to_string(), String::from))
                .collect::<Vec<_>>()
                .join("; "),
        ),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_error_shapes() {
        assert_eq!(
            reported_error(r#"{"error": "Asset not found"}"#).as_deref(),
            Some("Asset not found")
        );
        assert_eq!(
            reported_error(r#"{"error": ["balance is invalid", "id is invalid"]}"#).as_deref(),
            Some("balance is invalid; id is invalid")
        );
        assert_eq!(
            reported_error(r#"{"errors": ["nope"]}"#).as_deref(),
            Some("nope")
        );
    }

    #[test]
    fn test_success_body_has_no_error() {
        assert_eq!(reported_error(r#"{"id": 1, "balance": "8450.0000"}"#), None);
        assert_eq!(reported_error(r#"{"error": null}"#), None);
        assert_eq!(reported_error("not json"), None);
    }

    #[test]
    fn test_base_trailing_slash_trimmed() {
        let client = LunchMoneyClient::with_base("t", "http://localhost:9999/").unwrap();
        assert_eq!(client.asset_url(4), "http://localhost:9999/v1/assets/4");
    }
}
