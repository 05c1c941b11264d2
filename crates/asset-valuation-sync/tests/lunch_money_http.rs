//! Lunch Money client against a mock HTTP server.

use asset_valuation_sync::ledger::{Ledger, LedgerError, LunchMoneyClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn update_sends_bearer_token_and_string_balance() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/assets/1"))
        .and(header("authorization", "Bearer secret-token"))
        .and(body_json(json!({ "balance": "8450" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "balance": "8450.0000" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = LunchMoneyClient::with_base("secret-token", server.uri()).unwrap();
    client
        .update_asset_balance(1, 8450.0)
        .await
        .expect("update should succeed");
}

#[tokio::test]
async fn error_payload_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/assets/99"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": ["Asset ID 99 not found"] })),
        )
        .mount(&server)
        .await;

    let client = LunchMoneyClient::with_base("t", server.uri()).unwrap();
    let err = client.update_asset_balance(99, 1.0).await.unwrap_err();

    match err {
        LedgerError::Rejected(msg) => assert!(msg.contains("99 not found")),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = LunchMoneyClient::with_base("t", server.uri()).unwrap();
    let err = client.update_asset_balance(2, 450000.0).await.unwrap_err();

    assert!(matches!(err, LedgerError::Status { status: 503, .. }));
}

#[tokio::test]
async fn fractional_balance_is_sent_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/assets/5"))
        .and(body_json(json!({ "balance": "12345.67" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = LunchMoneyClient::with_base("t", server.uri()).unwrap();
    assert!(client.update_asset_balance(5, 12345.67).await.is_ok());
}
