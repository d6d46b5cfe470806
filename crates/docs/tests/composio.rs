//! Tests for the Composio client against a mock server.

use scout::Documents;
use scout_docs::{Composio, Error, GET_DOCUMENT_BY_ID};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn composio(server: &MockServer) -> Composio {
    Composio::new(reqwest::Client::new(), "cmp-key")
        .unwrap()
        .base_url(server.uri())
}

#[tokio::test]
async fn fetch_returns_raw_response() {
    let server = MockServer::start().await;
    let body = json!({
        "successful": true,
        "data": { "content": "Jane Doe, Rust engineer" },
        "error": null
    });
    Mock::given(method("POST"))
        .and(path(format!("/api/v2/actions/{GET_DOCUMENT_BY_ID}/execute")))
        .and(header("x-api-key", "cmp-key"))
        .and(body_partial_json(json!({
            "entityId": "default",
            "appName": "googledocs",
            "input": { "id": "doc-1" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let value = composio(&server).fetch("doc-1").await.unwrap();
    assert_eq!(value, body);
}

#[tokio::test]
async fn fetch_surfaces_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let err = composio(&server)
        .execute(GET_DOCUMENT_BY_ID, json!({ "id": "x" }))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Status { ref body, .. } if body == "internal"));
}

#[tokio::test]
async fn check_passes_with_connected_account() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/connectedAccounts"))
        .and(query_param("appNames", "googledocs"))
        .and(query_param("showActiveOnly", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "acc-1", "appName": "googledocs", "status": "ACTIVE" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    composio(&server).check().await.unwrap();
}

#[tokio::test]
async fn check_fails_without_connected_account() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/connectedAccounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let err = composio(&server).check().await.unwrap_err();
    assert!(err.to_string().contains("no connected googledocs account"));
}
