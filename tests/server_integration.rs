//! Prediction service integration tests.
//!
//! Exercises the HTTP contract end to end against a server bound to an
//! ephemeral port.

#[allow(dead_code)]
mod common;

use common::TestServer;
use serde_json::{json, Value};

// =============================================================================
// Prediction endpoint
// =============================================================================

#[tokio::test]
async fn test_predict_returns_label() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/predict"))
        .json(&json!({"features": [5.0, 1.0, 0.0, 0.0]}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["prediction"], "Data Scientist");
}

#[tokio::test]
async fn test_predict_is_idempotent() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut labels = Vec::new();
    for _ in 0..10 {
        let resp = client
            .post(server.url("/predict"))
            .json(&json!({"features": [0.0, 0.0, 3.0, 2.0]}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let body: Value = resp.json().await.unwrap();
        labels.push(body["prediction"].as_str().unwrap().to_string());
    }

    assert!(labels.iter().all(|l| l == "Engineer"));
}

#[tokio::test]
async fn test_predict_empty_features_is_client_error() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/predict"))
        .json(&json!({"features": []}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "No features provided");
}

#[tokio::test]
async fn test_predict_missing_features_key() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/predict"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "No features provided");
}

#[tokio::test]
async fn test_predict_null_features() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/predict"))
        .json(&json!({"features": null}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "No features provided");
}

#[tokio::test]
async fn test_predict_malformed_json() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/predict"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    let status = resp.status().as_u16();
    assert!(!(200..300).contains(&status));
    assert_ne!(status, 500);
    assert_eq!(status, 400);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_predict_wrong_dimensionality_is_server_error() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Fixture model expects 4 features.
    let resp = client
        .post(server.url("/predict"))
        .json(&json!({"features": [1.0, 2.0]}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    // Distinct from the missing-features message, and generic: no
    // estimator internals leak to the client.
    assert_eq!(body["error"], "prediction failed");
}

#[tokio::test]
async fn test_predict_non_numeric_features_is_client_error() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/predict"))
        .json(&json!({"features": [1.0, "two", 3.0, 4.0]}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_home_page() {
    let server = TestServer::spawn().await;

    let resp = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = resp.text().await.unwrap();
    assert!(body.contains("Sibyl"));
}

#[tokio::test]
async fn test_profession_page_interpolates_parameter() {
    let server = TestServer::spawn().await;

    let resp = reqwest::get(server.url("/index?profession=Engineer"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Engineer"));
}

#[tokio::test]
async fn test_profession_page_without_parameter() {
    let server = TestServer::spawn().await;

    let resp = reqwest::get(server.url("/index")).await.unwrap();
    assert_eq!(resp.status(), 200);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_model_summary() {
    let server = TestServer::spawn().await;

    let resp = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model"], "profession-lr");
    assert_eq!(body["classes"], 3);
    assert_eq!(body["features"], 4);
}
