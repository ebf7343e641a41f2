//! Integration tests for dna-service over a real socket.
//!
//! Run with: cargo test -p dna-service --test health_check

use dna_service::config::DnaConfig;
use dna_service::startup::Application;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    // Set test environment variables
    std::env::set_var("APP__PORT", "0"); // Random port
    std::env::remove_var("OPENAI_API_KEY"); // Explain endpoint disabled

    let config = DnaConfig::load().expect("Failed to load config");
    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn gc_endpoint_computes_percentage() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/gc", port))
        .json(&json!({ "sequence": "ACGTN" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["gc_percent"], 50.0);
}

#[tokio::test]
async fn gc_endpoint_rejects_invalid_sequence() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/gc", port))
        .json(&json!({ "sequence": "ACGX" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["detail"],
        "Sequence must contain only A/C/G/T/N and not be empty."
    );
}

#[tokio::test]
async fn revcomp_endpoint_reverses_and_complements() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/revcomp", port))
        .json(&json!({ "sequence": "AAGGTTCC" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["revcomp"], "GGAACCTT");
}

#[tokio::test]
async fn explain_endpoint_reports_not_implemented_without_key() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/explain", port))
        .json(&json!({ "sequence": "ACGT" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 501);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["detail"], "LLM not configured.");
}
