//! Integration tests for catalog browsing and the destructive reseed.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p novastore-server)
//!
//! Run with: cargo test -p novastore-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::Value;
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
fn base_url() -> String {
    std::env::var("NOVASTORE_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string())
}

// ============================================================================
// Health Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_health_check() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to get health");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to read health body");
    assert_eq!(body["ok"], true);
}

// ============================================================================
// Catalog Tests
// ============================================================================

/// Reseeds, lists, and fetches one product in a single test so no other
/// test depends on shared catalog state.
#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_reseed_then_browse_catalog() {
    let client = Client::new();

    let resp = client
        .post(format!("{}/seed", base_url()))
        .send()
        .await
        .expect("Failed to reseed");
    assert_eq!(resp.status(), StatusCode::OK);

    let summary: Value = resp.json().await.expect("Failed to read reseed summary");
    assert_eq!(summary["message"], "Re-seeded");
    assert_eq!(summary["inserted"], 20);

    // A second reseed on an already-seeded catalog wipes the 20 entries and
    // installs exactly 20 again
    let resp = client
        .post(format!("{}/seed", base_url()))
        .send()
        .await
        .expect("Failed to reseed twice");
    assert_eq!(resp.status(), StatusCode::OK);

    let summary: Value = resp.json().await.expect("Failed to read second summary");
    assert_eq!(summary["deleted"], 20);
    assert_eq!(summary["inserted"], 20);

    let resp = client
        .get(format!("{}/products", base_url()))
        .send()
        .await
        .expect("Failed to list products");
    assert_eq!(resp.status(), StatusCode::OK);

    let products: Value = resp.json().await.expect("Failed to read product list");
    let products = products.as_array().expect("Product list is not an array");
    assert_eq!(products.len(), 20);

    let first = products.first().expect("Product list is empty");
    assert!(first["id"].is_string());
    assert!(first["title"].is_string());
    assert!(first["price"].is_number());
    assert!(first["specs"].is_object());
    // Wire casing is camelCase throughout
    assert!(first.get("createdAt").is_some());
    assert!(first.get("created_at").is_none());

    let id = first["id"].as_str().expect("Product has no id");
    let resp = client
        .get(format!("{}/products/{id}", base_url()))
        .send()
        .await
        .expect("Failed to get product detail");
    assert_eq!(resp.status(), StatusCode::OK);

    let detail: Value = resp.json().await.expect("Failed to read product detail");
    assert_eq!(detail["id"], first["id"]);
    assert_eq!(detail["title"], first["title"]);
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_product_detail_rejects_malformed_id() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/products/not-a-valid-id", base_url()))
        .send()
        .await
        .expect("Failed to get malformed product id");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], "Invalid id");
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_product_detail_unknown_id_not_found() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/products/{}", base_url(), Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to get unknown product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], "Not found");
}
