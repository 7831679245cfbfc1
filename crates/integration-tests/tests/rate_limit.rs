//! Integration test for the contact-form rate limiter.
//!
//! Kept in its own binary so the flood cannot starve the other `/contact`
//! tests; test binaries run one at a time and this one sorts last.
//!
//! Run with: cargo test -p novastore-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::json;

/// Base URL for the API (configurable via environment).
fn base_url() -> String {
    std::env::var("NOVASTORE_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string())
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_contact_rate_limit_trips_after_burst() {
    let client = Client::new();
    let mut statuses = Vec::new();

    // Honeypot bodies are accepted without touching SMTP, but still count
    // against the limiter
    for _ in 0..10 {
        let resp = client
            .post(format!("{}/contact", base_url()))
            .json(&json!({
                "name": "Flood",
                "email": "flood@example.com",
                "message": "hello",
                "company": "Flood Inc"
            }))
            .send()
            .await
            .expect("Failed to post contact form");
        statuses.push(resp.status());
    }

    // Burst capacity is 5, so a rapid burst of 10 must trip the limiter
    assert_eq!(statuses.first(), Some(&StatusCode::OK));
    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS));
}
