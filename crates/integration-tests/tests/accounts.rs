//! Integration tests for account signup, login, and profile updates.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p novastore-server)
//!
//! Run with: cargo test -p novastore-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
fn base_url() -> String {
    std::env::var("NOVASTORE_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string())
}

/// Unique email per call so test runs never collide.
fn unique_email(tag: &str) -> String {
    format!("{tag}-{}@example.com", Uuid::new_v4())
}

/// Test helper: sign up a fresh shopper and return the profile body.
async fn signup(client: &Client, email: &str, password: &str) -> Value {
    let resp = client
        .post(format!("{}/auth/signup", base_url()))
        .json(&json!({ "name": "Test Shopper", "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to sign up");
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to read signup body")
}

// ============================================================================
// Signup & Login Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_signup_login_round_trip() {
    let client = Client::new();
    let email = unique_email("roundtrip");

    let profile = signup(&client, &email, "sunset-gadget-42").await;
    assert_eq!(profile["email"], email.as_str());
    assert_eq!(profile["name"], "Test Shopper");
    // The profile must never carry credential material
    assert!(profile.get("password").is_none());
    assert!(profile.get("passwordHash").is_none());

    let resp = client
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({ "email": email, "password": "sunset-gadget-42" }))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to read login body");
    assert_eq!(body["id"], profile["id"]);
    assert!(body.get("passwordHash").is_none());
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_signup_rejects_duplicate_email() {
    let client = Client::new();
    let email = unique_email("dup");

    signup(&client, &email, "first-password").await;

    let resp = client
        .post(format!("{}/auth/signup", base_url()))
        .json(&json!({ "name": "Copycat", "email": email, "password": "other-password" }))
        .send()
        .await
        .expect("Failed to send duplicate signup");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = resp.json().await.expect("Failed to read conflict body");
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_signup_rejects_missing_fields() {
    let client = Client::new();

    let resp = client
        .post(format!("{}/auth/signup", base_url()))
        .json(&json!({ "email": unique_email("incomplete") }))
        .send()
        .await
        .expect("Failed to send incomplete signup");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], "name, email, password are required");
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_login_rejects_wrong_password() {
    let client = Client::new();
    let email = unique_email("wrongpw");

    signup(&client, &email, "correct-password").await;

    let resp = client
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({ "email": email, "password": "incorrect-password" }))
        .send()
        .await
        .expect("Failed to send login");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_login_rejects_unknown_email() {
    let client = Client::new();

    let resp = client
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({ "email": unique_email("ghost"), "password": "whatever-pw" }))
        .send()
        .await
        .expect("Failed to send login");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Unknown email and wrong password are indistinguishable from outside
    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_login_rejects_missing_credentials() {
    let client = Client::new();

    let resp = client
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send empty login");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], "Missing email or password");
}

// ============================================================================
// Profile Update Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_update_phone_only_preserves_other_fields() {
    let client = Client::new();
    let email = unique_email("phone");
    let profile = signup(&client, &email, "stable-password").await;
    let id = profile["id"].as_str().expect("Profile has no id");

    let resp = client
        .patch(format!("{}/users/{id}", base_url()))
        .json(&json!({ "phone": "555-0100" }))
        .send()
        .await
        .expect("Failed to patch profile");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to read updated profile");
    assert_eq!(body["phone"], "555-0100");
    assert_eq!(body["name"], "Test Shopper");
    assert_eq!(body["email"], email.as_str());
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_update_unknown_user_not_found() {
    let client = Client::new();

    let resp = client
        .patch(format!("{}/users/{}", base_url(), Uuid::new_v4()))
        .json(&json!({ "phone": "555-0199" }))
        .send()
        .await
        .expect("Failed to patch unknown user");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_update_malformed_user_id_rejected() {
    let client = Client::new();

    let resp = client
        .patch(format!("{}/users/not-a-valid-id", base_url()))
        .json(&json!({ "phone": "555-0199" }))
        .send()
        .await
        .expect("Failed to patch malformed user id");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], "Invalid userId");
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_update_rejects_email_already_in_use() {
    let client = Client::new();
    let first_email = unique_email("holder");
    let second_email = unique_email("mover");

    signup(&client, &first_email, "holder-password").await;
    let second = signup(&client, &second_email, "mover-password").await;
    let id = second["id"].as_str().expect("Profile has no id");

    let resp = client
        .patch(format!("{}/users/{id}", base_url()))
        .json(&json!({ "email": first_email }))
        .send()
        .await
        .expect("Failed to patch email");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = resp.json().await.expect("Failed to read conflict body");
    assert_eq!(body["error"], "Email already in use");
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_password_change_requires_current_password() {
    let client = Client::new();
    let email = unique_email("nocurrent");
    let profile = signup(&client, &email, "original-password").await;
    let id = profile["id"].as_str().expect("Profile has no id");

    let resp = client
        .patch(format!("{}/users/{id}", base_url()))
        .json(&json!({ "newPassword": "replacement-password" }))
        .send()
        .await
        .expect("Failed to patch password");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], "Current password required");

    // The rejected change must not have touched the stored credential
    let resp = client
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({ "email": email, "password": "original-password" }))
        .send()
        .await
        .expect("Failed to log in after rejected change");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_password_change_round_trip() {
    let client = Client::new();
    let email = unique_email("rotate");
    let profile = signup(&client, &email, "original-password").await;
    let id = profile["id"].as_str().expect("Profile has no id");

    let resp = client
        .patch(format!("{}/users/{id}", base_url()))
        .json(&json!({
            "currentPassword": "original-password",
            "newPassword": "rotated-password"
        }))
        .send()
        .await
        .expect("Failed to patch password");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({ "email": email, "password": "rotated-password" }))
        .send()
        .await
        .expect("Failed to log in with new password");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{}/auth/login", base_url()))
        .json(&json!({ "email": email, "password": "original-password" }))
        .send()
        .await
        .expect("Failed to log in with old password");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_password_change_rejects_wrong_current() {
    let client = Client::new();
    let email = unique_email("wrongcurrent");
    let profile = signup(&client, &email, "original-password").await;
    let id = profile["id"].as_str().expect("Profile has no id");

    let resp = client
        .patch(format!("{}/users/{id}", base_url()))
        .json(&json!({
            "currentPassword": "not-the-password",
            "newPassword": "replacement-password"
        }))
        .send()
        .await
        .expect("Failed to patch password");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], "Current password is incorrect");
}

#[tokio::test]
#[ignore = "Requires running server and PostgreSQL"]
async fn test_password_change_rejects_short_replacement() {
    let client = Client::new();
    let email = unique_email("short");
    let profile = signup(&client, &email, "original-password").await;
    let id = profile["id"].as_str().expect("Profile has no id");

    let resp = client
        .patch(format!("{}/users/{id}", base_url()))
        .json(&json!({
            "currentPassword": "original-password",
            "newPassword": "tiny"
        }))
        .send()
        .await
        .expect("Failed to patch password");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], "New password must be at least 6 chars");
}
