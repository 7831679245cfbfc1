//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET   /health            - Liveness probe
//! GET   /health/ready      - Readiness probe (database round trip)
//!
//! # Catalog
//! GET   /products          - Full catalog listing
//! GET   /products/{id}     - Product detail
//! POST  /seed              - Destructive catalog reseed
//!
//! # Accounts
//! POST  /auth/signup       - Create an account
//! POST  /auth/login        - Verify credentials
//! PATCH /users/{id}        - Partial profile update
//!
//! # Orders
//! POST  /orders            - Place an order
//! GET   /my/orders?userId= - Order history, newest first
//!
//! # Contact
//! POST  /contact           - Relay a message to the shop inbox (rate limited)
//! ```

pub mod auth;
pub mod catalog;
pub mod contact;
pub mod orders;
pub mod users;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::middleware::contact_rate_limiter;
use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/{id}", get(catalog::show))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .nest("/products", catalog_routes())
        .route("/seed", post(catalog::reseed))
        // Accounts
        .nest("/auth", auth_routes())
        .route("/users/{id}", patch(users::update))
        // Orders
        .route("/orders", post(orders::place))
        .route("/my/orders", get(orders::mine))
        // Contact (the limiter applies to this route only)
        .route(
            "/contact",
            post(contact::submit).layer(contact_rate_limiter()),
        )
}
