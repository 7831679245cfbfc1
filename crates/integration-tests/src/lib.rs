//! Integration tests for NovaStore.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL and apply migrations
//! cargo run -p novastore-cli -- migrate
//!
//! # Start the API server
//! cargo run -p novastore-server
//!
//! # Run integration tests
//! cargo test -p novastore-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `accounts` - Signup, login, and profile update tests
//! - `catalog` - Product browsing and reseed tests
//! - `contact` - Contact form relay tests
//! - `orders` - Checkout and order history tests
//! - `rate_limit` - Contact rate limiter test (floods the limiter, own binary)
//!
//! Every test targets a live server; set `NOVASTORE_BASE_URL` to point the
//! suite somewhere other than `http://localhost:4000`.
