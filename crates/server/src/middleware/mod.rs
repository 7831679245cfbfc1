//! HTTP middleware stack for the API.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, start transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. CORS (permissive; the API serves browser clients on other origins)
//! 4. Rate limiting (governor, contact route only)
//!
//! The `AppJson` extractor also lives here; it is applied per-handler
//! rather than as a layer.

pub mod json;
pub mod rate_limit;

pub use json::AppJson;
pub use rate_limit::contact_rate_limiter;
