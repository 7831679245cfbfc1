//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::services::ContactMailer;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool and the contact mailer.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
    mailer: Option<ContactMailer>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `pool` - `PostgreSQL` connection pool
    /// * `mailer` - SMTP relay for the contact form, when configured
    #[must_use]
    pub fn new(pool: PgPool, mailer: Option<ContactMailer>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool, mailer }),
        }
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get the contact mailer, if SMTP is configured for this deployment.
    #[must_use]
    pub fn mailer(&self) -> Option<&ContactMailer> {
        self.inner.mailer.as_ref()
    }
}
