//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side failures to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`; every error response body is a JSON object with a
//! single `error` field.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::{AccountError, CatalogError, MailerError, OrderError};

/// Contact form failures.
#[derive(Debug, Error)]
pub enum ContactError {
    /// A required form field is missing or empty.
    #[error("name, email or message is missing")]
    MissingFields,

    /// No SMTP relay is configured for this deployment.
    #[error("contact mailer is not configured")]
    NotConfigured,

    /// Rendering or relaying the message failed.
    #[error("contact relay failed: {0}")]
    Send(#[from] MailerError),
}

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Account operation failed.
    #[error("Account error: {0}")]
    Account(#[from] AccountError),

    /// Order operation failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Contact relay failed.
    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Catalog(err) => match err {
                CatalogError::InvalidId => StatusCode::BAD_REQUEST,
                CatalogError::NotFound => StatusCode::NOT_FOUND,
                CatalogError::SeedFailed(_) | CatalogError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Account(err) => match err {
                AccountError::MissingSignupFields
                | AccountError::MissingCredentials
                | AccountError::InvalidUserId
                | AccountError::CurrentPasswordRequired
                | AccountError::NewPasswordTooShort => StatusCode::BAD_REQUEST,
                AccountError::InvalidCredentials | AccountError::CurrentPasswordIncorrect => {
                    StatusCode::UNAUTHORIZED
                }
                AccountError::EmailTaken | AccountError::EmailInUse => StatusCode::CONFLICT,
                AccountError::UserNotFound => StatusCode::NOT_FOUND,
                AccountError::Repository(_) | AccountError::PasswordHash => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Order(err) => match err {
                OrderError::LoginRequired => StatusCode::UNAUTHORIZED,
                // A missing or malformed buyer reads as a bad order payload,
                // not as a missing resource.
                OrderError::InvalidPayload
                | OrderError::InvalidUserId
                | OrderError::UserNotFound => StatusCode::BAD_REQUEST,
                OrderError::InvalidOrderData(_)
                | OrderError::Storage(_)
                | OrderError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Contact(err) => match err {
                ContactError::MissingFields => StatusCode::BAD_REQUEST,
                ContactError::NotConfigured | ContactError::Send(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Catalog(err) => match err {
                CatalogError::InvalidId => "Invalid id",
                CatalogError::NotFound => "Not found",
                CatalogError::SeedFailed(_) => "Seed failed",
                CatalogError::Repository(_) => "Internal server error",
            },
            Self::Account(err) => match err {
                AccountError::MissingSignupFields => "name, email, password are required",
                AccountError::EmailTaken => "Email already exists",
                AccountError::MissingCredentials => "Missing email or password",
                AccountError::InvalidCredentials => "Invalid email or password",
                AccountError::InvalidUserId => "Invalid userId",
                AccountError::UserNotFound => "User not found",
                AccountError::EmailInUse => "Email already in use",
                AccountError::CurrentPasswordRequired => "Current password required",
                AccountError::CurrentPasswordIncorrect => "Current password is incorrect",
                AccountError::NewPasswordTooShort => "New password must be at least 6 chars",
                AccountError::Repository(_) | AccountError::PasswordHash => "Internal server error",
            },
            Self::Order(err) => match err {
                OrderError::LoginRequired => "Login required",
                OrderError::InvalidPayload => "Invalid payload",
                OrderError::InvalidUserId => "Invalid userId",
                OrderError::UserNotFound => "User not found",
                OrderError::InvalidOrderData(_) | OrderError::Storage(_) => {
                    "Could not place the order"
                }
                OrderError::Repository(_) => "Internal server error",
            },
            Self::Contact(err) => match err {
                ContactError::MissingFields => "name, email, message are required",
                ContactError::NotConfigured | ContactError::Send(_) => "Could not send message",
            },
            Self::BadRequest(msg) => msg.as_str(),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
