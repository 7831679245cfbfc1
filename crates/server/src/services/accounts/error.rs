//! Account error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Signup payload is missing name, email or password.
    #[error("signup requires name, email and password")]
    MissingSignupFields,

    /// Email is already registered.
    #[error("email already registered")]
    EmailTaken,

    /// Login payload is missing email or password.
    #[error("login requires email and password")]
    MissingCredentials,

    /// Invalid credentials (wrong password or user not found).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The supplied user ID is not a valid identifier.
    #[error("invalid user id")]
    InvalidUserId,

    /// User not found.
    #[error("user not found")]
    UserNotFound,

    /// Requested email already belongs to another account.
    #[error("email already in use")]
    EmailInUse,

    /// Password change attempted without the current password.
    #[error("current password required")]
    CurrentPasswordRequired,

    /// Current password did not match.
    #[error("current password incorrect")]
    CurrentPasswordIncorrect,

    /// Replacement password is below the minimum length.
    #[error("new password too short")]
    NewPasswordTooShort,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
