//! Account service: signup, login and profile updates.
//!
//! Passwords are stored as Argon2id hashes; plaintext never leaves the
//! request scope.

mod error;

pub use error::AccountError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use novastore_core::UserId;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::user::{LoginRequest, NewUser, SignupRequest, UpdateProfileRequest, UserProfile};

/// Minimum password length for password changes.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Account service.
///
/// Handles customer signup, login and profile updates.
pub struct AccountService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AccountService<'a> {
    /// Create a new account service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new customer account.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::MissingSignupFields` if name, email or password
    /// is absent or empty.
    /// Returns `AccountError::EmailTaken` if the email is already registered.
    pub async fn signup(&self, request: SignupRequest) -> Result<UserProfile, AccountError> {
        let name = present(request.name.as_deref()).ok_or(AccountError::MissingSignupFields)?;
        let email = present(request.email.as_deref()).ok_or(AccountError::MissingSignupFields)?;
        let password =
            present(request.password.as_deref()).ok_or(AccountError::MissingSignupFields)?;

        let password_hash = hash_password(password)?;

        // The unique index on email is the single source of truth for
        // duplicates; a concurrent signup with the same email surfaces as
        // Conflict here rather than a crash.
        let user = self
            .users
            .create(&NewUser {
                name,
                email,
                password_hash: &password_hash,
                phone: request.phone.as_deref().unwrap_or(""),
                address: request.address.as_deref().unwrap_or(""),
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AccountError::EmailTaken,
                other => AccountError::Repository(other),
            })?;

        Ok(user.into())
    }

    /// Verify credentials and return the account's public profile.
    ///
    /// Unknown email and wrong password are indistinguishable from the
    /// caller's side.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::MissingCredentials` if email or password is
    /// absent or empty.
    /// Returns `AccountError::InvalidCredentials` if they do not match an
    /// account.
    pub async fn login(&self, request: LoginRequest) -> Result<UserProfile, AccountError> {
        let email = present(request.email.as_deref()).ok_or(AccountError::MissingCredentials)?;
        let password =
            present(request.password.as_deref()).ok_or(AccountError::MissingCredentials)?;

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;

        Ok(user.into())
    }

    /// Apply a partial profile update to the account with this ID.
    ///
    /// Supplied text fields are trimmed and assigned; omitted fields stay
    /// untouched. An email change is checked against other accounts first.
    /// A password change requires the current password and happens only
    /// after it verifies.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidUserId` if the ID is not a valid
    /// identifier.
    /// Returns `AccountError::UserNotFound` if the ID does not resolve to an
    /// account.
    /// Returns `AccountError::EmailInUse` if another account holds the new
    /// email.
    /// Returns `AccountError::CurrentPasswordRequired`,
    /// `AccountError::CurrentPasswordIncorrect` or
    /// `AccountError::NewPasswordTooShort` for a failed password change.
    pub async fn update_profile(
        &self,
        id: &str,
        request: UpdateProfileRequest,
    ) -> Result<UserProfile, AccountError> {
        let Ok(id) = UserId::parse(id) else {
            return Err(AccountError::InvalidUserId);
        };

        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        if let Some(name) = &request.name {
            user.name = name.trim().to_owned();
        }
        if let Some(phone) = &request.phone {
            user.phone = phone.trim().to_owned();
        }
        if let Some(address) = &request.address {
            user.address = address.trim().to_owned();
        }

        if let Some(email) = &request.email
            && !email.trim().is_empty()
            && *email != user.email
        {
            if let Some(existing) = self.users.find_by_email(email).await?
                && existing.id != user.id
            {
                return Err(AccountError::EmailInUse);
            }
            user.email = email.trim().to_owned();
        }

        if let Some(new_password) = present(request.new_password.as_deref()) {
            let current = present(request.current_password.as_deref())
                .ok_or(AccountError::CurrentPasswordRequired)?;

            verify_password(current, &user.password_hash)
                .map_err(|_| AccountError::CurrentPasswordIncorrect)?;

            if new_password.chars().count() < MIN_PASSWORD_LENGTH {
                return Err(AccountError::NewPasswordTooShort);
            }

            user.password_hash = hash_password(new_password)?;
        }

        let user = self.users.update(&user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => AccountError::EmailInUse,
            other => AccountError::Repository(other),
        })?;

        Ok(user.into())
    }
}

// =============================================================================
// Password Helpers
// =============================================================================

/// Treat empty strings like missing fields.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AccountError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AccountError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AccountError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AccountError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sqlx::postgres::PgPoolOptions;

    use super::*;

    fn lazy_pool() -> PgPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/novastore_test")
            .unwrap()
    }

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = hash_password("correct horse battery staple").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse battery staple", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong password", &hash).unwrap_err(),
            AccountError::InvalidCredentials
        ));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Salted hashing: two hashes of one password must differ.
        let first = hash_password("hunter2-hunter2").unwrap();
        let second = hash_password("hunter2-hunter2").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_present_rejects_empty_strings() {
        assert_eq!(present(Some("x")), Some("x"));
        assert_eq!(present(Some("")), None);
        assert_eq!(present(None), None);
    }

    #[tokio::test]
    async fn test_signup_requires_all_mandatory_fields() {
        let pool = lazy_pool();
        let service = AccountService::new(&pool);

        for request in [
            SignupRequest {
                email: Some("a@b.c".to_string()),
                password: Some("secret1".to_string()),
                ..SignupRequest::default()
            },
            SignupRequest {
                name: Some("Ada".to_string()),
                password: Some("secret1".to_string()),
                ..SignupRequest::default()
            },
            SignupRequest {
                name: Some("Ada".to_string()),
                email: Some("a@b.c".to_string()),
                ..SignupRequest::default()
            },
            SignupRequest {
                name: Some("Ada".to_string()),
                email: Some("a@b.c".to_string()),
                password: Some(String::new()),
                ..SignupRequest::default()
            },
        ] {
            let err = service.signup(request).await.unwrap_err();
            assert!(matches!(err, AccountError::MissingSignupFields));
        }
    }

    #[tokio::test]
    async fn test_login_requires_both_credentials() {
        let pool = lazy_pool();
        let service = AccountService::new(&pool);

        let err = service
            .login(LoginRequest {
                email: Some("a@b.c".to_string()),
                password: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::MissingCredentials));

        let err = service
            .login(LoginRequest {
                email: None,
                password: Some("secret1".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::MissingCredentials));
    }

    #[tokio::test]
    async fn test_update_profile_rejects_malformed_id() {
        let pool = lazy_pool();
        let service = AccountService::new(&pool);

        let err = service
            .update_profile("definitely-not-a-uuid", UpdateProfileRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::InvalidUserId));
    }
}
