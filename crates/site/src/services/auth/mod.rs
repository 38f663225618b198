//! Authentication service.
//!
//! The identity provider for both backends. On postgres it is real
//! authentication: argon2-hashed passwords and a `profiles` mirror row
//! written at sign-up. On the local backend it *fabricates* identities -
//! sign-in for an unknown email creates the account and the password is
//! never checked, which is the specified behavior of that variant.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use pawpath_core::Email;

use crate::db::users::UserRepository;
use crate::models::Identity;
use crate::store::{Backend, StoreError};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
///
/// Handles sign-up and sign-in against the active backend. Sign-out is a
/// session concern and lives with the session helpers.
pub struct AuthService<'a> {
    backend: &'a Backend,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(backend: &'a Backend) -> Self {
        Self { backend }
    }

    /// Register a new account and return its identity.
    ///
    /// On the postgres backend this is a two-step operation: the account and
    /// password hash are committed first, then the `profiles` mirror row is
    /// written. The second step is deliberately outside the transaction; if
    /// it fails the account stands without a profile and the failure is only
    /// logged.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid,
    /// `AuthError::WeakPassword` if the password doesn't meet requirements,
    /// or `AuthError::UserAlreadyExists` if the email is already registered.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<Identity, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        match self.backend {
            Backend::Local(store) => {
                if store.identity_by_email(&email).await.is_some() {
                    return Err(AuthError::UserAlreadyExists);
                }
                let identity = store.fabricate_identity(&email, display_name).await?;
                Ok(identity)
            }
            Backend::Postgres(pool) => {
                let users = UserRepository::new(pool);
                let password_hash = hash_password(password)?;

                let identity = users
                    .create_with_password(&email, &password_hash, display_name)
                    .await
                    .map_err(|e| match e {
                        StoreError::Conflict(_) => AuthError::UserAlreadyExists,
                        other => AuthError::Store(other),
                    })?;

                // Mirror the identity into `profiles`. Not atomic with the
                // account insert: a failure here leaves an account without a
                // profile, which is tolerated.
                if let Err(e) = users.create_profile(&identity).await {
                    tracing::warn!(
                        user_id = %identity.id,
                        error = %e,
                        "Account created but profile write failed"
                    );
                }

                Ok(identity)
            }
        }
    }

    /// Sign in and return the account's identity.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is
    /// wrong (postgres backend; the local backend fabricates instead).
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let email = Email::parse(email)?;

        match self.backend {
            Backend::Local(store) => {
                // The local variant has no credentials to verify.
                let identity = store.fabricate_identity(&email, None).await?;
                Ok(identity)
            }
            Backend::Postgres(pool) => {
                let (identity, password_hash) = UserRepository::new(pool)
                    .get_password_hash(&email)
                    .await?
                    .ok_or(AuthError::InvalidCredentials)?;

                verify_password(password, &password_hash)?;

                Ok(identity)
            }
        }
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::LocalStore;

    #[test]
    fn test_validate_password_length() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("long enough").is_ok());
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password("correct horse battery", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong password!", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_local_sign_in_fabricates_an_identity() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Backend::Local(LocalStore::open(dir.path()).await.unwrap());
        let auth = AuthService::new(&backend);

        // No prior sign-up, and the password is irrelevant on this backend.
        let identity = auth.sign_in("rosie@pawpath.dog", "anything").await.unwrap();
        assert_eq!(identity.email.as_str(), "rosie@pawpath.dog");

        let again = auth.sign_in("rosie@pawpath.dog", "different").await.unwrap();
        assert_eq!(again.id, identity.id);
    }

    #[tokio::test]
    async fn test_local_sign_up_rejects_duplicate_email() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Backend::Local(LocalStore::open(dir.path()).await.unwrap());
        let auth = AuthService::new(&backend);

        auth.sign_up("rosie@pawpath.dog", "password123", Some("Rosie"))
            .await
            .unwrap();
        let result = auth.sign_up("rosie@pawpath.dog", "password123", None).await;

        assert!(matches!(result, Err(AuthError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_sign_up_validates_before_touching_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Backend::Local(LocalStore::open(dir.path()).await.unwrap());
        let auth = AuthService::new(&backend);

        assert!(matches!(
            auth.sign_up("not-an-email", "password123", None).await,
            Err(AuthError::InvalidEmail(_))
        ));
        assert!(matches!(
            auth.sign_up("rosie@pawpath.dog", "short", None).await,
            Err(AuthError::WeakPassword(_))
        ));
    }
}
