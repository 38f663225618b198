//! User repository for the postgres backend.
//!
//! Queries use the runtime sqlx API so the crate builds without a live
//! database; stored values that fail to parse back into domain types are
//! reported as data corruption rather than silently dropped.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;

use pawpath_core::{Email, UserId};

use crate::models::Identity;
use crate::store::StoreError;

/// Repository for account rows and their profile mirrors.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create an account with its password hash in one transaction.
    ///
    /// The `profiles` mirror row is NOT written here; see
    /// [`Self::create_profile`] and the sign-up flow for why the two steps
    /// are kept separate.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the email already exists, or
    /// `StoreError::Database` for other database errors.
    pub async fn create_with_password(
        &self,
        email: &Email,
        password_hash: &str,
        display_name: Option<&str>,
    ) -> Result<Identity, StoreError> {
        let identity = Identity::new(email.clone(), display_name.map(str::to_owned));

        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO users (id, email, created_at) VALUES ($1, $2, $3)")
            .bind(identity.id)
            .bind(&identity.email)
            .bind(identity.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return StoreError::Conflict("email already exists".to_owned());
                }
                StoreError::Database(e)
            })?;

        sqlx::query("INSERT INTO user_passwords (user_id, password_hash) VALUES ($1, $2)")
            .bind(identity.id)
            .bind(password_hash)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(identity)
    }

    /// Write the `profiles` mirror row for an identity.
    ///
    /// Called as a second, non-transactional step after
    /// [`Self::create_with_password`]. If it fails, the account stands
    /// without a profile; callers log and move on.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the insert fails.
    pub async fn create_profile(&self, identity: &Identity) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO profiles (id, email, name) VALUES ($1, $2, $3)")
            .bind(identity.id)
            .bind(&identity.email)
            .bind(&identity.display_name)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Get an identity and its password hash by email.
    ///
    /// Returns `None` if no account exists for the email.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails, or
    /// `StoreError::DataCorruption` if a stored email is invalid.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(Identity, String)>, StoreError> {
        let row = sqlx::query(
            r"
            SELECT u.id, u.email, u.created_at, p.password_hash, pr.name
            FROM users u
            JOIN user_passwords p ON p.user_id = u.id
            LEFT JOIN profiles pr ON pr.id = u.id
            WHERE u.email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let password_hash: String = row.try_get("password_hash")?;
        let identity = identity_from_row(&row)?;

        Ok(Some((identity, password_hash)))
    }

    /// Get an identity by its ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails, or
    /// `StoreError::DataCorruption` if a stored email is invalid.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<Identity>, StoreError> {
        let row = sqlx::query(
            r"
            SELECT u.id, u.email, u.created_at, pr.name
            FROM users u
            LEFT JOIN profiles pr ON pr.id = u.id
            WHERE u.id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.as_ref().map(identity_from_row).transpose()
    }
}

/// Map a joined user row into an [`Identity`].
///
/// Accounts whose profile write failed at sign-up have no `name`; the email
/// local part stands in, matching the default at identity creation.
fn identity_from_row(row: &PgRow) -> Result<Identity, StoreError> {
    let raw_email: String = row.try_get("email")?;
    let email = Email::parse(&raw_email)
        .map_err(|e| StoreError::DataCorruption(format!("invalid email in database: {e}")))?;

    let display_name: Option<String> = row.try_get("name")?;
    let display_name = display_name.unwrap_or_else(|| email.local_part().to_owned());

    let id: UserId = row.try_get("id")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(Identity {
        id,
        email,
        display_name,
        created_at,
    })
}
