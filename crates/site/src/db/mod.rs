//! Database operations for the postgres backend.
//!
//! # Tables
//!
//! - `users` - account rows (id, email, created_at)
//! - `user_passwords` - argon2 password hashes, one per account
//! - `profiles` - identity mirror written at sign-up (id, email, name)
//! - `bookings` - the append-only booking collection
//! - `tower_sessions.session` - session storage (created by the session store)
//!
//! Ownership restriction lives here: every booking query is scoped by
//! `user_id` inside the repository, so page code can never read another
//! account's rows.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/site/migrations/` and run via:
//! ```bash
//! cargo run -p pawpath-cli -- migrate
//! ```

pub mod bookings;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
