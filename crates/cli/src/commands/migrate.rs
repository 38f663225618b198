//! Database migration command.
//!
//! Applies the migrations embedded from `crates/site/migrations/` to the
//! postgres backend. The local backend has no schema to migrate.
//!
//! # Environment Variables
//!
//! - `SITE_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string

use secrecy::ExposeSecret;
use sqlx::PgPool;

use super::{CommandError, database_url};

/// Run pending migrations against the site database.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or a migration fails to apply.
pub async fn run() -> Result<(), CommandError> {
    let url = database_url()?;

    tracing::info!("Connecting to site database...");
    let pool = PgPool::connect(url.expose_secret()).await?;

    tracing::info!("Running site migrations...");
    sqlx::migrate!("../site/migrations").run(&pool).await?;

    tracing::info!("Site migrations complete!");
    Ok(())
}
