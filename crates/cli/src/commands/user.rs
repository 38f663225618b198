//! Account provisioning command.
//!
//! Creates an account on the postgres backend through the same sign-up path
//! the site uses, profile mirror row included.

use pawpath_site::db;
use pawpath_site::services::AuthService;
use pawpath_site::store::Backend;

use super::{CommandError, database_url};

/// Create an account with the given credentials.
///
/// # Errors
///
/// Returns an error if the database is unreachable or sign-up fails
/// (duplicate email, weak password).
pub async fn create(email: &str, password: &str, name: Option<&str>) -> Result<(), CommandError> {
    let url = database_url()?;

    let pool = db::create_pool(&url).await?;
    let backend = Backend::Postgres(pool);

    let identity = AuthService::new(&backend)
        .sign_up(email, password, name)
        .await?;

    tracing::info!(
        id = %identity.id,
        email = %identity.email,
        "Account created"
    );
    Ok(())
}
