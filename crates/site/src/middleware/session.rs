//! Session middleware configuration.
//!
//! Sets up signed-cookie sessions using tower-sessions. The session store is
//! chosen by the caller to match the active backend: `PostgresStore` for the
//! postgres variant, `MemoryStore` for the local variant.

use secrecy::ExposeSecret;
use tower_sessions::cookie::Key;
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

use crate::config::SiteConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "pawpath_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer over the given store.
///
/// The cookie is signed with a key derived from the configured session
/// secret; `SiteConfig` guarantees the secret is at least 32 bytes, which is
/// what key derivation requires.
#[must_use]
pub fn create_session_layer<Store: SessionStore>(
    store: Store,
    config: &SiteConfig,
) -> SessionManagerLayer<Store, SignedCookie> {
    let key = Key::derive_from(config.session_secret.expose_secret().as_bytes());

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        .with_signed(key)
}
