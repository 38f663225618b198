//! PawPath Site - Marketing pages and booking flow.
//!
//! This binary serves the public site on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with Askama templates for server-side rendering
//! - tower-sessions for signed-cookie sessions
//! - Two interchangeable persistence backends:
//!   - `local` - JSON files on disk, fabricated identities (default)
//!   - `postgres` - `PostgreSQL` with real credentials and a `profiles`
//!     mirror table
//!
//! Select the backend with `SITE_BACKEND=local|postgres`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use sentry::integrations::tracing as sentry_tracing;
use tower_sessions::MemoryStore;
use tower_sessions_sqlx_store::PostgresStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pawpath_site::app::build_router;
use pawpath_site::config::{BackendKind, SiteConfig};
use pawpath_site::middleware::create_session_layer;
use pawpath_site::state::AppState;
use pawpath_site::db;
use pawpath_site::store::{Backend, LocalStore};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &SiteConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = SiteConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pawpath_site=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let app = match config.backend {
        BackendKind::Postgres => postgres_app(&config).await,
        BackendKind::Local => local_app(&config).await,
    };

    // Sentry layers (outermost for full request coverage)
    let app = app
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("site listening on {} ({:?} backend)", addr, config.backend);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Assemble the application against the postgres backend.
async fn postgres_app(config: &SiteConfig) -> Router {
    let database_url = config
        .database_url
        .as_ref()
        .expect("SITE_DATABASE_URL is required for the postgres backend");

    let pool = db::create_pool(database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // NOTE: Application migrations are NOT run automatically on startup.
    // Run them explicitly via: cargo run -p pawpath-cli -- migrate

    // The session store manages its own schema.
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to migrate session store");

    let session_layer = create_session_layer(session_store, config);
    let state = AppState::new(config.clone(), Backend::Postgres(pool));

    build_router(state, session_layer)
}

/// Assemble the application against the local file-backed backend.
async fn local_app(config: &SiteConfig) -> Router {
    let store = LocalStore::open(&config.data_dir)
        .await
        .expect("Failed to open local store");

    let session_layer = create_session_layer(MemoryStore::default(), config);
    let state = AppState::new(config.clone(), Backend::Local(store));

    build_router(state, session_layer)
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
