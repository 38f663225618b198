//! Router assembly.
//!
//! Building the router here (rather than in `main`) lets integration tests
//! drive the real application in-process with whichever session store and
//! backend they choose.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_sessions::service::SignedCookie;
use tower_sessions::{SessionManagerLayer, SessionStore};

use crate::routes;
use crate::state::AppState;

/// Build the full application router.
///
/// The session store is supplied by the caller: `PostgresStore` when running
/// against the postgres backend, `MemoryStore` for the local backend and for
/// tests.
pub fn build_router<Store: SessionStore + Clone>(
    state: AppState,
    session_layer: SessionManagerLayer<Store, SignedCookie>,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/site/static"))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the active backend before returning OK. Returns 503 Service
/// Unavailable if the backend is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.backend().health().await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
