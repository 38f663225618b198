//! HTTP middleware stack for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, trace requests)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions; store depends on the active backend)
//!
//! Route gating is not a layer: gated handlers take the [`RequireAuth`]
//! extractor, which answers with a redirect before any handler logic runs.

pub mod auth;
pub mod session;

pub use auth::{OptionalAuth, RequireAuth, clear_current_user, set_current_user};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
