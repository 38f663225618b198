//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /               - Home page
//! GET  /services       - Service catalogue
//! GET  /pricing        - Pricing table
//! GET  /testimonials   - Client testimonials
//!
//! # Auth
//! GET  /login          - Identity page (sign-in + sign-up forms)
//! POST /login          - Sign in
//! POST /signup         - Sign up
//! POST /logout         - Sign out
//!
//! # Booking (requires auth)
//! GET  /book           - Booking form
//! POST /book           - Create booking
//! GET  /profile        - Account overview and booking list
//!
//! # Health
//! GET  /health         - Liveness (registered in `app`)
//! GET  /health/ready   - Readiness (registered in `app`)
//!
//! Anything else redirects to /.
//! ```

pub mod auth;
pub mod book;
pub mod home;
pub mod pricing;
pub mod profile;
pub mod services;
pub mod testimonials;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Wildcard handler: anything unrecognized goes home.
async fn not_found() -> Redirect {
    Redirect::to("/")
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/signup", post(auth::signup))
        .route("/logout", post(auth::logout))
}

/// Create the booking routes router (handlers self-guard via `RequireAuth`).
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/book", get(book::new_booking_page).post(book::create_booking))
        .route("/profile", get(profile::profile))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Marketing pages
        .route("/", get(home::home))
        .route("/services", get(services::services))
        .route("/pricing", get(pricing::pricing))
        .route("/testimonials", get(testimonials::testimonials))
        // Auth routes
        .merge(auth_routes())
        // Booking flow
        .merge(booking_routes())
        // Unknown paths go home
        .fallback(not_found)
}
