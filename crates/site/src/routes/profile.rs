//! Profile route handler.
//!
//! Requires authentication; shows the signed-in account and its bookings.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{Booking, CurrentUser};
use crate::state::AppState;

/// Query parameters for the post-creation banner.
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    #[serde(default)]
    pub created: Option<String>,
}

/// A booking row for the profile page.
pub struct BookingView {
    pub service: &'static str,
    pub date: String,
    pub time: String,
    pub duration_mins: i32,
    pub pets: i32,
    pub notes: Option<String>,
}

impl From<&Booking> for BookingView {
    fn from(booking: &Booking) -> Self {
        Self {
            service: booking.service.label(),
            date: booking.date.format("%-d %B %Y").to_string(),
            time: booking.start_time.format("%H:%M").to_string(),
            duration_mins: booking.duration.as_i32(),
            pets: booking.pets.as_i32(),
            notes: booking.notes.clone(),
        }
    }
}

/// Profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "profile/index.html")]
pub struct ProfileTemplate {
    pub user: Option<CurrentUser>,
    pub display_name: String,
    pub email: String,
    pub bookings: Vec<BookingView>,
    pub created: bool,
    /// Set when loading the booking list failed; there is no retry control.
    pub load_error: bool,
}

/// Display the profile page with the account's bookings.
///
/// A failed list leaves the page rendered with an error banner and no
/// bookings; the account details still show.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<ProfileQuery>,
) -> impl IntoResponse {
    let (bookings, load_error) = match state.backend().bookings_for_owner(user.id).await {
        Ok(bookings) => (bookings.iter().map(BookingView::from).collect(), false),
        Err(e) => {
            tracing::error!("Failed to list bookings: {e}");
            sentry::capture_error(&e);
            (Vec::new(), true)
        }
    };

    ProfileTemplate {
        display_name: user.display_name.clone(),
        email: user.email.to_string(),
        user: Some(user),
        bookings,
        created: query.created.is_some(),
        load_error,
    }
}
