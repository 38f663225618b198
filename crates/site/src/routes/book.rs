//! Booking-creation route handlers.
//!
//! Both handlers self-guard with `RequireAuth`: if nobody is signed in the
//! redirect happens before any store operation, so a booking can never be
//! created without a resolvable owner.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use tracing::instrument;

use pawpath_core::{DurationMinutes, PetCount, ServiceKind};

use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{CurrentUser, NewBooking};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Raw booking form data. Everything arrives as text and is validated here,
/// before the store is involved.
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub service: String,
    pub date: String,
    pub time: String,
    pub duration_mins: String,
    pub pets: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A service option for the form's select element.
#[derive(Clone)]
pub struct ServiceOption {
    pub value: String,
    pub label: &'static str,
}

fn service_options() -> Vec<ServiceOption> {
    ServiceKind::ALL
        .iter()
        .map(|kind| ServiceOption {
            value: kind.to_string(),
            label: kind.label(),
        })
        .collect()
}

// =============================================================================
// Templates
// =============================================================================

/// Booking form template.
#[derive(Template, WebTemplate)]
#[template(path = "book/new.html")]
pub struct BookTemplate {
    pub user: Option<CurrentUser>,
    pub services: Vec<ServiceOption>,
    pub error: Option<String>,
    pub min_duration: i32,
    pub max_duration: i32,
    pub max_pets: i32,
}

impl BookTemplate {
    fn new(user: CurrentUser, error: Option<String>) -> Self {
        Self {
            user: Some(user),
            services: service_options(),
            error,
            min_duration: DurationMinutes::MIN,
            max_duration: DurationMinutes::MAX,
            max_pets: PetCount::MAX,
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Turn the raw form into a validated booking request.
///
/// Field checks run in form order and the first failure wins, mirroring how
/// the form reads top to bottom.
fn validate_form(form: &BookingForm, user: &CurrentUser) -> Result<NewBooking, String> {
    let service: ServiceKind = form
        .service
        .parse()
        .map_err(|_| "Please choose a service.".to_owned())?;

    let date_raw = form.date.trim();
    if date_raw.is_empty() {
        return Err("Please pick a date.".to_owned());
    }
    let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
        .map_err(|_| "That date doesn't look right.".to_owned())?;

    let time_raw = form.time.trim();
    if time_raw.is_empty() {
        return Err("Please pick a time.".to_owned());
    }
    let start_time = NaiveTime::parse_from_str(time_raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time_raw, "%H:%M:%S"))
        .map_err(|_| "That time doesn't look right.".to_owned())?;

    let duration = form
        .duration_mins
        .trim()
        .parse::<i32>()
        .ok()
        .and_then(|m| DurationMinutes::new(m).ok())
        .ok_or_else(|| {
            format!(
                "Duration must be between {} and {} minutes.",
                DurationMinutes::MIN,
                DurationMinutes::MAX
            )
        })?;

    let pets = form
        .pets
        .trim()
        .parse::<i32>()
        .ok()
        .and_then(|p| PetCount::new(p).ok())
        .ok_or_else(|| {
            format!(
                "Pet count must be between {} and {}.",
                PetCount::MIN,
                PetCount::MAX
            )
        })?;

    let notes = form
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_owned);

    Ok(NewBooking {
        owner: user.id,
        service,
        date,
        start_time,
        duration,
        pets,
        notes,
    })
}

// =============================================================================
// Routes
// =============================================================================

/// Display the booking form.
#[instrument(skip_all)]
pub async fn new_booking_page(RequireAuth(user): RequireAuth) -> impl IntoResponse {
    BookTemplate::new(user, None)
}

/// Handle booking form submission.
///
/// Validation failures re-render the form with an inline message and never
/// touch the store. Store failures surface inline too; there is no retry.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn create_booking(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<BookingForm>,
) -> Response {
    let new_booking = match validate_form(&form, &user) {
        Ok(new_booking) => new_booking,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, BookTemplate::new(user, Some(message)))
                .into_response();
        }
    };

    match state.backend().create_booking(new_booking).await {
        Ok(booking) => {
            tracing::info!(booking_id = %booking.id, "Booking created");
            Redirect::to("/profile?created=1").into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create booking: {e}");
            sentry::capture_error(&e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                BookTemplate::new(
                    user,
                    Some("We couldn't save your booking. Please try again in a moment.".to_owned()),
                ),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pawpath_core::{Email, UserId};

    use super::*;

    fn current_user() -> CurrentUser {
        CurrentUser {
            id: UserId::random(),
            email: Email::parse("rosie@pawpath.dog").unwrap(),
            display_name: "Rosie".to_owned(),
        }
    }

    fn valid_form() -> BookingForm {
        BookingForm {
            service: "walk".to_owned(),
            date: "2024-06-01".to_owned(),
            time: "09:00".to_owned(),
            duration_mins: "30".to_owned(),
            pets: "1".to_owned(),
            notes: None,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let user = current_user();
        let booking = validate_form(&valid_form(), &user).unwrap();

        assert_eq!(booking.owner, user.id);
        assert_eq!(booking.service, ServiceKind::Walk);
        assert_eq!(booking.duration.as_i32(), 30);
        assert_eq!(booking.notes, None);
    }

    #[test]
    fn test_missing_date_is_rejected() {
        let mut form = valid_form();
        form.date = String::new();

        let err = validate_form(&form, &current_user()).unwrap_err();
        assert!(err.contains("date"));
    }

    #[test]
    fn test_missing_time_is_rejected() {
        let mut form = valid_form();
        form.time = "  ".to_owned();

        let err = validate_form(&form, &current_user()).unwrap_err();
        assert!(err.contains("time"));
    }

    #[test]
    fn test_out_of_range_duration_is_rejected() {
        let mut form = valid_form();
        form.duration_mins = "600".to_owned();

        assert!(validate_form(&form, &current_user()).is_err());
    }

    #[test]
    fn test_out_of_range_pets_is_rejected() {
        let mut form = valid_form();
        form.pets = "9".to_owned();

        assert!(validate_form(&form, &current_user()).is_err());
    }

    #[test]
    fn test_unknown_service_is_rejected() {
        let mut form = valid_form();
        form.service = "grooming".to_owned();

        assert!(validate_form(&form, &current_user()).is_err());
    }

    #[test]
    fn test_blank_notes_become_none() {
        let mut form = valid_form();
        form.notes = Some("   ".to_owned());

        let booking = validate_form(&form, &current_user()).unwrap();
        assert_eq!(booking.notes, None);
    }

    #[test]
    fn test_time_with_seconds_is_accepted() {
        let mut form = valid_form();
        form.time = "09:00:00".to_owned();

        assert!(validate_form(&form, &current_user()).is_ok());
    }
}
