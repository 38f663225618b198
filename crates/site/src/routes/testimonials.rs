//! Testimonials page.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;

/// A client testimonial for display.
#[derive(Clone)]
pub struct TestimonialView {
    pub client_name: &'static str,
    pub pet_name: &'static str,
    pub rating: i64,
    pub quote: &'static str,
}

/// Featured testimonials (static content; the review pipeline feeds these).
#[must_use]
pub fn featured_testimonials() -> Vec<TestimonialView> {
    vec![
        TestimonialView {
            client_name: "Sarah M.",
            pet_name: "Biscuit",
            rating: 5,
            quote: "Biscuit waits by the door every morning for his walker. \
                    The photo reports are the highlight of my workday.",
        },
        TestimonialView {
            client_name: "Dev P.",
            pet_name: "Luna",
            rating: 5,
            quote: "We travel a lot and the overnight stays have been a \
                    lifesaver. Luna's routine doesn't miss a beat.",
        },
        TestimonialView {
            client_name: "Amanda K.",
            pet_name: "Tank",
            rating: 5,
            quote: "Tank is a handful on the lead and they handle him \
                    brilliantly. Booking takes about thirty seconds.",
        },
        TestimonialView {
            client_name: "Jon R.",
            pet_name: "Mochi",
            rating: 4,
            quote: "Drop-in visits got our puppy through the crate-training \
                    months. Reliable, friendly, and always on time.",
        },
    ]
}

/// Testimonials page template.
#[derive(Template, WebTemplate)]
#[template(path = "testimonials.html")]
pub struct TestimonialsTemplate {
    pub user: Option<CurrentUser>,
    pub testimonials: Vec<TestimonialView>,
}

/// Display the testimonials page.
#[instrument(skip_all)]
pub async fn testimonials(OptionalAuth(user): OptionalAuth) -> impl IntoResponse {
    TestimonialsTemplate {
        user,
        testimonials: featured_testimonials(),
    }
}
