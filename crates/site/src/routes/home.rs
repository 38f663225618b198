//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;
use crate::routes::services::{ServiceView, service_catalogue};
use crate::routes::testimonials::{TestimonialView, featured_testimonials};

/// Hero section copy.
#[derive(Clone)]
pub struct HeroConfig {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button_text: &'static str,
    pub button_url: &'static str,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            eyebrow: "Dog walking across the city",
            title: "Walks they'll wag about",
            subtitle: "Insured local walkers, GPS-tracked outings, and a \
                       photo report after every visit. Book in under a minute.",
            button_text: "Book a walk",
            button_url: "/book",
        }
    }
}

/// Number of testimonials to sample on the home page.
const FEATURED_TESTIMONIALS: usize = 2;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub user: Option<CurrentUser>,
    /// Hero section copy.
    pub hero: HeroConfig,
    /// The service catalogue strip.
    pub services: Vec<ServiceView>,
    /// A couple of featured testimonials.
    pub testimonials: Vec<TestimonialView>,
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn home(OptionalAuth(user): OptionalAuth) -> impl IntoResponse {
    let mut testimonials = featured_testimonials();
    testimonials.truncate(FEATURED_TESTIMONIALS);

    HomeTemplate {
        user,
        hero: HeroConfig::default(),
        services: service_catalogue(),
        testimonials,
    }
}
