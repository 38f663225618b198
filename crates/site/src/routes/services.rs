//! Service catalogue page.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use pawpath_core::ServiceKind;

use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;

/// Service display data for templates.
#[derive(Clone)]
pub struct ServiceView {
    pub kind: ServiceKind,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub duration_blurb: &'static str,
    pub price_from: &'static str,
}

/// The full service catalogue shown on `/services` and sampled on the
/// home page.
#[must_use]
pub fn service_catalogue() -> Vec<ServiceView> {
    vec![
        ServiceView {
            kind: ServiceKind::Walk,
            title: "Neighbourhood Walks",
            tagline: "Daily exercise on your dog's favourite route",
            description: "A solo walk with one of our insured walkers, \
                          tailored to your dog's pace. GPS-tracked with a \
                          photo report after every outing.",
            duration_blurb: "20 to 120 minutes",
            price_from: "$18",
        },
        ServiceView {
            kind: ServiceKind::DropIn,
            title: "Drop-in Visits",
            tagline: "A midday check-in when you can't get home",
            description: "Feeding, fresh water, playtime, and a garden \
                          break. Ideal for puppies on a schedule or cats \
                          who'd rather stay in.",
            duration_blurb: "20 to 60 minutes",
            price_from: "$22",
        },
        ServiceView {
            kind: ServiceKind::Overnight,
            title: "Overnight Stays",
            tagline: "Company from dusk till dawn",
            description: "A sitter stays in your home overnight so routines \
                          stay unbroken: dinner, last walk, breakfast, and \
                          plenty of couch time.",
            duration_blurb: "Evening to morning",
            price_from: "$95",
        },
    ]
}

/// Services page template.
#[derive(Template, WebTemplate)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub user: Option<CurrentUser>,
    pub services: Vec<ServiceView>,
}

/// Display the service catalogue.
#[instrument(skip_all)]
pub async fn services(OptionalAuth(user): OptionalAuth) -> impl IntoResponse {
    ServicesTemplate {
        user,
        services: service_catalogue(),
    }
}
