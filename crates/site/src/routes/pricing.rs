//! Pricing page.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;

/// A row in the pricing table.
#[derive(Clone)]
pub struct PriceRow {
    pub service: &'static str,
    pub unit: &'static str,
    pub price: &'static str,
    pub includes: &'static [&'static str],
}

/// The published price list.
#[must_use]
pub fn price_list() -> Vec<PriceRow> {
    vec![
        PriceRow {
            service: "Neighbourhood Walk",
            unit: "per 30 minutes",
            price: "$18",
            includes: &["GPS-tracked route", "Photo report", "Fresh water top-up"],
        },
        PriceRow {
            service: "Drop-in Visit",
            unit: "per visit",
            price: "$22",
            includes: &["Feeding", "Playtime", "Garden break"],
        },
        PriceRow {
            service: "Overnight Stay",
            unit: "per night",
            price: "$95",
            includes: &["Dinner and breakfast", "Last walk of the day", "Morning update"],
        },
        PriceRow {
            service: "Additional pet",
            unit: "per booking",
            price: "$6",
            includes: &["Up to six pets per visit"],
        },
    ]
}

/// Pricing page template.
#[derive(Template, WebTemplate)]
#[template(path = "pricing.html")]
pub struct PricingTemplate {
    pub user: Option<CurrentUser>,
    pub rows: Vec<PriceRow>,
}

/// Display the pricing table.
#[instrument(skip_all)]
pub async fn pricing(OptionalAuth(user): OptionalAuth) -> impl IntoResponse {
    PricingTemplate {
        user,
        rows: price_list(),
    }
}
