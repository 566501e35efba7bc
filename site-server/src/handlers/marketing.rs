//! Marketing content handlers - pricing plans and testimonials
//!
//! Thin lookups into the validated translation catalogs. Prices are static;
//! only names, taglines, features and quotes vary per locale.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppResult, AppState};

const PLAN_CODES: &[&str] = &["s", "m", "l"];

/// Static monthly prices in euro cents, by plan code
fn monthly_price_cents(code: &str) -> u32 {
    match code {
        "s" => 499,
        "m" => 999,
        _ => 1499,
    }
}

#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

// ============================================================================
// PLANS
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PlanInfo {
    pub code: &'static str,
    pub name: String,
    pub tagline: String,
    pub features: Vec<String>,
    pub monthly_price_cents: u32,
}

#[derive(Debug, Serialize)]
pub struct PlansResponse {
    pub locale: String,
    pub plans: Vec<PlanInfo>,
}

pub async fn plans(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> AppResult<Json<PlansResponse>> {
    let translations = &state.translations;
    let locale = translations
        .resolve_locale(query.locale.as_deref())
        .to_string();

    let plans = PLAN_CODES
        .iter()
        .map(|&code| {
            let name_key = format!("plans.{}.name", code);
            let tagline_key = format!("plans.{}.tagline", code);
            let features_key = format!("plans.{}.features", code);
            PlanInfo {
                code,
                name: translations.get(&locale, &name_key).to_string(),
                tagline: translations.get(&locale, &tagline_key).to_string(),
                features: translations.get_list(&locale, &features_key).to_vec(),
                monthly_price_cents: monthly_price_cents(code),
            }
        })
        .collect();

    Ok(Json(PlansResponse { locale, plans }))
}

// ============================================================================
// TESTIMONIALS
// ============================================================================

#[derive(Debug, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

#[derive(Debug, Serialize)]
pub struct TestimonialsResponse {
    pub locale: String,
    pub testimonials: Vec<Testimonial>,
}

pub async fn testimonials(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> AppResult<Json<TestimonialsResponse>> {
    let translations = &state.translations;
    let locale = translations
        .resolve_locale(query.locale.as_deref())
        .to_string();

    let quotes = translations.get_list(&locale, "testimonials.quotes");
    let authors = translations.get_list(&locale, "testimonials.authors");

    let testimonials = quotes
        .iter()
        .zip(authors.iter())
        .map(|(quote, author)| Testimonial {
            quote: quote.clone(),
            author: author.clone(),
        })
        .collect();

    Ok(Json(TestimonialsResponse { locale, testimonials }))
}
