use axum::{extract::State, routing::get, Json, Router};
use cleanpro_catalog::extras::ExtraListing;
use cleanpro_catalog::{ExtraService, Frequency, TimeSlot};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct FrequencyListing {
    frequency: Frequency,
    multiplier: Decimal,
    discount_label: Option<String>,
}

#[derive(Debug, Serialize)]
struct BusinessResponse {
    name: String,
    currency: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/catalog/extras", get(list_extras))
        .route("/v1/catalog/time-slots", get(list_time_slots))
        .route("/v1/catalog/frequencies", get(list_frequencies))
        .route("/v1/catalog/business", get(business_info))
}

/// GET /v1/catalog/extras
async fn list_extras() -> Json<Vec<ExtraListing>> {
    Json(ExtraService::all().into_iter().map(ExtraListing::from).collect())
}

/// GET /v1/catalog/time-slots
async fn list_time_slots() -> Json<Vec<TimeSlot>> {
    Json(TimeSlot::all().to_vec())
}

/// GET /v1/catalog/frequencies
async fn list_frequencies(State(state): State<AppState>) -> Json<Vec<FrequencyListing>> {
    let rates = state.pricing.config();
    let listings = Frequency::all()
        .into_iter()
        .map(|frequency| FrequencyListing {
            frequency,
            multiplier: rates.frequency_multiplier(frequency),
            discount_label: rates.discount_label(frequency),
        })
        .collect();
    Json(listings)
}

/// GET /v1/catalog/business
async fn business_info(State(state): State<AppState>) -> Json<BusinessResponse> {
    Json(BusinessResponse {
        name: state.business.name.clone(),
        currency: state.business.currency.clone(),
    })
}
