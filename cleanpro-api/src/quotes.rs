use axum::{extract::State, routing::post, Json, Router};
use cleanpro_catalog::{Quote, QuoteRequest};
use tracing::debug;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/quotes", post(create_quote))
}

/// POST /v1/quotes
/// Price a service configuration without booking it
async fn create_quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<Quote>, AppError> {
    req.validate()?;

    let quote = state.pricing.quote(req);
    debug!(
        service_type = ?quote.request().service_type,
        frequency = ?quote.request().frequency,
        total_price = %quote.total_price(),
        "Quote computed"
    );

    Ok(Json(quote))
}
