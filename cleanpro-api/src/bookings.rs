use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::Utc;
use cleanpro_booking::{Booking, BookingSubmission};
use cleanpro_catalog::QuoteRequest;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;

/// Quote fields and customer details in one flat body, as the booking form sends them
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    #[serde(flatten)]
    pub quote: QuoteRequest,

    #[serde(flatten)]
    pub submission: BookingSubmission,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/bookings", post(create_booking))
}

/// POST /v1/bookings
/// Submit a booking request; the price is recomputed here, never taken from the client
async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    req.quote.validate()?;
    // Same calendar the booking form uses for its minimum date
    req.submission.validate_on(Utc::now().date_naive())?;

    let quote = state.pricing.quote(req.quote);
    let booking = state.bookings.submit(quote, req.submission).await;

    info!(
        booking_id = %booking.id,
        customer = %booking.customer_info.name,
        "Booking request received"
    );

    Ok((StatusCode::CREATED, Json(booking)))
}
