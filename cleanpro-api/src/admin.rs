use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use cleanpro_booking::{Booking, BookingStatus, PriceOverride, StatusCounts};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    /// A status name, or `all`
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PriceOverrideRequest {
    /// Raw admin input; a number or a numeric string
    #[serde(default)]
    pub price: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct PriceOverrideResponse {
    pub applied: bool,
    pub outcome: PriceOverride,
    pub booking: Booking,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/admin/bookings", get(list_bookings))
        .route("/v1/admin/bookings/summary", get(booking_summary))
        .route("/v1/admin/bookings/{id}", get(get_booking))
        .route("/v1/admin/bookings/{id}/approve", post(approve_booking))
        .route("/v1/admin/bookings/{id}/reject", post(reject_booking))
        .route("/v1/admin/bookings/{id}/complete", post(complete_booking))
        .route("/v1/admin/bookings/{id}/price", put(override_price))
}

// ============================================================================
// Dashboard Handlers
// ============================================================================

/// GET /v1/admin/bookings?status=pending
async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let filter = match query.status.as_deref() {
        None | Some("") | Some("all") => None,
        Some(raw) => Some(raw.parse::<BookingStatus>()?),
    };

    Ok(Json(state.bookings.list(filter).await))
}

/// GET /v1/admin/bookings/summary
async fn booking_summary(State(state): State<AppState>) -> Json<StatusCounts> {
    Json(state.bookings.counts().await)
}

/// GET /v1/admin/bookings/:id
async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    state
        .bookings
        .get(booking_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Booking not found: {}", booking_id)))
}

// ============================================================================
// Lifecycle Handlers
// ============================================================================

/// POST /v1/admin/bookings/:id/approve
async fn approve_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let booking = state.bookings.transition(booking_id, BookingStatus::Approved).await?;
    Ok(Json(booking))
}

/// POST /v1/admin/bookings/:id/reject
async fn reject_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let booking = state.bookings.transition(booking_id, BookingStatus::Rejected).await?;
    Ok(Json(booking))
}

/// POST /v1/admin/bookings/:id/complete
async fn complete_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let booking = state.bookings.transition(booking_id, BookingStatus::Completed).await?;
    Ok(Json(booking))
}

/// PUT /v1/admin/bookings/:id/price
/// Unparseable input leaves the price as it was and reports `applied: false`
async fn override_price(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
    Json(req): Json<PriceOverrideRequest>,
) -> Result<Json<PriceOverrideResponse>, AppError> {
    let raw = match &req.price {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    };

    let (outcome, booking) = state.bookings.override_price(booking_id, &raw).await?;

    Ok(Json(PriceOverrideResponse {
        applied: outcome.is_applied(),
        outcome,
        booking,
    }))
}
