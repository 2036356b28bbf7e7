use async_trait::async_trait;
use cleanpro_catalog::Quote;
use uuid::Uuid;

use crate::manager::{BookingError, PriceOverride, StatusCounts};
use crate::models::{Booking, BookingStatus, BookingSubmission};

/// Repository trait for booking access.
///
/// Implementations hand out owned snapshots; every mutation goes through the
/// single `BookingManager` behind them.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn submit(&self, quote: Quote, submission: BookingSubmission) -> Booking;

    async fn get(&self, id: Uuid) -> Option<Booking>;

    async fn list(&self, status: Option<BookingStatus>) -> Vec<Booking>;

    async fn counts(&self) -> StatusCounts;

    async fn transition(&self, id: Uuid, target: BookingStatus) -> Result<Booking, BookingError>;

    async fn override_price(&self, id: Uuid, raw: &str) -> Result<(PriceOverride, Booking), BookingError>;
}
