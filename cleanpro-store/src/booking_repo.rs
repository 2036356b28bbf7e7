use async_trait::async_trait;
use cleanpro_booking::{
    Booking, BookingError, BookingManager, BookingRepository, BookingStatus, BookingSubmission, PriceOverride,
    StatusCounts,
};
use cleanpro_catalog::Quote;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Process-local booking store; contents are lost on restart
#[derive(Default)]
pub struct InMemoryBookingRepository {
    manager: RwLock<BookingManager>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn submit(&self, quote: Quote, submission: BookingSubmission) -> Booking {
        let mut manager = self.manager.write().await;
        let booking = manager.submit(quote, submission).clone();
        info!(
            booking_id = %booking.id,
            total_price = %booking.total_price,
            preferred_date = %booking.preferred_date,
            "Booking submitted"
        );
        booking
    }

    async fn get(&self, id: Uuid) -> Option<Booking> {
        self.manager.read().await.get(&id).cloned()
    }

    async fn list(&self, status: Option<BookingStatus>) -> Vec<Booking> {
        let manager = self.manager.read().await;
        let bookings: Vec<Booking> = manager.list(status).into_iter().cloned().collect();
        debug!(filter = ?status, count = bookings.len(), "Listed bookings");
        bookings
    }

    async fn counts(&self) -> StatusCounts {
        self.manager.read().await.counts()
    }

    async fn transition(&self, id: Uuid, target: BookingStatus) -> Result<Booking, BookingError> {
        let mut manager = self.manager.write().await;
        let booking = manager.transition(&id, target)?.clone();
        info!(booking_id = %id, status = %booking.status, "Booking status updated");
        Ok(booking)
    }

    async fn override_price(&self, id: Uuid, raw: &str) -> Result<(PriceOverride, Booking), BookingError> {
        let mut manager = self.manager.write().await;
        let outcome = manager.override_price(&id, raw)?;

        match outcome {
            PriceOverride::Applied { previous, current } => {
                info!(booking_id = %id, %previous, %current, "Booking price overridden");
            }
            PriceOverride::Ignored => {
                debug!(booking_id = %id, "Ignored non-numeric price override");
            }
        }

        let booking = manager.get(&id).cloned().ok_or(BookingError::NotFound(id))?;
        Ok((outcome, booking))
    }
}
