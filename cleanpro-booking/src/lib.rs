pub mod models;
pub mod manager;
pub mod repository;

pub use models::{Booking, BookingStatus, BookingSubmission, CustomerInfo, UnknownStatus};
pub use manager::{BookingError, BookingManager, PriceOverride, StatusCounts};
pub use repository::BookingRepository;
