pub mod extras;
pub mod schedule;
pub mod quote;
pub mod pricing;

pub use extras::ExtraService;
pub use schedule::TimeSlot;
pub use quote::{CleaningType, Frequency, PriceBreakdown, Quote, QuoteRequest, ServiceType};
pub use pricing::{PricingConfig, PricingEngine};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("Unknown extra service: {0}")]
    UnknownExtra(String),

    #[error("Unknown time slot: {0}")]
    UnknownTimeSlot(String),

    #[error("Invalid pricing configuration: {0}")]
    InvalidConfig(String),
}
