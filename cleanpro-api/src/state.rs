use std::sync::Arc;
use cleanpro_booking::BookingRepository;
use cleanpro_catalog::{PricingConfig, PricingEngine};
use cleanpro_store::app_config::BusinessConfig;
use cleanpro_store::{Config, InMemoryBookingRepository};

#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<dyn BookingRepository>,
    pub pricing: Arc<PricingEngine>,
    pub business: BusinessConfig,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            bookings: Arc::new(InMemoryBookingRepository::new()),
            pricing: Arc::new(PricingEngine::new(config.pricing.clone())),
            business: config.business.clone(),
        }
    }

    /// Fresh state with the standard rate card, as used by tests
    pub fn with_pricing(pricing: PricingConfig) -> Self {
        Self {
            bookings: Arc::new(InMemoryBookingRepository::new()),
            pricing: Arc::new(PricingEngine::new(pricing)),
            business: BusinessConfig {
                name: "CleanPro Edmonton".to_string(),
                currency: "CAD".to_string(),
            },
        }
    }
}
