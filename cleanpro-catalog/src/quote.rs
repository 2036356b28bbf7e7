use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

use crate::extras::ExtraService;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// Homes, apartments, condos
    Residential,
    /// Offices, retail, warehouses
    Commercial,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CleaningType {
    #[default]
    Whole,
    Partial,
}

/// How often the service recurs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    #[default]
    OneTime,
    Weekly,
    BiWeekly,
    Monthly,
}

impl Frequency {
    pub fn all() -> [Frequency; 4] {
        [Frequency::OneTime, Frequency::Weekly, Frequency::BiWeekly, Frequency::Monthly]
    }

    /// Standard recurring-service multiplier
    pub fn multiplier(&self) -> Decimal {
        match self {
            Frequency::OneTime => dec!(1.00),
            Frequency::Weekly => dec!(0.85),
            Frequency::BiWeekly => dec!(0.90),
            Frequency::Monthly => dec!(0.95),
        }
    }

    pub fn is_recurring(&self) -> bool {
        *self != Frequency::OneTime
    }
}

fn default_count() -> u32 {
    1
}

/// Service configuration a customer asks to have priced
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct QuoteRequest {
    pub service_type: ServiceType,

    /// Ignored for commercial service
    #[serde(default)]
    pub cleaning_type: CleaningType,

    #[serde(default = "default_count")]
    #[validate(range(min = 1, max = 8, message = "Rooms must be between 1 and 8"))]
    pub rooms: u32,

    #[serde(default = "default_count")]
    #[validate(range(min = 1, max = 6, message = "Bathrooms must be between 1 and 6"))]
    pub bathrooms: u32,

    #[validate(range(max = 1_000_000, message = "Square footage is out of range"))]
    pub square_footage: u32,

    #[serde(default)]
    pub frequency: Frequency,

    #[serde(default)]
    pub extras: BTreeSet<ExtraService>,
}

impl QuoteRequest {
    pub fn residential(cleaning_type: CleaningType, rooms: u32, bathrooms: u32, square_footage: u32) -> Self {
        Self {
            service_type: ServiceType::Residential,
            cleaning_type,
            rooms,
            bathrooms,
            square_footage,
            frequency: Frequency::OneTime,
            extras: BTreeSet::new(),
        }
    }

    pub fn commercial(square_footage: u32) -> Self {
        Self {
            service_type: ServiceType::Commercial,
            cleaning_type: CleaningType::Whole,
            rooms: 1,
            bathrooms: 1,
            square_footage,
            frequency: Frequency::OneTime,
            extras: BTreeSet::new(),
        }
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_extra(mut self, extra: ExtraService) -> Self {
        self.extras.insert(extra);
        self
    }
}

/// How a total was reached, for display next to the price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub base_price: Decimal,
    pub frequency_multiplier: Decimal,
    pub discounted_subtotal: Decimal,
    pub extras_total: Decimal,
    pub total_price: Decimal,
}

/// A priced service configuration.
///
/// Only `PricingEngine::quote` builds one, so `total_price` always matches
/// the request it was computed from.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Quote {
    #[serde(flatten)]
    request: QuoteRequest,
    total_price: Decimal,
    breakdown: PriceBreakdown,
}

impl Quote {
    pub(crate) fn new(request: QuoteRequest, breakdown: PriceBreakdown) -> Self {
        Self {
            request,
            total_price: breakdown.total_price,
            breakdown,
        }
    }

    pub fn request(&self) -> &QuoteRequest {
        &self.request
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    pub fn breakdown(&self) -> &PriceBreakdown {
        &self.breakdown
    }

    pub fn into_parts(self) -> (QuoteRequest, Decimal) {
        (self.request, self.total_price)
    }
}
