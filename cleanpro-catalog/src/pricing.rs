use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::quote::{CleaningType, Frequency, PriceBreakdown, Quote, QuoteRequest, ServiceType};
use crate::CatalogError;

/// Rate card for the quote calculator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    /// Residential base for a whole-home clean
    pub whole_home_base: Decimal,

    /// Residential base for a partial clean
    pub partial_home_base: Decimal,

    /// Added for every room beyond the first
    pub per_additional_room: Decimal,

    /// Added for every bathroom beyond the first
    pub per_additional_bathroom: Decimal,

    /// Square footage covered by the residential base
    pub included_square_feet: u32,

    /// Size of one square-footage step beyond the included area
    pub square_feet_step: u32,

    /// Charged per step, scaled proportionally for partial steps
    pub per_square_feet_step: Decimal,

    pub commercial_base: Decimal,

    pub commercial_per_square_foot: Decimal,

    pub one_time_multiplier: Decimal,
    pub weekly_multiplier: Decimal,
    pub bi_weekly_multiplier: Decimal,
    pub monthly_multiplier: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            whole_home_base: dec!(80),
            partial_home_base: dec!(60),
            per_additional_room: dec!(15),
            per_additional_bathroom: dec!(10),
            included_square_feet: 1000,
            square_feet_step: 500,
            per_square_feet_step: dec!(20),
            commercial_base: dec!(150),
            commercial_per_square_foot: dec!(0.08),
            one_time_multiplier: Frequency::OneTime.multiplier(),
            weekly_multiplier: Frequency::Weekly.multiplier(),
            bi_weekly_multiplier: Frequency::BiWeekly.multiplier(),
            monthly_multiplier: Frequency::Monthly.multiplier(),
        }
    }
}

impl PricingConfig {
    pub fn frequency_multiplier(&self, frequency: Frequency) -> Decimal {
        match frequency {
            Frequency::OneTime => self.one_time_multiplier,
            Frequency::Weekly => self.weekly_multiplier,
            Frequency::BiWeekly => self.bi_weekly_multiplier,
            Frequency::Monthly => self.monthly_multiplier,
        }
    }

    /// Marketing label for the configured discount, e.g. `15% OFF`
    pub fn discount_label(&self, frequency: Frequency) -> Option<String> {
        let percent_off = (Decimal::ONE - self.frequency_multiplier(frequency)) * Decimal::ONE_HUNDRED;
        if percent_off <= Decimal::ZERO {
            return None;
        }
        Some(format!("{}% OFF", percent_off.normalize()))
    }

    /// Reject rate cards that could produce a negative price
    pub fn validate(&self) -> Result<(), CatalogError> {
        let rates = [
            ("whole_home_base", self.whole_home_base),
            ("partial_home_base", self.partial_home_base),
            ("per_additional_room", self.per_additional_room),
            ("per_additional_bathroom", self.per_additional_bathroom),
            ("per_square_feet_step", self.per_square_feet_step),
            ("commercial_base", self.commercial_base),
            ("commercial_per_square_foot", self.commercial_per_square_foot),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO {
                return Err(CatalogError::InvalidConfig(format!("{} must not be negative", name)));
            }
        }

        if self.square_feet_step == 0 {
            return Err(CatalogError::InvalidConfig("square_feet_step must be positive".to_string()));
        }

        for frequency in Frequency::all() {
            let multiplier = self.frequency_multiplier(frequency);
            if multiplier <= Decimal::ZERO || multiplier > Decimal::ONE {
                return Err(CatalogError::InvalidConfig(format!(
                    "{:?} multiplier {} is outside (0, 1]",
                    frequency, multiplier
                )));
            }
        }

        Ok(())
    }
}

/// Quote calculator.
///
/// Pure: the same request always yields the same price, and nothing is
/// cached between calls.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Final price, rounded to a whole currency unit
    pub fn price(&self, request: &QuoteRequest) -> Decimal {
        self.breakdown(request).total_price
    }

    pub fn quote(&self, request: QuoteRequest) -> Quote {
        let breakdown = self.breakdown(&request);
        Quote::new(request, breakdown)
    }

    pub fn breakdown(&self, request: &QuoteRequest) -> PriceBreakdown {
        let base_price = self.base_price(request);
        let frequency_multiplier = self.config.frequency_multiplier(request.frequency);
        let discounted_subtotal = base_price * frequency_multiplier;
        let extras_total: Decimal = request.extras.iter().map(|extra| extra.price()).sum();

        let total_price = (discounted_subtotal + extras_total)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .max(Decimal::ZERO);

        PriceBreakdown {
            base_price,
            frequency_multiplier,
            discounted_subtotal,
            extras_total,
            total_price,
        }
    }

    /// Price before the frequency multiplier and extras
    pub fn base_price(&self, request: &QuoteRequest) -> Decimal {
        let cfg = &self.config;
        let square_feet = request.square_footage;

        match request.service_type {
            ServiceType::Residential => {
                let mut base = match request.cleaning_type {
                    CleaningType::Whole => cfg.whole_home_base,
                    CleaningType::Partial => cfg.partial_home_base,
                };
                base += cfg.per_additional_room * Decimal::from(request.rooms.saturating_sub(1));
                base += cfg.per_additional_bathroom * Decimal::from(request.bathrooms.saturating_sub(1));

                // Continuous: 1250 sq ft is half a step
                if square_feet > cfg.included_square_feet {
                    let extra_feet = Decimal::from(square_feet - cfg.included_square_feet);
                    base += extra_feet / Decimal::from(cfg.square_feet_step) * cfg.per_square_feet_step;
                }
                base
            }
            ServiceType::Commercial => {
                cfg.commercial_base + cfg.commercial_per_square_foot * Decimal::from(square_feet)
            }
        }
    }
}
