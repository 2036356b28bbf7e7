use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CatalogError;

/// Optional add-on services, each with a flat surcharge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExtraService {
    Windows,
    Carpet,
    Appliances,
    Garage,
    Basement,
    Oven,
}

impl ExtraService {
    /// Catalog order, as listed on the quote form
    pub fn all() -> [ExtraService; 6] {
        [
            ExtraService::Windows,
            ExtraService::Carpet,
            ExtraService::Appliances,
            ExtraService::Garage,
            ExtraService::Basement,
            ExtraService::Oven,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            ExtraService::Windows => "windows",
            ExtraService::Carpet => "carpet",
            ExtraService::Appliances => "appliances",
            ExtraService::Garage => "garage",
            ExtraService::Basement => "basement",
            ExtraService::Oven => "oven",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExtraService::Windows => "Window Cleaning",
            ExtraService::Carpet => "Carpet Deep Clean",
            ExtraService::Appliances => "Appliance Cleaning",
            ExtraService::Garage => "Garage Cleaning",
            ExtraService::Basement => "Basement Cleaning",
            ExtraService::Oven => "Oven Deep Clean",
        }
    }

    /// Flat surcharge in whole currency units
    pub fn price(&self) -> Decimal {
        let units: i64 = match self {
            ExtraService::Windows => 25,
            ExtraService::Carpet => 40,
            ExtraService::Appliances => 35,
            ExtraService::Garage => 50,
            ExtraService::Basement => 45,
            ExtraService::Oven => 30,
        };
        Decimal::from(units)
    }
}

impl fmt::Display for ExtraService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExtraService {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExtraService::all()
            .into_iter()
            .find(|extra| extra.id() == s)
            .ok_or_else(|| CatalogError::UnknownExtra(s.to_string()))
    }
}

/// Catalog entry as exposed to clients
#[derive(Debug, Clone, Serialize)]
pub struct ExtraListing {
    pub id: ExtraService,
    pub name: &'static str,
    pub price: Decimal,
}

impl From<ExtraService> for ExtraListing {
    fn from(extra: ExtraService) -> Self {
        Self {
            id: extra,
            name: extra.name(),
            price: extra.price(),
        }
    }
}
