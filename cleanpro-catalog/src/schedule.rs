use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CatalogError;

/// Two-hour arrival windows a customer can request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeSlot {
    #[serde(rename = "8:00 AM - 10:00 AM")]
    EarlyMorning,
    #[serde(rename = "10:00 AM - 12:00 PM")]
    LateMorning,
    #[serde(rename = "12:00 PM - 2:00 PM")]
    EarlyAfternoon,
    #[serde(rename = "2:00 PM - 4:00 PM")]
    LateAfternoon,
    #[serde(rename = "4:00 PM - 6:00 PM")]
    Evening,
}

impl TimeSlot {
    pub fn all() -> [TimeSlot; 5] {
        [
            TimeSlot::EarlyMorning,
            TimeSlot::LateMorning,
            TimeSlot::EarlyAfternoon,
            TimeSlot::LateAfternoon,
            TimeSlot::Evening,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "8:00 AM - 10:00 AM",
            TimeSlot::LateMorning => "10:00 AM - 12:00 PM",
            TimeSlot::EarlyAfternoon => "12:00 PM - 2:00 PM",
            TimeSlot::LateAfternoon => "2:00 PM - 4:00 PM",
            TimeSlot::Evening => "4:00 PM - 6:00 PM",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::all()
            .into_iter()
            .find(|slot| slot.label() == s)
            .ok_or_else(|| CatalogError::UnknownTimeSlot(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_labels() {
        for slot in TimeSlot::all() {
            let json = serde_json::to_string(&slot).unwrap();
            assert_eq!(json, format!("\"{}\"", slot.label()));
            assert_eq!(slot.label().parse::<TimeSlot>().unwrap(), slot);
        }
    }

    #[test]
    fn test_unknown_slot() {
        assert!("6:00 PM - 8:00 PM".parse::<TimeSlot>().is_err());
    }
}
