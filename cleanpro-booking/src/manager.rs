use crate::models::{Booking, BookingStatus, BookingSubmission};
use cleanpro_catalog::Quote;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

/// Outcome of an admin price edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum PriceOverride {
    Applied { previous: Decimal, current: Decimal },
    /// Input was empty, not a number, or negative; nothing changed
    Ignored,
}

impl PriceOverride {
    pub fn is_applied(&self) -> bool {
        matches!(self, PriceOverride::Applied { .. })
    }
}

/// Per-status totals for the dashboard header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub completed: usize,
}

/// Owns every booking and applies admin transitions.
///
/// Bookings are kept in submission order and never removed.
pub struct BookingManager {
    bookings: Vec<Booking>,
    index: HashMap<Uuid, usize>,
}

impl BookingManager {
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create a pending booking from a priced quote
    pub fn submit(&mut self, quote: Quote, submission: BookingSubmission) -> &Booking {
        let booking = Booking::new(quote, submission);
        let position = self.bookings.len();
        self.index.insert(booking.id, position);
        self.bookings.push(booking);
        &self.bookings[position]
    }

    pub fn get(&self, booking_id: &Uuid) -> Option<&Booking> {
        self.index.get(booking_id).map(|&i| &self.bookings[i])
    }

    /// Bookings with the given status, or all of them, in submission order
    pub fn list(&self, filter: Option<BookingStatus>) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| filter.map_or(true, |status| b.status == status))
            .collect()
    }

    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts {
            total: self.bookings.len(),
            ..StatusCounts::default()
        };
        for booking in &self.bookings {
            match booking.status {
                BookingStatus::Pending => counts.pending += 1,
                BookingStatus::Approved => counts.approved += 1,
                BookingStatus::Rejected => counts.rejected += 1,
                BookingStatus::Completed => counts.completed += 1,
            }
        }
        counts
    }

    /// Transition: Pending → Approved
    pub fn approve(&mut self, booking_id: &Uuid) -> Result<&Booking, BookingError> {
        self.transition(booking_id, BookingStatus::Approved)
    }

    /// Transition: Pending → Rejected
    pub fn reject(&mut self, booking_id: &Uuid) -> Result<&Booking, BookingError> {
        self.transition(booking_id, BookingStatus::Rejected)
    }

    /// Transition: Approved → Completed
    pub fn complete(&mut self, booking_id: &Uuid) -> Result<&Booking, BookingError> {
        self.transition(booking_id, BookingStatus::Completed)
    }

    /// Apply an admin transition; illegal moves leave the booking untouched
    pub fn transition(&mut self, booking_id: &Uuid, target: BookingStatus) -> Result<&Booking, BookingError> {
        let booking = self.get_booking_mut(booking_id)?;

        if !booking.status.can_transition_to(target) {
            return Err(BookingError::InvalidTransition {
                from: booking.status,
                to: target,
            });
        }

        booking.update_status(target);
        Ok(booking)
    }

    /// Replace the price with an admin-entered amount, in any status.
    ///
    /// The quote is not recomputed.
    pub fn override_price(&mut self, booking_id: &Uuid, raw: &str) -> Result<PriceOverride, BookingError> {
        let booking = self.get_booking_mut(booking_id)?;

        let Some(price) = parse_price(raw) else {
            return Ok(PriceOverride::Ignored);
        };

        let previous = booking.total_price;
        booking.set_price(price);
        Ok(PriceOverride::Applied {
            previous,
            current: price,
        })
    }

    fn get_booking_mut(&mut self, booking_id: &Uuid) -> Result<&mut Booking, BookingError> {
        let position = *self
            .index
            .get(booking_id)
            .ok_or(BookingError::NotFound(*booking_id))?;
        Ok(&mut self.bookings[position])
    }
}

impl Default for BookingManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepts `[+]digits[.digits][e[+-]digits]`; anything else, such as a
/// leading `-` or a `_` separator, leaves the price untouched
fn parse_price(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    let unsigned = raw.strip_prefix('+').unwrap_or(raw);

    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    if !is_plain_decimal(mantissa) {
        return None;
    }
    let mantissa = mantissa.strip_suffix('.').unwrap_or(mantissa);
    let mantissa = if mantissa.starts_with('.') {
        format!("0{}", mantissa)
    } else {
        mantissa.to_string()
    };

    let price = match exponent {
        None => Decimal::from_str(&mantissa).ok()?,
        Some(exponent) => {
            let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            if !is_digits(digits) {
                return None;
            }
            Decimal::from_scientific(&format!("{}e{}", mantissa, exponent)).ok()?
        }
    };

    Some(price.normalize())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_plain_decimal(s: &str) -> bool {
    match s.split_once('.') {
        Some((whole, fraction)) => {
            (whole.is_empty() || is_digits(whole))
                && (fraction.is_empty() || is_digits(fraction))
                && !(whole.is_empty() && fraction.is_empty())
        }
        None => is_digits(s),
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::submission;
    use chrono::Utc;
    use cleanpro_catalog::{CleaningType, Frequency, PricingEngine, QuoteRequest};
    use rust_decimal_macros::dec;

    fn quote() -> Quote {
        PricingEngine::default().quote(QuoteRequest::residential(CleaningType::Partial, 3, 2, 1500))
    }

    fn submit(manager: &mut BookingManager) -> Uuid {
        manager.submit(quote(), submission(Utc::now().date_naive())).id
    }

    #[test]
    fn test_booking_lifecycle() {
        let mut manager = BookingManager::new();
        let id = submit(&mut manager);

        let booking = manager.get(&id).unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total_price, dec!(120));
        assert!(!booking.price_overridden);

        // Pending → Approved
        manager.approve(&id).unwrap();
        assert_eq!(manager.get(&id).unwrap().status, BookingStatus::Approved);

        // Approved → Completed
        manager.complete(&id).unwrap();
        assert_eq!(manager.get(&id).unwrap().status, BookingStatus::Completed);
    }

    #[test]
    fn test_invalid_transition() {
        let mut manager = BookingManager::new();
        let id = submit(&mut manager);

        // Cannot complete before approval
        let result = manager.complete(&id);
        assert_eq!(
            result.unwrap_err(),
            BookingError::InvalidTransition {
                from: BookingStatus::Pending,
                to: BookingStatus::Completed,
            }
        );
        assert_eq!(manager.get(&id).unwrap().status, BookingStatus::Pending);
    }

    #[test]
    fn test_terminal_states_never_change() {
        let mut manager = BookingManager::new();
        let rejected = submit(&mut manager);
        let completed = submit(&mut manager);

        manager.reject(&rejected).unwrap();
        manager.approve(&completed).unwrap();
        manager.complete(&completed).unwrap();

        for _ in 0..3 {
            for target in BookingStatus::all() {
                assert!(manager.transition(&rejected, target).is_err());
                assert!(manager.transition(&completed, target).is_err());
            }
        }

        assert_eq!(manager.get(&rejected).unwrap().status, BookingStatus::Rejected);
        assert_eq!(manager.get(&completed).unwrap().status, BookingStatus::Completed);
    }

    #[test]
    fn test_approved_cannot_be_rejected() {
        let mut manager = BookingManager::new();
        let id = submit(&mut manager);

        manager.approve(&id).unwrap();
        assert!(manager.reject(&id).is_err());
        assert!(manager.approve(&id).is_err());
    }

    #[test]
    fn test_unknown_booking() {
        let mut manager = BookingManager::new();
        let missing = Uuid::new_v4();

        assert_eq!(manager.approve(&missing).unwrap_err(), BookingError::NotFound(missing));
        assert_eq!(manager.override_price(&missing, "100").unwrap_err(), BookingError::NotFound(missing));
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut manager = BookingManager::new();
        let ids: Vec<Uuid> = (0..6).map(|_| submit(&mut manager)).collect();

        manager.approve(&ids[1]).unwrap();
        manager.reject(&ids[2]).unwrap();
        manager.approve(&ids[4]).unwrap();
        manager.approve(&ids[5]).unwrap();
        manager.complete(&ids[5]).unwrap();

        let approved: Vec<Uuid> = manager.list(Some(BookingStatus::Approved)).iter().map(|b| b.id).collect();
        assert_eq!(approved, vec![ids[1], ids[4]]);

        let pending: Vec<Uuid> = manager.list(Some(BookingStatus::Pending)).iter().map(|b| b.id).collect();
        assert_eq!(pending, vec![ids[0], ids[3]]);

        let all: Vec<Uuid> = manager.list(None).iter().map(|b| b.id).collect();
        assert_eq!(all, ids);

        let counts = manager.counts();
        assert_eq!(
            counts,
            StatusCounts {
                total: 6,
                pending: 2,
                approved: 2,
                rejected: 1,
                completed: 1,
            }
        );
    }

    #[test]
    fn test_override_price() {
        let mut manager = BookingManager::new();
        let id = submit(&mut manager);

        let outcome = manager.override_price(&id, " 150.50 ").unwrap();
        assert_eq!(
            outcome,
            PriceOverride::Applied {
                previous: dec!(120),
                current: dec!(150.5),
            }
        );

        let booking = manager.get(&id).unwrap();
        assert_eq!(booking.total_price, dec!(150.5));
        assert_eq!(booking.quoted_price, dec!(120));
        assert!(booking.price_overridden);
    }

    #[test]
    fn test_override_ignores_bad_input() {
        let mut manager = BookingManager::new();
        let id = submit(&mut manager);

        for raw in ["", "   ", "abc", "12abc", "-5", "1_000", "1,000", "1.2.3", ".", "1e", "e5", "0x10", "++5"] {
            assert_eq!(manager.override_price(&id, raw).unwrap(), PriceOverride::Ignored, "{:?}", raw);
        }

        let booking = manager.get(&id).unwrap();
        assert_eq!(booking.total_price, dec!(120));
        assert!(!booking.price_overridden);
    }

    #[test]
    fn test_override_accepts_numeric_forms() {
        let mut manager = BookingManager::new();
        let id = submit(&mut manager);

        for (raw, expected) in [
            ("+99", dec!(99)),
            (".5", dec!(0.5)),
            ("75.", dec!(75)),
            ("1.25E2", dec!(125)),
            ("2500e-1", dec!(250)),
        ] {
            let previous = manager.get(&id).unwrap().total_price;
            assert_eq!(
                manager.override_price(&id, raw).unwrap(),
                PriceOverride::Applied {
                    previous,
                    current: expected,
                },
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn test_override_allowed_in_terminal_state() {
        let mut manager = BookingManager::new();
        let id = submit(&mut manager);
        manager.reject(&id).unwrap();

        assert!(manager.override_price(&id, "0").unwrap().is_applied());
        let booking = manager.get(&id).unwrap();
        assert_eq!(booking.total_price, Decimal::ZERO);
        assert_eq!(booking.status, BookingStatus::Rejected);
    }

    #[test]
    fn test_override_does_not_reprice() {
        let mut manager = BookingManager::new();
        let request = QuoteRequest::commercial(2000).with_frequency(Frequency::Weekly);
        let id = manager
            .submit(PricingEngine::default().quote(request), submission(Utc::now().date_naive()))
            .id;

        manager.override_price(&id, "1e2").unwrap();
        manager.approve(&id).unwrap();

        let booking = manager.get(&id).unwrap();
        assert_eq!(booking.quoted_price, dec!(264));
        assert_eq!(booking.total_price, dec!(100));
    }
}
