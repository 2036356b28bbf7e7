use chrono::{DateTime, NaiveDate, Utc};
use cleanpro_catalog::{Quote, QuoteRequest, TimeSlot};
use cleanpro_shared::Masked;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

/// Booking status in the admin review lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl BookingStatus {
    pub fn all() -> [BookingStatus; 4] {
        [
            BookingStatus::Pending,
            BookingStatus::Approved,
            BookingStatus::Rejected,
            BookingStatus::Completed,
        ]
    }

    /// pending -> approved | rejected, approved -> completed
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Approved)
                | (BookingStatus::Pending, BookingStatus::Rejected)
                | (BookingStatus::Approved, BookingStatus::Completed)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Rejected | BookingStatus::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Unknown booking status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::all()
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn masked_not_blank(value: &Masked<String>) -> Result<(), ValidationError> {
    not_blank(value.expose())
}

fn masked_email(value: &Masked<String>) -> Result<(), ValidationError> {
    if !value.expose().validate_email() {
        return Err(ValidationError::new("email"));
    }
    Ok(())
}

/// Contact details; everything except the name stays out of logs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CustomerInfo {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "masked_email", message = "Invalid email format"))]
    pub email: Masked<String>,

    #[validate(custom(function = "masked_not_blank", message = "Phone is required"))]
    pub phone: Masked<String>,

    #[validate(custom(function = "masked_not_blank", message = "Service address is required"))]
    pub address: Masked<String>,
}

/// Customer details submitted alongside a quote
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingSubmission {
    #[validate(nested)]
    pub customer_info: CustomerInfo,

    pub preferred_date: NaiveDate,

    pub preferred_time: TimeSlot,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub notes: String,
}

impl BookingSubmission {
    /// Field checks plus the rule that a visit cannot be booked in the past
    pub fn validate_on(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if self.preferred_date < today {
            let mut err = ValidationError::new("past_date");
            err.message = Some("Preferred date cannot be in the past".into());
            errors.add("preferred_date", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A quote bound to a customer and an admin review status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,

    #[serde(flatten)]
    pub request: QuoteRequest,

    /// Price the quote calculator produced at submission
    pub quoted_price: Decimal,

    /// Price the customer will be charged
    pub total_price: Decimal,

    pub price_overridden: bool,

    pub customer_info: CustomerInfo,
    pub preferred_date: NaiveDate,
    pub preferred_time: TimeSlot,
    pub status: BookingStatus,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(quote: Quote, submission: BookingSubmission) -> Self {
        let now = Utc::now();
        let (request, price) = quote.into_parts();
        Self {
            id: Uuid::new_v4(),
            request,
            quoted_price: price,
            total_price: price,
            price_overridden: false,
            customer_info: submission.customer_info,
            preferred_date: submission.preferred_date,
            preferred_time: submission.preferred_time,
            status: BookingStatus::Pending,
            notes: submission.notes,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn update_status(&mut self, new_status: BookingStatus) {
        self.status = new_status;
        self.updated_at = Utc::now();
    }

    pub(crate) fn set_price(&mut self, price: Decimal) {
        self.total_price = price;
        self.price_overridden = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Duration;

    pub(crate) fn submission(date: NaiveDate) -> BookingSubmission {
        BookingSubmission {
            customer_info: CustomerInfo {
                name: "Jane Doe".to_string(),
                email: Masked::new("jane@example.com".to_string()),
                phone: Masked::new("780-456-7890".to_string()),
                address: Masked::new("10234 Jasper Ave, Edmonton T5J 0K1".to_string()),
            },
            preferred_date: date,
            preferred_time: TimeSlot::LateMorning,
            notes: String::new(),
        }
    }

    #[test]
    fn test_transition_table() {
        use BookingStatus::*;

        let allowed = [(Pending, Approved), (Pending, Rejected), (Approved, Completed)];
        for from in BookingStatus::all() {
            for to in BookingStatus::all() {
                assert_eq!(from.can_transition_to(to), allowed.contains(&(from, to)), "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn test_parse_status() {
        assert_eq!("approved".parse::<BookingStatus>().unwrap(), BookingStatus::Approved);
        assert_eq!("Completed".parse::<BookingStatus>().unwrap(), BookingStatus::Completed);
        assert!("archived".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_terminal_states_have_no_exits() {
        for status in BookingStatus::all().into_iter().filter(|s| s.is_terminal()) {
            assert!(BookingStatus::all().iter().all(|next| !status.can_transition_to(*next)));
        }
    }

    #[test]
    fn test_submission_validation() {
        let today = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        assert!(submission(today).validate_on(today).is_ok());

        let mut bad = submission(today);
        bad.customer_info.email = Masked::new("not-an-email".to_string());
        bad.customer_info.name = "   ".to_string();
        assert!(bad.validate_on(today).is_err());

        let errors = bad.customer_info.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("name"));
        assert!(!fields.contains_key("phone"));
    }

    #[test]
    fn test_past_date_rejected() {
        let today = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let yesterday = today - Duration::days(1);

        let errors = submission(yesterday).validate_on(today).unwrap_err();
        assert!(errors.field_errors().contains_key("preferred_date"));
    }

    #[test]
    fn test_debug_masks_contact_details() {
        let today = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let printed = format!("{:?}", submission(today));

        assert!(printed.contains("Jane Doe"));
        assert!(!printed.contains("jane@example.com"));
        assert!(!printed.contains("780-456-7890"));
    }

    #[test]
    fn test_submission_from_json() {
        let json = r#"{
            "customer_info": {
                "name": "Sam Lee",
                "email": "sam@example.com",
                "phone": "780-555-0101",
                "address": "1 Main St, St. Albert"
            },
            "preferred_date": "2026-11-02",
            "preferred_time": "2:00 PM - 4:00 PM"
        }"#;

        let parsed: BookingSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.preferred_time, TimeSlot::LateAfternoon);
        assert_eq!(parsed.notes, "");
        assert_eq!(parsed.customer_info.email.expose(), "sam@example.com");
    }
}
