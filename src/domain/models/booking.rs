use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use crate::domain::models::room::RoomType;
use crate::domain::services::{pricing::calculate_pricing, reference::generate_reference};
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::CheckedOut => "checked_out",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::CheckedOut | BookingStatus::Cancelled)
    }

    /// `pending -> confirmed -> checked_in -> checked_out`, plus `cancelled`
    /// from any non-terminal state.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        match (self, next) {
            (BookingStatus::Pending, BookingStatus::Confirmed)
            | (BookingStatus::Confirmed, BookingStatus::CheckedIn)
            | (BookingStatus::CheckedIn, BookingStatus::CheckedOut) => true,
            (current, BookingStatus::Cancelled) => !current.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "checked_in" => Ok(BookingStatus::CheckedIn),
            "checked_out" => Ok(BookingStatus::CheckedOut),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(AppError::Validation(format!("Unknown booking status: {}", other))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        matches!(
            (self, next),
            (PaymentStatus::Pending, PaymentStatus::Paid)
                | (PaymentStatus::Pending, PaymentStatus::Failed)
                | (PaymentStatus::Paid, PaymentStatus::Refunded)
        )
    }
}

/// A validated stay: check-out is strictly after check-in.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, AppError> {
        if check_out <= check_in {
            return Err(AppError::Validation("Check-out must be after check-in".into()));
        }
        Ok(Self { check_in, check_out })
    }

    pub fn parse(check_in: &str, check_out: &str) -> Result<Self, AppError> {
        let check_in = NaiveDate::parse_from_str(check_in, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid check_in date (YYYY-MM-DD)".into()))?;
        let check_out = NaiveDate::parse_from_str(check_out, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid check_out date (YYYY-MM-DD)".into()))?;
        Self::new(check_in, check_out)
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days() as u32
    }

    /// Half-open intersection: a stay ending on the day another begins does not overlap it.
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        check_in < self.check_out && check_out > self.check_in
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub reference: String,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub guest_country: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: String,
    pub room_id: String,
    pub num_guests: u32,
    pub num_nights: u32,
    pub room_rate: Decimal,
    pub total_amount: Decimal,
    pub tax_amount: Decimal,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn blank_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Debug, Clone)]
pub struct NewBookingParams {
    pub room_id: String,
    pub stay: StayRange,
    pub num_guests: u32,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub guest_country: String,
    pub special_requests: Option<String>,
}

impl Booking {
    pub fn new(room: &RoomType, params: NewBookingParams) -> Self {
        let now = Utc::now();
        let pricing = calculate_pricing(room.price, params.stay.nights());

        Self {
            id: Uuid::new_v4().to_string(),
            reference: generate_reference(now.date_naive()),
            guest_name: params.guest_name,
            guest_email: params.guest_email,
            guest_phone: params.guest_phone,
            guest_country: params.guest_country,
            check_in: params.stay.check_in(),
            check_out: params.stay.check_out(),
            room_type: room.name.clone(),
            room_id: room.id.clone(),
            num_guests: params.num_guests,
            num_nights: pricing.num_nights,
            room_rate: room.price,
            total_amount: pricing.total,
            tax_amount: pricing.tax,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            special_requests: params.special_requests.filter(|s| !s.trim().is_empty()),
            created_at: now,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }

    pub fn overlaps(&self, stay: &StayRange) -> bool {
        stay.overlaps(self.check_in, self.check_out)
    }

    pub fn transition(&self, next: BookingStatus) -> Result<Booking, AppError> {
        if !self.status.can_transition_to(next) {
            return Err(AppError::Conflict(format!(
                "Cannot move booking {} from {} to {}",
                self.reference, self.status, next
            )));
        }
        let mut updated = self.clone();
        updated.status = next;
        Ok(updated)
    }
}
