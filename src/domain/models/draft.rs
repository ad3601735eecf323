use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use crate::domain::models::booking::{Booking, NewBookingParams, StayRange};
use crate::error::AppError;

pub const DEFAULT_NUM_GUESTS: u32 = 2;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DraftPhase {
    Collecting,
    AwaitingPayment,
    Completed,
}

/// In-progress booking carried across the search, room, guest-info and payment steps.
#[derive(Debug, Serialize, Clone)]
pub struct BookingDraft {
    pub id: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub num_guests: u32,
    pub selected_room_id: Option<String>,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub guest_country: String,
    pub special_requests: String,
    pub phase: DraftPhase,
    pub booking: Option<Booking>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GuestInfoUpdate {
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub guest_country: Option<String>,
    pub special_requests: Option<String>,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingDraft {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            check_in: None,
            check_out: None,
            num_guests: DEFAULT_NUM_GUESTS,
            selected_room_id: None,
            guest_name: String::new(),
            guest_email: String::new(),
            guest_phone: String::new(),
            guest_country: String::new(),
            special_requests: String::new(),
            phase: DraftPhase::Collecting,
            booking: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    pub fn stay(&self) -> Option<StayRange> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => StayRange::new(check_in, check_out).ok(),
            _ => None,
        }
    }

    pub fn set_dates(&mut self, stay: StayRange) -> Result<(), AppError> {
        self.ensure_editable()?;
        self.check_in = Some(stay.check_in());
        self.check_out = Some(stay.check_out());
        self.touch();
        Ok(())
    }

    pub fn set_num_guests(&mut self, num_guests: u32) -> Result<(), AppError> {
        self.ensure_editable()?;
        if num_guests == 0 {
            return Err(AppError::Validation("At least one guest is required".into()));
        }
        self.num_guests = num_guests;
        self.touch();
        Ok(())
    }

    pub fn select_room(&mut self, room_id: Option<String>) -> Result<(), AppError> {
        self.ensure_editable()?;
        self.selected_room_id = room_id;
        self.touch();
        Ok(())
    }

    pub fn set_guest_info(&mut self, info: GuestInfoUpdate) -> Result<(), AppError> {
        self.ensure_editable()?;
        if let Some(val) = info.guest_name { self.guest_name = val; }
        if let Some(val) = info.guest_email { self.guest_email = val; }
        if let Some(val) = info.guest_phone { self.guest_phone = val; }
        if let Some(val) = info.guest_country { self.guest_country = val; }
        if let Some(val) = info.special_requests { self.special_requests = val; }
        self.touch();
        Ok(())
    }

    /// Back to the initial state. Id and creation time survive.
    pub fn reset(&mut self) {
        let id = std::mem::take(&mut self.id);
        let created_at = self.created_at;
        *self = Self {
            id,
            created_at,
            ..Self::new()
        };
    }

    /// Moves the draft into `awaiting_payment` and returns what the booking factory needs.
    pub fn begin_payment(&mut self) -> Result<NewBookingParams, AppError> {
        self.ensure_editable()?;
        let params = self.booking_params()?;

        self.phase = DraftPhase::AwaitingPayment;
        self.touch();
        Ok(params)
    }

    /// Booking factory input, once dates, room and guest details are complete.
    pub fn booking_params(&self) -> Result<NewBookingParams, AppError> {
        let stay = self.stay()
            .ok_or(AppError::Validation("Stay dates are required".into()))?;
        let room_id = self.selected_room_id.clone()
            .ok_or(AppError::Validation("A room must be selected".into()))?;
        if self.guest_name.trim().is_empty() {
            return Err(AppError::Validation("Guest name is required".into()));
        }
        if !self.guest_email.contains('@') {
            return Err(AppError::Validation("A valid guest email is required".into()));
        }

        Ok(NewBookingParams {
            room_id,
            stay,
            num_guests: self.num_guests,
            guest_name: self.guest_name.clone(),
            guest_email: self.guest_email.clone(),
            guest_phone: self.guest_phone.clone(),
            guest_country: self.guest_country.clone(),
            special_requests: Some(self.special_requests.clone()),
        })
    }

    pub fn complete(&mut self, booking: Booking) {
        let now = Utc::now();
        self.phase = DraftPhase::Completed;
        self.booking = Some(booking);
        self.completed_at = Some(now);
        self.updated_at = now;
    }

    pub fn abort_payment(&mut self) {
        if self.phase == DraftPhase::AwaitingPayment {
            self.phase = DraftPhase::Collecting;
            self.touch();
        }
    }

    fn ensure_editable(&self) -> Result<(), AppError> {
        match self.phase {
            DraftPhase::Collecting => Ok(()),
            DraftPhase::AwaitingPayment => Err(AppError::Conflict("Payment is being processed".into())),
            DraftPhase::Completed => Err(AppError::Conflict("Booking already completed; reset the draft to start over".into())),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
