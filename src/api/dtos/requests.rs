use serde::Deserialize;

#[derive(Deserialize)]
pub struct AvailabilityParams {
    pub check_in: String,
    pub check_out: String,
    pub guests: Option<u32>,
}

#[derive(Deserialize)]
pub struct PricingParams {
    pub room_id: String,
    pub check_in: String,
    pub check_out: String,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub room_id: String,
    pub check_in: String,
    pub check_out: String,
    pub num_guests: u32,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub guest_country: Option<String>,
    pub special_requests: Option<String>,
}

#[derive(Deserialize)]
pub struct SetDatesRequest {
    pub check_in: String,
    pub check_out: String,
}

#[derive(Deserialize)]
pub struct SetGuestsRequest {
    pub num_guests: u32,
}

#[derive(Deserialize)]
pub struct SelectRoomRequest {
    pub room_id: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct BookingSearchParams {
    pub q: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct RevenueParams {
    pub days: Option<u32>,
}
