use chrono::NaiveDate;
use serde::Serialize;
use crate::domain::models::{
    booking::Booking, dashboard::{DailyRevenue, DashboardStats}, room::RoomAvailability,
};
use crate::domain::services::pricing::Pricing;

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub num_nights: u32,
    pub num_guests: u32,
    pub rooms: Vec<RoomAvailability>,
}

#[derive(Serialize)]
pub struct PricingResponse {
    pub room_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(flatten)]
    pub pricing: Pricing,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub today: NaiveDate,
    pub stats: DashboardStats,
    pub recent_bookings: Vec<Booking>,
    pub revenue: Vec<DailyRevenue>,
}

#[derive(Serialize)]
pub struct BookingListResponse {
    pub total: usize,
    pub count: usize,
    pub bookings: Vec<Booking>,
}
