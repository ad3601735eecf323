use crate::domain::models::booking::StayRange;
use crate::error::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RoomType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub size: String,
    pub beds: String,
    pub max_occupancy: u32,
    pub total_rooms: u32,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct RoomAvailability {
    #[serde(flatten)]
    pub room: RoomType,
    pub available_count: u32,
    pub total_price: Decimal,
}

#[derive(Debug, Clone, Copy)]
pub struct AvailabilityQuery {
    pub stay: StayRange,
    pub num_guests: u32,
}

impl AvailabilityQuery {
    pub fn new(stay: StayRange, num_guests: u32) -> Result<Self, AppError> {
        if num_guests == 0 {
            return Err(AppError::Validation("At least one guest is required".into()));
        }
        Ok(Self { stay, num_guests })
    }
}
