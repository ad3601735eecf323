use crate::domain::models::booking::{Booking, NewBookingParams};
use crate::domain::models::room::RoomType;
use crate::domain::services::availability::available_count;
use crate::error::AppError;
use tracing::warn;

/// Builds a pending booking for the requested room. Inventory is not consulted here.
pub fn create_booking(rooms: &[RoomType], params: NewBookingParams) -> Result<Booking, AppError> {
    let room = rooms.iter()
        .find(|r| r.id == params.room_id)
        .ok_or(AppError::NotFound("Room not found".into()))?;

    Ok(Booking::new(room, params))
}

/// Same as [`create_booking`], but refuses rooms that cannot take the party or have no free inventory.
pub fn create_checked_booking(
    rooms: &[RoomType],
    existing: &[Booking],
    params: NewBookingParams,
) -> Result<Booking, AppError> {
    let room = rooms.iter()
        .find(|r| r.id == params.room_id)
        .ok_or(AppError::NotFound("Room not found".into()))?;

    if params.num_guests == 0 {
        return Err(AppError::Validation("At least one guest is required".into()));
    }
    if params.num_guests > room.max_occupancy {
        return Err(AppError::Validation(format!(
            "{} sleeps at most {} guests", room.name, room.max_occupancy
        )));
    }

    if available_count(room, &params.stay, existing) == 0 {
        warn!(
            "Booking rejected: {} sold out for {} to {}",
            room.id, params.stay.check_in(), params.stay.check_out()
        );
        return Err(AppError::Conflict("Room is no longer available for the selected dates".into()));
    }

    Ok(Booking::new(room, params))
}
