use rust_decimal::Decimal;
use crate::domain::models::booking::{Booking, StayRange};
use crate::domain::models::room::{AvailabilityQuery, RoomAvailability, RoomType};

/// Nights assumed when rooms are listed before any dates are picked.
pub const DEFAULT_LISTING_NIGHTS: u32 = 2;

pub fn count_overlapping(room_id: &str, stay: &StayRange, bookings: &[Booking]) -> usize {
    bookings.iter()
        .filter(|b| b.room_id == room_id && !b.is_cancelled() && b.overlaps(stay))
        .count()
}

pub fn available_count(room: &RoomType, stay: &StayRange, bookings: &[Booking]) -> u32 {
    let booked = count_overlapping(&room.id, stay, bookings);
    room.total_rooms.saturating_sub(booked as u32)
}

pub fn check_availability(
    rooms: &[RoomType],
    bookings: &[Booking],
    query: &AvailabilityQuery,
) -> Vec<RoomAvailability> {
    let nights = Decimal::from(query.stay.nights());

    rooms.iter()
        .filter(|room| room.max_occupancy >= query.num_guests)
        .map(|room| RoomAvailability {
            room: room.clone(),
            available_count: available_count(room, &query.stay, bookings),
            total_price: room.price * nights,
        })
        .filter(|r| r.available_count > 0)
        .collect()
}

pub fn list_without_dates(rooms: &[RoomType]) -> Vec<RoomAvailability> {
    let nights = Decimal::from(DEFAULT_LISTING_NIGHTS);

    rooms.iter()
        .map(|room| RoomAvailability {
            room: room.clone(),
            available_count: room.total_rooms,
            total_price: room.price * nights,
        })
        .collect()
}
