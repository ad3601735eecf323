pub mod fixture_booking_repo;
pub mod fixture_hotel_repo;
pub mod fixture_room_repo;

pub mod memory_draft_repo;
pub mod memory_session_repo;
