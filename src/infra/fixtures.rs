use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use crate::domain::models::{booking::Booking, hotel::Hotel, room::RoomType};
use crate::error::AppError;

const HOTEL_FILE: &str = "hotel.json";
const ROOMS_FILE: &str = "rooms.json";
const BOOKINGS_FILE: &str = "bookings.json";

/// Static data set shared read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub hotel: Hotel,
    pub rooms: Vec<RoomType>,
    pub bookings: Vec<Booking>,
}

impl Fixtures {
    pub fn load(data_dir: Option<&str>) -> Result<Self, AppError> {
        match data_dir {
            Some(dir) => Self::from_dir(Path::new(dir)),
            None => Self::embedded(),
        }
    }

    pub fn embedded() -> Result<Self, AppError> {
        Self::from_json(
            include_str!("../../data/hotel.json"),
            include_str!("../../data/rooms.json"),
            include_str!("../../data/bookings.json"),
        )
    }

    pub fn from_dir(dir: &Path) -> Result<Self, AppError> {
        info!("Loading fixtures from {}", dir.display());
        let read = |name: &str| {
            fs::read_to_string(dir.join(name))
                .map_err(|e| AppError::Fixture(format!("{}: {}", dir.join(name).display(), e)))
        };
        Self::from_json(&read(HOTEL_FILE)?, &read(ROOMS_FILE)?, &read(BOOKINGS_FILE)?)
    }

    pub fn from_json(hotel: &str, rooms: &str, bookings: &str) -> Result<Self, AppError> {
        let fixtures = Self {
            hotel: serde_json::from_str(hotel)
                .map_err(|e| AppError::Fixture(format!("{}: {}", HOTEL_FILE, e)))?,
            rooms: serde_json::from_str(rooms)
                .map_err(|e| AppError::Fixture(format!("{}: {}", ROOMS_FILE, e)))?,
            bookings: serde_json::from_str(bookings)
                .map_err(|e| AppError::Fixture(format!("{}: {}", BOOKINGS_FILE, e)))?,
        };
        fixtures.validate()?;

        info!(
            "Fixtures loaded: {} with {} room types and {} bookings",
            fixtures.hotel.name, fixtures.rooms.len(), fixtures.bookings.len()
        );
        Ok(fixtures)
    }

    fn validate(&self) -> Result<(), AppError> {
        let mut room_ids = HashSet::new();
        for room in &self.rooms {
            if !room_ids.insert(room.id.as_str()) {
                return Err(AppError::Fixture(format!("duplicate room id {}", room.id)));
            }
        }

        for booking in &self.bookings {
            if booking.check_out <= booking.check_in {
                return Err(AppError::Fixture(format!(
                    "booking {} checks out before it checks in", booking.reference
                )));
            }
            if !room_ids.contains(booking.room_id.as_str()) {
                warn!("Booking {} refers to unknown room {}", booking.reference, booking.room_id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_fixtures_load() {
        let fixtures = Fixtures::embedded().unwrap();
        assert!(!fixtures.rooms.is_empty());
        assert!(!fixtures.bookings.is_empty());
        assert_eq!(fixtures.hotel.currency, "USD");
    }

    #[test]
    fn test_duplicate_room_ids_rejected() {
        let rooms = include_str!("../../data/rooms.json");
        let room: serde_json::Value = serde_json::from_str::<Vec<serde_json::Value>>(rooms).unwrap()[0].clone();
        let doubled = serde_json::to_string(&vec![room.clone(), room]).unwrap();

        let err = Fixtures::from_json(include_str!("../../data/hotel.json"), &doubled, "[]").unwrap_err();
        assert!(matches!(err, AppError::Fixture(_)));
    }
}
