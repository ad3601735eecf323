use std::sync::Arc;
use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use crate::infra::fixtures::Fixtures;
use async_trait::async_trait;

/// Read-only view over the fixture bookings. New bookings are never written back.
pub struct FixtureBookingRepo {
    fixtures: Arc<Fixtures>,
}

impl FixtureBookingRepo {
    pub fn new(fixtures: Arc<Fixtures>) -> Self {
        Self { fixtures }
    }
}

#[async_trait]
impl BookingRepository for FixtureBookingRepo {
    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        Ok(self.fixtures.bookings.clone())
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        Ok(self.fixtures.bookings.iter().find(|b| b.id == id).cloned())
    }
    async fn find_by_reference(&self, reference: &str) -> Result<Option<Booking>, AppError> {
        Ok(self.fixtures.bookings.iter().find(|b| b.reference == reference).cloned())
    }
    async fn list_recent(&self, limit: usize) -> Result<Vec<Booking>, AppError> {
        let mut bookings = self.fixtures.bookings.clone();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        bookings.truncate(limit);
        Ok(bookings)
    }
}
