use std::sync::Arc;
use crate::domain::{models::hotel::Hotel, ports::HotelRepository};
use crate::error::AppError;
use crate::infra::fixtures::Fixtures;
use async_trait::async_trait;

pub struct FixtureHotelRepo {
    fixtures: Arc<Fixtures>,
}

impl FixtureHotelRepo {
    pub fn new(fixtures: Arc<Fixtures>) -> Self {
        Self { fixtures }
    }
}

#[async_trait]
impl HotelRepository for FixtureHotelRepo {
    async fn get(&self) -> Result<Hotel, AppError> {
        Ok(self.fixtures.hotel.clone())
    }
}
