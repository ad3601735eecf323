use std::sync::Arc;
use crate::domain::{models::room::RoomType, ports::RoomRepository};
use crate::error::AppError;
use crate::infra::fixtures::Fixtures;
use async_trait::async_trait;

pub struct FixtureRoomRepo {
    fixtures: Arc<Fixtures>,
}

impl FixtureRoomRepo {
    pub fn new(fixtures: Arc<Fixtures>) -> Self {
        Self { fixtures }
    }
}

#[async_trait]
impl RoomRepository for FixtureRoomRepo {
    async fn list(&self) -> Result<Vec<RoomType>, AppError> {
        Ok(self.fixtures.rooms.clone())
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<RoomType>, AppError> {
        Ok(self.fixtures.rooms.iter().find(|r| r.id == id).cloned())
    }
}
