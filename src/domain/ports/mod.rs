use crate::domain::models::{
    auth::AdminSession, booking::Booking, draft::BookingDraft, hotel::Hotel, room::RoomType,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn get(&self) -> Result<Hotel, AppError>;
}

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<RoomType>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<RoomType>, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Booking>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn find_by_reference(&self, reference: &str) -> Result<Option<Booking>, AppError>;
    async fn list_recent(&self, limit: usize) -> Result<Vec<Booking>, AppError>;
}

/// Edit applied to a stored draft while the store is locked.
pub type DraftEdit = Box<dyn FnOnce(&mut BookingDraft) -> Result<(), AppError> + Send>;

#[async_trait]
pub trait DraftRepository: Send + Sync {
    async fn create(&self, draft: &BookingDraft) -> Result<BookingDraft, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<BookingDraft>, AppError>;
    /// Applies `edit` atomically. Nothing is stored when it fails.
    async fn modify(&self, id: &str, edit: DraftEdit) -> Result<BookingDraft, AppError>;
    /// Conflict while a checkout is in flight.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn list_completed_before(&self, cutoff: DateTime<Utc>) -> Result<Vec<BookingDraft>, AppError>;
    async fn delete_idle_since(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError>;
}

#[async_trait]
pub trait AdminSessionRepository: Send + Sync {
    async fn create(&self, session: &AdminSession) -> Result<(), AppError>;
    async fn find(&self, token_hash: &str) -> Result<Option<AdminSession>, AppError>;
    async fn delete(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError>;
}
