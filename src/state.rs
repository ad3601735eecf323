use std::sync::Arc;
use crate::domain::ports::{
    BookingRepository, DraftRepository, HotelRepository, RoomRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub hotel_repo: Arc<dyn HotelRepository>,
    pub room_repo: Arc<dyn RoomRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub draft_repo: Arc<dyn DraftRepository>,
    pub auth_service: Arc<AuthService>,
    pub templates: Arc<Tera>,
}
