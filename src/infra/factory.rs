use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::{auth_service::AuthService, voucher::load_templates};
use crate::infra::fixtures::Fixtures;
use crate::infra::repositories::{
    fixture_booking_repo::FixtureBookingRepo, fixture_hotel_repo::FixtureHotelRepo,
    fixture_room_repo::FixtureRoomRepo, memory_draft_repo::MemoryDraftRepo,
    memory_session_repo::MemorySessionRepo,
};

pub fn bootstrap_state(config: &Config) -> AppState {
    let fixtures = Fixtures::load(config.data_dir.as_deref())
        .expect("Failed to load fixture data");

    info!("Hotel time zone: {}", config.hotel_tz);
    build_state(config, fixtures)
}

pub fn build_state(config: &Config, fixtures: Fixtures) -> AppState {
    let fixtures = Arc::new(fixtures);
    let templates = Arc::new(load_templates().expect("Failed to load voucher template"));

    let session_repo = Arc::new(MemorySessionRepo::new());
    let auth_service = Arc::new(AuthService::new(session_repo, config.clone()));

    AppState {
        config: config.clone(),
        hotel_repo: Arc::new(FixtureHotelRepo::new(fixtures.clone())),
        room_repo: Arc::new(FixtureRoomRepo::new(fixtures.clone())),
        booking_repo: Arc::new(FixtureBookingRepo::new(fixtures)),
        draft_repo: Arc::new(MemoryDraftRepo::new()),
        auth_service,
        templates,
    }
}
