use axum::{extract::{State, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{AvailabilityParams, PricingParams},
    responses::{AvailabilityResponse, PricingResponse},
};
use crate::domain::models::{booking::StayRange, draft::DEFAULT_NUM_GUESTS, room::AvailabilityQuery};
use crate::domain::services::{availability::check_availability, pricing::calculate_pricing};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AvailabilityParams>,
) -> Result<impl IntoResponse, AppError> {
    let stay = StayRange::parse(&params.check_in, &params.check_out)?;
    let query = AvailabilityQuery::new(stay, params.guests.unwrap_or(DEFAULT_NUM_GUESTS))?;

    let rooms = state.room_repo.list().await?;
    let bookings = state.booking_repo.list().await?;

    let available = check_availability(&rooms, &bookings, &query);

    info!(
        "Availability {} to {} for {} guests: {} of {} room types open",
        stay.check_in(), stay.check_out(), query.num_guests, available.len(), rooms.len()
    );

    Ok(Json(AvailabilityResponse {
        check_in: stay.check_in(),
        check_out: stay.check_out(),
        num_nights: stay.nights(),
        num_guests: query.num_guests,
        rooms: available,
    }))
}

pub async fn get_pricing(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PricingParams>,
) -> Result<impl IntoResponse, AppError> {
    let stay = StayRange::parse(&params.check_in, &params.check_out)?;

    let room = state.room_repo.find_by_id(&params.room_id).await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    Ok(Json(PricingResponse {
        room_id: room.id,
        check_in: stay.check_in(),
        check_out: stay.check_out(),
        pricing: calculate_pricing(room.price, stay.nights()),
    }))
}
