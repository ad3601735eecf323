use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateBookingRequest;
use crate::domain::models::booking::{NewBookingParams, StayRange};
use crate::domain::services::booking_factory::create_checked_booking;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("create_booking: room {} from {} to {}", payload.room_id, payload.check_in, payload.check_out);

    let stay = StayRange::parse(&payload.check_in, &payload.check_out)?;

    if payload.guest_name.trim().is_empty() {
        return Err(AppError::Validation("Guest name is required".into()));
    }
    if !payload.guest_email.contains('@') {
        return Err(AppError::Validation("A valid guest email is required".into()));
    }

    let rooms = state.room_repo.list().await?;
    let existing = state.booking_repo.list().await?;

    let booking = create_checked_booking(&rooms, &existing, NewBookingParams {
        room_id: payload.room_id,
        stay,
        num_guests: payload.num_guests,
        guest_name: payload.guest_name,
        guest_email: payload.guest_email,
        guest_phone: payload.guest_phone.unwrap_or_default(),
        guest_country: payload.guest_country.unwrap_or_default(),
        special_requests: payload.special_requests,
    })?;

    info!("Booking created: {} ({}), not persisted", booking.reference, booking.id);
    Ok((StatusCode::CREATED, Json(booking)))
}

pub async fn get_booking_by_reference(
    State(state): State<Arc<AppState>>,
    Path(reference): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_reference(&reference).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}
