use axum::{extract::{State, Path}, http::StatusCode, response::{Html, IntoResponse}, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{SelectRoomRequest, SetDatesRequest, SetGuestsRequest};
use crate::domain::models::booking::{Booking, NewBookingParams, StayRange};
use crate::domain::models::draft::{BookingDraft, DraftPhase, GuestInfoUpdate};
use crate::domain::services::{
    booking_factory::create_checked_booking, payment::simulate_payment, voucher::render_voucher,
};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

async fn load_draft(state: &AppState, id: &str) -> Result<BookingDraft, AppError> {
    state.draft_repo.find_by_id(id).await?
        .ok_or(AppError::NotFound("Draft not found".into()))
}

pub async fn create_draft(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let draft = state.draft_repo.create(&BookingDraft::new()).await?;
    info!("Draft created: {}", draft.id);
    Ok((StatusCode::CREATED, Json(draft)))
}

pub async fn get_draft(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(load_draft(&state, &id).await?))
}

pub async fn delete_draft(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.draft_repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_dates(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<SetDatesRequest>,
) -> Result<impl IntoResponse, AppError> {
    let stay = StayRange::parse(&payload.check_in, &payload.check_out)?;
    let draft = state.draft_repo.modify(&id, Box::new(move |d: &mut BookingDraft| d.set_dates(stay))).await?;
    Ok(Json(draft))
}

pub async fn set_guests(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<SetGuestsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let draft = state.draft_repo
        .modify(&id, Box::new(move |d: &mut BookingDraft| d.set_num_guests(payload.num_guests)))
        .await?;
    Ok(Json(draft))
}

pub async fn select_room(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<SelectRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    load_draft(&state, &id).await?;

    if let Some(room_id) = &payload.room_id
        && state.room_repo.find_by_id(room_id).await?.is_none()
    {
        return Err(AppError::NotFound(format!("Room '{}' not found", room_id)));
    }

    let draft = state.draft_repo
        .modify(&id, Box::new(move |d: &mut BookingDraft| d.select_room(payload.room_id)))
        .await?;
    Ok(Json(draft))
}

pub async fn set_guest_info(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<GuestInfoUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let draft = state.draft_repo.modify(&id, Box::new(move |d: &mut BookingDraft| d.set_guest_info(payload))).await?;
    Ok(Json(draft))
}

pub async fn reset_draft(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let draft = state.draft_repo.modify(&id, Box::new(|d: &mut BookingDraft| {
        if d.phase == DraftPhase::AwaitingPayment {
            return Err(AppError::Conflict("Payment is being processed".into()));
        }
        d.reset();
        Ok(())
    })).await?;
    Ok(Json(draft))
}

/// Locks the draft in `awaiting_payment`, waits out the payment, then completes or rolls back.
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let draft = state.draft_repo
        .modify(&id, Box::new(|d: &mut BookingDraft| d.begin_payment().map(|_| ())))
        .await?;
    let params = draft.booking_params()?;

    info!(draft_id = %draft.id, room_id = %params.room_id, "Processing payment");

    match take_payment(&state, params).await {
        Ok(booking) => {
            info!(draft_id = %draft.id, reference = %booking.reference, "Checkout completed");
            let draft = state.draft_repo
                .modify(&id, Box::new(move |d: &mut BookingDraft| {
                    d.complete(booking);
                    Ok(())
                }))
                .await?;
            Ok(Json(draft))
        }
        Err(e) => {
            warn!(draft_id = %draft.id, "Checkout failed: {}", e);
            state.draft_repo
                .modify(&id, Box::new(|d: &mut BookingDraft| {
                    d.abort_payment();
                    Ok(())
                }))
                .await?;
            Err(e)
        }
    }
}

async fn take_payment(state: &AppState, params: NewBookingParams) -> Result<Booking, AppError> {
    simulate_payment(state.config.payment_delay_ms).await;
    let rooms = state.room_repo.list().await?;
    let existing = state.booking_repo.list().await?;
    create_checked_booking(&rooms, &existing, params)
}

pub async fn get_voucher(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let draft = load_draft(&state, &id).await?;
    let booking = draft.booking
        .ok_or(AppError::NotFound("No completed booking on this draft".into()))?;

    let hotel = state.hotel_repo.get().await?;
    let html = render_voucher(&state.templates, &hotel, &booking)?;
    Ok(Html(html))
}
