use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{BookingSearchParams, RevenueParams},
    responses::{BookingListResponse, DashboardResponse},
};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::booking::{Booking, BookingStatus};
use crate::domain::services::{
    dashboard::{dashboard_stats, hotel_today, revenue_series},
    search::search_bookings,
};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

const RECENT_BOOKINGS: usize = 5;
const DASHBOARD_REVENUE_DAYS: u32 = 14;
const DEFAULT_REVENUE_DAYS: u32 = 30;
const MAX_REVENUE_DAYS: u32 = 365;

pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    AdminUser(_session): AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let tz = state.config.hotel_tz;
    let today = hotel_today(tz);

    let rooms = state.room_repo.list().await?;
    let bookings = state.booking_repo.list().await?;

    Ok(Json(DashboardResponse {
        today,
        stats: dashboard_stats(&rooms, &bookings, today),
        recent_bookings: state.booking_repo.list_recent(RECENT_BOOKINGS).await?,
        revenue: revenue_series(&bookings, today, DASHBOARD_REVENUE_DAYS, tz),
    }))
}

pub async fn get_revenue(
    State(state): State<Arc<AppState>>,
    AdminUser(_session): AdminUser,
    Query(params): Query<RevenueParams>,
) -> Result<impl IntoResponse, AppError> {
    let days = params.days.unwrap_or(DEFAULT_REVENUE_DAYS);
    if !(1..=MAX_REVENUE_DAYS).contains(&days) {
        return Err(AppError::Validation(format!("days must be between 1 and {}", MAX_REVENUE_DAYS)));
    }

    let tz = state.config.hotel_tz;
    let bookings = state.booking_repo.list().await?;
    Ok(Json(revenue_series(&bookings, hotel_today(tz), days, tz)))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    AdminUser(_session): AdminUser,
    Query(params): Query<BookingSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let status = match params.status.as_deref() {
        None | Some("") | Some("all") => None,
        Some(s) => Some(s.parse::<BookingStatus>()?),
    };

    let bookings = state.booking_repo.list().await?;
    let matched: Vec<Booking> = search_bookings(&bookings, params.q.as_deref().unwrap_or(""), status)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(BookingListResponse {
        total: bookings.len(),
        count: matched.len(),
        bookings: matched,
    }))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    AdminUser(_session): AdminUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

/// Returns the checked-in booking without persisting it; the fixture store is read-only.
pub async fn check_in_booking(
    State(state): State<Arc<AppState>>,
    AdminUser(session): AdminUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    transition_preview(&state, &session.email, &booking_id, BookingStatus::CheckedIn).await
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    AdminUser(session): AdminUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    transition_preview(&state, &session.email, &booking_id, BookingStatus::Cancelled).await
}

async fn transition_preview(
    state: &AppState,
    admin: &str,
    booking_id: &str,
    next: BookingStatus,
) -> Result<Json<Booking>, AppError> {
    let booking = state.booking_repo.find_by_id(booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let updated = booking.transition(next)?;
    info!("Admin {} moved booking {} from {} to {}", admin, booking.reference, booking.status, updated.status);
    Ok(Json(updated))
}
