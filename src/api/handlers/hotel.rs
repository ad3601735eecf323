use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::domain::services::availability::list_without_dates;
use crate::error::AppError;
use std::sync::Arc;

pub async fn get_hotel(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = state.hotel_repo.get().await?;
    Ok(Json(hotel))
}

pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = state.room_repo.list().await?;
    Ok(Json(list_without_dates(&rooms)))
}

pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let room = state.room_repo.find_by_id(&room_id).await?
        .ok_or_else(|| AppError::NotFound(format!("Room '{}' not found", room_id)))?;
    Ok(Json(room))
}
