use axum::{extract::State, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::LoginRequest;
use crate::api::extractors::auth::SESSION_COOKIE;
use crate::domain::models::auth::AuthResponse;
use std::sync::Arc;
use tower_cookies::{Cookies, Cookie};
use tower_cookies::cookie::SameSite;
use time::Duration;
use tracing::{info, warn};

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (raw_token, session) = state.auth_service.login(&payload.email, &payload.password).await
        .inspect_err(|_| warn!("Failed admin login for {}", payload.email))?;

    let mut session_c = Cookie::new(SESSION_COOKIE, raw_token);
    session_c.set_http_only(true);
    session_c.set_secure(true);
    session_c.set_same_site(SameSite::Strict);
    session_c.set_path("/");
    session_c.set_max_age(Duration::hours(state.config.admin_session_hours));
    cookies.add(session_c);

    info!("Admin logged in: {}", session.email);

    Ok(Json(AuthResponse {
        csrf_token: session.csrf_token,
        email: session.email,
    }))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        let _ = state.auth_service.logout(cookie.value()).await;
    }

    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    info!("Admin logged out");

    Ok(StatusCode::OK)
}
