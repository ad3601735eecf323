use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, hotel, availability, booking, draft, admin, auth};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Catalogue
        .route("/api/v1/hotel", get(hotel::get_hotel))
        .route("/api/v1/rooms", get(hotel::list_rooms))
        .route("/api/v1/rooms/{room_id}", get(hotel::get_room))
        .route("/api/v1/availability", get(availability::get_availability))
        .route("/api/v1/pricing", get(availability::get_pricing))

        // Direct booking
        .route("/api/v1/bookings", post(booking::create_booking))
        .route("/api/v1/bookings/{reference}", get(booking::get_booking_by_reference))

        // Booking flow drafts
        .route("/api/v1/drafts", post(draft::create_draft))
        .route("/api/v1/drafts/{id}", get(draft::get_draft).delete(draft::delete_draft))
        .route("/api/v1/drafts/{id}/dates", put(draft::set_dates))
        .route("/api/v1/drafts/{id}/guests", put(draft::set_guests))
        .route("/api/v1/drafts/{id}/room", put(draft::select_room))
        .route("/api/v1/drafts/{id}/guest-info", put(draft::set_guest_info))
        .route("/api/v1/drafts/{id}/reset", post(draft::reset_draft))
        .route("/api/v1/drafts/{id}/checkout", post(draft::checkout))
        .route("/api/v1/drafts/{id}/voucher", get(draft::get_voucher))

        // Admin auth
        .route("/api/v1/admin/login", post(auth::login))
        .route("/api/v1/admin/logout", post(auth::logout))

        // Admin dashboard
        .route("/api/v1/admin/dashboard", get(admin::get_dashboard))
        .route("/api/v1/admin/revenue", get(admin::get_revenue))
        .route("/api/v1/admin/bookings", get(admin::list_bookings))
        .route("/api/v1/admin/bookings/{booking_id}", get(admin::get_booking))
        .route("/api/v1/admin/bookings/{booking_id}/check-in", post(admin::check_in_booking))
        .route("/api/v1/admin/bookings/{booking_id}/cancel", post(admin::cancel_booking))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        admin = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
