#![allow(dead_code)]

use hotel_booking_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::{factory::build_state, fixtures::Fixtures},
};
use std::sync::Arc;
use axum::{
    body::Body,
    http::{Request, header},
    Router,
};
use tower::ServiceExt;
use serde_json::Value;

pub const ADMIN_EMAIL: &str = "demo@hotel.com";
pub const ADMIN_PASSWORD: &str = "Demo2024!";

pub struct AuthHeaders {
    pub session_token: String,
    pub csrf_token: String,
}

impl AuthHeaders {
    pub fn cookie(&self) -> String {
        format!("admin_session={}", self.session_token)
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
}

pub fn test_config() -> Config {
    Config {
        port: 0,
        data_dir: None,
        log_dir: "./logs".to_string(),
        hotel_tz: chrono_tz::UTC,
        payment_delay_ms: 0,
        draft_reset_after_secs: 30,
        draft_idle_ttl_secs: 3600,
        draft_sweep_interval_secs: 5,
        admin_email: ADMIN_EMAIL.to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
        admin_session_hours: 8,
    }
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_fixtures(Fixtures::embedded().expect("embedded fixtures must load"), test_config())
    }

    /// Same hotel and rooms as the embedded data, with the given bookings array.
    pub fn with_bookings(bookings: Value) -> Self {
        let fixtures = Fixtures::from_json(
            include_str!("../data/hotel.json"),
            include_str!("../data/rooms.json"),
            &bookings.to_string(),
        ).expect("custom fixtures must load");
        Self::with_fixtures(fixtures, test_config())
    }

    pub fn with_fixtures(fixtures: Fixtures, config: Config) -> Self {
        let state = Arc::new(build_state(&config, fixtures));
        let router = create_router(state.clone());
        Self { router, state }
    }

    pub async fn login(&self) -> AuthHeaders {
        let payload = serde_json::json!({
            "email": ADMIN_EMAIL,
            "password": ADMIN_PASSWORD
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/admin/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let cookies: Vec<String> = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .collect();

        let session_cookie = cookies.iter()
            .find(|c| c.contains("admin_session="))
            .expect("No admin_session cookie returned");

        let start = session_cookie.find("admin_session=").unwrap() + "admin_session=".len();
        let end = session_cookie[start..].find(';').unwrap_or(session_cookie.len() - start);
        let session_token = session_cookie[start..start + end].to_string();

        let body_json = parse_body(response).await;
        let csrf_token = body_json["csrf_token"].as_str().expect("No csrf_token in body").to_string();

        AuthHeaders {
            session_token,
            csrf_token,
        }
    }

    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder().uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: Value) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    pub async fn admin_get(&self, auth: &AuthHeaders, uri: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .uri(uri)
                .header(header::COOKIE, auth.cookie())
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }

    pub async fn admin_post(&self, auth: &AuthHeaders, uri: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::COOKIE, auth.cookie())
                .header("X-CSRF-Token", &auth.csrf_token)
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn booking_json(id: &str, room_id: &str, check_in: &str, check_out: &str, status: &str, payment_status: &str, total: f64, created_at: &str) -> Value {
    serde_json::json!({
        "id": id,
        "reference": format!("GRP-20241201-{:0>6}", id.to_uppercase()),
        "guest_name": format!("Guest {}", id),
        "guest_email": format!("{}@example.com", id),
        "guest_phone": "",
        "guest_country": "",
        "check_in": check_in,
        "check_out": check_out,
        "room_type": room_id,
        "room_id": room_id,
        "num_guests": 2,
        "num_nights": 2,
        "room_rate": 150,
        "total_amount": total,
        "tax_amount": 0,
        "status": status,
        "payment_status": payment_status,
        "created_at": created_at
    })
}
