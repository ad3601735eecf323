mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::{booking_json, parse_body, test_config, TestApp};
use hotel_booking_backend::infra::fixtures::Fixtures;
use serde_json::{json, Value};
use tower::ServiceExt;

fn day(offset: i64) -> String {
    (Utc::now().date_naive() + Duration::days(offset)).format("%Y-%m-%d").to_string()
}

fn created(offset: i64) -> String {
    format!("{}T00:00:00Z", day(offset))
}

fn todays_bookings() -> Value {
    json!([
        booking_json("a", "deluxe-garden", &day(0), &day(2), "confirmed", "paid", 336.0, &created(0)),
        booking_json("b", "ocean-view-suite", &day(-2), &day(0), "checked_in", "paid", 560.0, &created(-1)),
        booking_json("c", "family-villa", &day(0), &day(1), "cancelled", "refunded", 448.0, &created(-2)),
        booking_json("d", "presidential-suite", &day(5), &day(7), "pending", "pending", 1792.0, &created(-3)),
    ])
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = TestApp::new().await;

    let res = app.send_json("POST", "/api/v1/admin/login", json!({"email": "demo@hotel.com", "password": "wrong"})).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().get(header::SET_COOKIE).is_none());

    let res = app.send_json("POST", "/api/v1/admin/login", json!({"email": "DEMO@hotel.com", "password": "Demo2024!"})).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["email"], "demo@hotel.com");
}

#[tokio::test]
async fn test_admin_routes_require_session_and_csrf() {
    let app = TestApp::new().await;

    let res = app.get("/api/v1/admin/dashboard").await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app.router.clone().oneshot(
        Request::builder().uri("/api/v1/admin/bookings")
            .header(header::COOKIE, "admin_session=forged")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let auth = app.login().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/admin/bookings/booking-001/check-in")
            .header(header::COOKIE, auth.cookie())
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/admin/bookings/booking-001/check-in")
            .header(header::COOKIE, auth.cookie())
            .header("X-CSRF-Token", "wrong")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = app.admin_get(&auth, "/api/v1/admin/dashboard").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = TestApp::new().await;
    let auth = app.login().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/admin/logout")
            .header(header::COOKIE, auth.cookie())
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.admin_get(&auth, "/api/v1/admin/dashboard").await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_dashboard_stats_for_today() {
    let app = TestApp::with_bookings(todays_bookings());
    let auth = app.login().await;

    let res = app.admin_get(&auth, "/api/v1/admin/dashboard").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["today"], day(0).as_str());

    let stats = &body["stats"];
    assert_eq!(stats["today_arrivals"], 1, "cancelled arrival is not counted");
    assert_eq!(stats["today_departures"], 1);
    assert_eq!(stats["total_revenue"].as_f64(), Some(896.0));
    assert_eq!(stats["occupied_rooms"], 2);
    assert_eq!(stats["total_rooms"], 11);
    assert_eq!(stats["occupancy_rate"], 18);

    let recent: Vec<&str> = body["recent_bookings"].as_array().unwrap()
        .iter().map(|b| b["id"].as_str().unwrap()).collect();
    assert_eq!(recent, vec!["a", "b", "c", "d"]);

    let revenue = body["revenue"].as_array().unwrap();
    assert_eq!(revenue.len(), 14);
    assert_eq!(revenue[13]["date"], day(0).as_str());
    assert_eq!(revenue[13]["revenue"].as_f64(), Some(336.0));
    assert_eq!(revenue[12]["revenue"].as_f64(), Some(560.0));
    assert_eq!(revenue[11]["revenue"].as_f64(), Some(0.0), "refunded booking earns nothing");
}

#[tokio::test]
async fn test_dashboard_with_no_rooms() {
    let fixtures = Fixtures::from_json(include_str!("../data/hotel.json"), "[]", "[]").unwrap();
    let app = TestApp::with_fixtures(fixtures, test_config());
    let auth = app.login().await;

    let body = parse_body(app.admin_get(&auth, "/api/v1/admin/dashboard").await).await;
    assert_eq!(body["stats"]["occupancy_rate"], 0);
    assert_eq!(body["stats"]["total_rooms"], 0);
    assert_eq!(body["stats"]["total_revenue"].as_f64(), Some(0.0));
    assert!(body["recent_bookings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_revenue_window() {
    let app = TestApp::with_bookings(todays_bookings());
    let auth = app.login().await;

    let body = parse_body(app.admin_get(&auth, "/api/v1/admin/revenue").await).await;
    assert_eq!(body.as_array().unwrap().len(), 30);

    let body = parse_body(app.admin_get(&auth, "/api/v1/admin/revenue?days=2").await).await;
    let series = body.as_array().unwrap();
    assert_eq!(series[0]["date"], day(-1).as_str());
    assert_eq!(series[1]["revenue"].as_f64(), Some(336.0));

    let res = app.admin_get(&auth, "/api/v1/admin/revenue?days=0").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let res = app.admin_get(&auth, "/api/v1/admin/revenue?days=400").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_search() {
    let app = TestApp::new().await;
    let auth = app.login().await;

    let body = parse_body(app.admin_get(&auth, "/api/v1/admin/bookings").await).await;
    assert_eq!(body["total"], 8);
    assert_eq!(body["count"], 8);

    let body = parse_body(app.admin_get(&auth, "/api/v1/admin/bookings?q=SOPHIE").await).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["bookings"][0]["reference"], "GRP-20241208-F9T3YU");

    let body = parse_body(app.admin_get(&auth, "/api/v1/admin/bookings?q=f9t3&status=all").await).await;
    assert_eq!(body["count"], 1);

    let body = parse_body(app.admin_get(&auth, "/api/v1/admin/bookings?status=checked_out").await).await;
    assert_eq!(body["count"], 2);

    let body = parse_body(app.admin_get(&auth, "/api/v1/admin/bookings?q=chen&status=checked_out").await).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["bookings"][0]["id"], "booking-008");

    let body = parse_body(app.admin_get(&auth, "/api/v1/admin/bookings?q=chen&status=pending").await).await;
    assert_eq!(body["count"], 0);

    let res = app.admin_get(&auth, "/api/v1/admin/bookings?status=lost").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_detail_and_transitions() {
    let app = TestApp::new().await;
    let auth = app.login().await;

    let res = app.admin_get(&auth, "/api/v1/admin/bookings/booking-001").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "confirmed");

    let res = app.admin_get(&auth, "/api/v1/admin/bookings/booking-999").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.admin_post(&auth, "/api/v1/admin/bookings/booking-001/check-in").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "checked_in");

    // Preview only, the store is unchanged
    let res = app.admin_get(&auth, "/api/v1/admin/bookings/booking-001").await;
    assert_eq!(parse_body(res).await["status"], "confirmed");

    let res = app.admin_post(&auth, "/api/v1/admin/bookings/booking-004/check-in").await;
    assert_eq!(res.status(), StatusCode::CONFLICT, "pending bookings must be confirmed first");

    let res = app.admin_post(&auth, "/api/v1/admin/bookings/booking-004/cancel").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "cancelled");

    let res = app.admin_post(&auth, "/api/v1/admin/bookings/booking-006/cancel").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}
