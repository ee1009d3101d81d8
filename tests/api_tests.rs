//! Tests de integración de la API sobre el storage en memoria

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use lodging_ops::config::environment::EnvironmentConfig;
use lodging_ops::models::auth::UserRole;
use lodging_ops::models::guest::{ContactType, Guest};
use lodging_ops::models::property::{
    CleaningStatus, LinenStatus, Property, Room, RoomStatus,
};
use lodging_ops::models::user::User;
use lodging_ops::routes::create_app;
use lodging_ops::state::AppState;
use lodging_ops::storage::{MemStorage, Storage};

struct TestApp {
    app: Router,
    storage: Arc<MemStorage>,
    guest_id: Uuid,
}

impl TestApp {
    async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.app.clone().oneshot(request).await.unwrap()
    }

    async fn login(&self, username: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                None,
                Some(json!({ "username": username, "password": "password" })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        body["token"].as_str().unwrap().to_string()
    }
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn user(username: &str, role: UserRole, property: Option<&str>) -> User {
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        // Cost mínimo para que la suite no pague bcrypt completo
        password_hash: bcrypt::hash("password", 4).unwrap(),
        name: username.to_string(),
        role,
        property: property.map(|p| p.to_string()),
        created_at: Utc::now(),
    }
}

fn room(id: &str, property_id: &str, number: &str) -> Room {
    Room {
        id: id.to_string(),
        property_id: property_id.to_string(),
        room_number: number.to_string(),
        status: RoomStatus::Available,
        door_code: None,
        door_code_expiry: None,
        cleaning_status: CleaningStatus::Clean,
        linen_status: LinenStatus::Fresh,
        notes: None,
        last_cleaned: None,
        last_linen_change: None,
    }
}

async fn setup() -> TestApp {
    let storage = Arc::new(MemStorage::new());

    for u in [
        user("admin", UserRole::Admin, None),
        user("manager", UserRole::Manager, Some("P1")),
        user("helper", UserRole::Helper, None),
    ] {
        storage.create_user(u).await.unwrap();
    }

    for property_id in ["P1", "P2"] {
        storage
            .create_property(Property {
                id: property_id.to_string(),
                name: format!("Casa {}", property_id),
                daily_rate: dec!(45),
                weekly_rate: dec!(250),
                monthly_rate: dec!(900),
                front_door_code: None,
                front_door_code_expiry: None,
                created_at: Utc::now(),
            })
            .await
            .unwrap();
    }

    for r in [
        room("P1-R1", "P1", "R1"),
        room("P1-R2", "P1", "R2"),
        room("P2-R1", "P2", "R1"),
    ] {
        storage.create_room(r).await.unwrap();
    }

    let guest = storage
        .create_guest(Guest {
            id: Uuid::new_v4(),
            name: "Jordan Pruitt".to_string(),
            contact: "jordan@example.com".to_string(),
            contact_type: ContactType::Email,
            referral_source: None,
            cashtag: None,
            created_at: Utc::now(),
        })
        .await
        .unwrap();

    let state = AppState::new(storage.clone(), EnvironmentConfig::for_tests());
    TestApp {
        app: create_app(state),
        storage,
        guest_id: guest.id,
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = setup().await;
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "lodging-ops");
}

#[tokio::test]
async fn test_login_and_verify() {
    let app = setup().await;
    let token = app.login("admin").await;

    let response = app
        .request("GET", "/api/auth/verify", Some(&token), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["user"]["username"], "admin");
    assert_eq!(body["user"]["role"], "admin");
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = setup().await;
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "username": "admin", "password": "nope" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_requests_without_token_are_rejected() {
    let app = setup().await;
    let response = app.request("GET", "/api/bookings", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_helper_cannot_list_users() {
    let app = setup().await;
    let token = app.login("helper").await;

    let response = app.request("GET", "/api/users", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_helper_gets_empty_booking_list() {
    let app = setup().await;
    let token = app.login("helper").await;

    let response = app.request("GET", "/api/bookings", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_manager_sees_only_their_rooms() {
    let app = setup().await;
    let token = app.login("manager").await;

    let response = app.request("GET", "/api/rooms", Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let rooms = body["data"].as_array().unwrap();
    assert_eq!(rooms.len(), 2);
    assert!(rooms.iter().all(|r| r["property_id"] == "P1"));
}

#[tokio::test]
async fn test_monthly_booking_and_door_code() {
    let app = setup().await;
    let token = app.login("admin").await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(&token),
            Some(json!({
                "room_id": "P1-R1",
                "guest_id": app.guest_id,
                "plan": "monthly",
                "total_amount": "900",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/rooms/P1-R1/generate-code",
            Some(&token),
            Some(json!({ "duration": "monthly" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let code = body["data"]["door_code"].as_str().unwrap();
    assert_eq!(code.len(), 4);
    assert!(code.chars().all(|c| c.is_ascii_digit()));

    let expiry: chrono::DateTime<Utc> =
        body["data"]["code_expiry"].as_str().unwrap().parse().unwrap();
    assert!(expiry > Utc::now() + Duration::days(34));
    assert!(expiry < Utc::now() + Duration::days(36));

    // Emitir el código no toca el estado de ocupación
    let room = app.storage.get_room("P1-R1").await.unwrap().unwrap();
    assert_eq!(room.status, RoomStatus::Occupied);
    assert_eq!(room.door_code.as_deref(), Some(code));
}

#[tokio::test]
async fn test_double_booking_is_rejected() {
    let app = setup().await;
    let token = app.login("admin").await;

    let booking = json!({
        "room_id": "P1-R1",
        "guest_id": app.guest_id,
        "plan": "weekly",
        "total_amount": "250",
    });

    let response = app
        .request("POST", "/api/bookings", Some(&token), Some(booking.clone()))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request("POST", "/api/bookings", Some(&token), Some(booking))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_cash_app_payment_marks_booking_paid_and_feeds_drawer() {
    let app = setup().await;
    let token = app.login("admin").await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(&token),
            Some(json!({
                "room_id": "P1-R1",
                "guest_id": app.guest_id,
                "plan": "weekly",
                "total_amount": "250",
            })),
        )
        .await;
    let booking_id = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "POST",
            "/api/payments",
            Some(&token),
            Some(json!({
                "booking_id": booking_id,
                "amount": "100",
                "method": "cash_app",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request(
            "GET",
            &format!("/api/bookings/{}", booking_id),
            Some(&token),
            None,
        )
        .await;
    let body = body_json(response).await;
    assert_eq!(body["payment_status"], "paid");

    let response = app
        .request(
            "GET",
            "/api/admin/cash-drawer/transactions",
            Some(&token),
            None,
        )
        .await;
    let body = body_json(response).await;
    let txns = body["data"].as_array().unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0]["txn_type"], "cashapp_received");
    assert_eq!(txns[0]["amount"], "100");
}

#[tokio::test]
async fn test_cash_payment_does_not_feed_drawer() {
    let app = setup().await;
    let token = app.login("admin").await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(&token),
            Some(json!({
                "room_id": "P1-R2",
                "guest_id": app.guest_id,
                "plan": "daily",
                "total_amount": "45",
            })),
        )
        .await;
    let booking_id = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    app.request(
        "POST",
        "/api/payments",
        Some(&token),
        Some(json!({
            "booking_id": booking_id,
            "amount": "45",
            "method": "cash",
        })),
    )
    .await;

    assert!(app.storage.list_drawer_txns().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_banned_inquiry_is_blocked_without_trace() {
    let app = setup().await;
    let admin = app.login("admin").await;

    let response = app
        .request(
            "POST",
            "/api/banned-users",
            Some(&admin),
            Some(json!({
                "email": "troublemaker@example.com",
                "reason": "impago reiterado",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/inquiries",
            None,
            Some(json!({
                "name": "Alguien",
                "contact": "Troublemaker@Example.com",
                "contact_type": "email",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["reason"], "blocked");
    assert!(app.storage.list_inquiries().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_inquiry_submit_and_track() {
    let app = setup().await;

    let response = app
        .request(
            "POST",
            "/api/inquiries",
            None,
            Some(json!({
                "name": "Lina",
                "contact": "lina@example.com",
                "contact_type": "email",
                "property_id": "P1",
                "plan": "weekly",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let token = body["tracker_token"].as_str().unwrap().to_string();
    assert_eq!(token.len(), 32);
    assert_eq!(body["status"], "received");

    let response = app
        .request(
            "GET",
            &format!("/api/inquiries/track/{}", token),
            None,
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "received");
    assert_eq!(body["property_id"], "P1");

    let response = app
        .request("GET", "/api/inquiries/track/nonexistent-token", None, None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_assign_room_converts_inquiry() {
    let app = setup().await;
    let admin = app.login("admin").await;

    let response = app
        .request(
            "POST",
            "/api/inquiries",
            None,
            Some(json!({
                "name": "Marco",
                "contact": "marco@example.com",
                "contact_type": "email",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let inquiry = &app.storage.list_inquiries().await.unwrap()[0];
    let inquiry_id = inquiry.id;

    let response = app
        .request(
            "POST",
            &format!("/api/inquiries/{}/assign-room", inquiry_id),
            Some(&admin),
            Some(json!({
                "room_id": "P1-R2",
                "plan": "weekly",
                "total_amount": "250",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"]["room_id"], "P1-R2");
    assert!(body["data"]["door_code"].as_str().is_some());

    let room = app.storage.get_room("P1-R2").await.unwrap().unwrap();
    assert_eq!(room.status, RoomStatus::Occupied);
    assert!(room.door_code.is_some());

    let inquiry = app.storage.get_inquiry(inquiry_id).await.unwrap().unwrap();
    assert_eq!(inquiry.status.as_str(), "booking_confirmed");
}

#[tokio::test]
async fn test_assign_room_to_occupied_room_leaves_no_guest() {
    let app = setup().await;
    let admin = app.login("admin").await;

    // Ocupa P1-R1 con un booking normal
    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(&admin),
            Some(json!({
                "room_id": "P1-R1",
                "guest_id": app.guest_id,
                "plan": "weekly",
                "total_amount": "250",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let guests_before = app.storage.list_guests().await.unwrap().len();

    let response = app
        .request(
            "POST",
            "/api/inquiries",
            None,
            Some(json!({
                "name": "Lidia",
                "contact": "lidia@example.com",
                "contact_type": "email",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let inquiry_id = app.storage.list_inquiries().await.unwrap()[0].id;

    let response = app
        .request(
            "POST",
            &format!("/api/inquiries/{}/assign-room", inquiry_id),
            Some(&admin),
            Some(json!({
                "room_id": "P1-R1",
                "plan": "weekly",
                "total_amount": "250",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // La asignación fallida no deja guest huérfano ni toca la inquiry
    assert_eq!(app.storage.list_guests().await.unwrap().len(), guests_before);
    let inquiry = app.storage.get_inquiry(inquiry_id).await.unwrap().unwrap();
    assert_eq!(inquiry.status.as_str(), "received");
}

#[tokio::test]
async fn test_completed_cleaning_task_cascades_to_room() {
    let app = setup().await;
    let token = app.login("admin").await;

    let response = app
        .request(
            "POST",
            "/api/cleaning-tasks",
            Some(&token),
            Some(json!({
                "room_id": "P1-R2",
                "task_type": "room_cleaning",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let task_id = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/cleaning-tasks/{}/status", task_id),
            Some(&token),
            Some(json!({ "status": "completed" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let room = app.storage.get_room("P1-R2").await.unwrap().unwrap();
    assert_eq!(room.cleaning_status, CleaningStatus::Clean);
    assert_eq!(room.linen_status, LinenStatus::Fresh);
    assert!(room.last_cleaned.is_some());
    assert!(room.last_linen_change.is_some());
}

#[tokio::test]
async fn test_turn_in_feeds_admin_drawer() {
    let app = setup().await;
    let manager = app.login("manager").await;
    let admin = app.login("admin").await;

    let response = app
        .request(
            "POST",
            "/api/cash-turnins",
            Some(&manager),
            Some(json!({ "amount": "80", "note": "cierre del día" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request("GET", "/api/admin/cash-drawer", Some(&admin), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["drawer"]["current_balance"], "80");
    assert_eq!(body["drawer"]["total_inflows"], "80");

    // El manager no ve los ledgers del admin
    let response = app
        .request("GET", "/api/admin/cash-drawer", Some(&manager), None)
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_dashboard_stats_for_admin() {
    let app = setup().await;
    let token = app.login("admin").await;

    let response = app
        .request("GET", "/api/dashboard/stats", Some(&token), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["available_rooms"], 3);
    assert_eq!(body["active_bookings"], 0);
    assert_eq!(body["weekly_growth"], "0");
}
