//! Rutas de la API
//!
//! Cada recurso arma su propio `Router<AppState>`; acá se ensambla la
//! app completa: rutas públicas, middleware de autenticación y gating
//! por rol por grupo de rutas.

pub mod auth_routes;
pub mod user_routes;
pub mod property_routes;
pub mod booking_routes;
pub mod operations_routes;
pub mod inquiry_routes;
pub mod ledger_routes;

use axum::{middleware, response::Json, routing::get, Router};
use chrono::Utc;
use serde_json::json;

use crate::middleware::auth::{auth_middleware, require_any_role};
use crate::middleware::cors::cors_middleware;
use crate::models::auth::UserRole;
use crate::state::AppState;

const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];
const ADMIN_MANAGER: &[UserRole] = &[UserRole::Admin, UserRole::Manager];
const ALL_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Manager, UserRole::Helper];

/// Arma la app completa; la usan main y los tests de integración
pub fn create_app(state: AppState) -> Router {
    let auth_layer = middleware::from_fn_with_state(state.clone(), auth_middleware);

    let inquiries = inquiry_routes::create_inquiry_public_router().merge(
        inquiry_routes::create_inquiry_staff_router()
            .route_layer(middleware::from_fn(|req, next| {
                require_any_role(ADMIN_MANAGER, req, next)
            }))
            .route_layer(auth_layer.clone()),
    );

    let protected = Router::new()
        .nest(
            "/api/auth",
            auth_routes::create_verify_router().route_layer(middleware::from_fn(|req, next| {
                require_any_role(ALL_ROLES, req, next)
            })),
        )
        .nest(
            "/api/users",
            user_routes::create_user_router().route_layer(middleware::from_fn(|req, next| {
                require_any_role(ADMIN_ONLY, req, next)
            })),
        )
        .nest(
            "/api/properties",
            property_routes::create_property_read_router()
                .route_layer(middleware::from_fn(|req, next| {
                    require_any_role(ALL_ROLES, req, next)
                }))
                .merge(property_routes::create_property_write_router().route_layer(
                    middleware::from_fn(|req, next| require_any_role(ADMIN_ONLY, req, next)),
                )),
        )
        .nest(
            "/api/rooms",
            property_routes::create_room_read_router()
                .route_layer(middleware::from_fn(|req, next| {
                    require_any_role(ALL_ROLES, req, next)
                }))
                .merge(property_routes::create_room_write_router().route_layer(
                    middleware::from_fn(|req, next| require_any_role(ADMIN_MANAGER, req, next)),
                )),
        )
        .nest(
            "/api/master-codes",
            property_routes::create_master_code_router().route_layer(middleware::from_fn(
                |req, next| require_any_role(ADMIN_MANAGER, req, next),
            )),
        )
        .nest(
            "/api/guests",
            booking_routes::create_guest_router().route_layer(middleware::from_fn(|req, next| {
                require_any_role(ADMIN_MANAGER, req, next)
            })),
        )
        .nest(
            "/api/bookings",
            booking_routes::create_booking_list_router()
                .route_layer(middleware::from_fn(|req, next| {
                    require_any_role(ALL_ROLES, req, next)
                }))
                .merge(booking_routes::create_booking_write_router().route_layer(
                    middleware::from_fn(|req, next| require_any_role(ADMIN_MANAGER, req, next)),
                )),
        )
        .nest(
            "/api/payments",
            booking_routes::create_payment_router().route_layer(middleware::from_fn(
                |req, next| require_any_role(ADMIN_MANAGER, req, next),
            )),
        )
        .nest(
            "/api/cleaning-tasks",
            operations_routes::create_cleaning_task_read_router()
                .route_layer(middleware::from_fn(|req, next| {
                    require_any_role(ALL_ROLES, req, next)
                }))
                .merge(
                    operations_routes::create_cleaning_task_write_router().route_layer(
                        middleware::from_fn(|req, next| {
                            require_any_role(ADMIN_MANAGER, req, next)
                        }),
                    ),
                ),
        )
        .nest(
            "/api/maintenance",
            operations_routes::create_maintenance_router().route_layer(middleware::from_fn(
                |req, next| require_any_role(ADMIN_MANAGER, req, next),
            )),
        )
        .nest(
            "/api/inventory",
            operations_routes::create_inventory_read_router()
                .route_layer(middleware::from_fn(|req, next| {
                    require_any_role(ALL_ROLES, req, next)
                }))
                .merge(operations_routes::create_inventory_write_router().route_layer(
                    middleware::from_fn(|req, next| require_any_role(ADMIN_MANAGER, req, next)),
                ))
                .merge(operations_routes::create_inventory_delete_router().route_layer(
                    middleware::from_fn(|req, next| require_any_role(ADMIN_ONLY, req, next)),
                )),
        )
        .nest(
            "/api/banned-users",
            inquiry_routes::create_banned_user_router().route_layer(middleware::from_fn(
                |req, next| require_any_role(ADMIN_ONLY, req, next),
            )),
        )
        .nest(
            "/api/dashboard",
            ledger_routes::create_dashboard_router().route_layer(middleware::from_fn(
                |req, next| require_any_role(ALL_ROLES, req, next),
            )),
        )
        .nest(
            "/api",
            ledger_routes::create_reports_router().route_layer(middleware::from_fn(
                |req, next| require_any_role(ADMIN_MANAGER, req, next),
            )),
        )
        .nest(
            "/api/cash-turnins",
            ledger_routes::create_turn_in_router().route_layer(middleware::from_fn(
                |req, next| require_any_role(ADMIN_MANAGER, req, next),
            )),
        )
        .nest(
            "/api/admin",
            ledger_routes::create_admin_ledger_router().route_layer(middleware::from_fn(
                |req, next| require_any_role(ADMIN_ONLY, req, next),
            )),
        )
        .nest(
            "/api/audit-log",
            ledger_routes::create_audit_router().route_layer(middleware::from_fn(
                |req, next| require_any_role(ADMIN_ONLY, req, next),
            )),
        )
        .route_layer(auth_layer);

    Router::new()
        .route("/api/health", get(health))
        .nest("/api/auth", auth_routes::create_login_router())
        .nest("/api/inquiries", inquiries)
        .merge(protected)
        .layer(cors_middleware(&state.config.cors_origins))
        .with_state(state)
}

/// Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "lodging-ops",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
