use axum::{extract::State, routing::get, routing::post, Extension, Json, Router};

use crate::controllers::auth_controller::AuthController;
use crate::models::auth::{LoginRequest, LoginResponse, UserInfo};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas públicas de autenticación
pub fn create_login_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Rutas autenticadas de autenticación
pub fn create_verify_router() -> Router<AppState> {
    Router::new().route("/verify", get(verify))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.storage.clone(), state.jwt.clone());
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn verify(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.storage.clone(), state.jwt.clone());
    Ok(Json(controller.verify(user)))
}
