use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::user_controller::UserController;
use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/", get(list_users))
        .route("/:id", get(get_user))
        .route("/:id", put(update_user))
}

async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.storage.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, AppError> {
    let controller = UserController::new(state.storage.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    let controller = UserController::new(state.storage.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.storage.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}
