use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::inquiry_controller::InquiryController;
use crate::dto::inquiry_dto::{
    AssignRoomRequest, CreateBannedUserRequest, SubmitInquiryRequest, TrackInquiryResponse,
    UpdateInquiryStatusRequest,
};
use crate::dto::ApiResponse;
use crate::models::auth::UserInfo;
use crate::models::booking::Booking;
use crate::models::guest::BannedUser;
use crate::models::inquiry::Inquiry;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas públicas: submission y tracking por token
pub fn create_inquiry_public_router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_inquiry))
        .route("/track/:token", get(track_inquiry))
}

/// Rutas de staff sobre inquiries
pub fn create_inquiry_staff_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inquiries))
        .route("/:id/status", post(update_inquiry_status))
        .route("/:id/assign-room", post(assign_room))
}

/// Personas bloqueadas, solo admin
pub fn create_banned_user_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_banned_user))
        .route("/", get(list_banned_users))
        .route("/:id", delete(delete_banned_user))
}

async fn submit_inquiry(
    State(state): State<AppState>,
    Json(request): Json<SubmitInquiryRequest>,
) -> Result<Response, AppError> {
    let controller = InquiryController::new(state.storage.clone());

    // El bloqueo responde con un body fijo y sin dejar registro
    if controller.contact_is_banned(&request.contact).await? {
        tracing::warn!("Inquiry rechazada por contacto bloqueado");
        return Ok((
            StatusCode::FORBIDDEN,
            Json(json!({ "reason": "blocked" })),
        )
            .into_response());
    }

    let response = controller.submit(request).await?;
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

async fn track_inquiry(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<TrackInquiryResponse>, AppError> {
    let controller = InquiryController::new(state.storage.clone());
    let response = controller.track(&token).await?;
    Ok(Json(response))
}

async fn list_inquiries(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Inquiry>>>, AppError> {
    let controller = InquiryController::new(state.storage.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_inquiry_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateInquiryStatusRequest>,
) -> Result<Json<ApiResponse<Inquiry>>, AppError> {
    let controller = InquiryController::new(state.storage.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}

async fn assign_room(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignRoomRequest>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let controller = InquiryController::new(state.storage.clone());
    let response = controller.assign_room(&user, id, request).await?;
    Ok(Json(response))
}

async fn create_banned_user(
    State(state): State<AppState>,
    Json(request): Json<CreateBannedUserRequest>,
) -> Result<Json<ApiResponse<BannedUser>>, AppError> {
    let controller = InquiryController::new(state.storage.clone());
    let response = controller.create_banned_user(request).await?;
    Ok(Json(response))
}

async fn list_banned_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<BannedUser>>>, AppError> {
    let controller = InquiryController::new(state.storage.clone());
    let response = controller.list_banned_users().await?;
    Ok(Json(response))
}

async fn delete_banned_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = InquiryController::new(state.storage.clone());
    let response = controller.delete_banned_user(id).await?;
    Ok(Json(response))
}
