use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::property_controller::PropertyController;
use crate::dto::property_dto::{
    CreateMasterCodeRequest, CreatePropertyRequest, CreateRoomRequest, GenerateCodeRequest,
    GenerateCodeResponse, UpdatePropertyRequest, UpdateRoomRequest,
};
use crate::dto::ApiResponse;
use crate::models::auth::UserInfo;
use crate::models::property::{MasterCode, Property, Room};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Lectura de propiedades, para todos los roles
pub fn create_property_read_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_properties))
        .route("/:id", get(get_property))
}

/// Escritura de propiedades, solo admin
pub fn create_property_write_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_property))
        .route("/:id", put(update_property))
        .route("/:id/generate-code", post(generate_front_door_code))
}

/// Lectura de habitaciones, para todos los roles
pub fn create_room_read_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rooms))
        .route("/:id", get(get_room))
}

/// Escritura de habitaciones, admin y manager
pub fn create_room_write_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_room))
        .route("/:id", put(update_room))
        .route("/:id/generate-code", post(generate_door_code))
}

/// Códigos maestros, admin y manager
pub fn create_master_code_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_master_code))
        .route("/", get(list_master_codes))
        .route("/:id", delete(delete_master_code))
}

// --- Propiedades ---

async fn create_property(
    State(state): State<AppState>,
    Json(request): Json<CreatePropertyRequest>,
) -> Result<Json<ApiResponse<Property>>, AppError> {
    let controller = PropertyController::new(state.storage.clone());
    let response = controller.create_property(request).await?;
    Ok(Json(response))
}

async fn list_properties(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Property>>>, AppError> {
    let controller = PropertyController::new(state.storage.clone());
    let response = controller.list_properties().await?;
    Ok(Json(response))
}

async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Property>, AppError> {
    let controller = PropertyController::new(state.storage.clone());
    let response = controller.get_property(&id).await?;
    Ok(Json(response))
}

async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdatePropertyRequest>,
) -> Result<Json<ApiResponse<Property>>, AppError> {
    let controller = PropertyController::new(state.storage.clone());
    let response = controller.update_property(&id, request).await?;
    Ok(Json(response))
}

async fn generate_front_door_code(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<GenerateCodeRequest>,
) -> Result<Json<ApiResponse<GenerateCodeResponse>>, AppError> {
    let controller = PropertyController::new(state.storage.clone());
    let response = controller.generate_front_door_code(&id, request).await?;
    Ok(Json(response))
}

// --- Habitaciones ---

async fn create_room(
    State(state): State<AppState>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<Json<ApiResponse<Room>>, AppError> {
    let controller = PropertyController::new(state.storage.clone());
    let response = controller.create_room(request).await?;
    Ok(Json(response))
}

async fn list_rooms(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<ApiResponse<Vec<Room>>>, AppError> {
    let controller = PropertyController::new(state.storage.clone());
    let response = controller.list_rooms(&user).await?;
    Ok(Json(response))
}

async fn get_room(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<String>,
) -> Result<Json<Room>, AppError> {
    let controller = PropertyController::new(state.storage.clone());
    let response = controller.get_room(&user, &id).await?;
    Ok(Json(response))
}

async fn update_room(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<String>,
    Json(request): Json<UpdateRoomRequest>,
) -> Result<Json<ApiResponse<Room>>, AppError> {
    let controller = PropertyController::new(state.storage.clone());
    let response = controller.update_room(&user, &id, request).await?;
    Ok(Json(response))
}

async fn generate_door_code(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<String>,
    Json(request): Json<GenerateCodeRequest>,
) -> Result<Json<ApiResponse<GenerateCodeResponse>>, AppError> {
    let controller = PropertyController::new(state.storage.clone());
    let response = controller.generate_door_code(&user, &id, request).await?;
    Ok(Json(response))
}

// --- Códigos maestros ---

async fn create_master_code(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<CreateMasterCodeRequest>,
) -> Result<Json<ApiResponse<MasterCode>>, AppError> {
    let controller = PropertyController::new(state.storage.clone());
    let response = controller.create_master_code(&user, request).await?;
    Ok(Json(response))
}

async fn list_master_codes(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<ApiResponse<Vec<MasterCode>>>, AppError> {
    let controller = PropertyController::new(state.storage.clone());
    let response = controller.list_master_codes(&user).await?;
    Ok(Json(response))
}

async fn delete_master_code(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = PropertyController::new(state.storage.clone());
    let response = controller.delete_master_code(id).await?;
    Ok(Json(response))
}
