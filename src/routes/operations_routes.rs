use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::operations_controller::OperationsController;
use crate::dto::operations_dto::{
    CreateCleaningTaskRequest, CreateInventoryItemRequest, CreateMaintenanceRequestDto,
    TaskStatusRequest, UpdateCleaningTaskRequest, UpdateInventoryItemRequest,
    UpdateMaintenanceRequestDto,
};
use crate::dto::ApiResponse;
use crate::models::auth::UserInfo;
use crate::models::operations::{CleaningTask, InventoryItem, MaintenanceRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Lectura y transición de tareas de limpieza; el helper solo opera
/// las suyas, eso lo resuelve el controller
pub fn create_cleaning_task_read_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cleaning_tasks))
        .route("/:id/status", put(set_cleaning_task_status))
}

/// Alta y edición de tareas, admin y manager
pub fn create_cleaning_task_write_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cleaning_task))
        .route("/:id", put(update_cleaning_task))
}

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_maintenance))
        .route("/", get(list_maintenance))
        .route("/:id", put(update_maintenance))
}

/// Lectura de inventario, para todos los roles
pub fn create_inventory_read_router() -> Router<AppState> {
    Router::new().route("/", get(list_inventory))
}

/// Escritura de inventario, admin y manager
pub fn create_inventory_write_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_inventory_item))
        .route("/:id", put(update_inventory_item))
}

/// Baja de inventario, solo admin
pub fn create_inventory_delete_router() -> Router<AppState> {
    Router::new().route("/:id", delete(delete_inventory_item))
}

// --- Cleaning tasks ---

async fn create_cleaning_task(
    State(state): State<AppState>,
    Json(request): Json<CreateCleaningTaskRequest>,
) -> Result<Json<ApiResponse<CleaningTask>>, AppError> {
    let controller = OperationsController::new(state.storage.clone());
    let response = controller.create_cleaning_task(request).await?;
    Ok(Json(response))
}

async fn list_cleaning_tasks(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<ApiResponse<Vec<CleaningTask>>>, AppError> {
    let controller = OperationsController::new(state.storage.clone());
    let response = controller.list_cleaning_tasks(&user).await?;
    Ok(Json(response))
}

async fn update_cleaning_task(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCleaningTaskRequest>,
) -> Result<Json<ApiResponse<CleaningTask>>, AppError> {
    let controller = OperationsController::new(state.storage.clone());
    let response = controller.update_cleaning_task(&user, id, request).await?;
    Ok(Json(response))
}

async fn set_cleaning_task_status(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
    Json(request): Json<TaskStatusRequest>,
) -> Result<Json<ApiResponse<CleaningTask>>, AppError> {
    let controller = OperationsController::new(state.storage.clone());
    let response = controller.set_cleaning_task_status(&user, id, request).await?;
    Ok(Json(response))
}

// --- Maintenance ---

async fn create_maintenance(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Json(request): Json<CreateMaintenanceRequestDto>,
) -> Result<Json<ApiResponse<MaintenanceRequest>>, AppError> {
    let controller = OperationsController::new(state.storage.clone());
    let response = controller.create_maintenance(&user, request).await?;
    Ok(Json(response))
}

async fn list_maintenance(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<ApiResponse<Vec<MaintenanceRequest>>>, AppError> {
    let controller = OperationsController::new(state.storage.clone());
    let response = controller.list_maintenance(&user).await?;
    Ok(Json(response))
}

async fn update_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMaintenanceRequestDto>,
) -> Result<Json<ApiResponse<MaintenanceRequest>>, AppError> {
    let controller = OperationsController::new(state.storage.clone());
    let response = controller.update_maintenance(id, request).await?;
    Ok(Json(response))
}

// --- Inventory ---

async fn create_inventory_item(
    State(state): State<AppState>,
    Json(request): Json<CreateInventoryItemRequest>,
) -> Result<Json<ApiResponse<InventoryItem>>, AppError> {
    let controller = OperationsController::new(state.storage.clone());
    let response = controller.create_inventory_item(request).await?;
    Ok(Json(response))
}

async fn list_inventory(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
) -> Result<Json<ApiResponse<Vec<InventoryItem>>>, AppError> {
    let controller = OperationsController::new(state.storage.clone());
    let response = controller.list_inventory(&user).await?;
    Ok(Json(response))
}

async fn update_inventory_item(
    State(state): State<AppState>,
    Extension(user): Extension<UserInfo>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateInventoryItemRequest>,
) -> Result<Json<ApiResponse<InventoryItem>>, AppError> {
    let controller = OperationsController::new(state.storage.clone());
    let response = controller.update_inventory_item(&user, id, request).await?;
    Ok(Json(response))
}

async fn delete_inventory_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = OperationsController::new(state.storage.clone());
    let response = controller.delete_inventory_item(id).await?;
    Ok(Json(response))
}
