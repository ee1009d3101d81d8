use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::operations::{
    CleaningTaskType, MaintenanceStatus, Priority, TaskStatus,
};

#[derive(Debug, Deserialize)]
pub struct CreateCleaningTaskRequest {
    pub room_id: Option<String>,
    pub property_id: Option<String>,
    pub task_type: CleaningTaskType,
    pub priority: Option<Priority>,
    pub assigned_to: Option<Uuid>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCleaningTaskRequest {
    pub priority: Option<Priority>,
    pub assigned_to: Option<Uuid>,
    pub notes: Option<String>,
}

/// Transición de estado de una tarea; completar dispara la cascada
/// sobre la habitación
#[derive(Debug, Deserialize)]
pub struct TaskStatusRequest {
    pub status: TaskStatus,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequestDto {
    pub room_id: Option<String>,
    pub property_id: Option<String>,
    #[validate(length(min = 1))]
    pub description: String,
    pub priority: Option<Priority>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMaintenanceRequestDto {
    pub priority: Option<Priority>,
    pub status: Option<MaintenanceStatus>,
    pub assigned_to: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateInventoryItemRequest {
    #[validate(length(min = 1, max = 16))]
    pub property_id: String,
    #[validate(length(min = 1))]
    pub item: String,
    pub quantity: i32,
    pub threshold: i32,
    #[validate(length(min = 1, max = 16))]
    pub unit: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInventoryItemRequest {
    pub item: Option<String>,
    pub quantity: Option<i32>,
    pub threshold: Option<i32>,
    pub unit: Option<String>,
}
