use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::operations_dto::{
    CreateCleaningTaskRequest, CreateInventoryItemRequest, CreateMaintenanceRequestDto,
    TaskStatusRequest, UpdateCleaningTaskRequest, UpdateInventoryItemRequest,
    UpdateMaintenanceRequestDto,
};
use crate::dto::ApiResponse;
use crate::models::auth::{UserInfo, UserRole};
use crate::models::operations::{
    CleaningTask, InventoryItem, MaintenanceRequest, MaintenanceStatus, Priority, TaskStatus,
};
use crate::services::scope_service;
use crate::storage::Storage;
use crate::utils::errors::AppError;

pub struct OperationsController {
    storage: Arc<dyn Storage>,
}

impl OperationsController {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // --- Cleaning tasks ---

    pub async fn create_cleaning_task(
        &self,
        request: CreateCleaningTaskRequest,
    ) -> Result<ApiResponse<CleaningTask>, AppError> {
        if request.room_id.is_none() && request.property_id.is_none() {
            return Err(AppError::ValidationError(
                "La tarea requiere habitación o propiedad".to_string(),
            ));
        }

        if let Some(room_id) = &request.room_id {
            self.storage
                .get_room(room_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Habitación no encontrada".to_string()))?;
        }

        let task = CleaningTask {
            id: Uuid::new_v4(),
            room_id: request.room_id,
            property_id: request.property_id,
            task_type: request.task_type,
            priority: request.priority.unwrap_or(Priority::Normal),
            status: TaskStatus::Pending,
            assigned_to: request.assigned_to,
            notes: request.notes,
            created_at: Utc::now(),
            completed_at: None,
        };

        let created = self.storage.create_cleaning_task(task).await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Tarea de limpieza creada exitosamente".to_string(),
        ))
    }

    pub async fn list_cleaning_tasks(
        &self,
        user: &UserInfo,
    ) -> Result<ApiResponse<Vec<CleaningTask>>, AppError> {
        let rooms = self.storage.list_rooms().await?;
        let tasks = self.storage.list_cleaning_tasks().await?;
        Ok(ApiResponse::success(scope_service::scope_cleaning_tasks(
            user, &rooms, tasks,
        )))
    }

    pub async fn update_cleaning_task(
        &self,
        user: &UserInfo,
        id: Uuid,
        request: UpdateCleaningTaskRequest,
    ) -> Result<ApiResponse<CleaningTask>, AppError> {
        let mut task = self.load_cleaning_task(user, id).await?;

        if let Some(priority) = request.priority {
            task.priority = priority;
        }
        if let Some(assigned_to) = request.assigned_to {
            task.assigned_to = Some(assigned_to);
        }
        if let Some(notes) = request.notes {
            task.notes = Some(notes);
        }

        let updated = self.storage.update_cleaning_task(task).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Tarea actualizada exitosamente".to_string(),
        ))
    }

    /// Transición de estado; completar dispara la cascada sobre la
    /// habitación dentro del storage
    pub async fn set_cleaning_task_status(
        &self,
        user: &UserInfo,
        id: Uuid,
        request: TaskStatusRequest,
    ) -> Result<ApiResponse<CleaningTask>, AppError> {
        self.load_cleaning_task(user, id).await?;

        let updated = self
            .storage
            .set_cleaning_task_status(id, request.status, Utc::now())
            .await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Estado de tarea actualizado".to_string(),
        ))
    }

    // --- Maintenance ---

    pub async fn create_maintenance(
        &self,
        user: &UserInfo,
        request: CreateMaintenanceRequestDto,
    ) -> Result<ApiResponse<MaintenanceRequest>, AppError> {
        request.validate()?;

        if request.room_id.is_none() && request.property_id.is_none() {
            return Err(AppError::ValidationError(
                "El pedido requiere habitación o propiedad".to_string(),
            ));
        }

        if let Some(room_id) = &request.room_id {
            self.storage
                .get_room(room_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Habitación no encontrada".to_string()))?;
        }

        let maintenance = MaintenanceRequest {
            id: Uuid::new_v4(),
            room_id: request.room_id,
            property_id: request.property_id,
            description: request.description,
            priority: request.priority.unwrap_or(Priority::Normal),
            status: MaintenanceStatus::Open,
            reported_by: Some(user.id),
            assigned_to: None,
            created_at: Utc::now(),
            resolved_at: None,
        };

        let created = self.storage.create_maintenance(maintenance).await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Pedido de mantenimiento creado exitosamente".to_string(),
        ))
    }

    pub async fn list_maintenance(
        &self,
        user: &UserInfo,
    ) -> Result<ApiResponse<Vec<MaintenanceRequest>>, AppError> {
        let rooms = self.storage.list_rooms().await?;
        let requests = self.storage.list_maintenance().await?;
        Ok(ApiResponse::success(scope_service::scope_maintenance(
            user, &rooms, requests,
        )))
    }

    pub async fn update_maintenance(
        &self,
        id: Uuid,
        request: UpdateMaintenanceRequestDto,
    ) -> Result<ApiResponse<MaintenanceRequest>, AppError> {
        let mut maintenance = self
            .storage
            .get_maintenance(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Pedido no encontrado".to_string()))?;

        if let Some(priority) = request.priority {
            maintenance.priority = priority;
        }
        if let Some(assigned_to) = request.assigned_to {
            maintenance.assigned_to = Some(assigned_to);
        }
        if let Some(status) = request.status {
            if status == MaintenanceStatus::Resolved && maintenance.resolved_at.is_none() {
                maintenance.resolved_at = Some(Utc::now());
            }
            maintenance.status = status;
        }

        let updated = self.storage.update_maintenance(maintenance).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Pedido actualizado exitosamente".to_string(),
        ))
    }

    // --- Inventory ---

    pub async fn create_inventory_item(
        &self,
        request: CreateInventoryItemRequest,
    ) -> Result<ApiResponse<InventoryItem>, AppError> {
        request.validate()?;

        self.storage
            .get_property(&request.property_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Propiedad no encontrada".to_string()))?;

        let item = InventoryItem {
            id: Uuid::new_v4(),
            property_id: request.property_id,
            item: request.item,
            quantity: request.quantity,
            threshold: request.threshold,
            unit: request.unit,
        };

        let created = self.storage.create_inventory_item(item).await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Item de inventario creado exitosamente".to_string(),
        ))
    }

    pub async fn list_inventory(
        &self,
        user: &UserInfo,
    ) -> Result<ApiResponse<Vec<InventoryItem>>, AppError> {
        let items = self.storage.list_inventory().await?;
        Ok(ApiResponse::success(scope_service::scope_inventory(
            user, items,
        )))
    }

    pub async fn update_inventory_item(
        &self,
        user: &UserInfo,
        id: Uuid,
        request: UpdateInventoryItemRequest,
    ) -> Result<ApiResponse<InventoryItem>, AppError> {
        let mut item = self
            .storage
            .get_inventory_item(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item no encontrado".to_string()))?;

        if user.role == UserRole::Manager
            && user.property.as_deref() != Some(item.property_id.as_str())
        {
            return Err(AppError::Forbidden(
                "No tienes acceso a este inventario".to_string(),
            ));
        }

        if let Some(name) = request.item {
            item.item = name;
        }
        if let Some(quantity) = request.quantity {
            item.quantity = quantity;
        }
        if let Some(threshold) = request.threshold {
            item.threshold = threshold;
        }
        if let Some(unit) = request.unit {
            item.unit = unit;
        }

        let updated = self.storage.update_inventory_item(item).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Item actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete_inventory_item(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        self.storage.delete_inventory_item(id).await?;
        Ok(ApiResponse::success_with_message(
            (),
            "Item eliminado".to_string(),
        ))
    }

    /// Carga una tarea verificando que el usuario puede verla; el helper
    /// solo toca sus tareas asignadas
    async fn load_cleaning_task(
        &self,
        user: &UserInfo,
        id: Uuid,
    ) -> Result<CleaningTask, AppError> {
        let task = self
            .storage
            .get_cleaning_task(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tarea no encontrada".to_string()))?;

        match user.role {
            UserRole::Admin => Ok(task),
            UserRole::Helper => {
                if task.assigned_to == Some(user.id) {
                    Ok(task)
                } else {
                    Err(AppError::Forbidden(
                        "Solo puedes operar tus tareas asignadas".to_string(),
                    ))
                }
            }
            UserRole::Manager => {
                let rooms = self.storage.list_rooms().await?;
                let visible =
                    scope_service::scope_cleaning_tasks(user, &rooms, vec![task.clone()]);
                if visible.is_empty() {
                    Err(AppError::Forbidden(
                        "No tienes acceso a esta tarea".to_string(),
                    ))
                } else {
                    Ok(task)
                }
            }
        }
    }
}
