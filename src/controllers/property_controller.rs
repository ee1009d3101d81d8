use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::property_dto::{
    CreateMasterCodeRequest, CreatePropertyRequest, CreateRoomRequest, GenerateCodeRequest,
    GenerateCodeResponse, UpdatePropertyRequest, UpdateRoomRequest,
};
use crate::dto::ApiResponse;
use crate::models::auth::{UserInfo, UserRole};
use crate::models::property::{CleaningStatus, LinenStatus, MasterCode, Property, Room, RoomStatus};
use crate::services::door_code_service;
use crate::services::scope_service;
use crate::storage::Storage;
use crate::utils::errors::AppError;

pub struct PropertyController {
    storage: Arc<dyn Storage>,
}

impl PropertyController {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // --- Propiedades ---

    pub async fn create_property(
        &self,
        request: CreatePropertyRequest,
    ) -> Result<ApiResponse<Property>, AppError> {
        request.validate()?;

        if self.storage.get_property(&request.id).await?.is_some() {
            return Err(AppError::Conflict("La propiedad ya existe".to_string()));
        }

        let property = Property {
            id: request.id,
            name: request.name,
            daily_rate: request.daily_rate,
            weekly_rate: request.weekly_rate,
            monthly_rate: request.monthly_rate,
            front_door_code: None,
            front_door_code_expiry: None,
            created_at: Utc::now(),
        };

        let created = self.storage.create_property(property).await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Propiedad creada exitosamente".to_string(),
        ))
    }

    pub async fn list_properties(&self) -> Result<ApiResponse<Vec<Property>>, AppError> {
        let properties = self.storage.list_properties().await?;
        Ok(ApiResponse::success(properties))
    }

    pub async fn get_property(&self, id: &str) -> Result<Property, AppError> {
        self.storage
            .get_property(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Propiedad no encontrada".to_string()))
    }

    pub async fn update_property(
        &self,
        id: &str,
        request: UpdatePropertyRequest,
    ) -> Result<ApiResponse<Property>, AppError> {
        request.validate()?;

        let mut property = self.get_property(id).await?;

        if let Some(name) = request.name {
            property.name = name;
        }
        if let Some(rate) = request.daily_rate {
            property.daily_rate = rate;
        }
        if let Some(rate) = request.weekly_rate {
            property.weekly_rate = rate;
        }
        if let Some(rate) = request.monthly_rate {
            property.monthly_rate = rate;
        }

        let updated = self.storage.update_property(property).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Propiedad actualizada exitosamente".to_string(),
        ))
    }

    /// Regenera el código de la puerta de calle de la propiedad
    pub async fn generate_front_door_code(
        &self,
        id: &str,
        request: GenerateCodeRequest,
    ) -> Result<ApiResponse<GenerateCodeResponse>, AppError> {
        let mut property = self.get_property(id).await?;

        let issued = door_code_service::issue_code(&request.duration);
        property.front_door_code = Some(issued.code.clone());
        property.front_door_code_expiry = Some(issued.expiry);

        self.storage.update_property(property).await?;

        Ok(ApiResponse::success(GenerateCodeResponse {
            door_code: issued.code,
            code_expiry: issued.expiry,
        }))
    }

    // --- Habitaciones ---

    pub async fn create_room(
        &self,
        request: CreateRoomRequest,
    ) -> Result<ApiResponse<Room>, AppError> {
        request.validate()?;

        self.storage
            .get_property(&request.property_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Propiedad no encontrada".to_string()))?;

        if self.storage.get_room(&request.id).await?.is_some() {
            return Err(AppError::Conflict("La habitación ya existe".to_string()));
        }

        let room = Room {
            id: request.id,
            property_id: request.property_id,
            room_number: request.room_number,
            status: RoomStatus::Available,
            door_code: None,
            door_code_expiry: None,
            cleaning_status: CleaningStatus::Clean,
            linen_status: LinenStatus::Fresh,
            notes: request.notes,
            last_cleaned: None,
            last_linen_change: None,
        };

        let created = self.storage.create_room(room).await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Habitación creada exitosamente".to_string(),
        ))
    }

    /// Lista de habitaciones ya pasada por el filtro de scope del usuario
    pub async fn list_rooms(&self, user: &UserInfo) -> Result<ApiResponse<Vec<Room>>, AppError> {
        let rooms = self.storage.list_rooms().await?;
        Ok(ApiResponse::success(scope_service::scope_rooms(user, rooms)))
    }

    pub async fn get_room(&self, user: &UserInfo, id: &str) -> Result<Room, AppError> {
        let room = self
            .storage
            .get_room(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Habitación no encontrada".to_string()))?;
        self.ensure_room_access(user, &room)?;
        Ok(room)
    }

    pub async fn update_room(
        &self,
        user: &UserInfo,
        id: &str,
        request: UpdateRoomRequest,
    ) -> Result<ApiResponse<Room>, AppError> {
        let mut room = self.get_room(user, id).await?;

        if let Some(status) = request.status {
            room.status = status;
        }
        if let Some(cleaning_status) = request.cleaning_status {
            room.cleaning_status = cleaning_status;
        }
        if let Some(linen_status) = request.linen_status {
            room.linen_status = linen_status;
        }
        if let Some(notes) = request.notes {
            room.notes = Some(notes);
        }

        let updated = self.storage.update_room(room).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Habitación actualizada exitosamente".to_string(),
        ))
    }

    /// Emite un door code de 4 dígitos para la habitación; la expiración
    /// depende del tier de duración. No toca el status de la habitación.
    pub async fn generate_door_code(
        &self,
        user: &UserInfo,
        id: &str,
        request: GenerateCodeRequest,
    ) -> Result<ApiResponse<GenerateCodeResponse>, AppError> {
        let mut room = self.get_room(user, id).await?;

        let issued = door_code_service::issue_code(&request.duration);
        room.door_code = Some(issued.code.clone());
        room.door_code_expiry = Some(issued.expiry);

        self.storage.update_room(room).await?;

        tracing::info!("Door code emitido para habitación {} (tier {})", id, request.duration);

        Ok(ApiResponse::success(GenerateCodeResponse {
            door_code: issued.code,
            code_expiry: issued.expiry,
        }))
    }

    // --- Códigos maestros ---

    pub async fn create_master_code(
        &self,
        user: &UserInfo,
        request: CreateMasterCodeRequest,
    ) -> Result<ApiResponse<MasterCode>, AppError> {
        request.validate()?;

        // Un manager solo emite códigos maestros de su propiedad
        if user.role == UserRole::Manager {
            match (&request.property_id, &user.property) {
                (Some(requested), Some(own)) if requested == own => {}
                _ => {
                    return Err(AppError::Forbidden(
                        "No puedes emitir códigos maestros de otra propiedad".to_string(),
                    ))
                }
            }
        }

        if let Some(property_id) = &request.property_id {
            self.storage
                .get_property(property_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Propiedad no encontrada".to_string()))?;
        }

        let issued = door_code_service::issue_code(&request.duration);
        let code = MasterCode {
            id: Uuid::new_v4(),
            property_id: request.property_id,
            label: request.label,
            code: issued.code,
            expiry: issued.expiry,
            created_at: Utc::now(),
        };

        let created = self.storage.create_master_code(code).await?;

        Ok(ApiResponse::success_with_message(
            created,
            "Código maestro creado exitosamente".to_string(),
        ))
    }

    pub async fn list_master_codes(
        &self,
        user: &UserInfo,
    ) -> Result<ApiResponse<Vec<MasterCode>>, AppError> {
        let codes = self.storage.list_master_codes().await?;
        let scoped = match user.role {
            UserRole::Admin | UserRole::Helper => codes,
            UserRole::Manager => match &user.property {
                Some(property) => codes
                    .into_iter()
                    .filter(|c| c.property_id.as_deref() == Some(property.as_str()))
                    .collect(),
                None => Vec::new(),
            },
        };
        Ok(ApiResponse::success(scoped))
    }

    pub async fn delete_master_code(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        self.storage.delete_master_code(id).await?;
        Ok(ApiResponse::success_with_message(
            (),
            "Código maestro eliminado".to_string(),
        ))
    }

    fn ensure_room_access(&self, user: &UserInfo, room: &Room) -> Result<(), AppError> {
        match user.role {
            UserRole::Admin | UserRole::Helper => Ok(()),
            UserRole::Manager => {
                if user.property.as_deref() == Some(room.property_id.as_str()) {
                    Ok(())
                } else {
                    Err(AppError::Forbidden(
                        "No tienes acceso a esta habitación".to_string(),
                    ))
                }
            }
        }
    }
}
