use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::models::auth::UserRole;
use crate::models::user::User;
use crate::storage::Storage;
use crate::utils::errors::AppError;

pub struct UserController {
    storage: Arc<dyn Storage>,
}

impl UserController {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(
        &self,
        request: CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request.validate()?;

        // Un manager siempre tiene propiedad asignada
        if request.role == UserRole::Manager && request.property.is_none() {
            return Err(AppError::ValidationError(
                "Un manager requiere una propiedad asignada".to_string(),
            ));
        }

        if let Some(property_id) = &request.property {
            self.storage
                .get_property(property_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Propiedad no encontrada".to_string()))?;
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        let user = User {
            id: Uuid::new_v4(),
            username: request.username,
            password_hash,
            name: request.name,
            role: request.role,
            property: request.property,
            created_at: Utc::now(),
        };

        let created = self.storage.create_user(user).await?;

        Ok(ApiResponse::success_with_message(
            UserResponse::from(created),
            "Usuario creado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<UserResponse>>, AppError> {
        let users = self.storage.list_users().await?;
        let responses = users.into_iter().map(UserResponse::from).collect();
        Ok(ApiResponse::success(responses))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .storage
            .get_user(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;
        Ok(UserResponse::from(user))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request.validate()?;

        let mut user = self
            .storage
            .get_user(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(password) = request.password {
            user.password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
                .map_err(|e| AppError::Hash(e.to_string()))?;
        }
        if let Some(role) = request.role {
            user.role = role;
        }
        if let Some(property_id) = request.property {
            self.storage
                .get_property(&property_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Propiedad no encontrada".to_string()))?;
            user.property = Some(property_id);
        }

        if user.role == UserRole::Manager && user.property.is_none() {
            return Err(AppError::ValidationError(
                "Un manager requiere una propiedad asignada".to_string(),
            ));
        }

        let updated = self.storage.update_user(user).await?;

        Ok(ApiResponse::success_with_message(
            UserResponse::from(updated),
            "Usuario actualizado exitosamente".to_string(),
        ))
    }
}
